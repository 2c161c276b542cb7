// src/config/game.rs
//! ゲーム開始時の設定。JS 側から JSON で渡せるよ！⚙️

use serde::{Deserialize, Serialize};

use crate::config::layout;
use crate::error::BoardResult;

/// 盤面の寸法。省略した項目は `config::layout` の値になる。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub card_width: f32,
    pub card_height: f32,
    pub spacing: f32,
    pub face_up_offset: f32,
    pub face_down_offset: f32,
    pub waste_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: layout::CARD_WIDTH,
            card_height: layout::CARD_HEIGHT,
            spacing: layout::SPACING,
            face_up_offset: layout::TABLEAU_Y_OFFSET_FACE_UP,
            face_down_offset: layout::TABLEAU_Y_OFFSET_FACE_DOWN,
            waste_offset: layout::WASTE_Y_OFFSET,
        }
    }
}

impl LayoutConfig {
    /// 1 列分の幅 (カード + 間隔)。
    pub fn column_width(&self) -> f32 {
        self.card_width + self.spacing
    }

    /// 1 段分の高さ (カード + 間隔)。
    pub fn row_height(&self) -> f32 {
        self.card_height + self.spacing
    }

    /// 盤全体の幅: 7 列 + 両端の余白。
    pub fn board_width(&self) -> f32 {
        self.card_width * 7.0 + self.spacing * 8.0
    }

    /// 盤全体の高さ: 上段 + 場札 (裏 7 枚 + 表 13 枚まで) + 余白。
    pub fn board_height(&self) -> f32 {
        self.card_height * 2.0
            + self.spacing * 3.0
            + self.face_down_offset * 7.0
            + self.face_up_offset * layout::MAX_FACE_UP_RUN as f32
    }
}

/// ゲーム 1 回分の設定。
///
/// `seed` を指定すると毎回同じ配り方になる (テストやリプレイ用)。
/// 省略すると OS の乱数から作るよ。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub layout: LayoutConfig,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// JSON 文字列から設定を読む。空文字列ならデフォルト設定。
    pub fn from_json(json: &str) -> BoardResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}
