// src/protocol.rs

// このファイルは、ゲームエンジンと盤面表示 (アダプタ) の間で
// やり取りするデータの形式を定義するよ！💌
// 入力はクリックされたゾーン (`ZoneClick`)、出力は描画用のスナップショット (`BoardView`)。
// どっちも serde で JSON にできるから、JS 側の描画コードにもそのまま渡せる。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Suit};
use crate::components::game_state::GameStatus;
use crate::components::selection::Selection;
pub use crate::components::stack::{FoundationIndex, StackType, TableauIndex};

// --- アダプタ → エンジン ---

/// クリックされたゾーン。座標からこれに変換してからエンジンに渡すよ。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneClick {
    Stock,
    Waste,
    Foundation(FoundationIndex),
    Pile(TableauIndex),
}

impl From<ZoneClick> for StackType {
    fn from(zone: ZoneClick) -> Self {
        match zone {
            ZoneClick::Stock => StackType::Stock,
            ZoneClick::Waste => StackType::Waste,
            ZoneClick::Foundation(index) => StackType::Foundation(index),
            ZoneClick::Pile(index) => StackType::Tableau(index),
        }
    }
}

// --- エンジン → アダプタ ---

/// 描画用のカード 1 枚分の情報。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub rank: u8,
    pub suit: Suit,
    pub is_face_up: bool,
    /// 画像アセット名 ("ah", "ts", ... 裏向きなら "back")
    pub asset_key: String,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self {
            rank: card.rank().value(),
            suit: card.suit(),
            is_face_up: card.is_face_up(),
            asset_key: card.asset_key(),
        }
    }
}

/// 1 回の入力を処理した後の盤面まるごと。描画側はこれだけ見ればいい！
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoardView {
    /// 山札の一番上 (裏向き)。空なら None。
    pub stock_top: Option<CardData>,
    pub stock_count: usize,
    /// 捨て札の上から最大 3 枚。下 → 上 の順。
    pub waste: Vec<CardData>,
    pub waste_count: usize,
    /// 組札 4 つの一番上。
    pub foundations: Vec<Option<CardData>>,
    /// 場札 7 列、下 → 上 の順で全部。
    pub tableau: Vec<Vec<CardData>>,
    pub selection: Selection,
    pub status: GameStatus,
    pub banner: Option<String>,
}
