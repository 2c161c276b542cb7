// src/components/game_state.rs

use serde::{Serialize, Deserialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
///
/// 組札 4 つが全部 K まで積み上がったら `Won`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆
    Won,
}

impl GameStatus {
    pub fn from_game_over(is_game_over: bool) -> Self {
        if is_game_over {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// 勝利時に画面に出すメッセージ。
    pub fn banner(self) -> Option<&'static str> {
        match self {
            GameStatus::Playing => None,
            GameStatus::Won => Some("You Win!!!"),
        }
    }
}
