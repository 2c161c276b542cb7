// src/systems/mod.rs
//! 盤面 (`Board`) を実際に書き換える処理をまとめたモジュールだよ！
//!
//! 何を動かしていいかの判断は `logic::rules`、実際に動かすのはここ。

use crate::board::Board;

pub mod deal_system;
pub mod stock_system;
pub mod move_card_system;
pub mod win_condition_system;

/// System（システム）トレイトだよ！
///
/// 1 つの関心事 (配る、勝利判定...) のロジックを `run` にまとめる。
pub trait System {
    fn run(&mut self, board: &mut Board);
}
