// src/logic/mod.rs
//! 盤面を書き換えない「判断」だけのロジック。デッキ作り、ルール判定、自動移動先探し。

pub mod deck;
pub mod rules;
pub mod auto_move;
