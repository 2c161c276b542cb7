// src/systems/win_condition_system.rs

use log::info;

use crate::board::Board;
use crate::components::game_state::GameStatus;
use crate::logic::rules::check_win_condition;
use crate::systems::System;

/// ゲームの勝利条件をチェックするシステムだよ！🏆
///
/// 4 つの組札が全部 K まで積み上がっていたら `GameStatus::Won` にする。
#[derive(Debug, Default, Clone, Copy)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    pub fn is_game_over(&self, board: &Board) -> bool {
        check_win_condition(board.foundations())
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, board: &mut Board) {
        let status = GameStatus::from_game_over(self.is_game_over(board));
        if status != board.status {
            info!("WinConditionSystem: status {:?} -> {:?}", board.status, status);
            board.status = status;
        }
    }
}
