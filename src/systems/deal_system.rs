// src/systems/deal_system.rs

use log::{info, warn};

use crate::board::Board;
use crate::components::stack::TableauIndex;
use crate::systems::System;

/// 初期カード配置システム！
///
/// 山札から場札 7 列にカードを配るよ。i 列目には i+1 枚、一番上だけ表向き。
/// 28 枚配るので、山札には 24 枚残る。
#[derive(Debug, Default, Clone, Copy)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    pub fn execute(&self, board: &mut Board) {
        for tableau_index in TableauIndex::all() {
            let pile = &mut board.tableau[tableau_index.get()];
            for _ in 0..=tableau_index.get() {
                match board.stock.pop() {
                    Some(card) => pile.push(card),
                    None => warn!("Stock ran out while dealing pile {}", tableau_index.get()),
                }
            }
            // その列の一番上のカードだけ表向きにするよ！👀
            if let Some(top) = pile.peek_mut() {
                top.turn_up();
            }
        }
        info!(
            "Dealt tableau {:?}, {} cards left in stock",
            board.tableau.iter().map(|pile| pile.len()).collect::<Vec<_>>(),
            board.stock.len()
        );
    }
}

impl System for DealInitialCardsSystem {
    fn run(&mut self, board: &mut Board) {
        self.execute(board);
    }
}
