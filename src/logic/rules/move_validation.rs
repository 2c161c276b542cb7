//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::board::Board;
use crate::components::card::Card;
use crate::components::stack::StackType;
use super::{foundation, tableau};

/// 指定されたカードを `target_stack` に置けるか検証する。
pub fn is_move_valid(board: &Board, card: &Card, target_stack: StackType) -> bool {
    match target_stack {
        StackType::Tableau(index) => tableau::can_add_to_pile(card, board.tableau(index)),
        StackType::Foundation(index) => foundation::can_add_to_foundation(card, board.foundation(index)),
        StackType::Stock | StackType::Waste => {
            // 山札・捨て札へ直接置くことはできない
            debug!("[Rules Validation] Moving to {:?} is not allowed.", target_stack);
            false
        }
    }
}
