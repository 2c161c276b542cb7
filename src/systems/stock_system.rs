// src/systems/stock_system.rs
//! Handles the Stock pile: dealing to Waste, and recycling Waste back to Stock.

use log::info;

use crate::board::Board;
use crate::logic::rules::stock_waste::{self, DRAW_COUNT};

/// Deals up to three cards from the Stock pile onto the Waste pile, face up.
/// Returns how many cards were dealt (fewer than three when Stock runs out).
pub fn deal_from_stock(board: &mut Board) -> usize {
    if !stock_waste::can_deal_from_stock(board.stock.is_empty()) {
        info!("  Stock is empty. Cannot deal.");
        return 0;
    }

    let mut dealt = 0;
    while dealt < DRAW_COUNT {
        let Some(mut card) = board.stock.pop() else { break };
        card.turn_up(); // Card dealt to Waste is face up
        board.waste.push(card);
        dealt += 1;
    }
    info!("Dealt {} card(s) to Waste, {} left in Stock", dealt, board.stock.len());
    dealt
}

/// Moves every Waste card back to Stock face down when Stock is empty.
///
/// Cards are popped from Waste and pushed onto Stock one at a time, so the
/// first card drawn in the previous pass is on top again and the next pass
/// draws in the same order.
/// Returns true if the reset was performed.
pub fn reset_waste_to_stock(board: &mut Board) -> bool {
    if !stock_waste::can_reset_stock_from_waste(board.stock.is_empty(), board.waste.is_empty()) {
        info!("  Cannot reset Waste to Stock (Stock not empty or Waste empty).");
        return false;
    }

    let count = board.waste.len();
    while let Some(mut card) = board.waste.pop() {
        card.turn_down(); // Cards in Stock are face down
        board.stock.push(card);
    }
    info!("Waste pile reset to Stock ({} cards).", count);
    true
}
