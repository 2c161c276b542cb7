// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄
//! ダブルクリックされたカードを置ける組札 (Foundation) を探す。

use log::debug;

use crate::board::Board;
use crate::components::card::Card;
use crate::components::stack::FoundationIndex;
use crate::logic::rules;

/// `card` を置ける組札を 0 番から順に探して、最初に見つかったものを返す。
/// どこにも置けなければ `None`。
pub fn find_automatic_foundation_move(board: &Board, card: &Card) -> Option<FoundationIndex> {
    debug!("[AutoMove] Finding automatic foundation move for {}...", card);
    let found = FoundationIndex::all()
        .find(|&index| rules::can_add_to_foundation(card, board.foundation(index)));
    match found {
        Some(index) => debug!("  Found valid foundation [{}] for {}.", index.get(), card),
        None => debug!("  No suitable foundation found for {}.", card),
    }
    found
}
