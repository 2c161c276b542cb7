//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;
use super::common::is_one_rank_above;

/// 指定されたカードを、組札 (`foundation`) の一番上に置けるかチェックする。
///
/// - 組札が空なら A だけ置ける (スートはここで決まる)。
/// - そうでなければ、同じスートで、ランクがちょうど 1 つ上のカードだけ。
pub fn can_add_to_foundation(card: &Card, foundation: &Pile) -> bool {
    let result = match foundation.peek() {
        None => card.rank() == Rank::Ace,
        Some(top) => card.suit() == top.suit() && is_one_rank_above(card, top),
    };
    debug!(
        "[Foundation Rule] {} onto {:?}: {}",
        card,
        foundation.peek().map(Card::to_string),
        result
    );
    result
}
