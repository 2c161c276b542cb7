//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;
use super::common::{colors_alternate, is_one_rank_below};

/// 指定されたカードを、場札 (`pile`) の一番上に置けるかチェックする。
///
/// - 空の列には K だけ。
/// - そうでなければ、一番上が表向きで、ランクがちょうど 1 つ下で、色が逆のカードだけ。
pub fn can_add_to_pile(card: &Card, pile: &Pile) -> bool {
    match pile.peek() {
        None => {
            let is_king = card.rank() == Rank::King;
            debug!("[Tableau Rule] {} onto empty pile. Is King: {}", card, is_king);
            is_king
        }
        Some(top) => {
            let top_face_up = top.is_face_up();
            let rank_is_one_less = is_one_rank_below(card, top);
            let colors_different = colors_alternate(card, top);
            debug!(
                "[Tableau Rule] {} onto {}. Top face up: {}. Rank is one less: {}. Colors different: {}",
                card, top, top_face_up, rank_is_one_less, colors_different
            );
            top_face_up && rank_is_one_less && colors_different
        }
    }
}
