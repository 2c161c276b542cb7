//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::Card;

/// `card` のランクが `below` のちょうど 1 つ上か (組札で使う: A の上に 2)。
pub fn is_one_rank_above(card: &Card, below: &Card) -> bool {
    card.rank().value() == below.rank().value() + 1
}

/// `card` のランクが `below` のちょうど 1 つ下か (場札で使う: K の上に Q)。
pub fn is_one_rank_below(card: &Card, below: &Card) -> bool {
    card.rank().value() + 1 == below.rank().value()
}

/// 赤と黒が交互になっているか。
pub fn colors_alternate(card: &Card, below: &Card) -> bool {
    card.color() != below.color()
}
