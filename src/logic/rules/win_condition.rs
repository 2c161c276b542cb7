//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::Rank;
use crate::components::stack::{Pile, FOUNDATION_COUNT};

/// 4 つの組札すべての一番上が K ならクリア！🏆
pub fn check_win_condition(foundations: &[Pile]) -> bool {
    foundations.len() == FOUNDATION_COUNT
        && foundations
            .iter()
            .all(|foundation| foundation.peek().is_some_and(|top| top.rank() == Rank::King))
}
