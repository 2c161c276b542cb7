//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

/// 山札を 1 回クリックした時にめくる枚数。
pub const DRAW_COUNT: usize = 3;

/// 山札から捨て札にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// 山札が空のときに、捨て札を山札に戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}
