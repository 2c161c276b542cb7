// src/app/event_handler.rs
//! ユーザー入力 (キャンバス上のクリック) をエンジンへの操作に変換するロジック。

use log::debug;

use crate::config::layout::FOUNDATION_FIRST_COLUMN;
use crate::config::LayoutConfig;
use crate::engine::GameEngine;
use crate::protocol::{FoundationIndex, TableauIndex, ZoneClick};

/// 一番右の列 (0 始まり)。
const LAST_COLUMN: usize = 6;

/// クリックされた座標 (x, y) が盤面のどのゾーンかを判定する関数だよ！
///
/// 盤面を「列の幅 x 段の高さ」のマス目で区切って考える。
/// * 右端より右は 6 列目、2 段目より下は全部 1 段目 (場札) 扱い。
/// * 上段: 0 列目が山札、1 列目が捨て札、2 列目は空き (`None`)、3〜6 列目が組札。
/// * 下段: 列番号がそのまま場札の番号。
///
/// 盤より左や上 (負の座標) は `None`。
pub fn find_clicked_zone(layout: &LayoutConfig, x: f32, y: f32) -> Option<ZoneClick> {
    if !(x >= 0.0 && y >= 0.0) {
        return None;
    }
    let column = ((x / layout.column_width()) as usize).min(LAST_COLUMN);
    let row = ((y / layout.row_height()) as usize).min(1);

    let zone = match (row, column) {
        (0, 0) => Some(ZoneClick::Stock),
        (0, 1) => Some(ZoneClick::Waste),
        (0, c) if c >= FOUNDATION_FIRST_COLUMN => {
            FoundationIndex::new((c - FOUNDATION_FIRST_COLUMN) as u8).map(ZoneClick::Foundation)
        }
        (0, _) => None,
        (_, c) => TableauIndex::new(c as u8).map(ZoneClick::Pile),
    };
    debug!("Click at ({}, {}) -> row {}, column {} -> {:?}", x, y, row, column, zone);
    zone
}

/// シングルクリック: ゾーンを特定してエンジンに渡す。どのゾーンでもなければ何もしない。
pub fn handle_click(engine: &mut GameEngine, layout: &LayoutConfig, x: f32, y: f32) -> Option<ZoneClick> {
    let zone = find_clicked_zone(layout, x, y)?;
    engine.handle_click(zone);
    Some(zone)
}

/// ダブルクリック: 捨て札か場札の一番上を組札へ自動移動する。動いたら `true`。
pub fn handle_double_click(engine: &mut GameEngine, layout: &LayoutConfig, x: f32, y: f32) -> bool {
    match find_clicked_zone(layout, x, y) {
        Some(zone) => engine.auto_move(zone),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::selection::Selection;

    fn foundation(index: u8) -> ZoneClick {
        ZoneClick::Foundation(FoundationIndex::new(index).expect("valid foundation"))
    }

    fn pile(index: u8) -> ZoneClick {
        ZoneClick::Pile(TableauIndex::new(index).expect("valid pile"))
    }

    #[test]
    fn top_row_zones() {
        let layout = LayoutConfig::default();
        assert_eq!(find_clicked_zone(&layout, 10.0, 10.0), Some(ZoneClick::Stock));
        assert_eq!(find_clicked_zone(&layout, 90.0, 40.0), Some(ZoneClick::Waste));
        assert_eq!(find_clicked_zone(&layout, 170.0, 40.0), None, "2 列目は空きマス");
        assert_eq!(find_clicked_zone(&layout, 240.0, 40.0), Some(foundation(0)));
        assert_eq!(find_clicked_zone(&layout, 480.0, 40.0), Some(foundation(3)));
    }

    #[test]
    fn lower_rows_are_piles() {
        let layout = LayoutConfig::default();
        assert_eq!(find_clicked_zone(&layout, 10.0, 110.0), Some(pile(0)));
        assert_eq!(find_clicked_zone(&layout, 400.0, 300.0), Some(pile(5)));
        assert_eq!(find_clicked_zone(&layout, 10.0, 5000.0), Some(pile(0)), "下にはみ出しても場札");
    }

    #[test]
    fn far_right_clamps_to_last_column() {
        let layout = LayoutConfig::default();
        assert_eq!(find_clicked_zone(&layout, 2000.0, 10.0), Some(foundation(3)));
        assert_eq!(find_clicked_zone(&layout, 2000.0, 200.0), Some(pile(6)));
    }

    #[test]
    fn negative_coordinates_miss() {
        let layout = LayoutConfig::default();
        assert_eq!(find_clicked_zone(&layout, -1.0, 10.0), None);
        assert_eq!(find_clicked_zone(&layout, 10.0, -0.5), None);
        assert_eq!(find_clicked_zone(&layout, f32::NAN, 10.0), None);
    }

    #[test]
    fn click_drives_engine() {
        let layout = LayoutConfig::default();
        let mut engine = GameEngine::with_seed(42);

        assert_eq!(handle_click(&mut engine, &layout, 10.0, 10.0), Some(ZoneClick::Stock));
        assert_eq!(engine.board().waste().len(), 3);

        assert_eq!(handle_click(&mut engine, &layout, 90.0, 10.0), Some(ZoneClick::Waste));
        assert_eq!(engine.selection(), Selection::Waste);

        assert_eq!(handle_click(&mut engine, &layout, 170.0, 10.0), None);
        assert_eq!(engine.selection(), Selection::Waste, "空きマスのクリックは何も変えない");
        assert!(!handle_double_click(&mut engine, &layout, 170.0, 10.0));
    }
}
