// src/app/layout_calculator.rs
//! Calculates the drawing position of cards in different zones.
//!
//! 座標は全部キャンバスのピクセル (左上が原点)。盤面は 7 列のグリッドで、
//! 上段が 山札 / 捨て札 / (空き) / 組札 x4、下段が場札 7 列だよ。

use crate::config::layout::{FOUNDATION_FIRST_COLUMN, MAX_FACE_UP_RUN};
use crate::components::selection::Selection;
use crate::config::LayoutConfig;
use crate::protocol::{BoardView, CardData, TableauIndex, ZoneClick};

/// カード左上の座標。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// カード 1 枚分の矩形。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn card_at(position: Position, layout: &LayoutConfig) -> Self {
        Self { x: position.x, y: position.y, width: layout.card_width, height: layout.card_height }
    }
}

/// `column` 列目の左端の X 座標。
pub fn column_x(layout: &LayoutConfig, column: usize) -> f32 {
    layout.spacing + layout.column_width() * column as f32
}

/// 場札の 1 枚目の Y 座標 (下段の上端)。
pub fn tableau_top_y(layout: &LayoutConfig) -> f32 {
    layout.card_height + layout.spacing * 2.0
}

/// ゾーンの基準位置 (カードが 1 枚もない時の枠の位置)。
pub fn zone_origin(layout: &LayoutConfig, zone: ZoneClick) -> Position {
    match zone {
        ZoneClick::Stock => Position { x: column_x(layout, 0), y: layout.spacing },
        ZoneClick::Waste => Position { x: column_x(layout, 1), y: layout.spacing },
        ZoneClick::Foundation(index) => Position {
            x: column_x(layout, FOUNDATION_FIRST_COLUMN + index.get()),
            y: layout.spacing,
        },
        ZoneClick::Pile(index) => Position { x: column_x(layout, index.get()), y: tableau_top_y(layout) },
    }
}

/// 捨て札の見えているカード (下 → 上) の位置。少しずつ下にずらして重ねる。
pub fn waste_card_positions(layout: &LayoutConfig, visible: usize) -> Vec<Position> {
    let origin = zone_origin(layout, ZoneClick::Waste);
    (0..visible)
        .map(|i| Position { x: origin.x, y: origin.y + layout.waste_offset * i as f32 })
        .collect()
}

/// 場札 1 列分のカード位置。裏向きのカードの次は狭く、表向きの次は広くずらす。
pub fn tableau_card_positions(layout: &LayoutConfig, index: TableauIndex, cards: &[CardData]) -> Vec<Position> {
    let origin = zone_origin(layout, ZoneClick::Pile(index));
    cards
        .iter()
        .scan(0.0_f32, |offset, card| {
            let position = Position { x: origin.x, y: origin.y + *offset };
            *offset += if card.is_face_up { layout.face_up_offset } else { layout.face_down_offset };
            Some(position)
        })
        .collect()
}

/// 選択枠を描く位置 (選択中のゾーンの一番上のカード)。何も選択していなければ None。
pub fn selected_card_position(layout: &LayoutConfig, view: &BoardView) -> Option<Position> {
    match view.selection {
        Selection::None => None,
        Selection::Waste => waste_card_positions(layout, view.waste.len()).pop(),
        Selection::Foundation(index) => Some(zone_origin(layout, ZoneClick::Foundation(index))),
        Selection::Pile(index) => {
            let cards = view.tableau.get(index.get())?;
            tableau_card_positions(layout, index, cards).pop()
        }
    }
}

/// 勝利メッセージの位置 (場札の一番下より下)。
pub fn banner_position(layout: &LayoutConfig) -> Position {
    Position {
        x: layout.spacing,
        y: layout.card_height * 2.0 + layout.spacing * 3.0 + layout.face_up_offset * MAX_FACE_UP_RUN as f32,
    }
}
