// src/app/renderer.rs
//! SolitaireApp の描画関連ロジック。
//!
//! 描画は毎回 `BoardView` (スナップショット) を見て全部描き直すだけ。盤面には触らないよ。

use std::collections::HashMap;

use log::{debug, trace};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::app::layout_calculator::{self, Position, Rect};
use crate::components::card::{Suit, CARD_BACK_KEY};
use crate::config::LayoutConfig;
use crate::error::{BoardError, BoardResult};
use crate::protocol::{BoardView, CardData, FoundationIndex, TableauIndex, ZoneClick};

const BACKGROUND_COLOR: &str = "#008000"; // 緑のテーブル
const EMPTY_SLOT_COLOR: &str = "#000000";
const CARD_FACE_COLOR: &str = "#ffffff";
const CARD_BACK_COLOR: &str = "#1e3a8a";
const RED_INK: &str = "#cc0000";
const BLACK_INK: &str = "#000000";
const SELECTION_COLOR: &str = "#000000";
const BANNER_COLOR: &str = "#ffffff";
const LABEL_FONT: &str = "16px sans-serif";
const BANNER_FONT: &str = "bold 32px sans-serif";

/// アセット名 ("ah", "back", ...) → 読み込み済みのカード画像。
#[derive(Debug, Default)]
pub struct CardImages {
    images: HashMap<String, HtmlImageElement>,
}

impl CardImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, image: HtmlImageElement) {
        debug!("App::Renderer: registered card image '{}'", key);
        self.images.insert(key, image);
    }

    pub fn get(&self, key: &str) -> BoardResult<&HtmlImageElement> {
        self.images.get(key).ok_or_else(|| BoardError::AssetNotFound(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// 盤面全体を Canvas に描画する関数。
pub fn render_board(
    view: &BoardView,
    layout: &LayoutConfig,
    images: &CardImages,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
) -> BoardResult<()> {
    trace!("App::Renderer: render_board() called");

    // --- 背景 ---
    let canvas_width = f64::from(canvas.width());
    let canvas_height = f64::from(canvas.height());
    context.clear_rect(0.0, 0.0, canvas_width, canvas_height);
    context.set_fill_style_str(BACKGROUND_COLOR);
    context.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    // --- 山札 (一番上だけ、裏向き) ---
    let stock_origin = layout_calculator::zone_origin(layout, ZoneClick::Stock);
    draw_card(context, images, layout, view.stock_top.as_ref(), stock_origin)?;

    // --- 捨て札 (上 3 枚をずらして) ---
    let waste_positions = layout_calculator::waste_card_positions(layout, view.waste.len());
    if view.waste.is_empty() {
        draw_card(context, images, layout, None, layout_calculator::zone_origin(layout, ZoneClick::Waste))?;
    }
    for (card, &position) in view.waste.iter().zip(&waste_positions) {
        draw_card(context, images, layout, Some(card), position)?;
    }

    // --- 組札 ---
    for (index, top) in FoundationIndex::all().zip(&view.foundations) {
        let origin = layout_calculator::zone_origin(layout, ZoneClick::Foundation(index));
        draw_card(context, images, layout, top.as_ref(), origin)?;
    }

    // --- 場札 ---
    for (index, pile) in TableauIndex::all().zip(&view.tableau) {
        if pile.is_empty() {
            draw_card(context, images, layout, None, layout_calculator::zone_origin(layout, ZoneClick::Pile(index)))?;
            continue;
        }
        let positions = layout_calculator::tableau_card_positions(layout, index, pile);
        for (card, &position) in pile.iter().zip(&positions) {
            draw_card(context, images, layout, Some(card), position)?;
        }
    }

    // --- 選択枠 ---
    if let Some(position) = layout_calculator::selected_card_position(layout, view) {
        draw_selection_border(context, Rect::card_at(position, layout));
    }

    // --- 勝利メッセージ ---
    if let Some(banner) = &view.banner {
        let position = layout_calculator::banner_position(layout);
        context.set_fill_style_str(BANNER_COLOR);
        context.set_font(BANNER_FONT);
        context.fill_text(banner, f64::from(position.x), f64::from(position.y))?;
    }

    Ok(())
}

/// カード 1 枚 (または空きスロット) を描く。
/// 画像が登録されていればそれを、なければ四角とラベルで代用するよ。
fn draw_card(
    context: &CanvasRenderingContext2d,
    images: &CardImages,
    layout: &LayoutConfig,
    card: Option<&CardData>,
    position: Position,
) -> BoardResult<()> {
    let rect = Rect::card_at(position, layout);
    let Some(card) = card else {
        context.set_stroke_style_str(EMPTY_SLOT_COLOR);
        context.set_line_width(1.0);
        stroke(context, rect, 0.0);
        return Ok(());
    };

    match images.get(&card.asset_key) {
        Ok(image) => {
            context.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                f64::from(rect.x),
                f64::from(rect.y),
                f64::from(rect.width),
                f64::from(rect.height),
            )?;
        }
        Err(e) => {
            trace!("App::Renderer: {}, drawing placeholder", e);
            draw_placeholder(context, card, rect)?;
        }
    }
    Ok(())
}

fn draw_placeholder(context: &CanvasRenderingContext2d, card: &CardData, rect: Rect) -> BoardResult<()> {
    let (x, y) = (f64::from(rect.x), f64::from(rect.y));
    let (width, height) = (f64::from(rect.width), f64::from(rect.height));

    let face_color = if card.asset_key == CARD_BACK_KEY { CARD_BACK_COLOR } else { CARD_FACE_COLOR };
    context.set_fill_style_str(face_color);
    context.fill_rect(x, y, width, height);
    context.set_stroke_style_str(BLACK_INK);
    context.set_line_width(1.0);
    context.stroke_rect(x, y, width, height);

    if card.is_face_up {
        let ink = match card.suit {
            Suit::Diamond | Suit::Heart => RED_INK,
            Suit::Club | Suit::Spade => BLACK_INK,
        };
        context.set_fill_style_str(ink);
        context.set_font(LABEL_FONT);
        context.fill_text(&card.asset_key.to_uppercase(), x + 4.0, y + 16.0)?;
    }
    Ok(())
}

/// 選択中のカードに 3 重の枠を描く。
fn draw_selection_border(context: &CanvasRenderingContext2d, rect: Rect) {
    context.set_stroke_style_str(SELECTION_COLOR);
    context.set_line_width(1.0);
    for inset in 0..3 {
        stroke(context, rect, inset as f32);
    }
}

fn stroke(context: &CanvasRenderingContext2d, rect: Rect, inset: f32) {
    context.stroke_rect(
        f64::from(rect.x + inset),
        f64::from(rect.y + inset),
        f64::from(rect.width - inset * 2.0),
        f64::from(rect.height - inset * 2.0),
    );
}
