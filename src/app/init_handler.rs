// src/app/init_handler.rs
//! SolitaireApp の初期化 (Canvas の取得、エンジンの生成) に関するロジック。

use log::info;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{GameConfig, LayoutConfig};
use crate::engine::GameEngine;
use crate::error::{BoardError, BoardResult};

/// id で Canvas 要素を探して、盤面の大きさに合わせて 2D コンテキストを用意する。
pub(crate) fn initialize_canvas(
    canvas_id: &str,
    layout: &LayoutConfig,
) -> BoardResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let window = web_sys::window().ok_or(BoardError::MissingWindow)?;
    let document = window.document().ok_or(BoardError::MissingDocument)?;

    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| BoardError::CanvasNotFound(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| BoardError::CanvasNotFound(canvas_id.to_string()))?;

    let context = canvas
        .get_context("2d")?
        .ok_or(BoardError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| BoardError::ContextUnavailable)?;

    canvas.set_width(layout.board_width().ceil() as u32);
    canvas.set_height(layout.board_height().ceil() as u32);
    info!(
        "App::Init: canvas '{}' ready ({}x{})",
        canvas_id,
        canvas.width(),
        canvas.height()
    );
    Ok((canvas, context))
}

/// 設定からエンジンを作って最初の配りまで済ませる。
pub(crate) fn initialize_engine(config: &GameConfig) -> GameEngine {
    match config.seed {
        Some(seed) => info!("App::Init: dealing with seed {}", seed),
        None => info!("App::Init: dealing with a random seed"),
    }
    GameEngine::new(config)
}
