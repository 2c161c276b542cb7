// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod board;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod systems;

// ブラウザ側 (Canvas 描画、クリック処理)
pub mod app;
pub mod logging;

pub use crate::app::game_app::SolitaireApp;
pub use crate::board::Board;
pub use crate::components::{Card, CardColor, FoundationIndex, GameStatus, Pile, Rank, Selection, StackType, Suit, TableauIndex};
pub use crate::config::{GameConfig, LayoutConfig};
pub use crate::engine::GameEngine;
pub use crate::error::{BoardError, BoardResult};
pub use crate::protocol::{BoardView, CardData, ZoneClick};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if logging::init(logging::DEFAULT_LOG_LEVEL).is_ok() {
        log::info!("Panic hook and console logger set!");
    }
}

/// JS からログレベルを変える ("error", "warn", "info", "debug", "trace", "off")。
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    logging::set_level(level)
}
