// src/app/game_app.rs

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::app::browser_event_manager::{self, EventClosures};
use crate::app::renderer::{self, CardImages};
use crate::app::{event_handler, init_handler, state_getter};
use crate::config::{GameConfig, LayoutConfig};
use crate::engine::GameEngine;
use crate::error::{BoardError, BoardResult};

/// ブラウザ側で共有する状態。エンジンと描画に必要なものをまとめて持つ。
///
/// クリックのリスナーからも触るので `Rc<RefCell<>>` で包んで使うよ
/// (Wasm はシングルスレッドなので `Arc<Mutex<>>` はいらない)。
pub(crate) struct AppState {
    engine: GameEngine,
    layout: LayoutConfig,
    images: CardImages,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl AppState {
    pub(crate) fn click(&mut self, x: f32, y: f32) -> BoardResult<()> {
        if event_handler::handle_click(&mut self.engine, &self.layout, x, y).is_some() {
            self.render()?;
        }
        Ok(())
    }

    pub(crate) fn double_click(&mut self, x: f32, y: f32) -> BoardResult<bool> {
        let moved = event_handler::handle_double_click(&mut self.engine, &self.layout, x, y);
        if moved {
            self.render()?;
        }
        Ok(moved)
    }

    pub(crate) fn render(&self) -> BoardResult<()> {
        renderer::render_board(&self.engine.view(), &self.layout, &self.images, &self.canvas, &self.context)
    }
}

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct SolitaireApp {
    state: Rc<RefCell<AppState>>,
    // Canvas に付けたリスナーのクロージャ
    event_closures: EventClosures,
}

#[wasm_bindgen]
impl SolitaireApp {
    /// `canvas_id` の Canvas に新しいゲームを作る。
    /// `config_json` は `{"seed": 42, "layout": {...}}` の形。空文字列ならデフォルト設定。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: &str) -> Result<SolitaireApp, JsValue> {
        info!("SolitaireApp: 初期化中...");
        let config = GameConfig::from_json(config_json)?;
        let (canvas, context) = init_handler::initialize_canvas(canvas_id, &config.layout)?;
        let engine = init_handler::initialize_engine(&config);

        let state = AppState { engine, layout: config.layout, images: CardImages::new(), canvas, context };
        state.render()?;
        info!("SolitaireApp: 初期化完了。");
        Ok(Self { state: Rc::new(RefCell::new(state)), event_closures: Rc::new(RefCell::new(Vec::new())) })
    }

    /// Canvas 上の座標 (x, y) のクリック。
    pub fn click(&self, x: f32, y: f32) -> Result<(), JsValue> {
        self.state_mut()?.click(x, y)?;
        Ok(())
    }

    /// Canvas 上の座標 (x, y) のダブルクリック。組札へ自動移動できたら `true`。
    pub fn double_click(&self, x: f32, y: f32) -> Result<bool, JsValue> {
        Ok(self.state_mut()?.double_click(x, y)?)
    }

    /// 盤面のスナップショットを JSON 文字列で返す。
    pub fn state_json(&self) -> Result<String, JsValue> {
        let state = self.state.try_borrow().map_err(|_| BoardError::StateBusy)?;
        Ok(state_getter::get_board_state_json(&state.engine)?)
    }

    pub fn render(&self) -> Result<(), JsValue> {
        self.state.try_borrow().map_err(|_| BoardError::StateBusy)?.render()?;
        Ok(())
    }

    /// シャッフルし直して最初から。
    pub fn new_game(&self) -> Result<(), JsValue> {
        let mut state = self.state_mut()?;
        state.engine.new_game();
        state.render()?;
        Ok(())
    }

    pub fn is_game_over(&self) -> Result<bool, JsValue> {
        let state = self.state.try_borrow().map_err(|_| BoardError::StateBusy)?;
        Ok(state.engine.is_game_over())
    }

    /// カード画像を登録する。`key` はアセット名 ("ah", "td", "back" など)。
    /// 登録されていないカードは四角とラベルで描かれる。
    pub fn register_card_image(&self, key: String, image: HtmlImageElement) -> Result<(), JsValue> {
        let mut state = self.state_mut()?;
        state.images.insert(key, image);
        info!("SolitaireApp: {} card image(s) registered", state.images.len());
        Ok(())
    }

    /// Canvas に click / dblclick のリスナーを付ける。以後は JS から `click` を呼ばなくてもいい。
    pub fn attach_listeners(&self) -> Result<(), JsValue> {
        let state = self.state.try_borrow().map_err(|_| BoardError::StateBusy)?;
        browser_event_manager::attach_canvas_listeners(&state.canvas, &self.state, &self.event_closures)
    }
}

impl SolitaireApp {
    fn state_mut(&self) -> BoardResult<std::cell::RefMut<'_, AppState>> {
        self.state.try_borrow_mut().map_err(|_| BoardError::StateBusy)
    }
}

impl Drop for SolitaireApp {
    fn drop(&mut self) {
        let Ok(state) = self.state.try_borrow() else {
            error!("SolitaireApp: state busy while dropping, listeners left attached");
            return;
        };
        if let Err(e) = browser_event_manager::detach_canvas_listeners(&state.canvas, &self.event_closures) {
            error!("SolitaireApp: failed to detach listeners: {:?}", e);
        }
    }
}
