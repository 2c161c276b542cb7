// src/app/browser_event_manager.rs
//! Handles attaching and detaching the canvas click / dblclick listeners.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent};

use crate::app::game_app::AppState;

/// 登録中のリスナー (イベント名とクロージャ)。クロージャを drop すると JS から呼べなくなるので持っておく。
pub(crate) type EventClosures = Rc<RefCell<Vec<(&'static str, Closure<dyn FnMut(Event)>)>>>;

/// クリックの種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerAction {
    Click,
    DoubleClick,
}

impl PointerAction {
    fn event_name(self) -> &'static str {
        match self {
            PointerAction::Click => "click",
            PointerAction::DoubleClick => "dblclick",
        }
    }
}

/// Canvas に click と dblclick のリスナーを付ける。すでに付いていれば何もしない。
pub(crate) fn attach_canvas_listeners(
    canvas: &HtmlCanvasElement,
    state: &Rc<RefCell<AppState>>,
    closures: &EventClosures,
) -> Result<(), JsValue> {
    if !closures.borrow().is_empty() {
        debug!("Canvas listeners already attached");
        return Ok(());
    }

    for action in [PointerAction::Click, PointerAction::DoubleClick] {
        let state = Rc::clone(state);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
                error!("Failed to cast event to MouseEvent in {} listener", action.event_name());
                return;
            };
            // Canvas の左上からの座標
            let x = mouse_event.offset_x() as f32;
            let y = mouse_event.offset_y() as f32;

            let Ok(mut state) = state.try_borrow_mut() else {
                error!("App state is busy, dropping {} at ({}, {})", action.event_name(), x, y);
                return;
            };
            let result = match action {
                PointerAction::Click => state.click(x, y),
                PointerAction::DoubleClick => state.double_click(x, y).map(|_| ()),
            };
            if let Err(e) = result {
                error!("Error handling {}: {}", action.event_name(), e);
            }
        }) as Box<dyn FnMut(Event)>);

        canvas.add_event_listener_with_callback(action.event_name(), closure.as_ref().unchecked_ref())?;
        closures.borrow_mut().push((action.event_name(), closure));
        debug!("  Attached {} listener.", action.event_name());
    }
    Ok(())
}

/// 付けたリスナーを全部外す。
pub(crate) fn detach_canvas_listeners(canvas: &HtmlCanvasElement, closures: &EventClosures) -> Result<(), JsValue> {
    for (event_name, closure) in closures.borrow_mut().drain(..) {
        canvas.remove_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
        debug!("  Detached {} listener.", event_name);
    }
    Ok(())
}
