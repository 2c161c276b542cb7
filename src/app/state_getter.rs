//! Gets the current board state from the engine and converts it to JSON.

use log::{debug, error};

use crate::engine::GameEngine;
use crate::error::{BoardError, BoardResult};
use crate::protocol::BoardView;

/// 盤面のスナップショット (`BoardView`) を JSON 文字列にして返します。
/// JS 側で独自に描画したい時はこれを使ってね。
pub fn get_board_state_json(engine: &GameEngine) -> BoardResult<String> {
    let view = engine.view();
    debug!(
        "Getting board state: stock {}, waste {}, selection {:?}, status {:?}",
        view.stock_count, view.waste_count, view.selection, view.status
    );
    to_json(&view)
}

fn to_json(view: &BoardView) -> BoardResult<String> {
    serde_json::to_string(view).map_err(|e| {
        error!("Failed to serialize board state: {}", e);
        BoardError::Snapshot(e.to_string())
    })
}
