// src/error.rs
//! ボード表示側 (アダプタ) のエラー型。
//!
//! ルールエンジン自体はエラーを返さない: 反則手は黙って無視されるだけ。
//! ここにあるのはキャンバスや画像、設定の読み込みなど、ブラウザとの境界で起きる失敗だよ。

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("window is not available")]
    MissingWindow,

    #[error("document is not available")]
    MissingDocument,

    #[error("canvas element not found: {0}")]
    CanvasNotFound(String),

    #[error("2d rendering context is unavailable")]
    ContextUnavailable,

    #[error("card image not registered: {0}")]
    AssetNotFound(String),

    #[error("invalid game config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to serialize board state: {0}")]
    Snapshot(String),

    #[error("game state is already borrowed by another handler")]
    StateBusy,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BoardError {
    fn from(value: JsValue) -> Self {
        BoardError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<BoardError> for JsValue {
    fn from(error: BoardError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub type BoardResult<T> = Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_piece() {
        assert_eq!(BoardError::CanvasNotFound("board".into()).to_string(), "canvas element not found: board");
        assert_eq!(BoardError::AssetNotFound("ah".into()).to_string(), "card image not registered: ah");
    }
}
