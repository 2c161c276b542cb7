// src/app/mod.rs
//! SolitaireApp (ブラウザ向けのボード表示) の内部ロジックを役割ごとに分割して置くモジュールだよ！

pub mod browser_event_manager;
pub mod event_handler;
pub mod game_app;
pub mod init_handler;
pub mod layout_calculator;
pub mod renderer;
pub mod state_getter;
