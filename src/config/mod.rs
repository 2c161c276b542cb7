// src/config/mod.rs

pub mod layout;
pub mod game;

pub use game::{GameConfig, LayoutConfig};
