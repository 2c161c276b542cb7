// src/components/mod.rs

// カードや山、選択状態などのデータ部品を置くモジュールだよ！
pub mod card;
pub mod stack;
pub mod selection;
pub mod game_state;

pub use card::{Card, CardColor, Rank, Suit};
pub use stack::{FoundationIndex, Pile, StackType, TableauIndex};
pub use selection::Selection;
pub use game_state::GameStatus;
