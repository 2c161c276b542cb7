// src/board.rs
//! 盤面 (山札・捨て札・組札・場札) をまとめて持つ構造体だよ！🌍
//!
//! 各システム (`systems`) はこの `Board` を `&mut` で受け取ってカードを動かす。
//! `Board` を持っているのは `GameEngine` だけなので、外から勝手に書き換えられることはないよ。

use serde::Serialize;

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::stack::{
    FoundationIndex, Pile, StackType, TableauIndex, FOUNDATION_COUNT, TABLEAU_COUNT,
};

/// デッキの枚数。どの時点でも盤面全体でこの枚数になっているはず。
pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub(crate) stock: Pile,
    pub(crate) waste: Pile,
    pub(crate) foundations: [Pile; FOUNDATION_COUNT],
    pub(crate) tableau: [Pile; TABLEAU_COUNT],
    pub(crate) status: GameStatus,
}

impl Board {
    /// 山札だけが入った盤面を作る。配るのは `DealInitialCardsSystem` の仕事。
    pub fn with_stock(stock: Pile) -> Self {
        Self {
            stock,
            waste: Pile::new(),
            foundations: Default::default(),
            tableau: Default::default(),
            status: GameStatus::Playing,
        }
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn foundation(&self, index: FoundationIndex) -> &Pile {
        &self.foundations[index.get()]
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    pub fn tableau(&self, index: TableauIndex) -> &Pile {
        &self.tableau[index.get()]
    }

    pub fn tableaus(&self) -> &[Pile] {
        &self.tableau
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn pile(&self, stack: StackType) -> &Pile {
        match stack {
            StackType::Stock => &self.stock,
            StackType::Waste => &self.waste,
            StackType::Foundation(index) => &self.foundations[index.get()],
            StackType::Tableau(index) => &self.tableau[index.get()],
        }
    }

    pub(crate) fn pile_mut(&mut self, stack: StackType) -> &mut Pile {
        match stack {
            StackType::Stock => &mut self.stock,
            StackType::Waste => &mut self.waste,
            StackType::Foundation(index) => &mut self.foundations[index.get()],
            StackType::Tableau(index) => &mut self.tableau[index.get()],
        }
    }

    /// 盤面にある全カード。山札 → 捨て札 → 組札 → 場札 の順。
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        std::iter::once(&self.stock)
            .chain(std::iter::once(&self.waste))
            .chain(self.foundations.iter())
            .chain(self.tableau.iter())
            .flat_map(|pile| pile.iter())
    }

    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }
}
