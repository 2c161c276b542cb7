// src/engine.rs
//! ゲームエンジン本体！🎮
//!
//! 盤面 (`Board`) と選択状態 (`Selection`) を 1 つだけ持って、ゾーンのクリックを受け付ける。
//! クリックは必ず最後まで処理されて、反則手は黙って無視される (エラーにはならない)。

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::selection::Selection;
use crate::components::stack::{FoundationIndex, Pile, StackType, TableauIndex};
use crate::config::GameConfig;
use crate::logic::{auto_move, deck, rules};
use crate::protocol::{BoardView, CardData, ZoneClick};
use crate::systems::deal_system::DealInitialCardsSystem;
use crate::systems::win_condition_system::WinConditionSystem;
use crate::systems::{move_card_system, stock_system, System};

/// 捨て札を表示する時に見せる最大枚数。
pub const WASTE_VIEW_LIMIT: usize = crate::config::layout::WASTE_VISIBLE_CARDS;

pub struct GameEngine {
    board: Board,
    selection: Selection,
    rng: StdRng,
    win_condition: WinConditionSystem,
}

impl GameEngine {
    /// 設定から新しいゲームを作って、すぐに配るよ。
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::from_rng(rng)
    }

    /// シード固定のゲーム。同じシードなら同じ配り方になる。
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let board = Self::deal_new_board(&mut rng);
        Self {
            board,
            selection: Selection::None,
            rng,
            win_condition: WinConditionSystem::new(),
        }
    }

    fn deal_new_board(rng: &mut StdRng) -> Board {
        let mut board = Board::with_stock(deck::build_shuffled_stock(rng));
        DealInitialCardsSystem.execute(&mut board);
        board
    }

    /// 同じ乱数列の続きでシャッフルし直して、最初から配り直す。
    pub fn new_game(&mut self) {
        info!("Starting a new game");
        self.board = Self::deal_new_board(&mut self.rng);
        self.selection = Selection::None;
    }

    // --- 入力 ---

    /// アダプタからのクリックをそれぞれのハンドラに振り分ける。
    pub fn handle_click(&mut self, zone: ZoneClick) {
        debug!("Click on {:?} (selection: {:?})", zone, self.selection);
        match zone {
            ZoneClick::Stock => self.stock_clicked(),
            ZoneClick::Waste => self.waste_clicked(),
            ZoneClick::Foundation(index) => self.foundation_clicked(index),
            ZoneClick::Pile(index) => self.pile_clicked(index),
        }
    }

    /// 山札クリック: 3 枚めくる。山札が空なら捨て札を全部戻す。
    /// 何か選択中なら何もしない。
    pub fn stock_clicked(&mut self) {
        if self.selection.is_armed() {
            debug!("Stock click ignored while {:?} is selected", self.selection);
            return;
        }
        let moved = if self.board.stock.is_empty() {
            stock_system::reset_waste_to_stock(&mut self.board)
        } else {
            stock_system::deal_from_stock(&mut self.board) > 0
        };
        if moved {
            self.after_move();
        }
    }

    /// 捨て札クリック: 選択する / 選択を外す。
    pub fn waste_clicked(&mut self) {
        match self.selection {
            Selection::None if !self.board.waste.is_empty() => self.arm(Selection::Waste),
            Selection::Waste => self.disarm(),
            _ => debug!("Waste click ignored"),
        }
    }

    /// 組札クリック。
    ///
    /// 組札を選択中なら (どの組札でも) 選択解除。捨て札か場札を選択中で、その一番上が
    /// この組札に置けるなら移動。それ以外はこの組札を選択する。
    pub fn foundation_clicked(&mut self, index: FoundationIndex) {
        let target = StackType::Foundation(index);
        let source = match self.selection {
            Selection::Foundation(_) => {
                self.disarm();
                return;
            }
            Selection::Waste => Some(StackType::Waste),
            Selection::Pile(pile) => Some(StackType::Tableau(pile)),
            Selection::None => None,
        };

        if source.is_some_and(|from| move_card_system::move_top_card(&mut self.board, from, target)) {
            self.disarm();
            self.after_move();
        } else {
            self.arm(Selection::Foundation(index));
        }
    }

    /// 場札クリック。
    ///
    /// - 場札を選択中: 表向きの連続部分をまるごと移動 (置けなければ何もしない)、選択解除。
    ///   同じ列をもう一度クリックした場合もこれで選択解除になる。
    /// - 捨て札 / 組札を選択中: 一番上が置けるなら移動して選択解除。置けなければそのまま。
    /// - 何も選択していない: 一番上が表向きなら選択、裏向きならめくる。
    pub fn pile_clicked(&mut self, index: TableauIndex) {
        let target = StackType::Tableau(index);
        match self.selection {
            Selection::Pile(source) => {
                if move_card_system::move_face_up_run(&mut self.board, source, index) {
                    self.after_move();
                }
                self.disarm();
            }
            Selection::Waste => {
                if move_card_system::move_top_card(&mut self.board, StackType::Waste, target) {
                    self.disarm();
                    self.after_move();
                }
            }
            Selection::Foundation(foundation) => {
                let from = StackType::Foundation(foundation);
                if move_card_system::move_top_card(&mut self.board, from, target) {
                    self.disarm();
                    self.after_move();
                }
            }
            Selection::None => {
                let top_face_up = self.board.tableau(index).peek().map(Card::is_face_up);
                match top_face_up {
                    Some(true) => self.arm(Selection::Pile(index)),
                    Some(false) => {
                        if let Some(top) = self.board.tableau[index.get()].peek_mut() {
                            top.turn_up();
                            info!("Turned up {} on pile {}", top, index.get());
                        }
                    }
                    None => debug!("Click on empty pile {} ignored", index.get()),
                }
            }
        }
    }

    /// ダブルクリック: 捨て札か場札の一番上を、置ける組札へ自動で移動する。
    /// 何か選択中のときや、置ける組札がないときは何もしない。移動したら `true`。
    pub fn auto_move(&mut self, zone: ZoneClick) -> bool {
        if self.selection.is_armed() {
            return false;
        }
        let from = match zone {
            ZoneClick::Waste | ZoneClick::Pile(_) => StackType::from(zone),
            ZoneClick::Stock | ZoneClick::Foundation(_) => return false,
        };
        let Some(card) = self.board.pile(from).peek().filter(|card| card.is_face_up()) else {
            return false;
        };
        let Some(foundation) = auto_move::find_automatic_foundation_move(&self.board, card) else {
            return false;
        };
        let moved = move_card_system::move_top_card(&mut self.board, from, StackType::Foundation(foundation));
        if moved {
            self.after_move();
        }
        moved
    }

    fn arm(&mut self, selection: Selection) {
        debug!("Selection {:?} -> {:?}", self.selection, selection);
        self.selection = selection;
    }

    fn disarm(&mut self) {
        debug!("Selection {:?} cleared", self.selection);
        self.selection = Selection::None;
    }

    fn after_move(&mut self) {
        self.win_condition.run(&mut self.board);
        if self.board.status == GameStatus::Won {
            info!("All foundations complete. You win!");
        }
    }

    // --- ルール判定 ---

    pub fn can_add_to_foundation(&self, card: &Card, index: FoundationIndex) -> bool {
        rules::can_add_to_foundation(card, self.board.foundation(index))
    }

    pub fn can_add_to_pile(&self, card: &Card, index: TableauIndex) -> bool {
        rules::can_add_to_pile(card, self.board.tableau(index))
    }

    pub fn is_game_over(&self) -> bool {
        self.win_condition.is_game_over(&self.board)
    }

    // --- 読み取り ---

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_game_over(self.is_game_over())
    }

    pub fn stock_top(&self) -> Option<&Card> {
        self.board.stock.peek()
    }

    pub fn waste_top(&self) -> Option<&Card> {
        self.board.waste.peek()
    }

    /// 捨て札の上から最大 3 枚。下 → 上 の順。
    pub fn waste_view(&self) -> Vec<&Card> {
        let skip = self.board.waste.len().saturating_sub(WASTE_VIEW_LIMIT);
        self.board.waste.iter().skip(skip).collect()
    }

    pub fn foundation_top(&self, index: FoundationIndex) -> Option<&Card> {
        self.board.foundation(index).peek()
    }

    pub fn tableau(&self, index: TableauIndex) -> &Pile {
        self.board.tableau(index)
    }

    /// 描画用のスナップショットを作る。
    pub fn view(&self) -> BoardView {
        let status = self.status();
        BoardView {
            stock_top: self.stock_top().map(CardData::from),
            stock_count: self.board.stock.len(),
            waste: self.waste_view().into_iter().map(CardData::from).collect(),
            waste_count: self.board.waste.len(),
            foundations: FoundationIndex::all()
                .map(|index| self.foundation_top(index).map(CardData::from))
                .collect(),
            tableau: TableauIndex::all()
                .map(|index| self.tableau(index).iter().map(CardData::from).collect())
                .collect(),
            selection: self.selection,
            status,
            banner: status.banner().map(str::to_string),
        }
    }
}

#[cfg(test)]
impl GameEngine {
    /// テスト用: 好きな盤面からエンジンを作る。
    pub(crate) fn from_board(board: Board) -> Self {
        Self {
            board,
            selection: Selection::None,
            rng: StdRng::seed_from_u64(0),
            win_condition: WinConditionSystem::new(),
        }
    }
}
