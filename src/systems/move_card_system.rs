// src/systems/move_card_system.rs

use log::{debug, info};

use crate::board::Board;
use crate::components::stack::{StackType, TableauIndex};
use crate::logic::rules;

/// 1 枚移動: `from` の一番上のカードを `to` に置く。
///
/// ルール上置けない場合や `from` が空の場合は何もしないで `false` を返すよ。
pub fn move_top_card(board: &mut Board, from: StackType, to: StackType) -> bool {
    let Some(card) = board.pile(from).peek() else {
        debug!("MoveCardSystem: {:?} is empty, nothing to move", from);
        return false;
    };
    if !rules::is_move_valid(board, card, to) {
        debug!("MoveCardSystem: {} cannot go from {:?} to {:?}", card, from, to);
        return false;
    }
    if let Some(card) = board.pile_mut(from).pop() {
        info!("MoveCardSystem: {} {:?} -> {:?}", card, from, to);
        board.pile_mut(to).push(card);
    }
    true
}

/// 場札どうしの移動: `from` の表向きの連続部分をまるごと `to` に移す。
///
/// 判定に使うのは連続部分の一番下 (一番奥) のカードだけ。置けるなら全部が順番そのままで移動、
/// 置けないなら 1 枚も動かさない (オール・オア・ナッシング)。
pub fn move_face_up_run(board: &mut Board, from: TableauIndex, to: TableauIndex) -> bool {
    if from == to {
        return false;
    }
    let Some(base) = board.tableau(from).face_up_run_base() else {
        debug!("MoveCardSystem: pile {} has no face-up run", from.get());
        return false;
    };
    if !rules::can_add_to_pile(base, board.tableau(to)) {
        debug!("MoveCardSystem: run starting at {} cannot go onto pile {}", base, to.get());
        return false;
    }

    let run = board.tableau[from.get()].take_face_up_run();
    info!("MoveCardSystem: moving {} card(s) from pile {} to pile {}", run.len(), from.get(), to.get());
    board.tableau[to.get()].extend(run);
    true
}
