// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::board::Board;
use crate::components::card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
use crate::components::stack::{FoundationIndex, Pile, StackType, TableauIndex};

// --- テスト用ヘルパー関数 ---
fn up(rank: Rank, suit: Suit) -> Card {
    let mut card = Card::new(rank, suit);
    card.turn_up();
    card
}

fn down(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn pile(cards: Vec<Card>) -> Pile {
    Pile::from_cards(cards)
}

// --- 各ルール関数のテスト ---

#[test]
fn test_foundation_accepts_only_ace_when_empty() {
    let empty = Pile::new();
    for suit in ALL_SUITS {
        for rank in ALL_RANKS {
            assert_eq!(
                can_add_to_foundation(&up(rank, suit), &empty),
                rank == Rank::Ace,
                "{:?} {:?} on an empty foundation",
                rank,
                suit
            );
        }
    }
}

#[test]
fn test_foundation_builds_up_in_suit() {
    let hearts = pile(vec![up(Rank::Ace, Suit::Heart), up(Rank::Two, Suit::Heart)]);

    assert!(can_add_to_foundation(&up(Rank::Three, Suit::Heart), &hearts), "3❤️ は 2❤️ の上に置けるはず");
    assert!(!can_add_to_foundation(&up(Rank::Three, Suit::Diamond), &hearts), "スート違いはダメ");
    assert!(!can_add_to_foundation(&up(Rank::Four, Suit::Heart), &hearts), "ランク飛ばしはダメ");
    assert!(!can_add_to_foundation(&up(Rank::Two, Suit::Heart), &hearts), "同じランクはダメ");
    assert!(!can_add_to_foundation(&up(Rank::Ace, Suit::Spade), &hearts), "空じゃない組札に A はダメ");
}

#[test]
fn test_tableau_accepts_only_king_when_empty() {
    let empty = Pile::new();
    assert!(can_add_to_pile(&up(Rank::King, Suit::Spade), &empty), "空の列に K♠ は置けるはず");
    assert!(can_add_to_pile(&up(Rank::King, Suit::Heart), &empty), "空の列に K❤️ も置けるはず");
    assert!(!can_add_to_pile(&up(Rank::Queen, Suit::Heart), &empty), "空の列に Q は置けないはず");
    assert!(!can_add_to_pile(&up(Rank::Ace, Suit::Club), &empty), "空の列に A は置けないはず");
}

#[test]
fn test_tableau_alternates_colors_descending() {
    let queen_hearts = pile(vec![down(Rank::Four, Suit::Club), up(Rank::Queen, Suit::Heart)]);

    assert!(can_add_to_pile(&up(Rank::Jack, Suit::Spade), &queen_hearts), "Q❤️ に J♠ (黒) は置けるはず");
    assert!(can_add_to_pile(&up(Rank::Jack, Suit::Club), &queen_hearts), "Q❤️ に J♣ (黒) も置けるはず");
    assert!(!can_add_to_pile(&up(Rank::Jack, Suit::Diamond), &queen_hearts), "同色はダメ");
    assert!(!can_add_to_pile(&up(Rank::Ten, Suit::Spade), &queen_hearts), "ランク違いはダメ");
    assert!(!can_add_to_pile(&up(Rank::King, Suit::Spade), &queen_hearts), "上のランクはダメ");
}

#[test]
fn test_tableau_rejects_face_down_top() {
    let face_down_top = pile(vec![down(Rank::Queen, Suit::Heart)]);
    assert!(!can_add_to_pile(&up(Rank::Jack, Suit::Spade), &face_down_top), "裏向きの上には置けないはず");
}

#[test]
fn test_stock_waste_rules() {
    // ストックがある場合
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_reset_stock_from_waste(false, false), "ストックがある場合はリセットできないはず");
    assert!(!can_reset_stock_from_waste(false, true), "ストックがある場合はリセットできないはず");

    // ストックが空の場合
    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true), "ストックもウェストも空ならリセットできないはず");
}

#[test]
fn test_win_condition() {
    let complete = |suit| pile(ALL_RANKS.iter().map(|&rank| up(rank, suit)).collect());
    let full: Vec<Pile> = ALL_SUITS.iter().map(|&suit| complete(suit)).collect();
    assert!(check_win_condition(&full), "全部 K まで積んだらクリアのはず！🏆");

    let mut one_short = full.clone();
    one_short[2].pop();
    assert!(!check_win_condition(&one_short), "1 つでも Q 止まりならクリアじゃない");

    let mut one_empty = full.clone();
    one_empty[0] = Pile::new();
    assert!(!check_win_condition(&one_empty), "空の組札があればクリアじゃない");

    let fresh: Vec<Pile> = vec![Pile::new(); 4];
    assert!(!check_win_condition(&fresh));
}

#[test]
fn test_move_validation_dispatch() {
    let mut board = Board::with_stock(Pile::new());
    let pile0 = TableauIndex::new(0).expect("valid pile");
    let foundation0 = FoundationIndex::new(0).expect("valid foundation");

    assert!(is_move_valid(&board, &up(Rank::King, Suit::Club), StackType::Tableau(pile0)));
    assert!(is_move_valid(&board, &up(Rank::Ace, Suit::Club), StackType::Foundation(foundation0)));
    assert!(!is_move_valid(&board, &up(Rank::Ace, Suit::Club), StackType::Waste), "捨て札には直接置けない");
    assert!(!is_move_valid(&board, &up(Rank::Ace, Suit::Club), StackType::Stock), "山札には直接置けない");

    board.foundations[0].push(up(Rank::Ace, Suit::Club));
    assert!(is_move_valid(&board, &up(Rank::Two, Suit::Club), StackType::Foundation(foundation0)));
    assert!(!is_move_valid(&board, &up(Rank::Two, Suit::Spade), StackType::Foundation(foundation0)));
}
