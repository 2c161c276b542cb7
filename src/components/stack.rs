// src/components/stack.rs

use serde::{Serialize, Deserialize};

use crate::components::card::Card;

/// 組札 (Foundation) の数。
pub const FOUNDATION_COUNT: usize = 4;
/// 場札 (Tableau) の列数。
pub const TABLEAU_COUNT: usize = 7;

/// 組札 (Foundation) の番号 (0-3)。
///
/// `new` でしか作れないから、範囲外の番号は存在しないよ！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct FoundationIndex(u8);

impl FoundationIndex {
    pub fn new(index: u8) -> Option<Self> {
        (usize::from(index) < FOUNDATION_COUNT).then_some(Self(index))
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// 0 から 3 まで順番に。
    pub fn all() -> impl Iterator<Item = FoundationIndex> {
        (0..FOUNDATION_COUNT as u8).map(FoundationIndex)
    }
}

/// 場札 (Tableau) の列番号 (0-6)。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct TableauIndex(u8);

impl TableauIndex {
    pub fn new(index: u8) -> Option<Self> {
        (usize::from(index) < TABLEAU_COUNT).then_some(Self(index))
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// 0 から 6 まで順番に。
    pub fn all() -> impl Iterator<Item = TableauIndex> {
        (0..TABLEAU_COUNT as u8).map(TableauIndex)
    }
}

macro_rules! index_conversions {
    ($index:ident, $what:literal) => {
        impl TryFrom<u8> for $index {
            type Error = String;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                $index::new(value).ok_or_else(|| format!("{} index out of range: {}", $what, value))
            }
        }

        impl From<$index> for u8 {
            fn from(index: $index) -> u8 {
                index.0
            }
        }
    };
}

index_conversions!(FoundationIndex, "foundation");
index_conversions!(TableauIndex, "tableau");

/// 盤面のクリックできる場所 (ゾーン) の種類を示す Enum だよ。
/// カードが山札にあるのか、場札の何列目にあるのか、なども区別できる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札 (Stock)。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。最初に置かれた A でスートが決まる。
    Foundation(FoundationIndex),
    /// 場札 (Tableau)。7 列ある。
    Tableau(TableauIndex),
}

/// カードの山 1 つ分。`Vec` の最後の要素が「一番上」(手が届くカード) だよ。
///
/// 触れるのは一番上だけ: push / pop / peek と、描画用に下から順に眺める `iter` だけを公開してる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// 下 (最初に積まれたカード) から上へ。
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// 一番上から連続している表向きカードの枚数。
    pub fn face_up_run_len(&self) -> usize {
        self.cards.iter().rev().take_while(|card| card.is_face_up()).count()
    }

    /// 表向きの連続部分 (face-up run) の一番下のカード。
    pub fn face_up_run_base(&self) -> Option<&Card> {
        let run = self.face_up_run_len();
        if run == 0 {
            return None;
        }
        self.cards.get(self.cards.len() - run)
    }

    /// 表向きの連続部分をまるごと取り出す。順番はそのまま (下 → 上)。
    pub fn take_face_up_run(&mut self) -> Vec<Card> {
        let split_at = self.cards.len() - self.face_up_run_len();
        self.cards.split_off(split_at)
    }

    /// 複数枚をまとめて積む。`cards` の先頭が下になる。
    pub fn extend(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
