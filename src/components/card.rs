// src/components/card.rs

// serde を使う宣言！盤面のスナップショットを JSON にして JS 側へ渡す時に使うよ！
use serde::{Serialize, Deserialize};

/// カードのスート（マーク）を表す列挙型だよ！♦️❤️♣️♠️
///
/// 並び順はデッキを作る時の順番 (ダイヤ → ハート → クラブ → スペード) と同じ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamond, // ♦️
    Heart,   // ❤️
    Club,    // ♣️
    Spade,   // ♠️
}

/// 全スートの配列。デッキ生成のループで使う！
pub const ALL_SUITS: [Suit; 4] = [Suit::Diamond, Suit::Heart, Suit::Club, Suit::Spade];

/// カードの色（赤か黒か）。場札 (Tableau) の色違いルールで使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

impl Suit {
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }

    /// 画像アセット名で使う 1 文字のトークン (d, h, c, s)。
    pub fn token(self) -> &'static str {
        match self {
            Suit::Diamond => "d",
            Suit::Heart => "h",
            Suit::Club => "c",
            Suit::Spade => "s",
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// A が 1 (一番弱い)、K が 13 (一番強い)。`PartialOrd, Ord` で大小比較もできる！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// 全ランクの配列 (A → K の順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
    Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King,
];

impl Rank {
    /// 1〜13 の数値を返す。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 1〜13 の数値からランクを作る。範囲外なら None。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// 画像アセット名で使うトークン ("a", "2".."9", "t", "j", "q", "k")。
    pub fn token(self) -> &'static str {
        match self {
            Rank::Ace => "a",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "t",
            Rank::Jack => "j",
            Rank::Queen => "q",
            Rank::King => "k",
        }
    }
}

/// 裏向きカードのアセット名。
pub const CARD_BACK_KEY: &str = "back";

/// カードそのものを表す構造体だよ！🃏
///
/// スートとランクは作った後は絶対に変わらないので private にしてある。
/// 変わるのは表向き/裏向き (`is_face_up`) だけ！
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    is_face_up: bool,
}

impl Card {
    /// 新しいカードを作る。最初は裏向き。
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub fn turn_up(&mut self) {
        self.is_face_up = true;
    }

    pub fn turn_down(&mut self) {
        self.is_face_up = false;
    }

    /// 描画用のアセット名を返すよ。裏向きなら常に "back"。
    ///
    /// 例: ハートの A → "ah"、スペードの 10 → "ts"、クラブの 7 → "7c"
    pub fn asset_key(&self) -> String {
        if !self.is_face_up {
            return CARD_BACK_KEY.to_string();
        }
        format!("{}{}", self.rank.token(), self.suit.token())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.token())
    }
}
