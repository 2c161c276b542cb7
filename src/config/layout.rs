// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードのサイズ、間隔、場札の重なり具合など。

pub const CARD_WIDTH: f32 = 73.0; // カード画像の幅
pub const CARD_HEIGHT: f32 = 97.0; // カード画像の高さ
pub const SPACING: f32 = 5.0; // カード同士、カードと盤の端の間隔

pub const TABLEAU_Y_OFFSET_FACE_UP: f32 = 15.0; // 場札の表向きカードのY方向オフセット
pub const TABLEAU_Y_OFFSET_FACE_DOWN: f32 = 5.0; // 場札の裏向きカードのY方向オフセット
pub const WASTE_Y_OFFSET: f32 = 15.0; // 捨て札の上3枚をずらして見せる量

/// 上段の何列目から組札が始まるか (0: 山札, 1: 捨て札, 2: 空き, 3〜6: 組札)。
pub const FOUNDATION_FIRST_COLUMN: usize = 3;
/// 捨て札は上から何枚まで見せるか。
pub const WASTE_VISIBLE_CARDS: usize = 3;
/// 1 列に積まれうる表向きカードの最大数 (K から A まで)。盤の高さの計算に使う。
pub const MAX_FACE_UP_RUN: usize = 13;
