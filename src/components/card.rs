// src/components/card.rs

// serde を使う宣言！カード情報を通知メッセージで送ったりデッキ定義から読んだりする時に使うよ！
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// #[derive(...)] のおまじないも忘れずに！
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq: 等しいか比較できるように (`==`)
/// - Hash: HashSet で重複チェックする時に使えるように
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// スートと同じように #[derive(...)] を付けておくよ！
/// PartialOrd, Ord も追加して、ランクの大小比較 (`<`, `>`) もできるようにしておこう！
/// プロスペクターは「隣のランクかどうか」の判定に数値が要るから、
/// `value()` で 1〜13 の数値を取り出せるようにしてある！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ (プロスペクターでは A と K がループして隣扱いになる！)
    Two,     // 2
    Three,   // 3
    Four,    // 4
    Five,    // 5
    Six,     // 6
    Seven,   // 7
    Eight,   // 8
    Nine,    // 9
    Ten,     // 10
    Jack,    // J (11 扱い)
    Queen,   // Q (12 扱い)
    King,    // K (13 扱い)
}

impl Rank {
    /// ランクを 1〜13 の数値で返すよ。隣接判定で使う！
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// 全スートのテーブル。デッキ生成でループする時に使うよ！
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランクのテーブル。こっちもデッキ生成用！
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す値だよ！🃏
///
/// 「ハート♥️のAだよ！」みたいな不変の正体だけを持つ。
/// 表向きかどうかとか、どの山にいるかみたいなセッション中に変わる情報は
/// `TableauCard` の方に持たせてあるから、こっちは Copy でOK！
///
/// - `suit`: カードのスート
/// - `rank`: カードのランク
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}
