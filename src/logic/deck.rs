// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// 返り値は `Vec<Card>` で、カードはスートとランクの全組み合わせ。
/// itertools の cartesian_product で 4 × 13 を一発で回してる！
/// 外部のデッキ定義が無いときはこれがデフォルトになるよ。
pub fn create_standard_deck() -> Vec<Card> {
    ALL_SUITS
        .iter()
        .cartesian_product(ALL_RANKS.iter())
        .map(|(&suit, &rank)| Card { suit, rank })
        .collect()
}

/// カードデッキをシャッフルする関数だよ。乱数源は呼び出し側が渡す！
///
/// テストではシード固定の `StdRng` を渡せば毎回同じ並びになるから、
/// 再現可能なテストが書けるってわけ。👍
///
/// # 引数
/// * `deck` - シャッフルしたいカード列への可変参照。
/// * `rng` - 乱数生成器。`rand::Rng` を実装してれば何でもOK！
pub fn shuffle_deck_with<R: Rng>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng); // Fisher–Yates は SliceRandom にお任せ！
}

/// OS の乱数でシャッフルする、普段使いの便利版だよ。
pub fn shuffle_deck(deck: &mut [Card]) {
    shuffle_deck_with(deck, &mut thread_rng());
}
