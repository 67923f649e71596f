// src/config/deck.rs
//! 外部のデッキ定義を読むモジュールだよ。
//! 中身は (suit, rank) のペアが52個並んでるだけ。だけど枚数と重複は
//! ここでキッチリ検証する！52枚揃ってないゲームは始まらないからね。

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::error::ConfigError;

/// デッキJSONの1エントリ。スートとランクだけ！
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDef {
    pub suit: Suit,
    pub rank: Rank,
}

/// デッキ定義の全体だよ。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckDef {
    pub cards: Vec<CardDef>,
}

impl DeckDef {
    /// デッキJSONを読み込むよ。形式が壊れてたら即 `ConfigError::Parse`！
    pub fn parse(raw: &str) -> Result<DeckDef, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 検証しながら `Card` の列に変換するよ。
    ///
    /// チェックは2つ！
    /// 1. ちょうど52枚あること
    /// 2. 同じ (suit, rank) が2回出てこないこと
    pub fn into_cards(self) -> Result<Vec<Card>, ConfigError> {
        if self.cards.len() != 52 {
            return Err(ConfigError::WrongDeckSize(self.cards.len()));
        }

        let mut seen: HashSet<(Suit, Rank)> = HashSet::with_capacity(52);
        let mut cards = Vec::with_capacity(52);
        for def in self.cards {
            let card = Card {
                suit: def.suit,
                rank: def.rank,
            };
            // HashSet の insert は、要素が既にあったら false を返すよ！
            if !seen.insert((card.suit, card.rank)) {
                return Err(ConfigError::DuplicateCard(card));
            }
            cards.push(card);
        }
        Ok(cards)
    }
}
