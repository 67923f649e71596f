// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card; // カードの正体 (Suit, Rank, Card) 🃏
pub mod position; // 描画側に渡す位置ヒント 📍
pub mod tableau_card; // セッション中のカード状態 (CardId, CardState, TableauCard)
