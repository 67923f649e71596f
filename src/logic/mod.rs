// src/logic/mod.rs

// ゲームロジック系のモジュールをまとめるよ！
pub mod deck; // デッキ生成とシャッフル 🎲
pub mod rules; // マッチングと表裏のルール 📏
