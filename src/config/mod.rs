// src/config/mod.rs

// 外部から読み込む定義ファイルたちのモジュールだよ！
pub mod deck; // デッキ定義 (52枚の suit/rank ペア) 🃏
pub mod layout; // 鉱山レイアウト定義 (スロット・覆い関係・置き場) 🗺️
