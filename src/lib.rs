// src/lib.rs

// プロスペクター (鉱山ソリティア) のルールエンジンクレートだよ！⛏️🃏
// 配り・覆い関係・マッチ判定・山の移動までが仕事で、
// 描画も入力デバイスも一切知らない。外の世界とは
// 「クリックされたよ」(on_card_clicked) と「こう動いたよ」(EngineEvent) だけで会話する！

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components; // カードの正体とセッション状態の型たち
pub mod config; // デッキ定義とレイアウト定義 (JSON読み込み + 検証)
pub mod engine; // エンジン本体 (配り・クリック処理・山の移動)
pub mod error; // 設定エラーの型
pub mod logic; // デッキ生成・シャッフル・ルール関数
pub mod protocol; // 描画側コラボレーターへの通知メッセージ

// よく使う型はルートから取れるように再エクスポートしておくね！
pub use crate::components::card::{Card, Rank, Suit};
pub use crate::components::tableau_card::{CardId, CardState, TableauCard};
pub use crate::config::layout::Layout;
pub use crate::engine::{GameEngine, GameState};
pub use crate::error::ConfigError;
pub use crate::protocol::{EngineEvent, RejectReason};
