// src/error.rs
//! 設定まわりの致命的エラーを定義するよ。
//!
//! デッキやレイアウトの記述が壊れてたら、ゲームは始められない。
//! だからこの種のエラーはセッション開始前に `Result` で呼び出し元へ返して、
//! プレイ中には一切出てこないようにしてあるんだ。
//! （プレイ中の「無効な手」はエラーじゃなくて通知メッセージ扱い！protocol.rs を見てね）

use thiserror::Error;

use crate::components::card::Card;
use crate::config::layout::SlotId;

/// デッキ定義・レイアウト定義の検証で見つかる設定エラーたち。
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON として読めなかった。
    #[error("設定データのJSONが読めません: {0}")]
    Parse(#[from] serde_json::Error),

    /// デッキの枚数が52枚じゃない。
    #[error("デッキは52枚ちょうどのはずが {0} 枚ありました")]
    WrongDeckSize(usize),

    /// 同じカードが2回出てきた。
    #[error("デッキにカードが重複しています: {0:?}")]
    DuplicateCard(Card),

    /// 同じスロットIDが2回出てきた。
    #[error("レイアウトのスロットID {0} が重複しています")]
    DuplicateSlotId(SlotId),

    /// hidden_by が存在しないスロットIDを指している。
    #[error("スロット {slot} の hidden_by が未知のスロットID {unknown} を指しています")]
    UnknownHiddenBy { slot: SlotId, unknown: SlotId },

    /// hidden_by が自分自身を指している。そのカードは一生めくれなくなっちゃう！
    #[error("スロット {0} が自分自身に隠されています")]
    SelfHiddenBy(SlotId),

    /// スロット数 + 初期ターゲット1枚ぶんのカードがデッキに無い。
    #[error("デッキ {deck_size} 枚ではスロット {slots} 個と初期ターゲットを配れません")]
    DeckTooSmall { deck_size: usize, slots: usize },
}
