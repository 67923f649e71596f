// src/protocol.rs

// このファイルは、エンジンから描画側コラボレーターへ流す
// 通知メッセージの形式を定義するよ！💌
// エンジンはシーングラフもソートレイヤーも直接触らない。カードが動いたら
// 「どの山に行ったか」「どこに置けばいいか」「表か裏か」「重なり順のヒント」を
// この形で伝えて、実際の配置は描画側にお任せするんだ。
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Deserialize, Serialize};

// ゲーム内の型も通知で使うからインポートしておくね！
use crate::components::position::Position;
use crate::components::tableau_card::{CardId, CardState};

/// 無効な手だった理由を表すenumだよ。
/// 描画側はこれを見てブザーを鳴らすなり揺らすなり好きにしてOK！
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// クリックされた鉱山カードがまだ裏向きだった。
    FaceDown,
    /// ランクがターゲットと隣接してなかった。
    NotAdjacent,
}

/// エンジンが描画側に送る通知メッセージの種類を表すenumだよ。
/// クリック1回の処理が終わるたびに、起きたことがこの列で返ってくる！
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// カードがどこかの山に移動した (または山の中で置き直された) よ。
    CardMoved {
        /// 動いたカードのID。
        card: CardId,
        /// 移動先の山。
        state: CardState,
        /// 置き場所のヒント。スロット座標か、スタッガー込みの山座標。
        position: Position,
        /// 表向きかどうか。
        face_up: bool,
        /// 描画側のソートレイヤー名。エンジンはレイアウト定義から素通しするだけ。
        layer_name: String,
        /// 同じレイヤー内での相対的な重なり順のヒント。大きいほど手前！
        sort_order: i32,
    },

    /// 鉱山のカードがその場でめくれた (移動はしてない) よ。
    CardFlipped {
        card: CardId,
        face_up: bool,
    },

    /// 無効な手だったよ。状態は何も変わってないから、
    /// 描画側は拒否のフィードバックだけ出せばOK！
    InvalidMove {
        card: CardId,
        reason: RejectReason,
    },

    /// 山札が空の状態で引こうとしたよ。これも状態は何も変わってない。
    /// 捨て札を山札に戻すリサイクルはこのエンジンではやらない方針！
    DrawPileExhausted,
}
