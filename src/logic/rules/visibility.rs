//! 覆い関係 (hidden_by) から鉱山カードの表裏を計算し直すルールだよ。

use log::debug;

use crate::components::tableau_card::{CardId, CardState, TableauCard};

/// 鉱山にいる全カードの表裏を計算し直すよ。
///
/// ルールはひとつだけ。「自分を覆ってるカードが1枚も鉱山に残ってなければ表、
/// 残ってたら裏」。カードが鉱山から1枚はけるたびに、鉱山全体に対して
/// まるごと再計算する。覆い関係は疎だし鉱山は小さいから、差分更新なんて
/// 要らないんだ。
///
/// 戻り値は今回のパスで裏→表にめくれたカードのIDたち。
/// エンジンはこれを描画側への通知に使うよ。
///
/// 実装メモ: 判定フェーズと書き込みフェーズを分けてある。
/// `cards` を読みながら同じ `cards` に書き込もうとすると借用規則に怒られるからね。
pub fn recompute_faces(cards: &mut [TableauCard], tableau: &[CardId]) -> Vec<CardId> {
    // フェーズ1: 各カードの新しい表裏を判定 (読み取りだけ)
    let updates: Vec<(CardId, bool)> = tableau
        .iter()
        .map(|&id| {
            let face_up = cards[id.0]
                .covered_by
                .iter()
                .all(|&cover| cards[cover.0].state != CardState::Tableau);
            (id, face_up)
        })
        .collect();

    // フェーズ2: 書き込みと、めくれたカードの収集
    let mut flipped = Vec::new();
    for (id, face_up) in updates {
        let card = &mut cards[id.0];
        if face_up && !card.face_up {
            debug!("カード {:?} の覆いが全部はけたよ！表にめくる", id);
            flipped.push(id);
        }
        card.face_up = face_up;
    }
    flipped
}
