// src/components/tableau_card.rs

// serde を使う宣言！CardId は通知メッセージに乗るから変換できるようにしておく！
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::config::layout::SlotId;

/// セッション中のカード1枚を指す識別子（ID）だよ！
///
/// 実体はただの usize で、エンジンが持つカードテーブル (`Vec<TableauCard>`) の
/// 添字になってる。カード同士の「このカードに隠されてる」参照は、
/// ポインタじゃなくてこの ID で持つようにしてあるんだ。
/// 所有権のことで悩まなくて済むし、誰がカードを持ってるかが一目瞭然！✨
///
/// #[derive(...)] っていうのは、Rustが自動的に便利な機能を追加してくれるおまじないみたいなものだよ！
/// - PartialEq, Eq: ID同士が同じかどうか比較できるようにする (`==` とか)
/// - PartialOrd, Ord: IDの大小を比較できるようにする (`<` とか `>`)
/// - Hash: IDを高速に検索できるデータ構造（HashMapとか）で使えるようにする
/// - Clone, Copy: IDを簡単に複製できるようにする
/// - Debug: IDをデバッグ出力できるようにする
/// - Serialize, Deserialize: serde でJSONなどに変換できるようにする
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize,
)]
pub struct CardId(pub usize);

/// カードが今どの山にいるかを示す Enum だよ。
/// プロスペクターの山は4種類！これでカードクリックの振り分けをするよ。
/// Serialize, Deserialize も付けて、通知メッセージにそのまま乗せられるようにしてある！✨
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardState {
    /// 山札 (DrawPile) だよ。プレイヤーがカードを引く元の場所。
    DrawPile,
    /// ターゲット。次にマッチさせる相手になる、場の中央の1枚！
    Target,
    /// 鉱山 (Tableau)。レイアウトに従って並べられた、プレイ対象のカードたち。
    Tableau,
    /// 捨て札 (Discard)。ターゲットの座を追われたカードが積まれていく場所。
    Discard,
}

/// セッション中のカード1枚分の状態だよ。
///
/// 不変の正体 (`Card`) を中に埋め込んで、その周りにセッション中だけ意味を持つ
/// 可変フィールドを足した形。継承じゃなくて合成ってやつね！
///
/// - `card`: カードの正体（スートとランク）。ここは絶対に変わらない。
/// - `state`: 今どの山にいるか。
/// - `face_up`: 表向きかどうか。鉱山カードは覆いが全部はけたら表になる！
/// - `slot_id`: 占有してるレイアウトスロットのID。`state == Tableau` の間だけ Some。
/// - `covered_by`: このカードを隠してるカードたちへの参照 (CardId)。
///   配り終わった時に1回だけ解決されて、その後は絶対に変わらないよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableauCard {
    pub card: Card,
    pub state: CardState,
    pub face_up: bool,
    pub slot_id: Option<SlotId>,
    pub covered_by: Vec<CardId>,
}

impl TableauCard {
    /// デッキから来たばかりのカードを包むヘルパーだよ。
    /// 最初はみんな山札の中で裏向き！スロットも覆いもまだ無し。
    pub fn new(card: Card) -> Self {
        Self {
            card,
            state: CardState::DrawPile,
            face_up: false,
            slot_id: None,
            covered_by: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn new_card_starts_in_draw_pile() {
        let tc = TableauCard::new(Card {
            suit: Suit::Heart,
            rank: Rank::Five,
        });

        assert_eq!(tc.state, CardState::DrawPile, "新品のカードは山札スタートのはず！");
        assert!(!tc.face_up, "新品のカードは裏向きのはず！");
        assert_eq!(tc.slot_id, None, "スロットはまだ割り当てられてないはず！");
        assert!(tc.covered_by.is_empty(), "覆い関係もまだ空のはず！");

        println!("TableauCard 初期状態テスト、成功！🎉");
    }

    #[test]
    fn card_ids_compare_by_index() {
        let a = CardId(3);
        let b = CardId(3);
        let c = CardId(7);

        assert_eq!(a, b, "同じ添字なら同じIDのはず！");
        assert_ne!(a, c, "違う添字なら違うIDのはず！");
        assert!(a < c, "IDの大小は添字の大小のはず！");

        println!("CardId 比較テスト、成功！🎉");
    }
}
