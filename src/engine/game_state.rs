// src/engine/game_state.rs

// serde を使う宣言！セッション状態をまるごとスナップショットできるようにしておくよ。
use serde::{Deserialize, Serialize};
// 山札は「前から引く」順序付きの列だから VecDeque がぴったり！
use std::collections::VecDeque;

use crate::components::card::Card;
use crate::components::tableau_card::{CardId, TableauCard};

/// 1セッションぶんの可変状態を全部まとめた構造体だよ。
///
/// カードの実体は `cards` テーブルに1回だけ入って、セッション終了まで
/// 絶対に消えない。山札・鉱山・捨て札・ターゲットはぜんぶ
/// このテーブルへの添字 (`CardId`) で持つ。
/// だから「1枚のカードは常にどれか1つの山にいる」が崩れようがないんだ！
///
/// - `cards`: セッションのカードテーブル。`CardId` の指し先。
/// - `draw_pile`: 山札。front が次に引くカード！
/// - `tableau`: 鉱山にいるカードたち。
/// - `discard_pile`: 捨て札。プレイ中は積む一方で、抜くことはない。
/// - `target`: ターゲット。配り終わる前だけ None。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub cards: Vec<TableauCard>,
    pub draw_pile: VecDeque<CardId>,
    pub tableau: Vec<CardId>,
    pub discard_pile: Vec<CardId>,
    pub target: Option<CardId>,
}

impl GameState {
    /// シャッフル済みのカード列からセッション状態を作るよ。
    /// 全カードが `TableauCard` に包まれて、その順番のまま山札に積まれる。
    /// 配り (deal) はこの後エンジンがやる！
    pub fn new(cards: Vec<Card>) -> Self {
        let cards: Vec<TableauCard> = cards.into_iter().map(TableauCard::new).collect();
        let draw_pile: VecDeque<CardId> = (0..cards.len()).map(CardId).collect();
        Self {
            cards,
            draw_pile,
            tableau: Vec::new(),
            discard_pile: Vec::new(),
            target: None,
        }
    }

    /// ID からカードを参照するよ。ID はエンジンが発行したものだけが正規！
    pub fn card(&self, id: CardId) -> &TableauCard {
        &self.cards[id.0]
    }

    /// ID からカードを可変参照するよ。
    pub fn card_mut(&mut self, id: CardId) -> &mut TableauCard {
        &mut self.cards[id.0]
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::components::tableau_card::CardState;

    #[test]
    fn new_state_puts_everything_in_draw_pile() {
        let cards = vec![
            Card { suit: Suit::Heart, rank: Rank::Ace },
            Card { suit: Suit::Spade, rank: Rank::King },
        ];
        let state = GameState::new(cards);

        assert_eq!(state.cards.len(), 2, "カードテーブルは2枚のはず！");
        assert_eq!(state.draw_pile.len(), 2, "最初は全カードが山札のはず！");
        assert_eq!(state.draw_pile[0], CardId(0), "山札の先頭は最初のカードのはず！");
        assert!(state.tableau.is_empty(), "鉱山はまだ空のはず！");
        assert!(state.discard_pile.is_empty(), "捨て札もまだ空のはず！");
        assert_eq!(state.target, None, "ターゲットは配り終わるまで無しのはず！");

        // 全カードが山札状態で裏向きか確認
        for tc in &state.cards {
            assert_eq!(tc.state, CardState::DrawPile);
            assert!(!tc.face_up);
        }

        println!("GameState 初期化テスト、成功！🎉");
    }
}
