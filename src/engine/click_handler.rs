// src/engine/click_handler.rs
//! カードクリックの振り分けとマッチ判定を担当するモジュールだよ。
//! クリック1回 = 1トランザクション。検証して、状態を変えて、表裏を計算し直して、
//! 起きたことを通知リストで返すところまでを一息でやる！

use log::debug;

use crate::components::tableau_card::{CardId, CardState};
use crate::config::layout::Layout;
use crate::engine::game_state::GameState;
use crate::engine::pile_view;
use crate::logic::rules::{adjacent_rank, recompute_faces};
use crate::protocol::{EngineEvent, RejectReason};

/// クリックされたカードの状態に応じて処理を振り分けるよ。
///
/// | 今の山 | やること |
/// |---|---|
/// | ターゲット | 何もしない |
/// | 山札 | 今のターゲットを捨てて、山札の先頭を新ターゲットに |
/// | 鉱山 | マッチ検証。成功なら新ターゲットに、失敗なら通知だけ |
/// | 捨て札 | ルーティングなし (エラーでもない) |
pub(crate) fn handle_card_clicked(
    layout: &Layout,
    state: &mut GameState,
    id: CardId,
) -> Vec<EngineEvent> {
    let mut events = Vec::new();

    match state.card(id).state {
        CardState::Target => {
            // ターゲット自身のクリックは何もしない
            debug!("ターゲット {:?} のクリックは無視するよ", id);
        }
        CardState::Discard => {
            // 捨て札はクリック対象外。エラーじゃなくて、ただの素通り！
            debug!("捨て札 {:?} のクリックはルーティングなし", id);
        }
        CardState::DrawPile => {
            // 山札のどのカードをクリックしても、引くのは先頭の1枚だよ
            draw_next_target(layout, state, &mut events);
        }
        CardState::Tableau => {
            handle_tableau_clicked(layout, state, id, &mut events);
        }
    }

    events
}

/// 山札から次のターゲットを引くよ。山札が空なら通知だけ出して何も変えない！
/// (捨て札のリサイクルはしない方針。理由は DESIGN.md を見てね)
pub(crate) fn draw_next_target(
    layout: &Layout,
    state: &mut GameState,
    events: &mut Vec<EngineEvent>,
) {
    match pile_view::draw(state) {
        None => {
            debug!("山札が空！引けないよ");
            events.push(EngineEvent::DrawPileExhausted);
        }
        Some(drawn) => {
            // move_to_target が今のターゲットを捨て札に送ってくれる
            pile_view::move_to_target(layout, state, drawn, events);
            pile_view::update_draw_pile_view(layout, state, events);
        }
    }
}

/// 鉱山カードのクリック。マッチ検証して、成功ならターゲット入れ替え＋表裏再計算！
fn handle_tableau_clicked(
    layout: &Layout,
    state: &mut GameState,
    id: CardId,
    events: &mut Vec<EngineEvent>,
) {
    // ターゲットは配りが終わった時点で必ずいる。いなければ配り前のクリックだから素通り。
    let Some(target_id) = state.target else {
        debug!("ターゲット不在のクリック {:?} は無視するよ", id);
        return;
    };

    // 検証その1: 裏向きのカードはまだ遊べない！
    if !state.card(id).face_up {
        debug!("カード {:?} はまだ裏向き。却下！", id);
        events.push(EngineEvent::InvalidMove {
            card: id,
            reason: RejectReason::FaceDown,
        });
        return;
    }

    // 検証その2: ランクがターゲットと隣接してること！
    let clicked_rank = state.card(id).card.rank;
    let target_rank = state.card(target_id).card.rank;
    if !adjacent_rank(clicked_rank, target_rank) {
        debug!(
            "カード {:?} ({:?}) はターゲット ({:?}) と隣接してない。却下！",
            id, clicked_rank, target_rank
        );
        events.push(EngineEvent::InvalidMove {
            card: id,
            reason: RejectReason::NotAdjacent,
        });
        return;
    }

    // ここまで来たら有効なマッチ！🎉
    debug!("カード {:?} ({:?}) がマッチ成立！", id, clicked_rank);
    state.tableau.retain(|&t| t != id);
    pile_view::move_to_target(layout, state, id, events);

    // 鉱山から1枚はけたから、表裏をまるごと計算し直す
    let flipped = recompute_faces(&mut state.cards, &state.tableau);
    for flipped_id in flipped {
        events.push(EngineEvent::CardFlipped {
            card: flipped_id,
            face_up: true,
        });
    }
}
