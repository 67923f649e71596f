// src/engine/pile_view.rs
//! 山の間のカード移動と、山札の見た目ヒントの更新をまとめたモジュールだよ。
//! エンジン内部の部品だから全部 pub(crate)！外には GameEngine のメソッドだけ見せる。

use log::debug;

use crate::components::tableau_card::{CardId, CardState};
use crate::config::layout::{
    Layout, DISCARD_SORT_BASE, DRAW_PILE_SORT_STEP, TARGET_SORT_ORDER,
};
use crate::engine::game_state::GameState;
use crate::protocol::EngineEvent;

/// 山札の先頭から1枚引くよ。空なら None！
/// 空のときどうするかは呼び出し側の仕事。ここでは黙って None を返すだけ。
pub(crate) fn draw(state: &mut GameState) -> Option<CardId> {
    state.draw_pile.pop_front()
}

/// カードを新しいターゲットに据えるよ。
///
/// 今のターゲットがいたら、先に捨て札へ送ってから入れ替える。
/// だから「ターゲットの座を追われたカードは必ず捨て札にいる」が常に成り立つ！
pub(crate) fn move_to_target(
    layout: &Layout,
    state: &mut GameState,
    id: CardId,
    events: &mut Vec<EngineEvent>,
) {
    // 先客がいたら捨て札へ！
    if let Some(prev) = state.target.take() {
        move_to_discard(layout, state, prev, events);
    }

    let card = state.card_mut(id);
    card.state = CardState::Target;
    card.face_up = true;
    card.slot_id = None; // 鉱山から来た場合はスロットを手放す

    state.target = Some(id);
    debug!("カード {:?} が新しいターゲットになったよ", id);

    events.push(EngineEvent::CardMoved {
        card: id,
        state: CardState::Target,
        position: layout.pile_position(&layout.discard_pile, 0),
        face_up: true,
        layer_name: layout.discard_pile.layer_name.clone(),
        sort_order: TARGET_SORT_ORDER,
    });
}

/// カードを捨て札に積むよ。
///
/// 重なり順のヒントは積むたびに 1 ずつ増やして、
/// 一番新しい捨て札が一番手前に描かれるようにする。
pub(crate) fn move_to_discard(
    layout: &Layout,
    state: &mut GameState,
    id: CardId,
    events: &mut Vec<EngineEvent>,
) {
    let card = state.card_mut(id);
    card.state = CardState::Discard;
    card.face_up = true;
    card.slot_id = None;

    state.discard_pile.push(id);
    debug!("カード {:?} を捨て札へ (今 {} 枚)", id, state.discard_pile.len());

    events.push(EngineEvent::CardMoved {
        card: id,
        state: CardState::Discard,
        position: layout.pile_position(&layout.discard_pile, 0),
        face_up: true,
        layer_name: layout.discard_pile.layer_name.clone(),
        sort_order: DISCARD_SORT_BASE + state.discard_pile.len() as i32,
    });
}

/// 山札の残りカード全部に、ずらし位置と重なり順のヒントを配り直すよ。
///
/// これは見た目だけの話で、エンジンの状態は1ビットも変わらない。
/// カードを引くたびに呼んで、描画側が山札を積み直せるようにする！
pub(crate) fn update_draw_pile_view(
    layout: &Layout,
    state: &GameState,
    events: &mut Vec<EngineEvent>,
) {
    for (i, &id) in state.draw_pile.iter().enumerate() {
        events.push(EngineEvent::CardMoved {
            card: id,
            state: CardState::DrawPile,
            position: layout.pile_position(&layout.draw_pile, i),
            face_up: false,
            layer_name: layout.draw_pile.layer_name.clone(),
            sort_order: DRAW_PILE_SORT_STEP * i as i32,
        });
    }
}
