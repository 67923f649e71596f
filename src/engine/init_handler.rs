// src/engine/init_handler.rs
//! 最初の配り (deal) を担当するモジュールだよ。
//! シャッフル済みの山札からレイアウトのスロットへ1枚ずつ配って、
//! 覆い関係をカード同士の参照に解決して、最初のターゲットまで据える！

use log::debug;

use crate::components::tableau_card::{CardId, CardState};
use crate::config::layout::{Layout, SlotId};
use crate::engine::game_state::GameState;
use crate::engine::pile_view;
use crate::error::ConfigError;
use crate::protocol::EngineEvent;

/// 初期配置を実行するよ！ 🎉
///
/// # 処理の流れ
/// 1. カードが足りるか先にチェック (スロット数 + 初期ターゲット1枚)。
/// 2. レイアウトのスロット順に山札の先頭から1枚ずつ配る。
///    スロットの face_up フラグをそのまま使うよ (配り中は覆い再計算しない)。
/// 3. 全スロットが埋まったら、hidden_by のスロットIDを実カードへの参照
///    (`covered_by: Vec<CardId>`) に解決する。ここで解決できないIDが出たら
///    設定エラーで、プレイは始まらない！
/// 4. 山札からもう1枚引いて最初のターゲットに据える。
/// 5. 残った山札に見た目ヒントを配る。
pub(crate) fn deal(
    layout: &Layout,
    state: &mut GameState,
    events: &mut Vec<EngineEvent>,
) -> Result<(), ConfigError> {
    // --- 1. 枚数チェック ---
    let needed = layout.slot_defs.len() + 1;
    if state.draw_pile.len() < needed {
        return Err(ConfigError::DeckTooSmall {
            deck_size: state.draw_pile.len(),
            slots: layout.slot_defs.len(),
        });
    }

    // --- 2. スロットへ配る ---
    debug!("⏳ 鉱山にカードを配るよ ({} スロット)", layout.slot_defs.len());
    for slot in &layout.slot_defs {
        // 枚数は上でチェック済みだから、ここで尽きることはないはず！
        let id = pile_view::draw(state).expect("山札にカードが足りません！(鉱山配置中)");

        let card = state.card_mut(id);
        card.state = CardState::Tableau;
        card.face_up = slot.face_up;
        card.slot_id = Some(slot.id);
        state.tableau.push(id);

        events.push(EngineEvent::CardMoved {
            card: id,
            state: CardState::Tableau,
            position: layout.slot_position(slot),
            face_up: slot.face_up,
            layer_name: slot.layer_name.clone(),
            sort_order: slot.layer_id,
        });
    }
    debug!("✅ 鉱山への配置完了！ ({} 枚)", state.tableau.len());

    // --- 3. 覆い関係の解決 ---
    // スロットIDの付け替えは終わってるから、ここからは鉱山を検索するだけ。
    // 借用規則対策で、先に (カード, 覆いリスト) のペアを全部作ってから書き込むよ。
    let mut resolved: Vec<(CardId, Vec<CardId>)> = Vec::with_capacity(layout.slot_defs.len());
    for slot in &layout.slot_defs {
        let card_id = find_card_by_slot_id(state, slot.id)
            .expect("配ったばかりのスロットにカードがいません！");

        let mut covers = Vec::with_capacity(slot.hidden_by.len());
        for &hid in &slot.hidden_by {
            let cover_id = find_card_by_slot_id(state, hid).ok_or(
                // レイアウト検証をすり抜けた未知IDはここで止める。配り直しは無し！
                ConfigError::UnknownHiddenBy {
                    slot: slot.id,
                    unknown: hid,
                },
            )?;
            covers.push(cover_id);
        }
        resolved.push((card_id, covers));
    }
    for (card_id, covers) in resolved {
        state.card_mut(card_id).covered_by = covers;
    }

    // --- 4. 最初のターゲット ---
    let first_target = pile_view::draw(state).expect("山札にカードが足りません！(初期ターゲット)");
    pile_view::move_to_target(layout, state, first_target, events);

    // --- 5. 山札の見た目ヒント ---
    pile_view::update_draw_pile_view(layout, state, events);

    debug!(
        "🎉 配り完了！ 鉱山 {} 枚 / 山札 {} 枚 / ターゲット {:?}",
        state.tableau.len(),
        state.draw_pile.len(),
        state.target
    );
    Ok(())
}

/// スロットIDを占有してる鉱山カードを探すよ。
/// 鉱山は小さいから線形探索で十分！
fn find_card_by_slot_id(state: &GameState, slot_id: SlotId) -> Option<CardId> {
    state
        .tableau
        .iter()
        .copied()
        .find(|&id| state.card(id).slot_id == Some(slot_id))
}
