// src/config/layout.rs
//! 鉱山 (Tableau) のレイアウト定義だよ！
//! スロットの座標、配った時に表向きにするかのフラグ、覆い関係 (hidden_by)、
//! それと山札・捨て札の置き場メタデータをまとめて持つ。
//! 外部のJSONから読み込んで、プレイ開始前に検証まで済ませる！

use std::collections::HashSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::components::position::Position;
use crate::error::ConfigError;

/// レイアウトスロットの識別子。JSON の `id` フィールドそのまま。
pub type SlotId = u32;

// --- ソート順ヒントの定数 ---
// エンジンが描画側に渡す相対的な重なり順。数字そのものに意味はなくて、
// 「ターゲットが一番手前」「捨て札は新しいほど手前」「山札は奥ほど手前」が守られればOK。
pub const TARGET_SORT_ORDER: i32 = 0; // ターゲットの重なり順
pub const DISCARD_SORT_BASE: i32 = -100; // 捨て札の基準。積むたびに +1 していく
pub const DRAW_PILE_SORT_STEP: i32 = -10; // 山札は i 枚目を -10*i に置く

/// (x, y) のペア。倍率とかスタッガー（ずらし幅）に使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// スロット1個分の定義だよ。レイアウトJSONの1エントリに対応する。
///
/// - `id`: スロットの識別子。レイアウト内で一意！
/// - `x`, `y`: 論理座標。実座標は Layout の multiplier を掛けて求める。
/// - `layer_id`: 奥行きのヒント。エンジンは順序としてしか使わない。
/// - `layer_name`: 描画側のソートレイヤー名。エンジンは素通しするだけ。
/// - `face_up`: 配った瞬間に表向きにするかどうか。
/// - `hidden_by`: このスロットのカードを隠すスロットのIDたち。
///   ここに挙がったスロットのカードが全部鉱山からはけるまで、このカードは裏のまま！
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotDef {
    pub id: SlotId,
    pub x: f32,
    pub y: f32,
    pub layer_id: i32,
    pub layer_name: String,
    #[serde(default)]
    pub face_up: bool,
    #[serde(default)]
    pub hidden_by: Vec<SlotId>,
}

/// 山札・捨て札の置き場メタデータだよ。
///
/// `stagger` は山札のカードを1枚ずつずらして置くための幅。
/// 捨て札側は全部同じ位置に積むから、普通は (0, 0) にしておく。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PileDef {
    pub x: f32,
    pub y: f32,
    pub layer_id: i32,
    pub layer_name: String,
    #[serde(default = "PileDef::no_stagger")]
    pub stagger: Vec2,
}

impl PileDef {
    fn no_stagger() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }
}

/// レイアウト定義の全体だよ。
///
/// - `multiplier`: 論理座標 → 実座標の倍率。
/// - `slot_defs`: スロットの並び。この順番がそのまま配る順番になる！
/// - `draw_pile` / `discard_pile`: 山札と捨て札の置き場。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub multiplier: Vec2,
    pub slot_defs: Vec<SlotDef>,
    pub draw_pile: PileDef,
    pub discard_pile: PileDef,
}

impl Layout {
    /// レイアウトJSONを読み込んで検証するよ。
    ///
    /// 壊れたレイアウトでゲームを始めるわけにはいかないから、
    /// ここで引っかかったら即 `ConfigError` で返す。リカバリーは無し！
    pub fn parse(raw: &str) -> Result<Layout, ConfigError> {
        let layout: Layout = serde_json::from_str(raw)?;
        layout.validate()?;
        Ok(layout)
    }

    /// 構造の検証だよ。チェックするのはこの3つ！
    /// 1. スロットIDが一意であること
    /// 2. hidden_by が全部、定義済みのスロットIDを指していること
    /// 3. hidden_by が自分自身を指していないこと
    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashSet<SlotId> = HashSet::with_capacity(self.slot_defs.len());
        for slot in &self.slot_defs {
            if !seen.insert(slot.id) {
                warn!("レイアウト検証NG: スロットID {} が重複", slot.id);
                return Err(ConfigError::DuplicateSlotId(slot.id));
            }
        }

        for slot in &self.slot_defs {
            for &hid in &slot.hidden_by {
                if hid == slot.id {
                    warn!("レイアウト検証NG: スロット {} が自己参照", slot.id);
                    return Err(ConfigError::SelfHiddenBy(slot.id));
                }
                if !seen.contains(&hid) {
                    warn!("レイアウト検証NG: スロット {} の hidden_by {} が未知", slot.id, hid);
                    return Err(ConfigError::UnknownHiddenBy {
                        slot: slot.id,
                        unknown: hid,
                    });
                }
            }
        }
        Ok(())
    }

    /// スロットの実座標を求めるよ。multiplier を掛けるだけ！
    pub fn slot_position(&self, slot: &SlotDef) -> Position {
        Position::new(self.multiplier.x * slot.x, self.multiplier.y * slot.y)
    }

    /// 置き場 (山札/捨て札) の実座標を求めるよ。
    /// `index` は山の中で何枚目か。stagger ぶんずらして返す！
    pub fn pile_position(&self, pile: &PileDef, index: usize) -> Position {
        let i = index as f32;
        Position::new(
            self.multiplier.x * pile.x + i * pile.stagger.x,
            self.multiplier.y * pile.y + i * pile.stagger.y,
        )
    }
}
