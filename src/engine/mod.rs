// src/engine/mod.rs
//! プロスペクターのルールエンジン本体だよ！
//! レイアウト定義とシャッフル済みデッキを受け取って配りを済ませ、
//! あとはクリックイベントを受けてはセッション状態を進めていく。
//! 描画側にはイベント通知 (protocol::EngineEvent) を返すだけで、
//! シーングラフには指一本触れない方針！

mod click_handler;
mod game_state;
mod init_handler;
mod pile_view;


pub use game_state::GameState;

use log::info;

use crate::components::card::Card;
use crate::components::tableau_card::CardId;
use crate::config::layout::Layout;
use crate::error::ConfigError;
use crate::protocol::EngineEvent;

/// 1セッションぶんのルールエンジンだよ。
///
/// グローバルなシングルトンは無し！セッションごとに `new` で作って、
/// 入力ルーターと描画側が同じインスタンスを参照する設計。
/// 変更するのはクリックハンドラーだけだから、ロックも要らない！
pub struct GameEngine {
    layout: Layout,
    state: GameState,
}

impl GameEngine {
    /// レイアウトとシャッフル済みカード列からエンジンを作って、初期配置まで済ませるよ。
    ///
    /// 戻り値は (エンジン, 配りで起きた通知の列)。通知を描画側に流せば
    /// 初期画面がそのまま組み立てられる！
    /// レイアウトとデッキが噛み合ってなければ `ConfigError` で、セッションは始まらない。
    pub fn new(layout: Layout, cards: Vec<Card>) -> Result<(Self, Vec<EngineEvent>), ConfigError> {
        info!("GameEngine: 初期化開始 (スロット {} 個)", layout.slot_defs.len());
        let mut state = GameState::new(cards);
        let mut events = Vec::new();
        init_handler::deal(&layout, &mut state, &mut events)?;
        info!("GameEngine: 初期化完了");
        Ok((Self { layout, state }, events))
    }

    /// カードがクリックされた時の入り口だよ。入力ルーターがここを呼ぶ！
    ///
    /// クリック1回ぶんの検証・状態変更・表裏再計算を全部終わらせてから、
    /// 起きたことを通知リストで返す。無効な手なら状態はそのままで
    /// `InvalidMove` が返るだけ！
    pub fn on_card_clicked(&mut self, id: CardId) -> Vec<EngineEvent> {
        click_handler::handle_card_clicked(&self.layout, &mut self.state, id)
    }

    /// 山札の置き場そのものがクリックされた時の入り口だよ。
    ///
    /// 山札にカードが残ってればカードクリックと同じで次の1枚を引く。
    /// 空っぽなら `DrawPileExhausted` 通知だけ返して、状態は何も変えない！
    pub fn on_draw_pile_clicked(&mut self) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        click_handler::draw_next_target(&self.layout, &mut self.state, &mut events);
        events
    }

    /// セッション状態の読み取り用参照だよ。描画側やテストが覗く用！
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// レイアウト定義の参照だよ。
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}
