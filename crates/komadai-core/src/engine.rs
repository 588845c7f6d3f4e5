//! 対局用のエンジン
//!
//! ホストは手番が来るたびに `update_state` で局面を渡し、`search_best_move` で指し手を受け取る。

use crate::host::{HostState, load_snapshot};
use crate::search::{SearchConfig, SearchOutcome, Searcher};
use crate::snapshot::Snapshot;
use crate::types::Side;

/// エンジン
pub struct Engine {
    /// エンジンが持つ手番
    side: Side,
    /// 直近に読み込んだ局面
    state: Snapshot,
    config: SearchConfig,
    last_outcome: Option<SearchOutcome>,
}

impl Engine {
    /// 既定の設定で生成
    pub fn new(side: Side) -> Self {
        Self::with_config(side, SearchConfig::default())
    }

    /// 探索設定を指定して生成
    pub fn with_config(side: Side, config: SearchConfig) -> Self {
        Engine {
            side,
            state: Snapshot::empty(),
            config,
            last_outcome: None,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// 手番を「Enemy かどうか」で設定
    #[inline]
    pub fn set_is_enemy_side(&mut self, is_enemy: bool) {
        self.side = Side::from_is_enemy(is_enemy);
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 直近に読み込んだ局面
    #[inline]
    pub fn state(&self) -> &Snapshot {
        &self.state
    }

    /// ホストの局面を読み込み、以前の局面を置き換える
    pub fn update_state(&mut self, host: &HostState) {
        self.state = load_snapshot(host);
    }

    /// 読み込んだ局面でエンジン側の最善手を探す
    ///
    /// 局面を一度も読み込んでいなければ空の盤面を探索するため投了になる。
    pub fn search_best_move(&mut self) -> SearchOutcome {
        let outcome = Searcher::new(self.config.clone()).search(&self.state, self.side);
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// 直前の探索結果（まだ探索していなければ None）
    #[inline]
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }
}
