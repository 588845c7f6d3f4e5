//! 探索
//!
//! 反復深化アルファベータ探索と、評価値から勝率への変換。

mod alpha_beta;
mod config;

pub use alpha_beta::{Aborted, Searcher};
pub use config::{MAX_SEARCH_DEPTH, SearchConfig};

use std::time::Duration;

use serde::Serialize;

use crate::snapshot::Snapshot;
use crate::types::{Move, Side, Value};

/// 探索結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// 最善手
    pub best_move: Move,
    /// エンジン側から見た評価値
    pub score: Value,
    /// エンジン側の勝率（0-1）
    pub win_probability: f64,
    /// 完了した深さ（0 は深さ 1 も終わらなかったことを表す）
    pub depth: u32,
    /// 探索ノード数
    pub nodes: u64,
}

/// 探索の結論
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SearchOutcome {
    /// 指す
    Move(SearchResult),
    /// 合法手がないので投了
    Resign,
}

impl SearchOutcome {
    /// 指す手（投了なら None）
    pub fn best_move(&self) -> Option<Move> {
        match self {
            SearchOutcome::Move(result) => Some(result.best_move),
            SearchOutcome::Resign => None,
        }
    }

    #[inline]
    pub fn is_resign(&self) -> bool {
        matches!(self, SearchOutcome::Resign)
    }
}

/// 評価値を勝率に変換する
///
/// `1 / (1 + 10^(-score / scale))`。0 で 0.5、評価値について狭義単調増加。
pub fn win_probability(score: Value, scale: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf(-(score.raw() as f64) / scale))
}

/// 既定の設定で思考時間だけを指定して探索する
pub fn search_best_move(pos: &Snapshot, side: Side, time_budget: Duration) -> SearchOutcome {
    let config = SearchConfig::default().with_time_budget(time_budget);
    Searcher::new(config).search(pos, side)
}
