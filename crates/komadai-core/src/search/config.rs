//! 探索設定

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 反復深化の深さの上限
pub const MAX_SEARCH_DEPTH: u32 = 10;

/// 勝率変換の既定スケール（600 点で 10:1）
pub const DEFAULT_WIN_RATE_SCALE: f64 = 600.0;

/// 探索設定
///
/// TOML などから読み込む場合、省略したフィールドは既定値になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// 思考時間（ミリ秒）
    pub time_budget_ms: u64,
    /// 最大深さ（1..=10）
    pub max_depth: u32,
    /// 評価値を勝率に変換するときのスケール
    pub win_rate_scale: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            time_budget_ms: 1000,
            max_depth: MAX_SEARCH_DEPTH,
            win_rate_scale: DEFAULT_WIN_RATE_SCALE,
        }
    }
}

impl SearchConfig {
    /// 思考時間
    #[inline]
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    /// 思考時間を差し替えた設定
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget_ms = u64::try_from(budget.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// 範囲外の値を検出する
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SEARCH_DEPTH).contains(&self.max_depth) {
            return Err(ConfigError::MaxDepthOutOfRange {
                actual: self.max_depth,
                max: MAX_SEARCH_DEPTH,
            });
        }
        if !(self.win_rate_scale.is_finite() && self.win_rate_scale > 0.0) {
            return Err(ConfigError::InvalidWinRateScale(self.win_rate_scale));
        }
        Ok(())
    }

    /// 深さを 1..=上限 に丸めた値
    #[inline]
    pub(crate) fn effective_max_depth(&self) -> u32 {
        self.max_depth.clamp(1, MAX_SEARCH_DEPTH)
    }

    /// 勝率変換のスケール（正の有限値でなければ既定値）
    #[inline]
    pub(crate) fn effective_win_rate_scale(&self) -> f64 {
        if self.win_rate_scale.is_finite() && self.win_rate_scale > 0.0 {
            self.win_rate_scale
        } else {
            DEFAULT_WIN_RATE_SCALE
        }
    }
}
