//! 設定ファイル（TOML）とコマンドライン引数の合成

use std::path::Path;

use anyhow::{Context, Result};
use komadai_core::{SearchConfig, Side};
use serde::Deserialize;

/// 設定ファイルの内容
///
/// ```toml
/// side = "enemy"
///
/// [search]
/// time_budget_ms = 500
/// max_depth = 6
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// エンジンの手番
    pub side: Option<Side>,
    /// 探索設定
    pub search: SearchConfig,
}

/// コマンドラインからの上書き
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub side: Option<Side>,
    pub time_ms: Option<u64>,
    pub max_depth: Option<u32>,
}

impl Settings {
    /// ファイルから読み込む（None なら既定値）
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let settings: Settings =
            toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?;
        log::debug!("loaded config from {}: {settings:?}", path.display());
        Ok(settings)
    }

    /// 引数で上書きし、探索設定を検査する
    pub fn resolve(mut self, overrides: Overrides) -> Result<(Side, SearchConfig)> {
        if let Some(ms) = overrides.time_ms {
            self.search.time_budget_ms = ms;
        }
        if let Some(depth) = overrides.max_depth {
            self.search.max_depth = depth;
        }
        self.search.validate().context("invalid search settings")?;
        let side = overrides.side.or(self.side).unwrap_or(Side::Player);
        Ok((side, self.search))
    }
}
