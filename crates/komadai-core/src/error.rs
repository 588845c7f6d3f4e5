//! エラー型
//!
//! 局面照会そのものは決して失敗しない（不正な入力は安全側の既定値に落とす）。
//! ここで定義するのは、呼び出し側が明示的に検査したいときの診断用エラーのみ。

use crate::types::Side;

/// 局面スナップショットの整合性エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// 同じ手番の玉が2枚以上ある
    #[error("{0} has more than one king on the board")]
    MultipleKings(Side),

    /// 玉がない（王手判定は常に false、探索は投了扱いになり得る）
    #[error("{0} has no king on the board")]
    MissingKing(Side),
}

/// 探索設定のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 最大深さが 1..=上限 の範囲外
    #[error("max_depth must be in 1..={max}, got {actual}")]
    MaxDepthOutOfRange { actual: u32, max: u32 },

    /// 勝率変換のスケールが正の有限値でない
    #[error("win_rate_scale must be a positive finite number, got {0}")]
    InvalidWinRateScale(f64),
}
