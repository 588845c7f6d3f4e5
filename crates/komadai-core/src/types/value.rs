//! 評価値（Value）
//!
//! 駒割りの最大値より十分大きい `Value::MATE` 付近を詰みスコアとして予約している。
//! 通常の評価値は [-MATE_IN_MAX_PLY, MATE_IN_MAX_PLY] の範囲に収まる。

use serde::Serialize;

/// 評価値
///
/// 常に探索する側（エンジンの手番）から見た値。正ならエンジン有利。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 詰み（勝ち側の最大スコア）
    ///
    /// 盤上と持ち駒の全駒を片側が持っても届かない大きさ。
    pub const MATE: Value = Value(100_000);
    /// 無限大
    pub const INFINITE: Value = Value(100_001);

    /// 探索の最大手数
    pub const MAX_PLY: i32 = 64;

    /// 最大探索深度内での詰みスコア
    pub const MATE_IN_MAX_PLY: Value = Value(Self::MATE.0 - Self::MAX_PLY);
    /// 最大探索深度内での詰まされスコア
    pub const MATED_IN_MAX_PLY: Value = Value(-Self::MATE_IN_MAX_PLY.0);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// ply手で詰ますスコア
    #[inline]
    pub const fn mate_in(ply: i32) -> Value {
        Value(Self::MATE.0 - ply)
    }

    /// ply手で詰まされるスコア
    #[inline]
    pub const fn mated_in(ply: i32) -> Value {
        Value(-Self::MATE.0 + ply)
    }

    /// 勝ちスコアかどうか
    #[inline]
    pub const fn is_win(self) -> bool {
        self.0 >= Self::MATE_IN_MAX_PLY.0
    }

    /// 負けスコアかどうか
    #[inline]
    pub const fn is_loss(self) -> bool {
        self.0 <= Self::MATED_IN_MAX_PLY.0
    }

    /// 詰みスコア（勝ちまたは負け）かどうか
    #[inline]
    pub const fn is_mate_score(self) -> bool {
        self.is_win() || self.is_loss()
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_win() {
            write!(f, "mate +{}", Self::MATE.0 - self.0)
        } else if self.is_loss() {
            write!(f, "mate -{}", self.0 + Self::MATE.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
