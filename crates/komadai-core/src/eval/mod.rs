//! 静的評価

mod material;

pub use material::{PIECE_VALUES, PROMOTED_PIECE_VALUES, evaluate_material, piece_value};

use crate::snapshot::Snapshot;
use crate::types::{Side, Value};

/// 局面評価の trait
///
/// - `side` から見た評価値を返す（正なら `side` 有利）
/// - `side` を入れ替えると符号が反転すること
/// - 詰みスコアの範囲（`Value::MATE_IN_MAX_PLY` 以上）に入ってはならない
pub trait Evaluator {
    fn evaluate(&self, pos: &Snapshot, side: Side) -> Value;
}

/// 駒割りのみの評価
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    #[inline]
    fn evaluate(&self, pos: &Snapshot, side: Side) -> Value {
        evaluate_material(pos, side)
    }
}

impl<T: Evaluator + ?Sized> Evaluator for &T {
    #[inline]
    fn evaluate(&self, pos: &Snapshot, side: Side) -> Value {
        (**self).evaluate(pos, side)
    }
}
