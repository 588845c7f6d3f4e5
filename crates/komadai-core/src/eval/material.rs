//! 駒割り評価
//!
//! 盤上の駒と持ち駒の価値を合計する。持ち駒は生駒の価値で数える。

use crate::snapshot::Snapshot;
use crate::types::{PieceType, Side, Value};

/// 生駒の価値（PieceType の添字順）
pub const PIECE_VALUES: [i32; PieceType::NUM] = [
    10_000, // King
    1100,   // Rook
    950,    // Bishop
    600,    // Gold
    550,    // Silver
    450,    // Knight
    350,    // Lance
    100,    // Pawn
];

/// 成駒の価値（成れない駒種は生駒と同じ）
pub const PROMOTED_PIECE_VALUES: [i32; PieceType::NUM] = [
    10_000, // King
    1500,   // Dragon
    1300,   // Horse
    600,    // Gold
    600,    // +Silver
    600,    // +Knight
    600,    // +Lance
    600,    // +Pawn
];

/// 駒の価値
#[inline]
pub const fn piece_value(piece_type: PieceType, promoted: bool) -> i32 {
    if promoted && piece_type.can_promote() {
        PROMOTED_PIECE_VALUES[piece_type.index()]
    } else {
        PIECE_VALUES[piece_type.index()]
    }
}

/// `side` から見た駒割り（正なら `side` の駒得）
pub fn evaluate_material(pos: &Snapshot, side: Side) -> Value {
    let mut score = 0i32;

    for (_, piece) in pos.pieces() {
        let v = piece_value(piece.piece_type, piece.promoted);
        if piece.side == side {
            score += v;
        } else {
            score -= v;
        }
    }

    for pt in PieceType::HAND_PIECES {
        let ours = pos.hand_count(side, pt) as i32;
        let theirs = pos.hand_count(side.opponent(), pt) as i32;
        score += PIECE_VALUES[pt.index()] * (ours - theirs);
    }

    Value::new(score)
}
