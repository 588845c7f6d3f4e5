//! 駒の利きの幾何
//!
//! 差分はすべて Player から見た向きで定義する（前 = 段が減る方向）。
//! Enemy の駒は列・段の差分をともに反転して同じ表を引く。
//! 経路上の駒による遮断はここでは扱わない（[`path_clear`] を別途使う）。

use crate::snapshot::Snapshot;
use crate::types::{Piece, PieceType, Side, Square};

/// (列の差分, 段の差分)
pub type Offset = (i8, i8);

const FORWARD_LEFT: Offset = (-1, -1);
const FORWARD: Offset = (0, -1);
const FORWARD_RIGHT: Offset = (1, -1);
const LEFT: Offset = (-1, 0);
const RIGHT: Offset = (1, 0);
const BACK_LEFT: Offset = (-1, 1);
const BACK: Offset = (0, 1);
const BACK_RIGHT: Offset = (1, 1);

const KING_STEPS: [Offset; 8] = [
    FORWARD_LEFT,
    FORWARD,
    FORWARD_RIGHT,
    LEFT,
    RIGHT,
    BACK_LEFT,
    BACK,
    BACK_RIGHT,
];
const GOLD_STEPS: [Offset; 6] = [FORWARD_LEFT, FORWARD, FORWARD_RIGHT, LEFT, RIGHT, BACK];
const SILVER_STEPS: [Offset; 5] = [FORWARD_LEFT, FORWARD, FORWARD_RIGHT, BACK_LEFT, BACK_RIGHT];
const KNIGHT_STEPS: [Offset; 2] = [(-1, -2), (1, -2)];
const PAWN_STEPS: [Offset; 1] = [FORWARD];

const ORTHOGONAL: [Offset; 4] = [FORWARD, LEFT, RIGHT, BACK];
const DIAGONAL: [Offset; 4] = [FORWARD_LEFT, FORWARD_RIGHT, BACK_LEFT, BACK_RIGHT];
const LANCE_RAY: [Offset; 1] = [FORWARD];

/// 1 マスだけ動く差分
///
/// 竜・馬は走りで覆われない方向のみを返す（飛び利きとの重複はない）。
pub const fn step_offsets(piece_type: PieceType, promoted: bool) -> &'static [Offset] {
    match (piece_type, promoted) {
        (PieceType::King, _) => &KING_STEPS,
        (PieceType::Gold, _) => &GOLD_STEPS,
        (PieceType::Silver | PieceType::Knight | PieceType::Lance | PieceType::Pawn, true) => {
            &GOLD_STEPS
        }
        (PieceType::Silver, false) => &SILVER_STEPS,
        (PieceType::Knight, false) => &KNIGHT_STEPS,
        (PieceType::Pawn, false) => &PAWN_STEPS,
        (PieceType::Rook, true) => &DIAGONAL,
        (PieceType::Bishop, true) => &ORTHOGONAL,
        (PieceType::Rook | PieceType::Bishop | PieceType::Lance, false) => &[],
    }
}

/// 走り駒の方向
pub const fn ray_directions(piece_type: PieceType, promoted: bool) -> &'static [Offset] {
    match (piece_type, promoted) {
        (PieceType::Rook, _) => &ORTHOGONAL,
        (PieceType::Bishop, _) => &DIAGONAL,
        (PieceType::Lance, false) => &LANCE_RAY,
        _ => &[],
    }
}

/// 手番の向きに合わせた差分
#[inline]
pub const fn orient(offset: Offset, side: Side) -> Offset {
    match side {
        Side::Player => offset,
        Side::Enemy => (-offset.0, -offset.1),
    }
}

/// 駒の動きとして `from` → `to` があり得るか（経路の遮断は見ない）
pub fn can_move_geometry(piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let mut dx = to.col() as i32 - from.col() as i32;
    let mut dy = to.row() as i32 - from.row() as i32;
    if piece.side == Side::Enemy {
        dx = -dx;
        dy = -dy;
    }

    ray_directions(piece.piece_type, piece.promoted)
        .iter()
        .any(|&(rx, ry)| on_ray(dx, dy, rx as i32, ry as i32))
        || step_offsets(piece.piece_type, piece.promoted)
            .iter()
            .any(|&(sx, sy)| sx as i32 == dx && sy as i32 == dy)
}

/// (dx, dy) が方向 (rx, ry) の正の倍数か
#[inline]
fn on_ray(dx: i32, dy: i32, rx: i32, ry: i32) -> bool {
    let n = dx.abs().max(dy.abs());
    n > 0 && dx == rx * n && dy == ry * n
}

/// `from` と `to` の間（両端を除く）に駒がないか
///
/// 一直線上にない組（桂の跳び）では常に true。
pub fn path_clear(pos: &Snapshot, from: Square, to: Square) -> bool {
    let dx = to.col() as i32 - from.col() as i32;
    let dy = to.row() as i32 - from.row() as i32;
    let steps = dx.abs().max(dy.abs());
    if steps <= 1 || (dx != 0 && dy != 0 && dx.abs() != dy.abs()) {
        return true;
    }
    let (sx, sy) = (dx.signum(), dy.signum());
    (1..steps).all(|i| {
        pos.piece_at(from.col() as i32 + sx * i, from.row() as i32 + sy * i)
            .is_none()
    })
}

/// 手番から見た段（0 が相手陣の一番奥）
#[inline]
pub const fn relative_row(side: Side, row: u8) -> u8 {
    match side {
        Side::Player => row,
        Side::Enemy => (Square::ROWS as u8 - 1).saturating_sub(row),
    }
}

/// 行き所のない升目か（歩・香は最奥段、桂は奥 2 段）
#[inline]
pub const fn is_dead_end(piece_type: PieceType, side: Side, row: u8) -> bool {
    let rel = relative_row(side, row);
    match piece_type {
        PieceType::Pawn | PieceType::Lance => rel == 0,
        PieceType::Knight => rel <= 1,
        _ => false,
    }
}

/// 敵陣（成れる 3 段）か
#[inline]
pub const fn in_promotion_zone(side: Side, row: u8) -> bool {
    relative_row(side, row) <= 2
}

/// 二歩になるか（同じ列に自分の生の歩がある）
pub fn is_double_pawn(pos: &Snapshot, side: Side, col: u8) -> bool {
    (0..Square::ROWS as i32).any(|row| {
        pos.piece_at(col as i32, row).is_some_and(|p| {
            p.side == side && p.piece_type == PieceType::Pawn && !p.promoted
        })
    })
}
