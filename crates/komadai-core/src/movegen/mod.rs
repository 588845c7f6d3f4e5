//! 指し手生成
//!
//! - 疑似合法手: 駒の動き・経路の遮断・移動先の自駒・成り・打ち駒の制限を満たす手
//! - 合法手: 疑似合法手のうち、指した後に自玉が王手されていない手
//!
//! 生成順は局面が同じなら常に同じ。盤上の駒をインデックス順に、各駒は
//! 差分表の順に（不成を先、成を後に）、最後に打つ手を駒種順・升目順に並べる。

mod ordering;

pub use ordering::order_moves;

use crate::rules::{Placement, geometry, safe_after};
use crate::snapshot::Snapshot;
use crate::types::{Move, Piece, PieceType, Side, Square};

/// 指し手のリスト
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// 空のリスト
    pub fn new() -> Self {
        // 将棋の合法手は平均 80 前後
        MoveList {
            moves: Vec::with_capacity(128),
        }
    }

    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves
    }

    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }

    /// 条件を満たす手だけを残す
    #[inline]
    pub fn retain(&mut self, f: impl FnMut(&Move) -> bool) {
        self.moves.retain(f);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// 疑似合法手をすべて生成する
pub fn generate_pseudo_legal(pos: &Snapshot, side: Side) -> MoveList {
    let mut list = MoveList::new();
    for (from, piece) in pos.pieces_of(side) {
        generate_from(pos, from, piece, &mut list);
    }
    for pt in PieceType::HAND_PIECES {
        generate_drops(pos, side, pt, &mut list);
    }
    list
}

/// 合法手をすべて生成する
pub fn generate_legal(pos: &Snapshot, side: Side) -> MoveList {
    let mut list = generate_pseudo_legal(pos, side);
    list.retain(|&mv| is_safe(pos, mv, side));
    list
}

/// 指定の升目の駒の合法手（空きマスなら空）
pub fn legal_moves_from(pos: &Snapshot, from: Square) -> MoveList {
    let mut list = MoveList::new();
    if let Some(piece) = pos.piece_on(from) {
        generate_from(pos, from, piece, &mut list);
        list.retain(|&mv| is_safe(pos, mv, piece.side));
    }
    list
}

/// 指定の駒種を打つ合法手（持ち駒がなければ空）
pub fn legal_drops(pos: &Snapshot, side: Side, piece_type: PieceType) -> MoveList {
    let mut list = MoveList::new();
    generate_drops(pos, side, piece_type, &mut list);
    list.retain(|&mv| is_safe(pos, mv, side));
    list
}

/// 指した後に自玉が王手されていないか
#[inline]
pub fn is_safe(pos: &Snapshot, mv: Move, side: Side) -> bool {
    Placement::from_move(pos, mv, side).is_some_and(|p| safe_after(pos, p, side))
}

/// 盤上の駒を `from` → `to` へ動かせるか（自玉の安全は見ない）
pub fn is_pseudo_legal_board_move(pos: &Snapshot, from: Square, to: Square) -> bool {
    let Some(piece) = pos.piece_on(from) else {
        return false;
    };
    if pos.piece_on(to).is_some_and(|t| t.side == piece.side) {
        return false;
    }
    if !geometry::can_move_geometry(piece, from, to) {
        return false;
    }
    piece.piece_type == PieceType::Knight || geometry::path_clear(pos, from, to)
}

/// 持ち駒を `to` に打てるか（自玉の安全は見ない）
pub fn is_pseudo_legal_drop(pos: &Snapshot, piece_type: PieceType, side: Side, to: Square) -> bool {
    piece_type.is_hand_piece()
        && pos.hand_count(side, piece_type) > 0
        && pos.is_empty(to)
        && !geometry::is_dead_end(piece_type, side, to.row())
        && !(piece_type == PieceType::Pawn && geometry::is_double_pawn(pos, side, to.col()))
}

/// 盤上の 1 駒の疑似合法手
fn generate_from(pos: &Snapshot, from: Square, piece: Piece, list: &mut MoveList) {
    let side = piece.side;

    for &offset in geometry::step_offsets(piece.piece_type, piece.promoted) {
        let (dc, dr) = geometry::orient(offset, side);
        let Some(to) = from.offset(dc, dr) else {
            continue;
        };
        match pos.piece_on(to) {
            Some(target) if target.side == side => {}
            target => push_with_promotion(list, piece, from, to, target.is_some()),
        }
    }

    for &dir in geometry::ray_directions(piece.piece_type, piece.promoted) {
        let (dc, dr) = geometry::orient(dir, side);
        let mut cur = from;
        while let Some(to) = cur.offset(dc, dr) {
            match pos.piece_on(to) {
                None => push_with_promotion(list, piece, from, to, false),
                Some(target) => {
                    if target.side != side {
                        push_with_promotion(list, piece, from, to, true);
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}

/// 成り・不成を展開して追加する
///
/// 成れる駒が敵陣に入る・敵陣から出る・敵陣内で動く場合は成る手を加える。
/// 行き所のない升目への不成は生成しない。
fn push_with_promotion(list: &mut MoveList, piece: Piece, from: Square, to: Square, capture: bool) {
    let side = piece.side;
    let can_promote = piece.piece_type.can_promote()
        && !piece.promoted
        && (geometry::in_promotion_zone(side, from.row())
            || geometry::in_promotion_zone(side, to.row()));
    let must_promote = can_promote && geometry::is_dead_end(piece.piece_type, side, to.row());

    if !must_promote {
        list.push(Move::normal(from, to, piece.piece_type, false, capture));
    }
    if can_promote {
        list.push(Move::normal(from, to, piece.piece_type, true, capture));
    }
}

/// 1 駒種の打つ手（升目のインデックス順）
fn generate_drops(pos: &Snapshot, side: Side, piece_type: PieceType, list: &mut MoveList) {
    if !piece_type.is_hand_piece() || pos.hand_count(side, piece_type) == 0 {
        return;
    }
    for to in Square::all() {
        if is_pseudo_legal_drop(pos, piece_type, side, to) {
            list.push(Move::drop(piece_type, to));
        }
    }
}
