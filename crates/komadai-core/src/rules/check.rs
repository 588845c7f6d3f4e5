//! 王手判定
//!
//! 利きは毎回盤面を走査して求める（利きテーブルは持たない）。

use crate::snapshot::Snapshot;
use crate::types::{Move, Piece, PieceType, Side, Square};

use super::geometry::{can_move_geometry, path_clear};

/// 玉の位置（インデックス順で最初に見つかったもの）
pub fn king_position(pos: &Snapshot, side: Side) -> Option<Square> {
    pos.pieces_of(side)
        .find(|(_, p)| p.piece_type == PieceType::King)
        .map(|(sq, _)| sq)
}

/// `from` の駒が `to` に利いているか
///
/// 幾何・経路の遮断・移動先の自駒を考慮する。桂は経路を見ない。
/// `from` が空きマスなら false。
pub fn attacks(pos: &Snapshot, from: Square, to: Square) -> bool {
    let Some(piece) = pos.piece_on(from) else {
        return false;
    };
    if pos.piece_on(to).is_some_and(|t| t.side == piece.side) {
        return false;
    }
    if !can_move_geometry(piece, from, to) {
        return false;
    }
    piece.piece_type == PieceType::Knight || path_clear(pos, from, to)
}

/// `side` の玉に相手の駒が利いているか（玉がなければ false）
pub fn in_check(pos: &Snapshot, side: Side) -> bool {
    let Some(king) = king_position(pos, side) else {
        return false;
    };
    pos.pieces_of(side.opponent())
        .any(|(from, _)| attacks(pos, from, king))
}

/// 仮想的な駒の配置
///
/// `from` の駒を取り除き、`to` に `piece` を置く。打つ手では `from` が None。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub from: Option<Square>,
    pub to: Square,
    pub piece: Piece,
}

impl Placement {
    /// 指し手から配置を作る（移動元が空なら None）
    pub fn from_move(pos: &Snapshot, mv: Move, side: Side) -> Option<Placement> {
        let piece = match mv.from() {
            None => Piece::new(mv.piece_type(), side),
            Some(from) => {
                let moving = pos.piece_on(from)?;
                if mv.is_promotion() { moving.promote() } else { moving }
            }
        };
        Some(Placement {
            from: mv.from(),
            to: mv.to(),
            piece,
        })
    }
}

/// 配置後に `side` の玉が王手されていないか
pub fn safe_after(pos: &Snapshot, placement: Placement, side: Side) -> bool {
    let mut next = pos.clone();
    if let Some(from) = placement.from {
        next.remove_piece(from);
    }
    next.put_piece(placement.to, placement.piece);
    !in_check(&next, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(col: i32, row: i32) -> Square {
        Square::new(col, row).unwrap()
    }

    fn put(pos: &mut Snapshot, col: i32, row: i32, pt: PieceType, side: Side) {
        pos.put_piece(sq(col, row), Piece::new(pt, side));
    }

    #[test]
    fn test_no_king_is_never_in_check() {
        let mut pos = Snapshot::empty();
        put(&mut pos, 4, 4, PieceType::Rook, Side::Enemy);
        assert!(!in_check(&pos, Side::Player));
        assert_eq!(king_position(&pos, Side::Player), None);
    }

    #[test]
    fn test_rook_check_and_block() {
        let mut pos = Snapshot::empty();
        put(&mut pos, 4, 8, PieceType::King, Side::Player);
        put(&mut pos, 4, 0, PieceType::Rook, Side::Enemy);
        assert!(in_check(&pos, Side::Player));

        put(&mut pos, 4, 5, PieceType::Gold, Side::Player);
        assert!(!in_check(&pos, Side::Player));
    }

    #[test]
    fn test_knight_check_jumps() {
        let mut pos = Snapshot::empty();
        put(&mut pos, 4, 8, PieceType::King, Side::Player);
        put(&mut pos, 4, 6, PieceType::Knight, Side::Enemy);
        assert!(!in_check(&pos, Side::Player));

        let mut pos = Snapshot::empty();
        put(&mut pos, 4, 8, PieceType::King, Side::Player);
        put(&mut pos, 5, 6, PieceType::Knight, Side::Enemy);
        put(&mut pos, 4, 7, PieceType::Pawn, Side::Enemy);
        put(&mut pos, 5, 7, PieceType::Gold, Side::Player);
        // 敵桂は (5,6) から (4,8)/(6,8) に跳ぶ
        assert!(in_check(&pos, Side::Player));
    }

    #[test]
    fn test_pinned_piece_is_unsafe_to_move() {
        let mut pos = Snapshot::empty();
        put(&mut pos, 4, 8, PieceType::King, Side::Player);
        put(&mut pos, 4, 6, PieceType::Gold, Side::Player);
        put(&mut pos, 4, 1, PieceType::Rook, Side::Enemy);

        let sideways = Placement {
            from: Some(sq(4, 6)),
            to: sq(3, 6),
            piece: Piece::new(PieceType::Gold, Side::Player),
        };
        assert!(!safe_after(&pos, sideways, Side::Player));

        let forward = Placement {
            from: Some(sq(4, 6)),
            to: sq(4, 5),
            piece: Piece::new(PieceType::Gold, Side::Player),
        };
        assert!(safe_after(&pos, forward, Side::Player));
    }

    #[test]
    fn test_drop_interposes() {
        let mut pos = Snapshot::empty();
        put(&mut pos, 0, 8, PieceType::King, Side::Player);
        put(&mut pos, 8, 8, PieceType::Rook, Side::Enemy);
        assert!(in_check(&pos, Side::Player));

        let mv = Move::drop(PieceType::Silver, sq(4, 8));
        let placement = Placement::from_move(&pos, mv, Side::Player).unwrap();
        assert!(safe_after(&pos, placement, Side::Player));
    }
}
