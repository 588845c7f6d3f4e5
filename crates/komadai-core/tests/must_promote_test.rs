//! 行き所のない升目への移動と打ち駒の制限
//!
//! - 歩・香は最奥段に不成で移動できない
//! - 桂は奥 2 段に不成で移動できない
//! - 同じ升目に打つことも同様にできない

use komadai_core::movegen::{legal_drops, legal_moves_from};
use komadai_core::{Piece, PieceType, Side, Snapshot, Square};

fn sq(col: i32, row: i32) -> Square {
    Square::new(col, row).unwrap()
}

/// 玉 2 枚と指定の駒だけの局面
fn position_with(piece: Piece, at: Square) -> Snapshot {
    let mut pos = Snapshot::empty();
    pos.put_piece(sq(8, 8), Piece::new(PieceType::King, Side::Player));
    pos.put_piece(sq(8, 0), Piece::new(PieceType::King, Side::Enemy));
    pos.put_piece(at, piece);
    pos
}

fn moves_to(pos: &Snapshot, from: Square, to: Square) -> Vec<bool> {
    legal_moves_from(pos, from)
        .iter()
        .filter(|m| m.to() == to)
        .map(|m| m.is_promotion())
        .collect()
}

#[test]
fn test_player_pawn_must_promote_on_last_row() {
    let pos = position_with(Piece::new(PieceType::Pawn, Side::Player), sq(2, 1));
    assert_eq!(moves_to(&pos, sq(2, 1), sq(2, 0)), vec![true]);
}

#[test]
fn test_enemy_pawn_must_promote_on_last_row() {
    let pos = position_with(Piece::new(PieceType::Pawn, Side::Enemy), sq(2, 7));
    assert_eq!(moves_to(&pos, sq(2, 7), sq(2, 8)), vec![true]);
}

#[test]
fn test_lance_may_stop_short_unpromoted() {
    let pos = position_with(Piece::new(PieceType::Lance, Side::Player), sq(3, 5));
    assert_eq!(moves_to(&pos, sq(3, 5), sq(3, 0)), vec![true]);
    assert_eq!(moves_to(&pos, sq(3, 5), sq(3, 1)), vec![false, true]);
    assert_eq!(moves_to(&pos, sq(3, 5), sq(3, 3)), vec![false]);
}

#[test]
fn test_knight_must_promote_on_last_two_rows() {
    let pos = position_with(Piece::new(PieceType::Knight, Side::Player), sq(4, 3));
    assert_eq!(moves_to(&pos, sq(4, 3), sq(3, 1)), vec![true]);
    assert_eq!(moves_to(&pos, sq(4, 3), sq(5, 1)), vec![true]);

    let pos = position_with(Piece::new(PieceType::Knight, Side::Player), sq(4, 4));
    assert_eq!(moves_to(&pos, sq(4, 4), sq(3, 2)), vec![false, true]);
}

#[test]
fn test_silver_may_decline_promotion_anywhere() {
    let pos = position_with(Piece::new(PieceType::Silver, Side::Player), sq(4, 1));
    assert_eq!(moves_to(&pos, sq(4, 1), sq(4, 0)), vec![false, true]);
    // 敵陣から出る手も成れる
    assert_eq!(moves_to(&pos, sq(4, 1), sq(3, 2)), vec![false, true]);
}

#[test]
fn test_leaving_zone_allows_promotion() {
    let pos = position_with(Piece::new(PieceType::Rook, Side::Enemy), sq(0, 7));
    assert_eq!(moves_to(&pos, sq(0, 7), sq(0, 3)), vec![false, true]);
}

#[test]
fn test_drops_skip_dead_end_rows() {
    for (pt, blocked) in [
        (PieceType::Pawn, 1usize),
        (PieceType::Lance, 1),
        (PieceType::Knight, 2),
        (PieceType::Silver, 0),
    ] {
        for side in Side::ALL {
            let mut pos = Snapshot::empty();
            pos.set_hand_count(side, pt, 1);
            let drops = legal_drops(&pos, side, pt);
            assert_eq!(drops.len(), 9 * (9 - blocked), "{pt:?} for {side}");
        }
    }
}
