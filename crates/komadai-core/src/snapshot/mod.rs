//! 局面スナップショット
//!
//! 9×9 の升目配列と手番ごとの持ち駒枚数。照会のたびにホストの状態から作り直し、
//! 探索ではノードごとに丸ごと複製する（指し手の巻き戻しは行わない）。
//!
//! - 盤外の升目を読むと常に空きマスを返す
//! - 盤外への書き込みは無視する
//! - 持ち駒枚数は負にならない（u8、減算は飽和）

mod display;

use crate::error::SnapshotError;
use crate::types::{Move, Piece, PieceType, Side, Square};

/// 手番ごとの持ち駒枚数 [side][piece_type]
pub type Hands = [[u8; PieceType::NUM]; Side::NUM];

/// 局面スナップショット
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    cells: [Option<Piece>; Square::NUM],
    hands: Hands,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// 平手の一段目（列 0 → 8）
const BACK_RANK: [PieceType; 9] = [
    PieceType::Lance,
    PieceType::Knight,
    PieceType::Silver,
    PieceType::Gold,
    PieceType::King,
    PieceType::Gold,
    PieceType::Silver,
    PieceType::Knight,
    PieceType::Lance,
];

impl Snapshot {
    /// 駒のない盤面
    pub const fn empty() -> Self {
        Snapshot {
            cells: [None; Square::NUM],
            hands: [[0; PieceType::NUM]; Side::NUM],
        }
    }

    /// 平手の初期局面
    ///
    /// Player は段 6-8、Enemy は段 0-2。Player の角は (1,7)、飛車は (7,7)。
    pub fn startpos() -> Self {
        let mut pos = Self::empty();
        for (col, &pt) in BACK_RANK.iter().enumerate() {
            let col = col as i32;
            pos.set_cell(col, 8, Some(Piece::new(pt, Side::Player)));
            pos.set_cell(col, 0, Some(Piece::new(pt, Side::Enemy)));
            pos.set_cell(col, 6, Some(Piece::new(PieceType::Pawn, Side::Player)));
            pos.set_cell(col, 2, Some(Piece::new(PieceType::Pawn, Side::Enemy)));
        }
        pos.set_cell(1, 7, Some(Piece::new(PieceType::Bishop, Side::Player)));
        pos.set_cell(7, 7, Some(Piece::new(PieceType::Rook, Side::Player)));
        pos.set_cell(1, 1, Some(Piece::new(PieceType::Rook, Side::Enemy)));
        pos.set_cell(7, 1, Some(Piece::new(PieceType::Bishop, Side::Enemy)));
        pos
    }

    /// 升目の駒
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// 座標の駒（盤外は空きマス扱い）
    #[inline]
    pub fn piece_at(&self, col: i32, row: i32) -> Option<Piece> {
        Square::new(col, row).and_then(|sq| self.piece_on(sq))
    }

    /// 空きマスかどうか
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// 駒を置く（既存の駒は上書き）
    #[inline]
    pub fn put_piece(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = Some(piece);
    }

    /// 駒を取り除いて返す
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// 座標を指定して升目を書き換える（盤外は無視）
    pub fn set_cell(&mut self, col: i32, row: i32, cell: Option<Piece>) {
        if let Some(sq) = Square::new(col, row) {
            self.cells[sq.index()] = cell;
        }
    }

    /// 持ち駒の枚数
    #[inline]
    pub fn hand_count(&self, side: Side, piece_type: PieceType) -> u8 {
        self.hands[side.index()][piece_type.index()]
    }

    /// 持ち駒の枚数を設定
    #[inline]
    pub fn set_hand_count(&mut self, side: Side, piece_type: PieceType, count: u8) {
        self.hands[side.index()][piece_type.index()] = count;
    }

    /// 持ち駒を1枚増やす（飽和）
    #[inline]
    pub fn add_to_hand(&mut self, side: Side, piece_type: PieceType) {
        let slot = &mut self.hands[side.index()][piece_type.index()];
        *slot = slot.saturating_add(1);
    }

    /// 持ち駒を1枚減らす（0 未満にはならない）
    #[inline]
    pub fn take_from_hand(&mut self, side: Side, piece_type: PieceType) {
        let slot = &mut self.hands[side.index()][piece_type.index()];
        *slot = slot.saturating_sub(1);
    }

    /// 盤上の全駒（インデックス順）
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_on(sq).map(|p| (sq, p)))
    }

    /// 指定手番の盤上の駒（インデックス順）
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.side == side)
    }

    /// 指し手を適用する
    ///
    /// 取った駒は生駒に戻して `side` の持ち駒に加える（玉は持ち駒にしない）。
    /// 合法性は検査しない。打つ手で持ち駒がなければ何もしない。
    pub fn apply_move(&mut self, mv: Move, side: Side) {
        let to = mv.to();
        match mv.from() {
            None => {
                if self.hand_count(side, mv.piece_type()) == 0 {
                    return;
                }
                self.take_from_hand(side, mv.piece_type());
                self.put_piece(to, Piece::new(mv.piece_type(), side));
            }
            Some(from) => {
                let Some(moving) = self.remove_piece(from) else {
                    return;
                };
                if let Some(captured) = self.remove_piece(to) {
                    if captured.side != side && captured.piece_type.is_hand_piece() {
                        self.add_to_hand(side, captured.piece_type);
                    }
                }
                let piece = if mv.is_promotion() { moving.promote() } else { moving };
                self.put_piece(to, piece);
            }
        }
    }

    /// 指し手を適用した新しい局面を返す
    #[inline]
    pub fn after(&self, mv: Move, side: Side) -> Snapshot {
        let mut next = self.clone();
        next.apply_move(mv, side);
        next
    }

    /// 盤上の玉の枚数を検査する
    ///
    /// 照会・探索はこの検査なしでも動作する（玉がなければ王手なし扱い）。
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for side in Side::ALL {
            let kings = self
                .pieces_of(side)
                .filter(|(_, p)| p.piece_type == PieceType::King)
                .count();
            match kings {
                0 => return Err(SnapshotError::MissingKing(side)),
                1 => {}
                _ => return Err(SnapshotError::MultipleKings(side)),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(col: i32, row: i32) -> Square {
        Square::new(col, row).unwrap()
    }

    #[test]
    fn test_startpos_layout() {
        let pos = Snapshot::startpos();
        assert_eq!(pos.pieces().count(), 40);
        assert_eq!(pos.pieces_of(Side::Player).count(), 20);
        assert_eq!(
            pos.piece_at(4, 8),
            Some(Piece::new(PieceType::King, Side::Player))
        );
        assert_eq!(
            pos.piece_at(4, 0),
            Some(Piece::new(PieceType::King, Side::Enemy))
        );
        assert_eq!(
            pos.piece_at(1, 7),
            Some(Piece::new(PieceType::Bishop, Side::Player))
        );
        assert_eq!(
            pos.piece_at(7, 1),
            Some(Piece::new(PieceType::Bishop, Side::Enemy))
        );
        assert!(pos.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_reads_are_empty() {
        let pos = Snapshot::startpos();
        assert_eq!(pos.piece_at(-1, 0), None);
        assert_eq!(pos.piece_at(0, 9), None);
        assert_eq!(pos.piece_at(100, -100), None);
    }

    #[test]
    fn test_out_of_range_writes_are_ignored() {
        let mut pos = Snapshot::empty();
        pos.set_cell(9, 0, Some(Piece::new(PieceType::Pawn, Side::Player)));
        assert_eq!(pos.pieces().count(), 0);
    }

    #[test]
    fn test_apply_capture_adds_unpromoted_to_hand() {
        let mut pos = Snapshot::empty();
        pos.put_piece(sq(4, 4), Piece::new(PieceType::Rook, Side::Player));
        pos.put_piece(sq(4, 2), Piece::promoted(PieceType::Pawn, Side::Enemy));

        let mv = Move::normal(sq(4, 4), sq(4, 2), PieceType::Rook, true, true);
        pos.apply_move(mv, Side::Player);

        assert_eq!(
            pos.piece_on(sq(4, 2)),
            Some(Piece::promoted(PieceType::Rook, Side::Player))
        );
        assert!(pos.is_empty(sq(4, 4)));
        assert_eq!(pos.hand_count(Side::Player, PieceType::Pawn), 1);
    }

    #[test]
    fn test_apply_drop_consumes_hand() {
        let mut pos = Snapshot::empty();
        pos.set_hand_count(Side::Enemy, PieceType::Gold, 2);
        pos.apply_move(Move::drop(PieceType::Gold, sq(3, 3)), Side::Enemy);
        assert_eq!(pos.hand_count(Side::Enemy, PieceType::Gold), 1);
        assert_eq!(
            pos.piece_on(sq(3, 3)),
            Some(Piece::new(PieceType::Gold, Side::Enemy))
        );
    }

    #[test]
    fn test_apply_drop_without_hand_is_noop() {
        let pos = Snapshot::empty();
        let next = pos.after(Move::drop(PieceType::Pawn, sq(3, 3)), Side::Player);
        assert!(next == pos);
    }

    #[test]
    fn test_take_from_hand_saturates() {
        let mut pos = Snapshot::empty();
        pos.take_from_hand(Side::Player, PieceType::Pawn);
        assert_eq!(pos.hand_count(Side::Player, PieceType::Pawn), 0);
    }

    #[test]
    fn test_validate_king_count() {
        let mut pos = Snapshot::empty();
        assert_eq!(pos.validate(), Err(SnapshotError::MissingKing(Side::Player)));

        pos.put_piece(sq(4, 8), Piece::new(PieceType::King, Side::Player));
        pos.put_piece(sq(4, 0), Piece::new(PieceType::King, Side::Enemy));
        assert_eq!(pos.validate(), Ok(()));

        pos.put_piece(sq(0, 0), Piece::new(PieceType::King, Side::Enemy));
        assert_eq!(pos.validate(), Err(SnapshotError::MultipleKings(Side::Enemy)));
    }
}
