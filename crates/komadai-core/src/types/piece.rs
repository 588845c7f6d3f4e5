//! 駒（Piece）

use super::{PieceType, Side};

/// 盤上の駒（駒種・手番・成り）
///
/// 升目の中身は `Option<Piece>` で表す。空きマスに手番は存在しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
    pub promoted: bool,
}

impl Piece {
    /// 生駒を生成
    #[inline]
    pub const fn new(piece_type: PieceType, side: Side) -> Self {
        Piece {
            piece_type,
            side,
            promoted: false,
        }
    }

    /// 成駒を生成（成れない駒種は生駒のまま）
    #[inline]
    pub const fn promoted(piece_type: PieceType, side: Side) -> Self {
        Piece {
            piece_type,
            side,
            promoted: piece_type.can_promote(),
        }
    }

    /// 成った駒を返す
    #[inline]
    pub const fn promote(self) -> Self {
        Piece::promoted(self.piece_type, self.side)
    }
}

impl std::fmt::Display for Piece {
    /// Player は大文字、Enemy は小文字。成駒は `+` を前置する。
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self.side {
            Side::Player => self.piece_type.symbol(),
            Side::Enemy => self.piece_type.symbol().to_ascii_lowercase(),
        };
        if self.promoted {
            write!(f, "+{symbol}")
        } else {
            write!(f, " {symbol}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_and_king_never_promote() {
        assert!(!Piece::promoted(PieceType::Gold, Side::Player).promoted);
        assert!(!Piece::new(PieceType::King, Side::Enemy).promote().promoted);
        assert!(Piece::new(PieceType::Silver, Side::Enemy).promote().promoted);
    }

    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::new(PieceType::Pawn, Side::Player).to_string(), " P");
        assert_eq!(Piece::promoted(PieceType::Rook, Side::Enemy).to_string(), "+r");
    }
}
