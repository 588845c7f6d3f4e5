//! 指し手（Move）
//!
//! 盤上の駒を動かす手と、持ち駒を打つ手の両方を表す値型。
//! 升目の中身を参照することはなく、生成後は局面から独立している。

use serde::Serialize;

use super::{PieceType, Square};

/// 指し手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    /// 移動元（打つ手では None）
    from: Option<Square>,
    /// 移動先
    to: Square,
    /// 動かす（打つ）駒の駒種
    piece_type: PieceType,
    /// 成るかどうか
    promote: bool,
    /// 打つ手かどうか
    drop: bool,
    /// 相手の駒を取るかどうか
    capture: bool,
}

impl Move {
    /// 盤上の駒を動かす手を生成
    #[inline]
    pub const fn normal(
        from: Square,
        to: Square,
        piece_type: PieceType,
        promote: bool,
        capture: bool,
    ) -> Self {
        Move {
            from: Some(from),
            to,
            piece_type,
            promote,
            drop: false,
            capture,
        }
    }

    /// 持ち駒を打つ手を生成
    #[inline]
    pub const fn drop(piece_type: PieceType, to: Square) -> Self {
        Move {
            from: None,
            to,
            piece_type,
            promote: false,
            drop: true,
            capture: false,
        }
    }

    /// 移動元（打つ手では None）
    #[inline]
    pub const fn from(self) -> Option<Square> {
        self.from
    }

    /// 移動先
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// 駒種
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        self.piece_type
    }

    /// 成る手かどうか
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promote
    }

    /// 打つ手かどうか
    #[inline]
    pub const fn is_drop(self) -> bool {
        self.drop
    }

    /// 駒を取る手かどうか
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.capture
    }
}

impl std::fmt::Display for Move {
    /// 例: `P(6,6)-(6,5)`, `B(1,7)x(7,1)+`, `P*(4,4)`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.from {
            None => write!(f, "{}*{}", self.piece_type, self.to),
            Some(from) => {
                let sep = if self.capture { 'x' } else { '-' };
                write!(f, "{}{}{}{}", self.piece_type, from, sep, self.to)?;
                if self.promote {
                    f.write_str("+")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(col: i32, row: i32) -> Square {
        Square::new(col, row).unwrap()
    }

    #[test]
    fn test_normal_move_fields() {
        let mv = Move::normal(sq(6, 6), sq(6, 5), PieceType::Pawn, false, false);
        assert_eq!(mv.from(), Some(sq(6, 6)));
        assert_eq!(mv.to(), sq(6, 5));
        assert!(!mv.is_drop());
        assert!(!mv.is_promotion());
        assert_eq!(mv.to_string(), "P(6,6)-(6,5)");
    }

    #[test]
    fn test_drop_move_fields() {
        let mv = Move::drop(PieceType::Pawn, sq(4, 4));
        assert_eq!(mv.from(), None);
        assert!(mv.is_drop());
        assert!(!mv.is_capture());
        assert_eq!(mv.to_string(), "P*(4,4)");
    }

    #[test]
    fn test_capture_promotion_display() {
        let mv = Move::normal(sq(1, 7), sq(7, 1), PieceType::Bishop, true, true);
        assert_eq!(mv.to_string(), "B(1,7)x(7,1)+");
    }
}
