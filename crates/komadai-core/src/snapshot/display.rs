//! 盤面のデバッグ表示

use std::fmt;

use super::Snapshot;
use crate::types::{PieceType, Side, Square};

impl Snapshot {
    fn write_hand(&self, f: &mut fmt::Formatter<'_>, side: Side) -> fmt::Result {
        write!(f, "{side} hand:")?;
        let mut any = false;
        for pt in PieceType::HAND_PIECES {
            let n = self.hand_count(side, pt);
            if n > 0 {
                write!(f, " {}{}", pt.symbol(), n)?;
                any = true;
            }
        }
        if !any {
            f.write_str(" -")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Snapshot {
    /// 段 0（Enemy 側）を上にして表示する。空きマスは ` .`。
    ///
    /// ```text
    /// enemy hand: -
    ///  l n s g k g s n l
    ///  . b . . . . . r .
    /// ...
    /// player hand: P1
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hand(f, Side::Enemy)?;
        for row in 0..Square::ROWS as i32 {
            for col in 0..Square::COLS as i32 {
                match self.piece_at(col, row) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_str(" .")?,
                }
            }
            writeln!(f)?;
        }
        self.write_hand(f, Side::Player)
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_display() {
        let text = Snapshot::startpos().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "enemy hand: -");
        assert_eq!(lines[1], " l n s g k g s n l");
        assert_eq!(lines[2], " . r . . . . . b .");
        assert_eq!(lines[8], " . B . . . . . R .");
        assert_eq!(lines[9], " L N S G K G S N L");
        assert_eq!(lines[10], "player hand: -");
    }

    #[test]
    fn test_hand_display() {
        let mut pos = Snapshot::empty();
        pos.set_hand_count(Side::Player, PieceType::Pawn, 2);
        pos.set_hand_count(Side::Player, PieceType::Rook, 1);
        let text = pos.to_string();
        assert!(text.ends_with("player hand: R1 P2\n"));
    }
}
