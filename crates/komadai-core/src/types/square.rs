//! 升目（Square）

use serde::Serialize;

/// 升目（列, 段）。どちらも 0-8。
///
/// 配置: 列優先。index = col * 9 + row。
/// 段 0 が Enemy 側の一段目、段 8 が Player 側の一段目。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Square {
    col: u8,
    row: u8,
}

impl Square {
    /// 列数
    pub const COLS: usize = 9;
    /// 段数
    pub const ROWS: usize = 9;
    /// 升目の数
    pub const NUM: usize = Self::COLS * Self::ROWS;

    /// 列と段から生成（範囲外は None）
    #[inline]
    pub const fn new(col: i32, row: i32) -> Option<Square> {
        if col >= 0 && col < Self::COLS as i32 && row >= 0 && row < Self::ROWS as i32 {
            Some(Square {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// インデックス（0-80）から生成
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < Self::NUM {
            Some(Square {
                col: (index / Self::ROWS) as u8,
                row: (index % Self::ROWS) as u8,
            })
        } else {
            None
        }
    }

    /// 列
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 段
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.col as usize * Self::ROWS + self.row as usize
    }

    /// 差分だけずらした升目（盤外は None）
    #[inline]
    pub const fn offset(self, dc: i8, dr: i8) -> Option<Square> {
        Square::new(self.col as i32 + dc as i32, self.row as i32 + dr as i32)
    }

    /// 全升目をインデックス順に列挙
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM).filter_map(Square::from_index)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(8, 8).is_some());
        assert!(Square::new(-1, 0).is_none());
        assert!(Square::new(0, 9).is_none());
        assert!(Square::new(9, 4).is_none());
    }

    #[test]
    fn test_square_index_layout() {
        let sq = Square::new(2, 5).unwrap();
        assert_eq!(sq.index(), 2 * 9 + 5);
        assert_eq!(Square::from_index(sq.index()), Some(sq));
        assert_eq!(Square::from_index(81), None);
    }

    #[test]
    fn test_square_offset() {
        let sq = Square::new(0, 0).unwrap();
        assert_eq!(sq.offset(1, 1), Square::new(1, 1));
        assert_eq!(sq.offset(-1, 0), None);
        assert_eq!(Square::all().count(), Square::NUM);
    }
}
