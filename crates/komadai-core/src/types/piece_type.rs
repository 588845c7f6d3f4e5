//! 駒種（PieceType）

use serde::{Deserialize, Serialize};

/// 駒種（先後・成りの区別なし）
///
/// 数値はホストとの受け渡しに使う 0-7 の番号と一致する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceType {
    King = 0,
    Rook = 1,
    Bishop = 2,
    Gold = 3,
    Silver = 4,
    Knight = 5,
    Lance = 6,
    Pawn = 7,
}

impl PieceType {
    /// 駒種の数
    pub const NUM: usize = 8;

    /// 全ての駒種（番号順）
    pub const ALL: [PieceType; 8] = [
        PieceType::King,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Gold,
        PieceType::Silver,
        PieceType::Knight,
        PieceType::Lance,
        PieceType::Pawn,
    ];

    /// 持ち駒になる駒種（玉以外）
    pub const HAND_PIECES: [PieceType; 7] = [
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Gold,
        PieceType::Silver,
        PieceType::Knight,
        PieceType::Lance,
        PieceType::Pawn,
    ];

    /// インデックス（0-7）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 番号から変換（範囲外は None）
    #[inline]
    pub const fn from_index(n: i64) -> Option<PieceType> {
        match n {
            0 => Some(PieceType::King),
            1 => Some(PieceType::Rook),
            2 => Some(PieceType::Bishop),
            3 => Some(PieceType::Gold),
            4 => Some(PieceType::Silver),
            5 => Some(PieceType::Knight),
            6 => Some(PieceType::Lance),
            7 => Some(PieceType::Pawn),
            _ => None,
        }
    }

    /// 成れる駒種かどうか（玉・金以外）
    #[inline]
    pub const fn can_promote(self) -> bool {
        !matches!(self, PieceType::King | PieceType::Gold)
    }

    /// 持ち駒として打てる駒種かどうか
    #[inline]
    pub const fn is_hand_piece(self) -> bool {
        !matches!(self, PieceType::King)
    }

    /// 盤面表示用の1文字
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Gold => 'G',
            PieceType::Silver => 'S',
            PieceType::Knight => 'N',
            PieceType::Lance => 'L',
            PieceType::Pawn => 'P',
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
