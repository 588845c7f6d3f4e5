//! 手番（Side）

use serde::{Deserialize, Serialize};

/// 手番（プレイヤー/敵）
///
/// `Player` は盤の下側に座り、段 0 の方向へ進む。`Enemy` はその逆。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    Player = 0,
    Enemy = 1,
}

impl Side {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 全ての手番
    pub const ALL: [Side; 2] = [Side::Player, Side::Enemy];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// ホスト側の `is_enemy` フラグから変換
    #[inline]
    pub const fn from_is_enemy(is_enemy: bool) -> Side {
        if is_enemy { Side::Enemy } else { Side::Player }
    }

    /// 前進方向の段の増分（Player: -1, Enemy: +1）
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Player => -1,
            Side::Enemy => 1,
        }
    }
}

impl std::ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Enemy => f.write_str("enemy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
        assert_eq!(!Side::Player, Side::Enemy);
    }

    #[test]
    fn test_side_index() {
        assert_eq!(Side::Player.index(), 0);
        assert_eq!(Side::Enemy.index(), 1);
    }

    #[test]
    fn test_side_forward() {
        assert_eq!(Side::Player.forward(), -1);
        assert_eq!(Side::Enemy.forward(), 1);
        assert_eq!(Side::from_is_enemy(true), Side::Enemy);
        assert_eq!(Side::from_is_enemy(false), Side::Player);
    }
}
