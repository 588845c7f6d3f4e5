//! 将棋のルール（駒の動きの幾何と王手判定）

pub mod check;
pub mod geometry;

pub use check::{Placement, attacks, in_check, king_position, safe_after};
pub use geometry::{can_move_geometry, in_promotion_zone, is_dead_end, is_double_pawn, path_clear};
