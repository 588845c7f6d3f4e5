//! 基本型
//!
//! 手番・駒種・升目・駒・指し手・評価値。いずれも小さな `Copy` 値型。

mod moves;
mod piece;
mod piece_type;
mod side;
mod square;
mod value;

pub use moves::Move;
pub use piece::Piece;
pub use piece_type::PieceType;
pub use side::Side;
pub use square::Square;
pub use value::Value;
