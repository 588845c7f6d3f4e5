//! 指し手の並べ替え
//!
//! 1. 前回の反復深化で最善だった手
//! 2. 駒を取る手
//! 3. その他
//!
//! 同じ区分の中では生成順を保つ（安定ソート）。

use crate::types::Move;

/// 並べ替えの区分（小さいほど先）
#[inline]
fn rank(mv: &Move, hint: Option<Move>) -> u8 {
    if hint == Some(*mv) {
        0
    } else if mv.is_capture() {
        1
    } else {
        2
    }
}

/// 最善手ヒントを先頭に、次に駒を取る手を並べる
pub fn order_moves(moves: &mut [Move], hint: Option<Move>) {
    moves.sort_by_key(|mv| rank(mv, hint));
}
