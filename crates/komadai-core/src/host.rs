//! ホストとの境界
//!
//! ホストは盤面を `board_grid[col][row]`（空きマスは null）、持ち駒を
//! 駒種番号 → 枚数 の対応で渡す。ここで一度だけ [`Snapshot`] に変換し、
//! 以降の照会はすべてスナップショットに対して行う。
//!
//! 不正な値で失敗することはない:
//! - 範囲外の駒種番号・座標は無視する
//! - 負の枚数は 0 とみなす
//! - 成れない駒種の成りフラグは無視する

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::movegen::{self, is_pseudo_legal_drop};
use crate::rules::{self, Placement};
use crate::search::{self, SearchOutcome};
use crate::snapshot::Snapshot;
use crate::types::{Piece, PieceType, Side, Square};

/// ホストの盤上の駒
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostPiece {
    /// 駒種番号（0: 玉 … 7: 歩）
    pub piece_type: i64,
    #[serde(default)]
    pub is_enemy: bool,
    #[serde(default)]
    pub is_promoted: bool,
}

impl HostPiece {
    /// 盤上の駒に変換（駒種番号が範囲外なら None）
    pub fn to_piece(self) -> Option<Piece> {
        let piece_type = PieceType::from_index(self.piece_type)?;
        let side = Side::from_is_enemy(self.is_enemy);
        Some(if self.is_promoted {
            Piece::promoted(piece_type, side)
        } else {
            Piece::new(piece_type, side)
        })
    }
}

impl From<Piece> for HostPiece {
    fn from(piece: Piece) -> Self {
        HostPiece {
            piece_type: piece.piece_type.index() as i64,
            is_enemy: piece.side == Side::Enemy,
            is_promoted: piece.promoted,
        }
    }
}

/// ホストから渡される局面
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostState {
    /// `board_grid[col][row]`
    pub board_grid: Vec<Vec<Option<HostPiece>>>,
    /// Player の持ち駒（駒種番号 → 枚数）
    pub player_hand: BTreeMap<i64, i64>,
    /// Enemy の持ち駒（駒種番号 → 枚数）
    pub enemy_hand: BTreeMap<i64, i64>,
}

impl HostState {
    /// スナップショットからホスト形式に戻す（9×9 の盤と 0 でない持ち駒）
    pub fn from_snapshot(pos: &Snapshot) -> Self {
        let board_grid = (0..Square::COLS as i32)
            .map(|col| {
                (0..Square::ROWS as i32)
                    .map(|row| pos.piece_at(col, row).map(HostPiece::from))
                    .collect()
            })
            .collect();
        let hand_of = |side: Side| -> BTreeMap<i64, i64> {
            PieceType::HAND_PIECES
                .iter()
                .filter(|&&pt| pos.hand_count(side, pt) > 0)
                .map(|&pt| (pt.index() as i64, pos.hand_count(side, pt) as i64))
                .collect()
        };
        HostState {
            board_grid,
            player_hand: hand_of(Side::Player),
            enemy_hand: hand_of(Side::Enemy),
        }
    }
}

/// ホストの局面をスナップショットに変換する
pub fn load_snapshot(state: &HostState) -> Snapshot {
    let mut pos = Snapshot::empty();

    for (col, column) in state.board_grid.iter().enumerate().take(Square::COLS) {
        for (row, cell) in column.iter().enumerate().take(Square::ROWS) {
            let Some(host_piece) = cell else {
                continue;
            };
            match host_piece.to_piece() {
                Some(piece) => pos.set_cell(col as i32, row as i32, Some(piece)),
                None => log::trace!(
                    "ignoring piece with unknown type {} at ({col},{row})",
                    host_piece.piece_type
                ),
            }
        }
    }

    for (side, hand) in [
        (Side::Player, &state.player_hand),
        (Side::Enemy, &state.enemy_hand),
    ] {
        for (&raw_type, &count) in hand {
            match PieceType::from_index(raw_type) {
                Some(pt) if pt.is_hand_piece() => {
                    let count = count.clamp(0, u8::MAX as i64) as u8;
                    pos.set_hand_count(side, pt, count);
                }
                _ => log::trace!("ignoring {side} hand entry with type {raw_type}"),
            }
        }
    }

    log::trace!("loaded snapshot:{pos:?}");
    pos
}

/// 指定の升目の駒を動かせる升目（重複なし、生成順）
///
/// 空きマスなら空。自玉が王手される手は含まない。
pub fn legal_moves_for(pos: &Snapshot, from: Square) -> Vec<Square> {
    let mut targets: Vec<Square> = Vec::new();
    for mv in &movegen::legal_moves_from(pos, from) {
        if !targets.contains(&mv.to()) {
            targets.push(mv.to());
        }
    }
    targets
}

/// 持ち駒を打てる升目（インデックス順）
pub fn legal_drops_for(pos: &Snapshot, piece_type: PieceType, side: Side) -> Vec<Square> {
    movegen::legal_drops(pos, side, piece_type)
        .iter()
        .map(|mv| mv.to())
        .collect()
}

/// `side` の玉が王手されているか
#[inline]
pub fn is_in_check(pos: &Snapshot, side: Side) -> bool {
    rules::in_check(pos, side)
}

/// 盤上の駒を `from` → `to` に動かす手が合法か（成・不成は問わない）
pub fn is_legal_move(pos: &Snapshot, from: Square, to: Square) -> bool {
    let Some(piece) = pos.piece_on(from) else {
        return false;
    };
    movegen::is_pseudo_legal_board_move(pos, from, to)
        && rules::safe_after(
            pos,
            Placement {
                from: Some(from),
                to,
                piece,
            },
            piece.side,
        )
}

/// 持ち駒を `to` に打つ手が合法か
pub fn is_legal_drop(pos: &Snapshot, piece_type: PieceType, side: Side, to: Square) -> bool {
    is_pseudo_legal_drop(pos, piece_type, side, to)
        && rules::safe_after(
            pos,
            Placement {
                from: None,
                to,
                piece: Piece::new(piece_type, side),
            },
            side,
        )
}

/// 仮の配置の後に、配置した駒の側の玉が王手されていないか
#[inline]
pub fn is_king_safe_after_move(pos: &Snapshot, placement: Placement) -> bool {
    rules::safe_after(pos, placement, placement.piece.side)
}

/// `side` の最善手を探す
#[inline]
pub fn search_best_move(pos: &Snapshot, side: Side, time_budget: Duration) -> SearchOutcome {
    search::search_best_move(pos, side, time_budget)
}
