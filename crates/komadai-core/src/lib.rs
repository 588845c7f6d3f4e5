//! # komadai-core
//!
//! ホストアプリケーションに組み込む将棋のルールエンジンと思考エンジン。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Side, PieceType, Square, Piece, Move, Value）
//! - `snapshot`: 局面スナップショット（盤面と持ち駒）
//! - `rules`: 駒の動きの幾何と王手判定
//! - `movegen`: 指し手生成と並べ替え
//! - `eval`: 静的評価（駒割り）
//! - `search`: 反復深化アルファベータ探索と勝率変換
//! - `host`: ホストの局面の読み込みと照会
//! - `engine`: 局面を保持して探索するエンジン
//!
//! 照会のたびにホストの局面からスナップショットを作り直す。呼び出しをまたいだキャッシュは持たない。

pub mod error;
pub mod types;

pub mod snapshot;

pub mod movegen;
pub mod rules;

pub mod eval;
pub mod search;

pub mod engine;
pub mod host;

pub use engine::Engine;
pub use error::{ConfigError, SnapshotError};
pub use host::{
    HostPiece, HostState, is_in_check, is_king_safe_after_move, is_legal_drop, is_legal_move,
    legal_drops_for, legal_moves_for, load_snapshot, search_best_move,
};
pub use rules::Placement;
pub use search::{SearchConfig, SearchOutcome, SearchResult, Searcher, win_probability};
pub use snapshot::Snapshot;
pub use types::{Move, Piece, PieceType, Side, Square, Value};
