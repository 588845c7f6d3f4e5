//! komadai: ホスト形式の局面を読み込んで照会・探索する開発用コマンド
//!
//! 出力はすべて JSON（`show` のみ盤面のテキスト）。ログは `RUST_LOG` で制御する。

mod settings;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use komadai_core::movegen::generate_legal;
use komadai_core::{
    HostState, PieceType, Searcher, Side, Snapshot, Square, is_in_check, legal_drops_for,
    legal_moves_for, load_snapshot,
};
use serde::Serialize;

use settings::{Overrides, Settings};

#[derive(Parser)]
#[command(name = "komadai")]
#[command(about = "Query and search shogi positions given in the host JSON format")]
#[command(version)]
struct Cli {
    /// Host state JSON file (defaults to the standard starting position)
    #[arg(short, long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the board and both hands
    Show,

    /// List legal moves: destinations of one piece, or every move of a side
    Moves {
        /// Square of the piece to move, as "col,row" (the piece's own side is used)
        #[arg(long, value_parser = parse_square, conflicts_with = "side")]
        from: Option<Square>,

        /// Side whose moves to list when --from is omitted
        #[arg(long, value_parser = parse_side, default_value = "player")]
        side: Side,
    },

    /// List squares where a piece from hand can be dropped
    Drops {
        /// Piece type (rook, bishop, gold, silver, knight, lance, pawn)
        #[arg(long, value_parser = parse_piece_type)]
        piece: PieceType,

        #[arg(long, value_parser = parse_side, default_value = "player")]
        side: Side,
    },

    /// Report whether a side's king is in check
    Check {
        #[arg(long, value_parser = parse_side, default_value = "player")]
        side: Side,
    },

    /// Search for the best move
    Search {
        /// TOML config file with a [search] section
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Engine side (overrides the config file)
        #[arg(long, value_parser = parse_side)]
        side: Option<Side>,

        /// Time budget in milliseconds
        #[arg(short, long)]
        time_ms: Option<u64>,

        /// Maximum iterative deepening depth (1-10)
        #[arg(short = 'd', long)]
        max_depth: Option<u32>,
    },
}

fn parse_square(s: &str) -> Result<Square, String> {
    let (col, row) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"col,row\", got {s:?}"))?;
    let col: i32 = col.trim().parse().map_err(|e| format!("bad column: {e}"))?;
    let row: i32 = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    Square::new(col, row).ok_or_else(|| format!("square ({col},{row}) is off the board"))
}

fn parse_side(s: &str) -> Result<Side, String> {
    match s.to_ascii_lowercase().as_str() {
        "player" => Ok(Side::Player),
        "enemy" => Ok(Side::Enemy),
        _ => Err(format!("unknown side {s:?} (expected player or enemy)")),
    }
}

fn parse_piece_type(s: &str) -> Result<PieceType, String> {
    let wanted = s.to_ascii_lowercase();
    PieceType::HAND_PIECES
        .into_iter()
        .find(|pt| format!("{pt:?}").to_ascii_lowercase() == wanted)
        .ok_or_else(|| format!("unknown hand piece {s:?}"))
}

/// 局面を読み込む（ファイル未指定なら平手）
fn load_position(path: Option<&Path>) -> Result<Snapshot> {
    let Some(path) = path else {
        return Ok(Snapshot::startpos());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read state {}", path.display()))?;
    let state: HostState = serde_json::from_str(&text)
        .with_context(|| format!("invalid host state JSON in {}", path.display()))?;
    let pos = load_snapshot(&state);
    if let Err(e) = pos.validate() {
        log::warn!("{}: {e}", path.display());
    }
    Ok(pos)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

#[derive(Serialize)]
struct CheckReport {
    side: Side,
    in_check: bool,
}

fn run(cli: Cli) -> Result<()> {
    let pos = load_position(cli.state.as_deref())?;

    match cli.command {
        Command::Show => {
            print!("{pos}");
        }
        Command::Moves { from: Some(from), .. } => {
            if pos.piece_on(from).is_none() {
                bail!("no piece at {from}");
            }
            print_json(&legal_moves_for(&pos, from))?;
        }
        Command::Moves { from: None, side } => {
            print_json(&generate_legal(&pos, side).into_vec())?;
        }
        Command::Drops { piece, side } => {
            print_json(&legal_drops_for(&pos, piece, side))?;
        }
        Command::Check { side } => {
            print_json(&CheckReport {
                side,
                in_check: is_in_check(&pos, side),
            })?;
        }
        Command::Search {
            config,
            side,
            time_ms,
            max_depth,
        } => {
            let (side, search) = Settings::load(config.as_deref())?.resolve(Overrides {
                side,
                time_ms,
                max_depth,
            })?;
            log::info!("searching for {side} with {search:?}");
            let outcome = Searcher::new(search).search(&pos, side);
            print_json(&outcome)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        assert_eq!(parse_square("4,6"), Ok(Square::new(4, 6).unwrap()));
        assert_eq!(parse_square(" 0 , 8 "), Ok(Square::new(0, 8).unwrap()));
        assert!(parse_square("9,0").is_err());
        assert!(parse_square("4").is_err());
        assert!(parse_square("a,b").is_err());
    }

    #[test]
    fn test_parse_piece_type() {
        assert_eq!(parse_piece_type("Gold"), Ok(PieceType::Gold));
        assert_eq!(parse_piece_type("pawn"), Ok(PieceType::Pawn));
        assert!(parse_piece_type("king").is_err());
    }

    #[test]
    fn test_parse_side() {
        assert_eq!(parse_side("ENEMY"), Ok(Side::Enemy));
        assert!(parse_side("black").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
