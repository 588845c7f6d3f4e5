//! 反復深化アルファベータ探索
//!
//! - 評価値は常にエンジン側から見た値（エンジン側の手番で最大化、相手の手番で最小化）
//! - ノードごとに局面を複製して指し手を適用する
//! - 各ノードの入口で締め切りを確認し、超えていれば `Aborted` で深さのループまで巻き戻す

use std::time::Instant;

use crate::eval::{Evaluator, MaterialEvaluator};
use crate::movegen::{generate_legal, order_moves};
use crate::snapshot::Snapshot;
use crate::types::{Move, Side, Value};

use super::config::SearchConfig;
use super::{SearchOutcome, SearchResult, win_probability};

/// 締め切りを超えたため探索を打ち切った
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

/// 探索器
pub struct Searcher<E = MaterialEvaluator> {
    evaluator: E,
    config: SearchConfig,
    /// 探索するエンジン側の手番
    side: Side,
    /// 探索ノード数
    nodes: u64,
    /// 締め切り
    deadline: Instant,
}

impl Searcher<MaterialEvaluator> {
    /// 駒割り評価の探索器
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, MaterialEvaluator)
    }
}

impl<E: Evaluator> Searcher<E> {
    /// 評価関数を指定して生成
    ///
    /// 範囲外の設定値は警告を出したうえで丸めて使う（`SearchConfig::validate` を参照）。
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("{e}; using the nearest valid value");
        }
        Searcher {
            evaluator,
            config,
            side: Side::Player,
            nodes: 0,
            deadline: Instant::now(),
        }
    }

    /// 直前の探索のノード数
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// `side` の最善手を探す
    ///
    /// 合法手がなければ投了。深さ 1 が締め切りまでに終わらなければ、
    /// 並べ替え後の先頭の手を静的評価付きで返す。
    pub fn search(&mut self, pos: &Snapshot, side: Side) -> SearchOutcome {
        let start = Instant::now();
        self.side = side;
        self.nodes = 0;
        self.deadline = start + self.config.time_budget();

        let mut root_moves = generate_legal(pos, side).into_vec();
        if root_moves.is_empty() {
            log::warn!("no legal moves for {side}, resigning");
            return SearchOutcome::Resign;
        }

        let max_depth = self.config.effective_max_depth();
        let mut completed: Option<(Move, Value, u32)> = None;

        for depth in 1..=max_depth {
            if depth > 1 && self.should_stop() {
                break;
            }
            let hint = completed.map(|(mv, _, _)| mv);
            order_moves(&mut root_moves, hint);

            match self.search_root(pos, &root_moves, depth) {
                Ok((mv, score)) => {
                    log::debug!(
                        "depth {depth} score {score} best {mv} nodes {} elapsed {}ms",
                        self.nodes,
                        start.elapsed().as_millis()
                    );
                    completed = Some((mv, score, depth));
                    if score.is_mate_score() {
                        break;
                    }
                }
                Err(Aborted) => {
                    log::debug!("depth {depth} aborted after {} nodes", self.nodes);
                    break;
                }
            }
        }

        let (best_move, score, depth) = match completed {
            Some(found) => found,
            None => {
                order_moves(&mut root_moves, None);
                let mv = root_moves[0];
                let score = self.evaluator.evaluate(&pos.after(mv, side), side);
                log::warn!("depth 1 did not complete in {}ms, falling back to {mv}", self.config.time_budget_ms);
                (mv, score, 0)
            }
        };

        let result = SearchResult {
            best_move,
            score,
            win_probability: win_probability(score, self.config.effective_win_rate_scale()),
            depth,
            nodes: self.nodes,
        };
        log::info!(
            "best {} score {} win {:.3} depth {} nodes {}",
            result.best_move,
            result.score,
            result.win_probability,
            result.depth,
            result.nodes
        );
        SearchOutcome::Move(result)
    }

    /// ルートの全候補手を指定の深さで探索する
    ///
    /// 同点なら先に並んでいる手を採る。
    fn search_root(&mut self, pos: &Snapshot, moves: &[Move], depth: u32) -> Result<(Move, Value), Aborted> {
        let side = self.side;
        let mut alpha = -Value::INFINITE;
        let beta = Value::INFINITE;
        let mut best: Option<(Move, Value)> = None;

        for &mv in moves {
            let child = pos.after(mv, side);
            let score = self.alpha_beta(&child, depth - 1, 1, alpha, beta, side.opponent())?;
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((mv, score));
            }
            if score > alpha {
                alpha = score;
            }
        }

        best.ok_or(Aborted)
    }

    fn alpha_beta(
        &mut self,
        pos: &Snapshot,
        depth: u32,
        ply: i32,
        mut alpha: Value,
        mut beta: Value,
        to_move: Side,
    ) -> Result<Value, Aborted> {
        if self.should_stop() {
            return Err(Aborted);
        }
        self.nodes += 1;

        if depth == 0 {
            return Ok(self.evaluator.evaluate(pos, self.side));
        }

        let mut moves = generate_legal(pos, to_move);
        let maximizing = to_move == self.side;
        if moves.is_empty() {
            // 手番側の負け。手数が短いほど勝ち側の評価が高い
            return Ok(if maximizing {
                Value::mated_in(ply)
            } else {
                Value::mate_in(ply)
            });
        }
        order_moves(moves.as_mut_slice(), None);

        let mut best = if maximizing {
            -Value::INFINITE
        } else {
            Value::INFINITE
        };
        for &mv in &moves {
            let child = pos.after(mv, to_move);
            let score = self.alpha_beta(&child, depth - 1, ply + 1, alpha, beta, to_move.opponent())?;
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    }

    /// 締め切りを過ぎたか
    #[inline]
    fn should_stop(&self) -> bool {
        Instant::now() >= self.deadline
    }
}
