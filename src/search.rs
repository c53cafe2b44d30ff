//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Minimax with alpha-beta pruning over absolute (White-positive) scores
//! - Transposition cache consulted before every expansion
//! - Move ordering: captures, then checks, then quiet moves
//! - Iterative deepening under a wall-clock deadline, committing only
//!   fully searched depths
//!
//! All state lives in a [`SearchContext`]: the fingerprint keys, the cache
//! and the counters. One context serves one decision-making session and
//! must not be used by two searches at once.

mod driver;
mod move_order;

use std::fmt;

use crate::board::{MoveGuard, Position, RulesError};
use crate::config::EngineOptions;
use crate::evaluation::{evaluate, Score, INFINITY};
use crate::sync::StopFlag;
use crate::tt::TranspositionCache;
use crate::zobrist::{Fingerprint, KeyTable};

pub use driver::{DepthOutcome, SearchReport};
pub use move_order::{classify_move, order_moves, MoveClass};

/// A failure inside the tree walk. Never escapes the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    Rules(RulesError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Rules(err) => write!(f, "rules engine fault: {err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Rules(err) => Some(err),
        }
    }
}

impl From<RulesError> for SearchError {
    fn from(err: RulesError) -> Self {
        SearchError::Rules(err)
    }
}

/// Statistics tracked during search
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cache_hits: u64,
    pub completed_depth: u32,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

pub struct SearchContext {
    keys: KeyTable,
    cache: TranspositionCache,
    options: EngineOptions,
    stats: SearchStats,
    stop: StopFlag,
}

impl SearchContext {
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        let mut cache = TranspositionCache::new();
        cache.set_probing(options.use_cache);
        SearchContext {
            keys: KeyTable::new(options.seed),
            cache,
            options,
            stats: SearchStats::default(),
            stop: StopFlag::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    #[must_use]
    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Handle for stopping a decision from another thread.
    ///
    /// A stop stays in force until [`reset`](Self::reset) or the next
    /// [`select_move`](Self::select_move); `think` alone does not clear it.
    #[must_use]
    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    /// Forget everything learned so far: cache entries and counters.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.stats.reset();
        self.stop.reset();
    }

    #[must_use]
    pub fn fingerprint<P: Position>(&self, position: &P) -> Fingerprint {
        self.keys.fingerprint(position)
    }

    /// Alpha-beta minimax to `depth` plies. White maximizes.
    ///
    /// The position is handed back unchanged on every path, including
    /// errors. The returned value is the best child value found; once
    /// `beta <= alpha` the remaining moves are skipped.
    pub fn alphabeta<P: Position>(
        &mut self,
        position: &mut P,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<Score, SearchError> {
        self.stats.nodes += 1;

        if depth == 0 || position.is_terminal() {
            return Ok(evaluate(position));
        }

        let fingerprint = self.keys.fingerprint(position);
        if let Some(value) = self.cache.probe(fingerprint, depth, alpha, beta) {
            self.stats.cache_hits += 1;
            return Ok(value);
        }

        let (window_alpha, window_beta) = (alpha, beta);
        let moves = position.legal_moves();
        let moves = order_moves(position, moves)?;

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in moves {
            let value = {
                let mut child = MoveGuard::apply(position, mv)?;
                self.alphabeta(&mut *child, depth - 1, alpha, beta, !maximizing)?
            };

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if beta <= alpha {
                break;
            }
        }

        self.cache
            .store(fingerprint, depth, best, window_alpha, window_beta);
        Ok(best)
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}
