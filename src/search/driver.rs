//! Iterative deepening at the root under a deadline.
//!
//! Each depth scans every root move with a full window. A depth's leader is
//! committed only when its scan finishes; a scan cut short by the clock,
//! the stop flag or a rules fault contributes nothing. The clock is read at
//! the head of every depth and before each root move, never inside the
//! recursion, so one subtree may run past the deadline.

use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use super::{order_moves, SearchContext, SearchError};
use crate::board::{Color, MoveGuard, Position};
use crate::evaluation::{Score, INFINITY};
use crate::timer::{Clock, WallClock};

/// Result of scanning the root at one depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthOutcome<M> {
    /// Every root move was searched.
    Completed { best: M, value: Score },
    /// The deadline or a stop request arrived before the scan finished.
    Interrupted,
}

/// Summary of one decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport<M> {
    /// Leader of the deepest completed depth
    pub best_move: Option<M>,
    /// Value of `best_move` from White's point of view
    pub value: Score,
    /// Deepest completed depth, 0 when none completed
    pub depth: u32,
    pub nodes: u64,
    pub cache_hits: u64,
    pub elapsed: Duration,
}

impl<M> Default for SearchReport<M> {
    fn default() -> Self {
        SearchReport {
            best_move: None,
            value: 0,
            depth: 0,
            nodes: 0,
            cache_hits: 0,
            elapsed: Duration::ZERO,
        }
    }
}

impl SearchContext {
    /// Pick a move within the configured deadline.
    pub fn select_move<P: Position>(&mut self, position: &P) -> Option<P::Move> {
        let deadline = self.options.deadline;
        self.select_move_within(position, deadline)
    }

    /// Pick a move within `deadline` of wall-clock time.
    ///
    /// Starts a new decision, so a stop request left over from an earlier
    /// one is cleared first.
    pub fn select_move_within<P: Position>(
        &mut self,
        position: &P,
        deadline: Duration,
    ) -> Option<P::Move> {
        self.stop.reset();
        let clock = WallClock::start();
        self.think(position, deadline, &clock).best_move
    }

    /// Deepen one ply at a time until `deadline` passes on `clock`.
    ///
    /// The caller's position is never touched; the search runs on a copy.
    /// A pending stop request is honoured, not cleared.
    /// Returns the deepest fully searched result, or no move when the root
    /// is terminal or no depth completed in time.
    pub fn think<P, C>(&mut self, position: &P, deadline: Duration, clock: &C) -> SearchReport<P::Move>
    where
        P: Position,
        C: Clock + ?Sized,
    {
        let started = Instant::now();
        let mut root = position.clone();
        let mut report = SearchReport::default();

        if !self.options.persist_cache {
            self.cache.clear();
        }
        self.stats.reset();

        if root.legal_moves().is_empty() {
            debug!("root has no legal moves ({:?})", root.status());
            return report;
        }

        let maximizing = root.side_to_move() == Color::White;
        let winning = if maximizing { INFINITY } else { -INFINITY };
        let stop = self.stop_flag();
        let interrupted = || stop.is_stopped() || clock.expired(deadline);

        let mut depth = 1;
        while depth <= self.options.max_depth && !interrupted() {
            match self.scan_root(&mut root, depth, maximizing, &interrupted) {
                Ok(DepthOutcome::Completed { best, value }) => {
                    report.best_move = Some(best);
                    report.value = value;
                    report.depth = depth;
                    self.stats.completed_depth = depth;
                    debug!(
                        "depth {depth} best {best} value {value} nodes {} cache hits {}",
                        self.stats.nodes, self.stats.cache_hits
                    );
                    if value == winning {
                        debug!("forced mate found at depth {depth}");
                        break;
                    }
                }
                Ok(DepthOutcome::Interrupted) => {
                    debug!("depth {depth} interrupted, keeping depth {}", report.depth);
                    break;
                }
                Err(err) => {
                    warn!("depth {depth} aborted: {err}");
                    break;
                }
            }
            depth += 1;
        }

        report.nodes = self.stats.nodes;
        report.cache_hits = self.stats.cache_hits;
        report.elapsed = started.elapsed();
        report
    }

    /// One full root scan at `depth` with no deadline.
    ///
    /// Does not clear the cache. Returns `None` for a terminal root or when
    /// the rules engine faults.
    pub fn search_depth<P: Position>(&mut self, position: &P, depth: u32) -> Option<(P::Move, Score)> {
        let mut root = position.clone();
        let maximizing = root.side_to_move() == Color::White;
        match self.scan_root(&mut root, depth.max(1), maximizing, &|| false) {
            Ok(DepthOutcome::Completed { best, value }) => Some((best, value)),
            Ok(DepthOutcome::Interrupted) => None,
            Err(err) => {
                warn!("fixed-depth search aborted: {err}");
                None
            }
        }
    }

    fn scan_root<P: Position>(
        &mut self,
        root: &mut P,
        depth: u32,
        maximizing: bool,
        interrupted: &dyn Fn() -> bool,
    ) -> Result<DepthOutcome<P::Move>, SearchError> {
        let moves = root.legal_moves();
        let moves = order_moves(root, moves)?;

        let mut leader: Option<(P::Move, Score)> = None;
        for mv in moves {
            if interrupted() {
                return Ok(DepthOutcome::Interrupted);
            }

            let value = {
                let mut child = MoveGuard::apply(root, mv)?;
                self.alphabeta(&mut *child, depth - 1, -INFINITY, INFINITY, !maximizing)?
            };
            trace!("depth {depth} root move {mv} value {value}");

            let improves = match leader {
                None => true,
                Some((_, best)) if maximizing => value > best,
                Some((_, best)) => value < best,
            };
            if improves {
                leader = Some((mv, value));
            }
        }

        Ok(match leader {
            Some((best, value)) => DepthOutcome::Completed { best, value },
            None => DepthOutcome::Interrupted,
        })
    }
}
