//! Deadline-bounded chess move selection.
//!
//! Iterative-deepening alpha-beta search over any rules engine that
//! implements [`Position`], with a Zobrist-keyed transposition cache and a
//! hand-tuned static evaluation. [`board::Game`] adapts `cozy-chess`.
//!
//! ```no_run
//! use std::time::Duration;
//! use move_selector::{select_move, Game};
//!
//! let game = Game::startpos();
//! if let Some(mv) = select_move(&game, Duration::from_millis(500)) {
//!     println!("{mv}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod evaluation;
pub mod search;
pub mod sync;
pub mod timer;
pub mod tt;
pub mod zobrist;

use std::time::Duration;

pub use board::{Color, Game, GameStatus, Move, Piece, Position, Square};
pub use config::EngineOptions;
pub use engine::SearchWorker;
pub use evaluation::{evaluate, Score, INFINITY};
pub use search::{SearchContext, SearchReport};
pub use tt::TranspositionCache;
pub use zobrist::KeyTable;

/// Choose a move for `position` within `deadline`, using a fresh search
/// context with default options.
///
/// Returns `None` when the position has no legal moves or no search depth
/// completed in time.
pub fn select_move<P: Position>(position: &P, deadline: Duration) -> Option<P::Move> {
    SearchContext::default().select_move_within(position, deadline)
}
