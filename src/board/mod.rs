//! Rules-engine seam.
//!
//! The search core only talks to a [`Position`]: enumerate legal moves,
//! apply and undo them, and answer a handful of state queries. [`Game`]
//! is the shipped implementation, an adapter over `cozy-chess`.
//!
//! # Example
//! ```
//! use move_selector::board::{Game, Position};
//!
//! let game = Game::startpos();
//! println!("Starting position has {} legal moves", game.legal_moves().len());
//! ```

mod error;
mod game;
mod position;
mod types;

pub use error::{FenError, MoveParseError, RulesError};
pub use game::{Game, STARTPOS_FEN};
pub use position::{MoveGuard, Position};
pub use types::{Color, GameStatus, Piece, Square, Wing};

/// Move type of the shipped rules engine.
pub type Move = cozy_chess::Move;
