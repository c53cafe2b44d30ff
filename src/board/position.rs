//! The contract the search core expects from a rules engine.

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::error::RulesError;
use super::types::{Color, GameStatus, Piece, Square, Wing};

/// A mutable game position with exactly reversible move application.
///
/// The search never looks inside a move; it only enumerates, applies,
/// undoes and compares them. `undo` must restore the state that existed
/// before the matching `apply`, including castling and en-passant state.
pub trait Position: Clone {
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    /// Legal moves for the side to move, in the engine's enumeration order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn apply(&mut self, mv: Self::Move) -> Result<(), RulesError>;

    /// Take back the most recently applied move. No-op when nothing was applied.
    fn undo(&mut self);

    fn side_to_move(&self) -> Color;

    fn status(&self) -> GameStatus;

    fn in_check(&self) -> bool;

    fn is_capture(&self, mv: Self::Move) -> bool;

    fn piece_on(&self, square: Square) -> Option<(Color, Piece)>;

    fn has_castling_right(&self, color: Color, wing: Wing) -> bool;

    /// File (0 = a) of the en-passant target, if any.
    fn en_passant_file(&self) -> Option<u8>;

    fn is_terminal(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    fn is_checkmate(&self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Stalemate
    }
}

/// A move applied to a position for the lifetime of the guard.
///
/// Dropping the guard undoes the move, so every exit path of a search
/// loop (including early cutoffs and `?` returns) leaves the position
/// exactly as it found it.
pub struct MoveGuard<'a, P: Position> {
    position: &'a mut P,
}

impl<'a, P: Position> MoveGuard<'a, P> {
    pub fn apply(position: &'a mut P, mv: P::Move) -> Result<Self, RulesError> {
        position.apply(mv)?;
        Ok(MoveGuard { position })
    }
}

impl<P: Position> Deref for MoveGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.position
    }
}

impl<P: Position> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.position
    }
}

impl<P: Position> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) {
        self.position.undo();
    }
}
