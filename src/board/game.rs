//! [`Position`] implementation backed by the `cozy-chess` rules engine.

use std::fmt;
use std::str::FromStr;

use cozy_chess::{Board, Move};

use super::error::{FenError, MoveParseError, RulesError};
use super::position::Position;
use super::types::{Color, GameStatus, Piece, Square, Wing};

/// Starting position FEN
pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A chess game: the current board plus every prior board, so that
/// `undo` restores an exact copy instead of reconstructing state.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: Vec<Board>,
}

impl Game {
    #[must_use]
    pub fn startpos() -> Self {
        Game {
            board: Board::default(),
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let board = Board::from_fen(fen.trim(), false).map_err(|err| FenError::Invalid {
            fen: fen.to_string(),
            reason: format!("{err:?}"),
        })?;
        Ok(Game {
            board,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        self.board.to_string()
    }

    /// Hash maintained by the rules engine itself, independent of the search's
    /// own fingerprint. Useful for checking that undo restored the board.
    #[must_use]
    pub fn rules_hash(&self) -> u64 {
        self.board.hash()
    }

    /// Number of moves applied and not yet undone.
    #[must_use]
    pub fn applied_moves(&self) -> usize {
        self.history.len()
    }

    /// Parse a coordinate move (`e2e4`, `e7e8q`) and check it is legal here.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let mv: Move = notation
            .trim()
            .parse()
            .map_err(|_| MoveParseError::InvalidNotation {
                notation: notation.to_string(),
            })?;
        if self.legal_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
        }
    }

    /// Parse and apply a coordinate move.
    pub fn play(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.apply(mv).map_err(|_| MoveParseError::IllegalMove {
            notation: notation.to_string(),
        })?;
        Ok(mv)
    }

    fn has_legal_moves(&self) -> bool {
        let mut found = false;
        self.board.generate_moves(|moves| {
            found |= !moves.is_empty();
            found
        });
        found
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::startpos()
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Game::from_fen(fen)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

fn color_from(color: cozy_chess::Color) -> Color {
    match color {
        cozy_chess::Color::White => Color::White,
        cozy_chess::Color::Black => Color::Black,
    }
}

fn color_to(color: Color) -> cozy_chess::Color {
    match color {
        Color::White => cozy_chess::Color::White,
        Color::Black => cozy_chess::Color::Black,
    }
}

fn piece_from(piece: cozy_chess::Piece) -> Piece {
    match piece {
        cozy_chess::Piece::Pawn => Piece::Pawn,
        cozy_chess::Piece::Knight => Piece::Knight,
        cozy_chess::Piece::Bishop => Piece::Bishop,
        cozy_chess::Piece::Rook => Piece::Rook,
        cozy_chess::Piece::Queen => Piece::Queen,
        cozy_chess::Piece::King => Piece::King,
    }
}

impl Position for Game {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    fn apply(&mut self, mv: Move) -> Result<(), RulesError> {
        let previous = self.board.clone();
        self.board
            .try_play(mv)
            .map_err(|_| RulesError::IllegalMove {
                notation: mv.to_string(),
            })?;
        self.history.push(previous);
        Ok(())
    }

    fn undo(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.board = previous;
        }
    }

    fn side_to_move(&self) -> Color {
        color_from(self.board.side_to_move())
    }

    fn status(&self) -> GameStatus {
        match self.board.status() {
            cozy_chess::GameStatus::Ongoing => GameStatus::Ongoing,
            cozy_chess::GameStatus::Won => GameStatus::Checkmate,
            cozy_chess::GameStatus::Drawn => {
                if self.has_legal_moves() {
                    GameStatus::Draw
                } else {
                    GameStatus::Stalemate
                }
            }
        }
    }

    fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn is_capture(&self, mv: Move) -> bool {
        let them = self.board.colors(!self.board.side_to_move());
        if them.has(mv.to) {
            return true;
        }
        // En passant: a pawn changing file onto an empty square
        self.board.piece_on(mv.from) == Some(cozy_chess::Piece::Pawn)
            && mv.from.file() != mv.to.file()
    }

    fn piece_on(&self, square: Square) -> Option<(Color, Piece)> {
        let sq = cozy_chess::Square::index(square.index());
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some((color_from(color), piece_from(piece)))
    }

    fn has_castling_right(&self, color: Color, wing: Wing) -> bool {
        let rights = self.board.castle_rights(color_to(color));
        match wing {
            Wing::KingSide => rights.short.is_some(),
            Wing::QueenSide => rights.long.is_some(),
        }
    }

    /// Only reported when a pawn can actually capture en passant; the rules
    /// engine keeps the file after every double push.
    fn en_passant_file(&self) -> Option<u8> {
        let file = self.board.en_passant()?;
        let us = self.board.side_to_move();
        let target = cozy_chess::Square::new(file, cozy_chess::Rank::Sixth.relative_to(us));
        let pawns = self.board.colored_pieces(us, cozy_chess::Piece::Pawn);

        let mut capturable = false;
        self.board.generate_moves_for(pawns, |moves| {
            capturable |= moves.to.has(target);
            capturable
        });
        capturable.then_some(file as u8)
    }
}
