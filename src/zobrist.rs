//! Zobrist fingerprints for search positions.
//!
//! The fingerprint is recomputed from the full logical state at every probe:
//! piece placement, side to move, castling rights and en-passant file.
//! Identical states always produce identical fingerprints; distinct states
//! may rarely collide, which the transposition cache tolerates.

use rand::prelude::*;

use crate::board::{Color, Position, Square, Wing};

/// Seed used when none is configured. Fixed so runs are reproducible.
pub const DEFAULT_SEED: u64 = 1234567890;

/// 64-bit position fingerprint.
pub type Fingerprint = u64;

/// Random keys for every hashed feature, built once per search context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyTable {
    // piece_keys[color * 6 + piece][square]
    piece_keys: [[u64; 64]; 12],
    black_to_move_key: u64,
    // castling_keys[rights bitmask]: bit 0 = White king side, 1 = White queen side,
    // 2 = Black king side, 3 = Black queen side
    castling_keys: [u64; 16],
    // en_passant_keys[file_index] (only file matters for EP target)
    en_passant_keys: [u64; 8],
}

impl KeyTable {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut piece_keys = [[0; 64]; 12];
        let mut castling_keys = [0; 16];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for key in piece.iter_mut() {
                *key = rng.gen();
            }
        }

        let black_to_move_key = rng.gen();

        for key in &mut castling_keys {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        KeyTable {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    /// Fingerprint of the position's logical state.
    #[must_use]
    pub fn fingerprint<P: Position>(&self, position: &P) -> Fingerprint {
        let mut hash = 0;

        for square in Square::all() {
            if let Some((color, piece)) = position.piece_on(square) {
                hash ^= self.piece_keys[color.index() * 6 + piece.index()][square.index()];
            }
        }

        if position.side_to_move() == Color::Black {
            hash ^= self.black_to_move_key;
        }

        hash ^= self.castling_keys[castling_mask(position)];

        if let Some(file) = position.en_passant_file() {
            hash ^= self.en_passant_keys[usize::from(file & 7)];
        }

        hash
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

fn castling_mask<P: Position>(position: &P) -> usize {
    let mut mask = 0;
    for (bit, (color, wing)) in [
        (Color::White, Wing::KingSide),
        (Color::White, Wing::QueenSide),
        (Color::Black, Wing::KingSide),
        (Color::Black, Wing::QueenSide),
    ]
    .into_iter()
    .enumerate()
    {
        if position.has_castling_right(color, wing) {
            mask |= 1 << bit;
        }
    }
    mask
}
