//! Static evaluation of leaf positions.
//!
//! Scores are centipawns from White's point of view regardless of who is to
//! move: positive favours White. Checkmate scores are `±INFINITY`.

use crate::board::{Color, GameStatus, Piece, Position, Square};

/// Centipawn score, positive = good for White.
pub type Score = i32;

/// Value of a won (checkmate) position. No static score reaches it.
pub const INFINITY: Score = 1_000_000;

// Simple material values
const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 320;
const BISHOP_VALUE: i32 = 330;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;

/// Per legal move of the side to move
pub const MOBILITY_WEIGHT: i32 = 5;

/// Per piece standing on d4, e4, d5 or e5
pub const CENTER_BONUS: i32 = 20;

/// Per unit of king distance from the centre
pub const KING_SHELTER_WEIGHT: i32 = 3;

// Piece-square tables, rank 8 first, from White's point of view.
const PAWN_PST: [i32; 64] = [
    0,   0,   0,   0,   0,   0,   0,   0,
    50,  50,  50,  50,  50,  50,  50,  50,
    10,  10,  20,  30,  30,  20,  10,  10,
    5,   5,   10,  25,  25,  10,  5,   5,
    0,   0,   0,   20,  20,   0,   0,   0,
    5,   -5,  -10,  0,   0,   -10, -5,  5,
    5,   10,  10,  -20, -20,  10,  10,  5,
    0,   0,   0,   0,   0,   0,   0,   0
];

const KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,  0,   0,   0,   0,   -20, -40,
    -30,  0,   10,  15,  15,  10,  0,   -30,
    -30,  5,   15,  20,  20,  15,  5,   -30,
    -30,  0,   15,  20,  20,  15,  0,   -30,
    -30,  5,   10,  15,  15,  10,  5,   -30,
    -40, -20,  0,   5,   5,   0,   -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50
];

const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,  0,   0,   0,   0,   0,   0,   -10,
    -10,  0,   5,   10,  10,  5,   0,   -10,
    -10,  5,   5,   10,  10,  5,   5,   -10,
    -10,  0,   10,  10,  10,  10,  0,   -10,
    -10,  10,  10,  10,  10,  10,  10,  -10,
    -10,  5,   0,   0,   0,   0,   5,   -10,
    -20, -10, -10, -10, -10, -10, -10, -20
];

const ROOK_PST: [i32; 64] = [
    0,  0,  0,  0,  0,  0,  0,  0,
    5,  10, 10, 10, 10, 10, 10, 5,
    -5, 0,  0,  0,  0,  0,  0,  -5,
    -5, 0,  0,  0,  0,  0,  0,  -5,
    -5, 0,  0,  0,  0,  0,  0,  -5,
    -5, 0,  0,  0,  0,  0,  0,  -5,
    -5, 0,  0,  0,  0,  0,  0,  -5,
    0,  0,  0,  5,  5,  0,  0,  0
];

const QUEEN_PST: [i32; 64] = [
    -20, -10, -10, -5, -5, -10, -10, -20,
    -10,  0,   0,   0,  0,   0,   0,   -10,
    -10,  0,   5,   5,  5,   5,   0,   -10,
    -5,   0,   5,   5,  5,   5,   0,   -5,
    0,    0,   5,   5,  5,   5,   0,   -5,
    -10,  5,   5,   5,  5,   5,   0,   -10,
    -10,  0,   5,   0,  0,   0,   0,   -10,
    -20, -10, -10, -5, -5, -10, -10, -20
];

const KING_PST: [i32; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    20,  20,   0,   0,   0,   0,  20,  20,
    20,  30,  10,  0,   0,  10,  30,  20
];

/// Get simple material value of a piece. The king is priceless and counts zero.
#[must_use]
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => 0,
    }
}

/// Piece-square value for `piece` of `color` standing on `square`, from that
/// side's own point of view.
#[must_use]
pub fn pst_value(piece: Piece, color: Color, square: Square) -> i32 {
    let table_sq = match color {
        Color::White => square.flip().index(),
        Color::Black => square.index(),
    };
    match piece {
        Piece::Pawn => PAWN_PST[table_sq],
        Piece::Knight => KNIGHT_PST[table_sq],
        Piece::Bishop => BISHOP_PST[table_sq],
        Piece::Rook => ROOK_PST[table_sq],
        Piece::Queen => QUEEN_PST[table_sq],
        Piece::King => KING_PST[table_sq],
    }
}

fn is_center(square: Square) -> bool {
    matches!(square.file(), 3 | 4) && matches!(square.rank(), 3 | 4)
}

/// Manhattan distance from the central 2x2 block (0 on d4/e4/d5/e5, 6 in a corner).
#[must_use]
pub fn center_distance(square: Square) -> i32 {
    let file = i32::from(square.file());
    let rank = i32::from(square.rank());
    (3 - file).max(file - 4) + (3 - rank).max(rank - 4)
}

/// Evaluate a position from White's point of view.
///
/// Terminal positions short-circuit: the mated side gets the unfavourable
/// infinity, stalemate and other draws score zero.
#[must_use]
pub fn evaluate<P: Position>(position: &P) -> Score {
    match position.status() {
        GameStatus::Checkmate => return -position.side_to_move().sign() * INFINITY,
        GameStatus::Stalemate | GameStatus::Draw => return 0,
        GameStatus::Ongoing => {}
    }

    material_and_placement(position)
        + mobility(position)
        + center_control(position)
        + king_placement(position)
}

/// Material plus piece-square adjustments for both sides.
#[must_use]
pub fn material_and_placement<P: Position>(position: &P) -> Score {
    Square::all()
        .filter_map(|square| position.piece_on(square).map(|occupant| (square, occupant)))
        .map(|(square, (color, piece))| {
            color.sign() * (piece_value(piece) + pst_value(piece, color, square))
        })
        .sum()
}

/// Legal-move count of the side to move, signed by that side.
#[must_use]
pub fn mobility<P: Position>(position: &P) -> Score {
    let count = position.legal_moves().len() as i32;
    position.side_to_move().sign() * MOBILITY_WEIGHT * count
}

#[must_use]
pub fn center_control<P: Position>(position: &P) -> Score {
    Square::all()
        .filter(|&square| is_center(square))
        .filter_map(|square| position.piece_on(square))
        .map(|(color, _)| color.sign() * CENTER_BONUS)
        .sum()
}

/// Kings further from the centre score as safer for their owner.
#[must_use]
pub fn king_placement<P: Position>(position: &P) -> Score {
    Square::all()
        .filter_map(|square| match position.piece_on(square) {
            Some((color, Piece::King)) => Some(color.sign() * KING_SHELTER_WEIGHT * center_distance(square)),
            _ => None,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Game;

    fn game(fen: &str) -> Game {
        Game::from_fen(fen).expect("valid fen")
    }

    #[test]
    fn startpos_scores_only_mobility() {
        let start = Game::startpos();
        assert_eq!(material_and_placement(&start), 0);
        assert_eq!(center_control(&start), 0);
        assert_eq!(king_placement(&start), 0);
        assert_eq!(evaluate(&start), 20 * MOBILITY_WEIGHT);
    }

    #[test]
    fn mobility_is_signed_by_side_to_move() {
        let black = game("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
        assert_eq!(mobility(&black), -20 * MOBILITY_WEIGHT);
        assert_eq!(evaluate(&black), -20 * MOBILITY_WEIGHT);
    }

    #[test]
    fn checkmate_favours_the_mating_side() {
        // White is mated
        let white_mated = game("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1");
        assert_eq!(evaluate(&white_mated), -INFINITY);

        // Black is mated (back rank)
        let black_mated = game("4Q1k1/5ppp/8/8/8/8/8/7K b - - 0 1");
        assert_eq!(evaluate(&black_mated), INFINITY);
    }

    #[test]
    fn stalemate_is_zero() {
        let stalemate = game("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(evaluate(&stalemate), 0);
    }

    #[test]
    fn extra_material_shows_up() {
        // White is a queen up
        let up = game("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
        assert!(evaluate(&up) > QUEEN_VALUE / 2);
        let down = game("3qk3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(evaluate(&down) < -QUEEN_VALUE / 2);
    }

    #[test]
    fn pst_mirrors_between_colors() {
        let e4 = Square::new(4, 3).expect("on board");
        let e5 = Square::new(4, 4).expect("on board");
        assert_eq!(pst_value(Piece::Pawn, Color::White, e4), 20);
        assert_eq!(pst_value(Piece::Pawn, Color::Black, e5), 20);
        let g1 = Square::new(6, 0).expect("on board");
        let g8 = Square::new(6, 7).expect("on board");
        assert_eq!(
            pst_value(Piece::King, Color::White, g1),
            pst_value(Piece::King, Color::Black, g8)
        );
    }

    #[test]
    fn center_occupancy_is_signed_by_color() {
        // White pawn on e4, black pawn on d5
        let both = game("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(center_control(&both), 0);
        let white_only = game("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(center_control(&white_only), CENTER_BONUS);
    }

    #[test]
    fn king_distance_from_center() {
        assert_eq!(center_distance(Square::new(3, 3).expect("d4")), 0);
        assert_eq!(center_distance(Square::new(0, 0).expect("a1")), 6);
        assert_eq!(center_distance(Square::new(7, 7).expect("h8")), 6);
        // White king in the corner, black king centralised
        let kings = game("8/8/8/4k3/8/8/8/K7 w - - 0 1");
        assert_eq!(king_placement(&kings), KING_SHELTER_WEIGHT * 6);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let pos = game("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4");
        assert_eq!(evaluate(&pos), evaluate(&pos));
    }
}
