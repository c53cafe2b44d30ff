//! Move ordering for search.
//!
//! Three tiers: captures, then moves that give check, then everything else.
//! The sort is stable, so moves within a tier keep the rules engine's
//! enumeration order and identical inputs always order identically.

use std::cmp::Reverse;

use crate::board::{MoveGuard, Position, RulesError};

/// Ordering tier of a move; higher variants are tried first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveClass {
    Quiet,
    Check,
    Capture,
}

/// Classify one move. Detecting check plays the move and takes it back.
pub fn classify_move<P: Position>(position: &mut P, mv: P::Move) -> Result<MoveClass, RulesError> {
    if position.is_capture(mv) {
        return Ok(MoveClass::Capture);
    }
    let after = MoveGuard::apply(position, mv)?;
    if after.in_check() {
        Ok(MoveClass::Check)
    } else {
        Ok(MoveClass::Quiet)
    }
}

/// Rank `moves` best-first.
pub fn order_moves<P: Position>(
    position: &mut P,
    moves: Vec<P::Move>,
) -> Result<Vec<P::Move>, RulesError> {
    let mut ranked = Vec::with_capacity(moves.len());
    for mv in moves {
        ranked.push((classify_move(position, mv)?, mv));
    }
    ranked.sort_by_key(|&(class, _)| Reverse(class));
    Ok(ranked.into_iter().map(|(_, mv)| mv).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Game;

    fn classes(game: &mut Game, moves: &[cozy_chess::Move]) -> Vec<MoveClass> {
        moves
            .iter()
            .map(|&mv| classify_move(game, mv).expect("legal move"))
            .collect()
    }

    #[test]
    fn captures_then_checks_then_quiet() {
        // Qxd5 captures; Qe2, Qa4, Qh5 give check along open lines
        let mut game = Game::from_fen("4k3/8/8/3p4/8/8/8/3QK3 w - - 0 1").expect("valid fen");
        let fen = game.to_fen();
        let legal = game.legal_moves();
        let ordered = order_moves(&mut game, legal.clone()).expect("legal moves");

        assert_eq!(game.to_fen(), fen, "ordering must leave the board untouched");
        assert_eq!(ordered.len(), legal.len());
        assert_eq!(ordered[0].to_string(), "d1d5");

        let ranked = classes(&mut game, &ordered);
        assert!(ranked.windows(2).all(|w| w[0] >= w[1]));
        assert!(ranked.contains(&MoveClass::Check));
        assert!(ranked.contains(&MoveClass::Quiet));

        let e2 = game.parse_move("d1e2").expect("legal");
        assert_eq!(classify_move(&mut game, e2), Ok(MoveClass::Check));
        let c2 = game.parse_move("d1c2").expect("legal");
        assert_eq!(classify_move(&mut game, c2), Ok(MoveClass::Quiet));
    }

    #[test]
    fn ties_keep_enumeration_order() {
        let mut game = Game::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")
            .expect("valid fen");
        let legal = game.legal_moves();
        let ordered = order_moves(&mut game, legal.clone()).expect("legal moves");
        let ranked = classes(&mut game, &ordered);

        for class in [MoveClass::Capture, MoveClass::Check, MoveClass::Quiet] {
            let in_tier: Vec<_> = ordered
                .iter()
                .zip(&ranked)
                .filter(|(_, c)| **c == class)
                .map(|(mv, _)| *mv)
                .collect();
            let positions: Vec<usize> = in_tier
                .iter()
                .map(|mv| legal.iter().position(|m| m == mv).expect("same move set"))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{class:?} tier reordered");
        }
    }

    #[test]
    fn ordering_is_deterministic() {
        let mut game = Game::startpos();
        let legal = game.legal_moves();
        let first = order_moves(&mut game, legal.clone()).expect("legal moves");
        let second = order_moves(&mut game, legal).expect("legal moves");
        assert_eq!(first, second);
    }

    #[test]
    fn illegal_move_reports_error() {
        let mut game = Game::startpos();
        let bogus: cozy_chess::Move = "e2e5".parse().expect("well-formed");
        assert!(order_moves(&mut game, vec![bogus]).is_err());
    }
}
