//! Error types for rules-engine operations.

use std::fmt;

/// Error raised by a [`Position`](super::Position) when it cannot perform an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for RulesError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The rules engine rejected the FEN string
    Invalid { fen: String, reason: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Invalid { fen, reason } => {
                write!(f, "Invalid FEN '{fen}': {reason}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Not a coordinate move such as `e2e4` or `e7e8q`
    InvalidNotation { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidNotation { notation } => {
                write!(f, "Invalid move notation '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_error_illegal_move() {
        let err = RulesError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_fen_error_carries_input() {
        let err = FenError::Invalid {
            fen: "8/8/8".to_string(),
            reason: "missing fields".to_string(),
        };
        assert!(err.to_string().contains("8/8/8"));
        assert!(err.to_string().contains("missing fields"));
    }

    #[test]
    fn test_move_error_invalid_notation() {
        let err = MoveParseError::InvalidNotation {
            notation: "z9z9".to_string(),
        };
        assert!(err.to_string().contains("z9z9"));
    }

    #[test]
    fn test_move_error_illegal_move() {
        let err = MoveParseError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_error_clone() {
        let err = RulesError::IllegalMove {
            notation: "a1a8".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
