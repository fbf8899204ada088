use thiserror::Error;

use crate::{piece::PieceType, Point};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("empty square notation")]
    Empty,
    #[error("invalid file '{0}', expected a-h")]
    InvalidFile(char),
    #[error("invalid rank \"{0}\", expected 1-8")]
    InvalidRank(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("destination {to} is off the board")]
    OutOfBounds { to: Point },
    #[error("{piece} cannot move from {from} to {to}")]
    IllegalPattern {
        piece: PieceType,
        from: Point,
        to: Point,
    },
}
