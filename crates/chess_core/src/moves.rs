use std::fmt;

use crate::{piece::PieceType, Board, Piece, Point};

/// A committed move, rendered as `<S><from> <S><to>`, e.g. `Ra7 Rg7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub piece: PieceType,
    pub from: Point,
    pub to: Point,
}

impl Move {
    pub fn new(piece: PieceType, from: Point, to: Point) -> Self {
        Self { piece, from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = self.piece.short_name();
        write!(
            f,
            "{}{} {}{}",
            short,
            self.from.to_algebraic(),
            short,
            self.to.to_algebraic()
        )
    }
}

/// Writes the piece's notation, commits the move, then writes the new notation.
///
/// Panics if `to` is not a valid move for `piece`, like [`Piece::move_to`].
pub fn record_move<W: fmt::Write>(piece: &mut Piece<'_>, to: Point, out: &mut W) -> fmt::Result {
    write!(out, "{}{}", piece.short_name(), piece.position_string())?;
    piece.move_to(to);
    write!(out, " {}{}", piece.short_name(), piece.position_string())
}

// Shared by every piece type; no movement rule may skip it
pub fn is_within_board(board: &Board, to: Point) -> bool {
    board.is_within_bounds(to)
}

// Shape only: pieces never block each other here
pub fn is_valid_piece_movement(piece_type: PieceType, from: Point, to: Point) -> bool {
    match piece_type {
        PieceType::Knight => is_valid_knight_move(from, to),
        PieceType::Bishop => is_valid_diagonal_move(from, to),
        PieceType::Rook => is_valid_straight_move(from, to),
        PieceType::Queen => is_valid_diagonal_move(from, to) || is_valid_straight_move(from, to),
        PieceType::King => is_valid_king_move(from, to),
    }
}

fn is_valid_straight_move(from: Point, to: Point) -> bool {
    to.x == from.x || to.y == from.y
}

fn is_valid_diagonal_move(from: Point, to: Point) -> bool {
    let delta = to - from;
    delta.x.abs() == delta.y.abs()
}

fn is_valid_knight_move(from: Point, to: Point) -> bool {
    let delta = to - from;
    let (file_diff, rank_diff) = (delta.x.abs(), delta.y.abs());

    (rank_diff == 2 && file_diff == 1) || (rank_diff == 1 && file_diff == 2)
}

fn is_valid_king_move(from: Point, to: Point) -> bool {
    let delta = to - from;

    delta.x.abs() <= 1 && delta.y.abs() <= 1
}
