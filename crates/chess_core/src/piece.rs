use std::fmt;

use log::{debug, trace, warn};

use crate::{
    error::MoveError,
    moves::{self, Move},
    Board, Point,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub fn name(self) -> &'static str {
        match self {
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }

    // Algebraic notation letter
    pub fn short_name(self) -> &'static str {
        match self {
            PieceType::Knight => "N",
            PieceType::Bishop => "B",
            PieceType::Rook => "R",
            PieceType::Queen => "Q",
            PieceType::King => "K",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece standing on a board it borrows for bounds checks.
///
/// Only the position changes after construction, and only through a
/// successful move.
#[derive(Debug, Clone)]
pub struct Piece<'b> {
    piece_type: PieceType,
    color: Color,
    position: Point,
    board: &'b Board,
}

impl<'b> Piece<'b> {
    pub fn new(piece_type: PieceType, position: Point, color: Color, board: &'b Board) -> Self {
        Self {
            piece_type,
            color,
            position,
            board,
        }
    }

    pub fn rook(position: Point, color: Color, board: &'b Board) -> Self {
        Self::new(PieceType::Rook, position, color, board)
    }

    pub fn bishop(position: Point, color: Color, board: &'b Board) -> Self {
        Self::new(PieceType::Bishop, position, color, board)
    }

    pub fn queen(position: Point, color: Color, board: &'b Board) -> Self {
        Self::new(PieceType::Queen, position, color, board)
    }

    pub fn knight(position: Point, color: Color, board: &'b Board) -> Self {
        Self::new(PieceType::Knight, position, color, board)
    }

    pub fn king(position: Point, color: Color, board: &'b Board) -> Self {
        Self::new(PieceType::King, position, color, board)
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn position_string(&self) -> String {
        self.position.to_algebraic()
    }

    pub fn board(&self) -> &'b Board {
        self.board
    }

    pub fn name(&self) -> &'static str {
        self.piece_type.name()
    }

    pub fn short_name(&self) -> &'static str {
        self.piece_type.short_name()
    }

    /// Bounds check plus the piece's movement pattern. Staying in place
    /// passes whenever the pattern allows a zero-length move.
    pub fn is_valid_move(&self, to: Point) -> bool {
        self.check_move(to).is_ok()
    }

    /// Moves the piece, panicking if `to` is not a valid move.
    ///
    /// Callers are expected to consult [`Piece::is_valid_move`] first; use
    /// [`Piece::try_move_to`] when the destination is not known to be valid.
    pub fn move_to(&mut self, to: Point) {
        if let Err(err) = self.check_move(to) {
            warn!("{} {} asked to make an invalid move", self.color_name(), self.name());
            panic!("invalid move: {err}");
        }
        self.commit(to);
    }

    pub fn try_move_to(&mut self, to: Point) -> Result<Move, MoveError> {
        self.check_move(to)?;
        Ok(self.commit(to))
    }

    // Destinations only, the current square is left out
    pub fn valid_moves(&self) -> Vec<Point> {
        self.board
            .squares()
            .filter(|&to| to != self.position && self.is_valid_move(to))
            .collect()
    }

    fn check_move(&self, to: Point) -> Result<(), MoveError> {
        if !moves::is_within_board(self.board, to) {
            trace!("Move rejected as {} is off the board", to);
            return Err(MoveError::OutOfBounds { to });
        }

        if !moves::is_valid_piece_movement(self.piece_type, self.position, to) {
            trace!("Move rejected as the {} cannot reach {} from {}", self.name(), to, self.position);
            return Err(MoveError::IllegalPattern {
                piece: self.piece_type,
                from: self.position,
                to,
            });
        }

        Ok(())
    }

    fn commit(&mut self, to: Point) -> Move {
        let mv = Move::new(self.piece_type, self.position, to);
        debug!("{} {}: {}", self.color_name(), self.name(), mv);
        self.position = to;
        mv
    }

    fn color_name(&self) -> &'static str {
        match self.color {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}
