// Board geometry and piece movement rules
pub mod board;
pub mod error;
pub mod moves;
pub mod piece;
pub mod point;
pub mod rectangle;

// Re-export main types for convenience
pub use board::Board;
pub use error::{MoveError, NotationError};
pub use moves::{record_move, Move};
pub use piece::{Color, Piece, PieceType};
pub use point::Point;
pub use rectangle::Rectangle;
