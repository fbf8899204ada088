use std::fmt;

use chess_core::{record_move, Board, Color, Piece, Point};
use log::{error, info};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let board = Board::new();
    let mut rook = Piece::rook(Point::new(1, 1), Color::White, &board);
    let mut bishop = Piece::bishop(Point::new(3, 8), Color::Black, &board);

    let moves = [
        (&mut rook, Point::new(1, 7)),
        (&mut bishop, Point::new(2, 7)),
    ];
    for (piece, to) in moves {
        match piece.try_move_to(to) {
            Ok(mv) => info!("{} {}", piece.name(), mv),
            Err(err) => error!("{err}"),
        }
    }

    let mut game = String::new();
    if let Err(err) = record_game(&mut game, &mut rook, &mut bishop) {
        error!("failed to record moves: {err}");
        return;
    }
    println!("{game}");
}

fn record_game<'b>(out: &mut String, rook: &mut Piece<'b>, bishop: &mut Piece<'b>) -> fmt::Result {
    // Only moves the pieces accept are recorded
    for (piece, to) in [(rook, Point::new(7, 7)), (bishop, Point::new(8, 1))] {
        if !piece.is_valid_move(to) {
            info!("skipping {} to {}", piece.name(), to.to_algebraic());
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        record_move(piece, to, out)?;
    }
    Ok(())
}
