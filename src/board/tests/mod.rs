//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation correctness
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Pins, checks, castling, en passant and game end
//! - `proptest.rs` - Property-based tests

use crate::board::{Color, GameBuilder, GameOptions, GameState, Piece, Square};

mod perft;

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Set up a position from the first four FEN fields. Clocks are ignored.
pub(super) fn position(fen: &str) -> GameState {
    position_with(fen, GameOptions::default())
}

pub(super) fn position_with(fen: &str, options: GameOptions) -> GameState {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().unwrap();
    let side = fields.next().unwrap_or("w");
    let castling = fields.next().unwrap_or("-");
    let en_passant = fields.next().unwrap_or("-");

    let mut builder = GameBuilder::new().options(options);
    for (row, rank) in placement.split('/').enumerate() {
        let mut col = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let piece = Piece::from_char(c).unwrap();
            builder = builder.piece(Square::new(row, col).unwrap(), color, piece);
            col += 1;
        }
    }

    builder = builder.side_to_move(if side == "b" {
        Color::Black
    } else {
        Color::White
    });
    for c in castling.chars() {
        builder = match c {
            'K' => builder.castle_kingside(Color::White),
            'Q' => builder.castle_queenside(Color::White),
            'k' => builder.castle_kingside(Color::Black),
            'q' => builder.castle_queenside(Color::Black),
            _ => builder,
        };
    }
    if en_passant != "-" {
        builder = builder.en_passant(sq(en_passant));
    }
    builder.build().unwrap()
}

/// Legal moves of the side to move, as sorted `e2e4` strings.
pub(super) fn move_strings(game: &mut GameState) -> Vec<String> {
    let mut moves: Vec<String> = game.legal_moves().iter().map(|m| m.notation()).collect();
    moves.sort();
    moves
}
