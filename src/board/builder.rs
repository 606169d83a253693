//! Fluent builder for constructing game positions.
//!
//! Allows setting up arbitrary positions piece by piece.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameBuilder, Piece, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let mut game = GameBuilder::new()
//!     .piece(sq("e1"), Color::White, Piece::King)
//!     .piece(sq("e8"), Color::Black, Piece::King)
//!     .piece(sq("a2"), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.legal_moves().len(), 7);
//! ```

use log::warn;

use super::{
    Board, CastleRights, Cell, Color, GameOptions, GameState, Piece, PositionError, Square,
};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castle_rights: CastleRights,
    en_passant: Option<Square>,
    options: GameOptions,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castle_rights: CastleRights::none(),
            en_passant: None,
            options: GameOptions::default(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::starting();
        let mut builder = Self::new();
        for sq in Square::all() {
            if let Cell::Occupied(color, piece) = board[sq] {
                builder.pieces.push((sq, color, piece));
            }
        }
        builder.castle_rights = CastleRights::all();
        builder
    }

    /// Place a piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castle_rights.set(color, true);
        self
    }

    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castle_rights.set(color, false);
        self
    }

    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castle_rights = CastleRights::all();
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castle_rights = CastleRights::none();
        self
    }

    /// Set the square a pawn skipped over on the previous ply.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    #[must_use]
    pub const fn options(mut self, options: GameOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the game.
    ///
    /// Each side needs exactly one king, and the side not to move must not be
    /// in check. An en passant target must be empty with the opposing pawn
    /// that just double-stepped in front of it.
    /// Castling rights whose king or rook is not on its home square are
    /// dropped.
    pub fn build(self) -> Result<GameState, PositionError> {
        let mut board = Board::empty();
        for &(square, color, piece) in &self.pieces {
            board[square] = Cell::Occupied(color, piece);
        }

        let mut kings = [Square::at(0, 0); 2];
        for color in Color::BOTH {
            let mut found = board
                .squares_of(color)
                .filter(|&sq| board[sq].piece() == Some(Piece::King));
            let Some(king) = found.next() else {
                return Err(PositionError::MissingKing { color });
            };
            if found.next().is_some() {
                return Err(PositionError::DuplicateKing { color });
            }
            kings[color.index()] = king;
        }

        if let Some(target) = self.en_passant {
            Self::validate_en_passant(&board, self.side_to_move, target)?;
        }

        let mut rights = self.castle_rights;
        for color in Color::BOTH {
            let home = Square::at(color.back_row(), 4);
            for kingside in [true, false] {
                if !rights.has(color, kingside) {
                    continue;
                }
                let corner = Square::at(color.back_row(), if kingside { 7 } else { 0 });
                if kings[color.index()] != home || !board[corner].is(color, Piece::Rook) {
                    warn!(
                        "dropping {color} {} castling right: king or rook not at home",
                        if kingside { "kingside" } else { "queenside" }
                    );
                    rights.remove(color, kingside);
                }
            }
        }

        let game = GameState::from_parts(
            board,
            self.side_to_move,
            kings,
            rights,
            self.en_passant,
            self.options,
        );
        let waiting = self.side_to_move.opponent();
        if game.is_king_attacked(waiting) {
            return Err(PositionError::OpponentInCheck { color: waiting });
        }
        Ok(game)
    }

    fn validate_en_passant(
        board: &Board,
        side_to_move: Color,
        target: Square,
    ) -> Result<(), PositionError> {
        let mover = side_to_move.opponent();
        // The pawn that double-stepped stands one row past the target.
        let expected_row = (mover.pawn_start_row() as isize + mover.pawn_direction()) as usize;
        let pawn = target.offset(mover.pawn_direction(), 0);
        let valid = target.row() == expected_row
            && board[target].is_empty()
            && pawn.is_some_and(|sq| board[sq].is(mover, Piece::Pawn));
        if valid {
            Ok(())
        } else {
            Err(PositionError::InvalidEnPassant { square: target })
        }
    }
}
