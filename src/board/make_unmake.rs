use log::{debug, trace};

use super::{Cell, GameState, Move, Piece, Square};

/// Rook origin and destination for a castle by the king to `king_to`.
fn castle_rook_squares(king_to: Square, kingside: bool) -> (Square, Square) {
    let row = king_to.row();
    if kingside {
        (Square::at(row, king_to.col() + 1), Square::at(row, king_to.col() - 1))
    } else {
        (Square::at(row, king_to.col() - 2), Square::at(row, king_to.col() + 1))
    }
}

impl GameState {
    /// Play `mv` on the board.
    ///
    /// `mv` must come from [`GameState::legal_moves`] for the current
    /// position; nothing is validated here. Promotions always produce a queen.
    pub fn apply_move(&mut self, mv: Move) {
        let (color, piece) = mv.piece_moved();
        debug_assert_eq!(color, self.side_to_move, "move {mv} played out of turn");
        debug_assert!(
            self.board[mv.from()].is(color, piece),
            "move {mv} does not match the board"
        );

        self.board[mv.from()] = Cell::Empty;
        self.board[mv.to()] = Cell::Occupied(color, piece);
        self.history.push(mv);
        self.side_to_move = color.opponent();

        if piece == Piece::King {
            self.set_king(color, mv.to());
        }

        if mv.is_promotion() {
            self.board[mv.to()] = Cell::Occupied(color, Piece::Queen);
        }

        if mv.is_en_passant() {
            self.board[mv.en_passant_victim()] = Cell::Empty;
        }

        self.en_passant = if mv.is_double_pawn_push() {
            Some(Square::at((mv.from().row() + mv.to().row()) / 2, mv.to().col()))
        } else {
            None
        };
        self.en_passant_history.push(self.en_passant);

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(mv.to(), mv.is_kingside_castle());
            self.board[rook_to] = self.board[rook_from];
            self.board[rook_from] = Cell::Empty;
        }

        self.update_castle_rights(&mv);
        self.castle_rights_history.push(self.castle_rights);

        if mv.is_capture() {
            trace!("applied capture {mv}, {} to move", self.side_to_move);
        } else {
            trace!("applied {mv}, {} to move", self.side_to_move);
        }
    }

    /// Take back the last applied move. Returns it, or `None` (doing
    /// nothing) when there is no history.
    pub fn undo_move(&mut self) -> Option<Move> {
        let Some(mv) = self.history.pop() else {
            debug!("undo requested with empty history");
            return None;
        };
        let (color, piece) = mv.piece_moved();

        self.board[mv.from()] = Cell::Occupied(color, piece);
        self.board[mv.to()] = match mv.piece_captured() {
            Some((c, p)) if !mv.is_en_passant() => Cell::Occupied(c, p),
            _ => Cell::Empty,
        };
        self.side_to_move = color;

        if piece == Piece::King {
            self.set_king(color, mv.from());
        }

        if mv.is_en_passant() {
            if let Some((c, p)) = mv.piece_captured() {
                self.board[mv.en_passant_victim()] = Cell::Occupied(c, p);
            }
        }

        // An undone en passant gets its target back and an undone double step
        // loses it; both fall out of the stack.
        self.en_passant_history.pop();
        self.en_passant = self.en_passant_history.last().copied().flatten();

        self.castle_rights_history.pop();
        if let Some(&rights) = self.castle_rights_history.last() {
            self.castle_rights = rights;
        }

        if mv.is_castle() {
            let (rook_home, rook_now) = castle_rook_squares(mv.to(), mv.is_kingside_castle());
            self.board[rook_home] = self.board[rook_now];
            self.board[rook_now] = Cell::Empty;
        }

        self.checkmate = false;
        self.stalemate = false;

        trace!("undid {mv}, {} to move", self.side_to_move);
        Some(mv)
    }

    /// Revoke the castling rights `mv` invalidates. Rights are never restored
    /// here; only `undo_move` brings them back.
    fn update_castle_rights(&mut self, mv: &Move) {
        let (color, piece) = mv.piece_moved();
        match piece {
            Piece::King => self.castle_rights.remove_color(color),
            Piece::Rook if mv.from().row() == color.back_row() => match mv.from().col() {
                0 => self.castle_rights.remove(color, false),
                7 => self.castle_rights.remove(color, true),
                _ => {}
            },
            _ => {}
        }

        if let Some((captured_color, Piece::Rook)) = mv.piece_captured() {
            if mv.to().row() == captured_color.back_row() {
                match mv.to().col() {
                    0 => self.castle_rights.remove(captured_color, false),
                    7 => self.castle_rights.remove(captured_color, true),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn test_castle_rook_squares() {
        let g1 = Square::at(7, 6);
        assert_eq!(castle_rook_squares(g1, true), (Square::at(7, 7), Square::at(7, 5)));
        let c8 = Square::at(0, 2);
        assert_eq!(castle_rook_squares(c8, false), (Square::at(0, 0), Square::at(0, 3)));
    }

    #[test]
    fn test_undo_on_fresh_game_is_noop() {
        let mut game = GameState::new();
        let before = game.board;
        assert_eq!(game.undo_move(), None);
        assert_eq!(game.board, before);
        assert_eq!(game.side_to_move, Color::White);
        assert_eq!(game.castle_rights_history.len(), 1);
    }
}
