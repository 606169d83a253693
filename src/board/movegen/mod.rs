mod kings;
mod knights;
mod pawns;
mod sliders;

use log::debug;

use self::sliders::SliderType;
use super::attacks::KingScan;
use super::{Cell, Check, GameState, Move, MoveError, Piece, Square};

impl GameState {
    pub(crate) fn push_move(&self, from: Square, to: Square, moves: &mut Vec<Move>) {
        self.push_special(from, to, false, false, moves);
    }

    pub(crate) fn push_special(
        &self,
        from: Square,
        to: Square,
        is_en_passant: bool,
        is_castle: bool,
        moves: &mut Vec<Move>,
    ) {
        match Move::build(from, to, &self.board, is_en_passant, is_castle) {
            Ok(mv) => moves.push(mv),
            Err(err) => debug!("skipping generated move {from}{to}: {err}"),
        }
    }

    /// Moves obeying each piece's movement pattern, ignoring pins and checks.
    /// Castling is not included.
    pub(crate) fn generate_pseudo_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for from in self.board.squares_of(self.side_to_move) {
            let Cell::Occupied(_, piece) = self.board[from] else {
                continue;
            };
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, &mut moves),
                Piece::Bishop => self.generate_slider_moves(from, SliderType::Bishop, &mut moves),
                Piece::Rook => self.generate_slider_moves(from, SliderType::Rook, &mut moves),
                Piece::Queen => self.generate_slider_moves(from, SliderType::Queen, &mut moves),
                Piece::King => self.generate_king_moves(from, &mut moves),
            }
        }
        moves
    }

    /// All legal moves for the side to move.
    ///
    /// Also refreshes `in_check`, `pins`, `checks` and the checkmate and
    /// stalemate flags, which stay valid until the next mutation.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let color = self.side_to_move;
        let king = self.king_square(color);
        let KingScan {
            in_check,
            pins,
            checks,
        } = self.scan_king(king, color);
        self.in_check = in_check;
        self.pins = pins;
        self.checks = checks;

        let mut moves;
        if self.checks.len() >= 2 {
            // Double check: only the king can move.
            moves = Vec::with_capacity(8);
            self.generate_king_moves(king, &mut moves);
        } else {
            moves = self.generate_pseudo_moves();
            if self.options.enforce_pins {
                self.restrict_pinned(&mut moves);
            }
            if let Some(&check) = self.checks.first() {
                let rescue = self.rescue_squares(king, check);
                moves.retain(|mv| {
                    mv.piece_moved().1 == Piece::King
                        || rescue.contains(&mv.to())
                        || (mv.is_en_passant() && mv.en_passant_victim() == check.square)
                });
            } else {
                self.generate_castle_moves(king, &mut moves);
            }
            if self.options.enforce_pins {
                self.verify_en_passant(&mut moves);
            }
        }

        if moves.is_empty() {
            self.checkmate = self.in_check;
            self.stalemate = !self.in_check;
            if self.checkmate {
                debug!("checkmate: {color} has no legal moves");
            } else {
                debug!("stalemate: {color} has no legal moves");
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        moves
    }

    /// Squares a non-king move must land on to answer a single check: the
    /// checker itself, or for a slider anything between it and the king.
    fn rescue_squares(&self, king: Square, check: Check) -> Vec<Square> {
        if self.board[check.square].piece() == Some(Piece::Knight) {
            return vec![check.square];
        }
        let mut squares = Vec::with_capacity(7);
        for distance in 1..8 {
            let Some(sq) = check.direction.walk(king, distance) else {
                break;
            };
            squares.push(sq);
            if sq == check.square {
                break;
            }
        }
        squares
    }

    /// Keep pinned pieces on the line between their king and the pinner.
    fn restrict_pinned(&self, moves: &mut Vec<Move>) {
        let pins = &self.pins;
        moves.retain(|mv| {
            pins.iter()
                .find(|pin| pin.square == mv.from())
                .map_or(true, |pin| pin.direction.aligned(mv.from(), mv.to()))
        });
    }

    /// En passant removes two pawns from one row at once, which the pin scan
    /// cannot see. Play each candidate out and drop those exposing the king.
    fn verify_en_passant(&mut self, moves: &mut Vec<Move>) {
        if !moves.iter().any(Move::is_en_passant) {
            return;
        }
        let color = self.side_to_move;
        let mut exposing = Vec::new();
        for mv in moves.iter().filter(|mv| mv.is_en_passant()) {
            self.apply_move(*mv);
            if self.is_king_attacked(color) {
                exposing.push(*mv);
            }
            self.undo_move();
        }
        moves.retain(|mv| !exposing.contains(mv));
    }

    /// Find the legal move between two squares, as when matching a pair of
    /// clicks against the position.
    pub fn find_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to)
    }

    /// Apply the legal move from `from` to `to`, rejecting anything else.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        let wanted = Move::new(from, to, &self.board)?;
        match self.legal_moves().into_iter().find(|mv| *mv == wanted) {
            Some(mv) => {
                self.apply_move(mv);
                Ok(mv)
            }
            None => {
                debug!("rejected illegal move {wanted}");
                Err(MoveError::IllegalMove {
                    notation: wanted.notation(),
                })
            }
        }
    }

    /// Apply a move given in `e2e4` notation.
    pub fn play(&mut self, notation: &str) -> Result<Move, MoveError> {
        let (from, to) = Move::parse_squares(notation)?;
        self.try_move(from, to)
    }

    /// Count leaf positions `depth` plies deep.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.apply_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn test_push_move_records_board_contents() {
        let game = GameState::new();
        let mut moves = Vec::new();
        let from: Square = "g1".parse().unwrap();
        let to: Square = "f3".parse().unwrap();
        game.push_move(from, to, &mut moves);

        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].piece_moved(), (Color::White, Piece::Knight));
        assert!(!moves[0].is_capture());
    }

    #[test]
    fn test_push_move_from_empty_square_is_skipped() {
        let game = GameState::new();
        let mut moves = Vec::new();
        let from: Square = "e4".parse().unwrap();
        let to: Square = "e5".parse().unwrap();
        game.push_move(from, to, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_pseudo_moves_only_for_side_to_move() {
        let mut game = GameState::new();
        assert!(game
            .generate_pseudo_moves()
            .iter()
            .all(|mv| mv.color() == Color::White));
        game.play("e2e4").unwrap();
        assert!(game
            .generate_pseudo_moves()
            .iter()
            .all(|mv| mv.color() == Color::Black));
    }
}
