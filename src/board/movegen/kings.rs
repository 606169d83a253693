use super::super::{GameState, Move, Square, ALL_DIRECTIONS};

impl GameState {
    /// King steps onto squares the king would not be attacked on.
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        for dir in ALL_DIRECTIONS {
            let Some(to) = dir.walk(from, 1) else {
                continue;
            };
            if self.board[to].is_color(color) {
                continue;
            }
            if !self.scan_king(to, color).in_check {
                self.push_move(from, to, moves);
            }
        }
    }

    /// Castling moves for the king on `king`. Nothing is produced in check.
    pub(crate) fn generate_castle_moves(&self, king: Square, moves: &mut Vec<Move>) {
        if self.in_check {
            return;
        }
        let color = self.side_to_move;
        if self.castle_rights.has(color, true) {
            self.generate_kingside_castle(king, moves);
        }
        if self.castle_rights.has(color, false) {
            self.generate_queenside_castle(king, moves);
        }
    }

    fn generate_kingside_castle(&self, king: Square, moves: &mut Vec<Move>) {
        let enemy = self.side_to_move.opponent();
        let (Some(f), Some(g)) = (king.offset(0, 1), king.offset(0, 2)) else {
            return;
        };
        if self.board[f].is_empty()
            && self.board[g].is_empty()
            && !self.is_square_attacked_past_king(f, enemy)
            && !self.is_square_attacked_past_king(g, enemy)
        {
            self.push_special(king, g, false, true, moves);
        }
    }

    fn generate_queenside_castle(&self, king: Square, moves: &mut Vec<Move>) {
        let enemy = self.side_to_move.opponent();
        let (Some(d), Some(c), Some(b)) = (king.offset(0, -1), king.offset(0, -2), king.offset(0, -3))
        else {
            return;
        };
        // The b-file square must be empty but may be attacked.
        if self.board[d].is_empty()
            && self.board[c].is_empty()
            && self.board[b].is_empty()
            && !self.is_square_attacked_past_king(d, enemy)
            && !self.is_square_attacked_past_king(c, enemy)
        {
            self.push_special(king, c, false, true, moves);
        }
    }
}
