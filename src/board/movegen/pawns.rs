use super::super::{GameState, Move, Square};

impl GameState {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();

        let Some(one) = from.offset(dir, 0) else {
            return;
        };
        if self.board[one].is_empty() {
            self.push_move(from, one, moves);
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if self.board[two].is_empty() {
                        self.push_move(from, two, moves);
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            let Some(target) = from.offset(dir, d_col) else {
                continue;
            };
            if self.is_enemy(target, color) {
                self.push_move(from, target, moves);
            } else if Some(target) == self.en_passant {
                self.push_special(from, target, true, false, moves);
            }
        }
    }
}
