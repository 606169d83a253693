use super::super::{GameState, Move, Square, KNIGHT_OFFSETS};

impl GameState {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        for jump in KNIGHT_OFFSETS {
            if let Some(to) = jump.walk(from, 1) {
                if !self.board[to].is_color(color) {
                    self.push_move(from, to, moves);
                }
            }
        }
    }
}
