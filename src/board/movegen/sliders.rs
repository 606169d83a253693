use super::super::{
    Cell, Direction, GameState, Move, Square, ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL,
};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [Direction] {
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Queen => &ALL_DIRECTIONS,
        }
    }
}

impl GameState {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        slider: SliderType,
        moves: &mut Vec<Move>,
    ) {
        let color = self.side_to_move;
        for &dir in slider.directions() {
            for distance in 1..8 {
                let Some(to) = dir.walk(from, distance) else {
                    break;
                };
                match self.board[to] {
                    Cell::Empty => self.push_move(from, to, moves),
                    Cell::Occupied(c, _) => {
                        if c != color {
                            self.push_move(from, to, moves);
                        }
                        break;
                    }
                }
            }
        }
    }
}
