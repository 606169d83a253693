//! Check, pin and attack detection by ray scanning outward from a square.

use super::{
    Cell, Check, Color, Direction, GameState, Piece, Pin, Square, ALL_DIRECTIONS, KNIGHT_OFFSETS,
};

/// Result of scanning around a king.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct KingScan {
    pub(crate) in_check: bool,
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
}

/// Does an enemy `piece` found `distance` steps along `dir` from a king attack it?
fn attacks_along(piece: Piece, enemy: Color, dir: Direction, distance: isize) -> bool {
    match piece {
        Piece::Bishop | Piece::Rook | Piece::Queen => {
            if dir.is_orthogonal() {
                piece.attacks_straight()
            } else {
                piece.attacks_diagonally()
            }
        }
        Piece::King => distance == 1,
        // The pawn sits one step diagonally ahead of where it captures.
        Piece::Pawn => {
            distance == 1 && !dir.is_orthogonal() && dir.d_row == -enemy.pawn_direction()
        }
        Piece::Knight => false,
    }
}

impl GameState {
    /// Find pins and checks against `color`'s king standing on `king`.
    ///
    /// The king of `color` is looked through wherever it actually stands, so
    /// the scan also answers "would the king be safe on `king`" for a square
    /// it has not moved to yet.
    pub(crate) fn scan_king(&self, king: Square, color: Color) -> KingScan {
        let enemy = color.opponent();
        let mut scan = KingScan::default();

        for dir in ALL_DIRECTIONS {
            let mut candidate: Option<Pin> = None;
            for distance in 1..8 {
                let Some(sq) = dir.walk(king, distance) else {
                    break;
                };
                match self.board[sq] {
                    Cell::Empty => {}
                    Cell::Occupied(c, Piece::King) if c == color => {}
                    Cell::Occupied(c, _) if c == color => {
                        if candidate.is_some() {
                            break;
                        }
                        candidate = Some(Pin {
                            square: sq,
                            direction: dir,
                        });
                    }
                    Cell::Occupied(_, piece) => {
                        if attacks_along(piece, enemy, dir, distance) {
                            match candidate {
                                Some(pin) => scan.pins.push(pin),
                                None => {
                                    scan.in_check = true;
                                    scan.checks.push(Check {
                                        square: sq,
                                        direction: dir,
                                    });
                                }
                            }
                        }
                        break;
                    }
                }
            }
        }

        for jump in KNIGHT_OFFSETS {
            if let Some(sq) = jump.walk(king, 1) {
                if self.board[sq].is(enemy, Piece::Knight) {
                    scan.in_check = true;
                    scan.checks.push(Check {
                        square: sq,
                        direction: jump,
                    });
                }
            }
        }

        scan
    }

    /// Is `square` attacked by any piece of `by`?
    ///
    /// A pure query over the board. Pawns count only on their capture
    /// diagonals, and every piece blocks a ray, kings included.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.attacked(square, by, false)
    }

    /// Like [`GameState::is_square_attacked`], but the defending king is
    /// looked through, so the answer holds for that king stepping onto
    /// `square`.
    pub(crate) fn is_square_attacked_past_king(&self, square: Square, by: Color) -> bool {
        self.attacked(square, by, true)
    }

    fn attacked(&self, square: Square, by: Color, through_king: bool) -> bool {
        let defender = by.opponent();

        for dir in ALL_DIRECTIONS {
            for distance in 1..8 {
                let Some(sq) = dir.walk(square, distance) else {
                    break;
                };
                match self.board[sq] {
                    Cell::Empty => continue,
                    Cell::Occupied(c, Piece::King) if through_king && c == defender => continue,
                    Cell::Occupied(c, piece) if c == by => {
                        if attacks_along(piece, by, dir, distance) {
                            return true;
                        }
                    }
                    Cell::Occupied(..) => {}
                }
                break;
            }
        }

        KNIGHT_OFFSETS.iter().any(|jump| {
            jump.walk(square, 1)
                .is_some_and(|sq| self.board[sq].is(by, Piece::Knight))
        })
    }

    /// Is `color`'s king attacked where it stands?
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }
}
