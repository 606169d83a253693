use super::types::{Board, CastleRights, Cell, Color, Direction, Move, Piece, Square};

/// Rule switches for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// Restrict pinned pieces to their pin line and verify en passant captures
    /// against discovered checks. Turning this off still collects pins but
    /// lets pinned pieces move freely.
    pub enforce_pins: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions { enforce_pins: true }
    }
}

/// An allied piece that shields its king along `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    /// Step from the king toward the pinned piece
    pub direction: Direction,
}

/// An enemy piece giving check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    /// Step from the king toward the checker (a knight offset for knights)
    pub direction: Direction,
}

/// Full game state: board, side to move, history and the caches derived by
/// legal-move generation.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) history: Vec<Move>,
    pub(crate) kings: [Square; 2],
    pub(crate) en_passant: Option<Square>,
    pub(crate) en_passant_history: Vec<Option<Square>>,
    pub(crate) castle_rights: CastleRights,
    pub(crate) castle_rights_history: Vec<CastleRights>,
    // Derived by `legal_moves`
    pub(crate) in_check: bool,
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    pub(crate) options: GameOptions,
}

impl GameState {
    /// The standard starting position with White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(GameOptions::default())
    }

    #[must_use]
    pub fn with_options(options: GameOptions) -> Self {
        let board = Board::starting();
        GameState::from_parts(
            board,
            Color::White,
            [Square::at(7, 4), Square::at(0, 4)],
            CastleRights::all(),
            None,
            options,
        )
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        kings: [Square; 2],
        castle_rights: CastleRights,
        en_passant: Option<Square>,
        options: GameOptions,
    ) -> Self {
        GameState {
            board,
            side_to_move,
            history: Vec::new(),
            kings,
            en_passant,
            en_passant_history: vec![en_passant],
            castle_rights,
            castle_rights_history: vec![castle_rights],
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            checkmate: false,
            stalemate: false,
            options,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.board[sq]
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    #[must_use]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn options(&self) -> GameOptions {
        self.options
    }

    /// Whether the side to move was in check at the last `legal_moves` call.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Pins found by the last `legal_moves` call.
    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Checks found by the last `legal_moves` call.
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[inline]
    pub(crate) fn set_king(&mut self, color: Color, sq: Square) {
        self.kings[color.index()] = sq;
    }

    #[inline]
    pub(crate) fn is_enemy(&self, sq: Square, color: Color) -> bool {
        self.board[sq].is_color(color.opponent())
    }

    /// True if a rook of `color` still stands on the corner for that side.
    pub(crate) fn rook_at_home(&self, color: Color, kingside: bool) -> bool {
        let col = if kingside { 7 } else { 0 };
        self.board[Square::at(color.back_row(), col)].is(color, Piece::Rook)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
        assert_eq!(game.king_square(Color::White).to_string(), "e1");
        assert_eq!(game.king_square(Color::Black).to_string(), "e8");
        assert_eq!(game.castle_rights(), CastleRights::all());
        assert_eq!(game.en_passant_target(), None);
        assert!(!game.in_check());
        assert!(!game.is_checkmate());
        assert!(!game.is_stalemate());
        assert_eq!(game.castle_rights_history.len(), game.history.len() + 1);
        assert!(game.rook_at_home(Color::White, true));
        assert!(game.rook_at_home(Color::Black, false));
    }
}
