//! Game state module - the immutable game snapshot and its transitions
//!
//! Every transition borrows the current state and returns a new one. Nothing
//! here mutates its input, so a caller can keep any previous state around
//! (for replays, undo, or diffing) without cloning defensively.
//!
//! All piece transitions are no-ops while the game is paused, over, or has
//! no active piece.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::rng::PieceSource;
use crate::scoring::{calculate_level, calculate_score, drop_speed_ms};
use crate::types::{Direction, LockEvent, Position};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current_piece: Option<Tetromino>,
    next_piece: Tetromino,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    paused: bool,
}

impl GameState {
    /// Start a fresh game: empty board, current and next pieces drawn from `source`
    pub fn new(source: &mut impl PieceSource) -> Self {
        let current = Tetromino::new(source.next_kind());
        let next = Tetromino::new(source.next_kind());

        Self {
            board: Board::new(),
            current_piece: Some(current),
            next_piece: next,
            score: 0,
            level: 0,
            lines: 0,
            game_over: false,
            paused: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<Tetromino> {
        self.current_piece
    }

    pub fn next_piece(&self) -> Tetromino {
        self.next_piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// True when piece transitions have an effect
    pub fn is_playable(&self) -> bool {
        self.current_piece.is_some() && !self.game_over && !self.paused
    }

    /// Gravity interval for the current level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_speed_ms(self.level)
    }

    /// Replace the board (scenario setup and replays)
    pub fn with_board(self, board: Board) -> Self {
        Self { board, ..self }
    }

    /// Replace the active piece (scenario setup and replays)
    pub fn with_current_piece(self, piece: Tetromino) -> Self {
        Self {
            current_piece: Some(piece),
            ..self
        }
    }

    /// Replace the preview piece (scenario setup and replays)
    pub fn with_next_piece(self, piece: Tetromino) -> Self {
        Self {
            next_piece: piece,
            ..self
        }
    }

    /// Flip the pause flag. A finished game stays as it is.
    pub fn toggle_pause(&self) -> Self {
        if self.game_over {
            return self.clone();
        }
        Self {
            paused: !self.paused,
            ..self.clone()
        }
    }

    /// The active piece if transitions are allowed
    fn playable_piece(&self) -> Option<Tetromino> {
        if self.game_over || self.paused {
            return None;
        }
        self.current_piece
    }

    /// Check if the active piece could move by `offset`.
    ///
    /// Transitions check this themselves; it is exposed for callers that script
    /// a piece's descent (scenario setup and tests).
    pub fn can_move(&self, offset: Position) -> bool {
        match self.current_piece {
            Some(piece) => self.board.is_valid_position(&piece, offset),
            None => false,
        }
    }

    /// Shift the active piece one cell. Blocked moves leave the state as is;
    /// a blocked downward move does not lock.
    pub fn move_piece(&self, direction: Direction) -> Self {
        let Some(piece) = self.playable_piece() else {
            return self.clone();
        };

        let offset = direction.offset();
        if !self.board.is_valid_position(&piece, offset) {
            return self.clone();
        }

        Self {
            current_piece: Some(piece.shifted(offset)),
            ..self.clone()
        }
    }

    /// Advance the active piece to its next rotation if it fits in place
    pub fn rotate(&self) -> Self {
        let Some(piece) = self.playable_piece() else {
            return self.clone();
        };

        let rotated = piece.rotated();
        if !self.board.is_valid_position(&rotated, Position::ZERO) {
            return self.clone();
        }

        Self {
            current_piece: Some(rotated),
            ..self.clone()
        }
    }

    /// Move the active piece down until it rests on something.
    ///
    /// The piece is not locked here; the next [`GameState::step`] finds it
    /// unable to descend and locks it.
    pub fn hard_drop(&self) -> Self {
        let Some(piece) = self.playable_piece() else {
            return self.clone();
        };

        let down = Direction::Down.offset();
        let mut landed = piece;
        while self.board.is_valid_position(&landed, down) {
            landed = landed.shifted(down);
        }

        Self {
            current_piece: Some(landed),
            ..self.clone()
        }
    }

    /// One gravity tick. See [`GameState::step_with_event`].
    pub fn step(&self, source: &mut impl PieceSource) -> Self {
        self.step_with_event(source).0
    }

    /// One gravity tick, reporting the lock if one happened.
    ///
    /// If the active piece can descend it moves one row down. Otherwise it is
    /// locked into the board, full rows are cleared and scored at the level
    /// held before the clear, the next piece is promoted, and a new next
    /// piece is drawn from `source`. The game ends when the promoted piece
    /// does not fit at its spawn position.
    pub fn step_with_event(&self, source: &mut impl PieceSource) -> (Self, Option<LockEvent>) {
        let Some(piece) = self.playable_piece() else {
            return (self.clone(), None);
        };

        let down = Direction::Down.offset();
        if self.board.is_valid_position(&piece, down) {
            let moved = Self {
                current_piece: Some(piece.shifted(down)),
                ..self.clone()
            };
            return (moved, None);
        }

        let cleared = self.board.place(&piece).clear_lines();
        let lines_cleared = cleared.lines_cleared();
        let score_gained = calculate_score(lines_cleared, self.level);
        let lines = self.lines + lines_cleared;
        let level = calculate_level(lines);

        let promoted = self.next_piece;
        let next_piece = Tetromino::new(source.next_kind());
        let game_over = !cleared.board.is_valid_position(&promoted, Position::ZERO);

        let state = Self {
            board: cleared.board,
            current_piece: if game_over { None } else { Some(promoted) },
            next_piece,
            score: self.score.saturating_add(score_gained),
            level,
            lines,
            game_over,
            paused: false,
        };

        let event = LockEvent {
            lines_cleared,
            score_gained,
            level_before: self.level,
            level_after: level,
            game_over,
        };

        (state, Some(event))
    }
}
