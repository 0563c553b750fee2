//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules as value-to-value transitions.
//! It has **no dependencies** on UI, timers, or I/O, making it:
//!
//! - **Pure**: Every transition borrows a [`GameState`] and returns a new one
//! - **Deterministic**: Randomness is injected through a [`PieceSource`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection and line clearing
//! - [`game_state`]: The game snapshot and its move/rotate/drop/step transitions
//! - [`pieces`]: Tetromino rotation masks and the active piece type
//! - [`rng`]: Injectable piece randomness (seeded, scripted, or closures)
//! - [`scoring`]: Line-clear score, level, and gravity interval
//!
//! # Game Rules
//!
//! - **Rotation**: Cycles through a fixed mask sequence per kind, no wall kicks
//! - **Locking**: A piece locks on the first step that finds it unable to descend
//! - **Hard Drop**: Settles the piece; the following step performs the lock
//! - **Scoring**: Classic 40/100/300/1200 table times `level + 1`
//! - **Leveling**: One level every 10 lines
//! - **Game Over**: The promoted piece collides at its spawn position
//!
//! # Example
//!
//! ```
//! use blockfall_core::{FixedSequence, GameState};
//! use blockfall_types::{Direction, PieceKind};
//!
//! let mut pieces = FixedSequence::new(&[PieceKind::O, PieceKind::I]);
//! let state = GameState::new(&mut pieces);
//!
//! let state = state.move_piece(Direction::Left).rotate().hard_drop();
//! let state = state.step(&mut pieces); // locks the O, promotes the I
//!
//! assert_eq!(state.current_piece().map(|p| p.kind), Some(PieceKind::I));
//! assert_eq!(state.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineClear};
pub use game_state::GameState;
pub use pieces::{get_shape, rotations, Tetromino};
pub use rng::{random_kind, FixedSequence, PieceSource, RandomPieces};
pub use scoring::{calculate_level, calculate_score, drop_speed_ms};
