//! Engine module - drives a game session in real time
//!
//! The core crate only knows immutable snapshots. This crate adds the parts a
//! front end needs around them:
//!
//! - [`Game`]: owns the live state and a piece source, maps [`GameAction`]s to
//!   transitions, runs gravity from elapsed milliseconds, handles pause and restart
//! - [`GameConfig`]: environment-driven settings (seed, frame length, logging)
//!
//! Lock events, level-ups, restarts and game over are reported through the
//! `log` facade.
//!
//! [`GameAction`]: crate::types::GameAction

pub mod config;
pub mod game;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::{GameConfig, DEFAULT_FRAME_MS};
pub use game::Game;
