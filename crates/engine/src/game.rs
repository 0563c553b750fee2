//! Session driver: owns the live state and the drop timer.
//!
//! The presentation layer feeds two things in: player actions and elapsed
//! wall-clock time. `Game` turns them into core transitions, keeps the only
//! live [`GameState`], and re-arms the gravity timer whenever the level, the
//! pause flag, or the game-over flag changes.

use log::{debug, info};

use crate::core::{GameState, PieceSource};
use crate::types::{GameAction, LockEvent};

/// A running game session
#[derive(Debug)]
pub struct Game<S> {
    state: GameState,
    source: S,
    /// Time accumulated towards the next gravity step
    drop_timer_ms: u32,
    /// Number of games started in this session (restarts included)
    episode: u32,
    last_event: Option<LockEvent>,
}

impl<S: PieceSource> Game<S> {
    pub fn new(mut source: S) -> Self {
        let state = GameState::new(&mut source);
        info!("new game: first piece {:?}", state.current_piece().map(|p| p.kind));
        Self {
            state,
            source,
            drop_timer_ms: 0,
            episode: 1,
            last_event: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    /// Current gravity interval (for scheduling the next tick)
    pub fn drop_interval_ms(&self) -> u32 {
        self.state.drop_interval_ms()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a player action. Returns true if the state changed.
    ///
    /// Movement, rotation and drop are ignored while paused or after game
    /// over. Pause toggles in both directions; restart always succeeds.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let next = match action {
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::MoveDown => {
                match action.direction() {
                    Some(direction) => self.state.move_piece(direction),
                    None => return false,
                }
            }
            GameAction::Rotate => self.state.rotate(),
            GameAction::Drop => self.state.hard_drop(),
            GameAction::Pause => {
                let next = self.state.toggle_pause();
                if next.paused() != self.state.paused() {
                    info!("paused: {}", next.paused());
                }
                next
            }
            GameAction::Restart => {
                self.restart();
                return true;
            }
        };

        self.replace_state(next)
    }

    /// Discard the current game and start a new one from the same source
    pub fn restart(&mut self) {
        self.state = GameState::new(&mut self.source);
        self.drop_timer_ms = 0;
        self.last_event = None;
        self.episode = self.episode.wrapping_add(1);
        info!("restart: episode {}", self.episode);
    }

    /// Advance the drop timer by `elapsed_ms`.
    ///
    /// Runs a gravity step once the accumulated time reaches the interval for
    /// the current level. At most one step runs per call: time beyond a whole
    /// interval is dropped, so a stalled frame cannot replay a backlog of
    /// steps. Returns whether a step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.state.is_playable() {
            return false;
        }

        let interval = self.drop_interval_ms();
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < interval {
            return false;
        }

        self.drop_timer_ms %= interval;
        self.step();
        true
    }

    /// Run a single gravity step immediately
    pub fn step(&mut self) -> Option<LockEvent> {
        let (next, event) = self.state.step_with_event(&mut self.source);
        if let Some(ev) = event {
            self.record_lock(ev);
        }
        self.replace_state(next);
        event
    }

    fn record_lock(&mut self, ev: LockEvent) {
        debug!(
            "lock: cleared {} line(s), +{} points",
            ev.lines_cleared, ev.score_gained
        );
        if ev.leveled_up() {
            info!("level up: {} -> {}", ev.level_before, ev.level_after);
        }
        if ev.game_over {
            info!(
                "game over: score {} lines {} level {}",
                self.state.score() + ev.score_gained,
                self.state.lines() + ev.lines_cleared,
                ev.level_after
            );
        }
        self.last_event = Some(ev);
    }

    /// Swap in a new state, re-arming the timer on level/pause/game-over changes
    fn replace_state(&mut self, next: GameState) -> bool {
        if next == self.state {
            return false;
        }
        if next.level() != self.state.level()
            || next.paused() != self.state.paused()
            || next.game_over() != self.state.game_over()
        {
            self.drop_timer_ms = 0;
        }
        self.state = next;
        true
    }
}
