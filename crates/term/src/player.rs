//! Interactive frame player.
//!
//! Holds the playback state explicitly instead of loose flags: the current
//! [`PlaybackState`], the frame cursor, and the time accumulated towards the
//! next automatic advance. The caller feeds it [`PlayerAction`]s and elapsed
//! time; it never sleeps or touches the terminal.

use std::time::Duration;

use crate::core::{Frame, FrameSequence};
use crate::types::{PlaybackState, PlayerAction};

#[derive(Debug, Clone)]
pub struct Player {
    sequence: FrameSequence,
    state: PlaybackState,
    elapsed: Duration,
    auto_advances: usize,
}

impl Player {
    pub fn new(sequence: FrameSequence) -> Self {
        Self {
            sequence,
            state: PlaybackState::Playing,
            elapsed: Duration::ZERO,
            auto_advances: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    pub fn current(&self) -> &Frame {
        self.sequence.current()
    }

    /// Number of timed advances so far (manual stepping not included).
    pub fn auto_advances(&self) -> usize {
        self.auto_advances
    }

    /// Apply a viewer action. Returns `true` when the visible frame changed.
    pub fn apply(&mut self, action: PlayerAction) -> bool {
        let prev_state = self.state;
        self.state = self.state.apply(action);
        if prev_state != self.state {
            tracing::info!(from = ?prev_state, to = ?self.state, "playback state changed");
        }
        if self.state.is_stopped() {
            return false;
        }

        let before = self.sequence.index();
        match action {
            PlayerAction::Next => self.sequence.advance(),
            PlayerAction::Previous => self.sequence.retreat(),
            PlayerAction::Restart => self.sequence.reset(),
            PlayerAction::TogglePause | PlayerAction::Quit => {}
        }
        if action != PlayerAction::TogglePause || self.state.is_playing() {
            // Manual steps and resumes restart the countdown.
            self.elapsed = Duration::ZERO;
        }
        self.sequence.index() != before
    }

    /// Account for `dt` of wall time. Returns `true` when the frame advanced.
    ///
    /// At most one frame is advanced per call; a late tick does not skip
    /// frames.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.state.is_playing() {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < self.sequence.delay() {
            return false;
        }
        self.elapsed = Duration::ZERO;
        self.sequence.advance();
        self.auto_advances += 1;
        tracing::trace!(index = self.sequence.index(), "frame advanced");
        true
    }

    /// Time left before the next automatic advance, or `None` when not playing.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.state
            .is_playing()
            .then(|| self.sequence.delay().saturating_sub(self.elapsed))
    }
}
