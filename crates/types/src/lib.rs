//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the rasterizer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core drawing, terminal playback, input mapping).
//!
//! # Grid Dimensions
//!
//! The demo grid matches a classic terminal window:
//!
//! - **Width**: 80 columns (indexed 0-79)
//! - **Height**: 30 rows (indexed 0-29)
//! - **Origin**: top-left, `y` grows downward
//!
//! # Playback Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_DELAY_MS` | 800 | Pause between two emitted frames |
//! | `INPUT_POLL_MS` | 16 | Upper bound on one input poll (~60 Hz) |
//!
//! # Examples
//!
//! ```
//! use tui_raster_types::{PlaybackState, PlayerAction, Point, DEFAULT_WIDTH};
//!
//! let p = Point::new(3, -2);
//! assert_eq!(p.transpose(), Point::new(-2, 3));
//!
//! let state = PlaybackState::Playing;
//! assert_eq!(state.apply(PlayerAction::TogglePause), PlaybackState::Paused);
//!
//! assert_eq!(PlayerAction::from_str("next"), Some(PlayerAction::Next));
//! assert_eq!(DEFAULT_WIDTH, 80);
//! ```

/// Default canvas width in columns (80)
pub const DEFAULT_WIDTH: i32 = 80;

/// Default canvas height in rows (30)
pub const DEFAULT_HEIGHT: i32 = 30;

/// Default delay between frames in milliseconds (800ms)
pub const FRAME_DELAY_MS: u64 = 800;

/// Longest single input poll in the interactive player (16ms)
pub const INPUT_POLL_MS: u64 = 16;

/// Default background character
pub const DEFAULT_BACKGROUND: char = ' ';

/// An integer grid coordinate.
///
/// Points are allowed anywhere in `i32` space. Whether a point is visible is a
/// property of the canvas it is drawn on, not of the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swap the roles of `x` and `y`.
    pub const fn transpose(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Actions a viewer can send to the frame player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Pause when playing, resume when paused
    TogglePause,
    /// Show the next frame immediately
    Next,
    /// Show the previous frame immediately
    Previous,
    /// Rewind to the first frame
    Restart,
    /// Stop playback
    Quit,
}

impl PlayerAction {
    /// Parse an action name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raster_types::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_str("Pause"), Some(PlayerAction::TogglePause));
    /// assert_eq!(PlayerAction::from_str("prev"), Some(PlayerAction::Previous));
    /// assert_eq!(PlayerAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" | "togglepause" => Some(PlayerAction::TogglePause),
            "next" => Some(PlayerAction::Next),
            "prev" | "previous" => Some(PlayerAction::Previous),
            "restart" => Some(PlayerAction::Restart),
            "quit" => Some(PlayerAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::TogglePause => "pause",
            PlayerAction::Next => "next",
            PlayerAction::Previous => "previous",
            PlayerAction::Restart => "restart",
            PlayerAction::Quit => "quit",
        }
    }
}

/// Playback state of the frame player.
///
/// Transitions:
///
/// | From | Action | To |
/// |------|--------|----|
/// | `Playing` | `TogglePause` | `Paused` |
/// | `Paused` | `TogglePause` | `Playing` |
/// | any | `Quit` | `Stopped` |
/// | `Stopped` | any | `Stopped` |
///
/// `Next`, `Previous` and `Restart` move the frame cursor and leave the state
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
    #[default]
    Playing,
    Paused,
    Stopped,
}

impl PlaybackState {
    /// Compute the state after `action`.
    pub fn apply(self, action: PlayerAction) -> Self {
        match (self, action) {
            (PlaybackState::Stopped, _) => PlaybackState::Stopped,
            (_, PlayerAction::Quit) => PlaybackState::Stopped,
            (PlaybackState::Playing, PlayerAction::TogglePause) => PlaybackState::Paused,
            (PlaybackState::Paused, PlayerAction::TogglePause) => PlaybackState::Playing,
            (state, _) => state,
        }
    }

    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }

    pub fn is_stopped(self) -> bool {
        self == PlaybackState::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_demo_defaults() {
        assert_eq!(DEFAULT_WIDTH, 80);
        assert_eq!(DEFAULT_HEIGHT, 30);
        assert_eq!(FRAME_DELAY_MS, 800);
        assert_eq!(DEFAULT_BACKGROUND, ' ');
    }

    #[test]
    fn point_conversions() {
        let p: Point = (4, -7).into();
        assert_eq!(p, Point::new(4, -7));
        let t: (i32, i32) = p.into();
        assert_eq!(t, (4, -7));
        assert_eq!(p.transpose(), Point::new(-7, 4));
    }

    #[test]
    fn pause_toggles_back_and_forth() {
        let s = PlaybackState::Playing;
        let s = s.apply(PlayerAction::TogglePause);
        assert_eq!(s, PlaybackState::Paused);
        let s = s.apply(PlayerAction::TogglePause);
        assert_eq!(s, PlaybackState::Playing);
    }

    #[test]
    fn stopped_is_terminal() {
        let s = PlaybackState::Paused.apply(PlayerAction::Quit);
        assert!(s.is_stopped());
        assert_eq!(s.apply(PlayerAction::TogglePause), PlaybackState::Stopped);
        assert_eq!(s.apply(PlayerAction::Next), PlaybackState::Stopped);
    }

    #[test]
    fn cursor_actions_keep_state() {
        for action in [
            PlayerAction::Next,
            PlayerAction::Previous,
            PlayerAction::Restart,
        ] {
            assert_eq!(PlaybackState::Paused.apply(action), PlaybackState::Paused);
            assert_eq!(PlaybackState::Playing.apply(action), PlaybackState::Playing);
        }
    }

    #[test]
    fn action_names_round_trip() {
        for action in [
            PlayerAction::TogglePause,
            PlayerAction::Next,
            PlayerAction::Previous,
            PlayerAction::Restart,
            PlayerAction::Quit,
        ] {
            assert_eq!(PlayerAction::from_str(action.as_str()), Some(action));
        }
    }
}
