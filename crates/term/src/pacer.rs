//! Wall-clock pacing for frame playback.

use std::thread;
use std::time::Duration;

use crate::core::Pacer;

/// Blocks the calling thread with [`thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}
