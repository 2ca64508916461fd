//! Frame capture and round-robin playback.
//!
//! A [`FrameSequencer`] collects text snapshots of a canvas (the *building*
//! phase). [`FrameSequencer::finish`] turns it into a [`FrameSequence`], which
//! owns a non-empty frame list, a cursor and the inter-frame delay (the
//! *playing* phase).
//!
//! Output and timing are collaborators supplied by the caller through
//! [`FrameSink`] and [`Pacer`], so this module does no I/O and never sleeps
//! on its own. Playback ends when the caller raises a [`StopSignal`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::canvas::Canvas;
use crate::error::{RasterError, Result};

/// Immutable text snapshot of a canvas.
///
/// The text is `height` lines of `width` characters, each line terminated by
/// `'\n'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    text: String,
    width: usize,
    height: usize,
}

impl Frame {
    pub(crate) fn new(text: String, width: usize, height: usize) -> Self {
        Self {
            text,
            width,
            height,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows without their terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.lines()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&Canvas> for Frame {
    fn from(canvas: &Canvas) -> Self {
        canvas.capture()
    }
}

/// Display collaborator: puts one frame on the output device.
///
/// Implementations are responsible for clearing and positioning the output
/// before writing the frame.
pub trait FrameSink {
    type Error: Into<Box<dyn std::error::Error + Send + Sync>>;

    fn show(&mut self, frame: &Frame) -> std::result::Result<(), Self::Error>;
}

/// Timing collaborator: blocks for at least `delay`.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Cooperative stop flag shared between the playback loop and its owner.
///
/// Clones share the same flag. Raising it never interrupts a pause in
/// progress; the loop observes it before the next emission.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Lower the flag so the same signal can drive another playback.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Collects frames before playback.
#[derive(Debug, Clone, Default)]
pub struct FrameSequencer {
    frames: Vec<Frame>,
}

impl FrameSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Append a snapshot of `canvas`.
    ///
    /// The sequencer neither clears nor draws; the caller prepares the canvas
    /// between captures.
    pub fn capture(&mut self, canvas: &Canvas) {
        self.frames.push(canvas.capture());
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Freeze the captured frames into a playable sequence.
    pub fn finish(self, delay: Duration) -> Result<FrameSequence> {
        FrameSequence::new(self.frames, delay)
    }

    /// Finish and play until `stop` is raised.
    pub fn play<S, P>(
        self,
        delay: Duration,
        sink: &mut S,
        pacer: &mut P,
        stop: &StopSignal,
    ) -> Result<usize>
    where
        S: FrameSink,
        P: Pacer,
    {
        self.finish(delay)?.play(sink, pacer, stop)
    }
}

/// Non-empty, cyclic list of frames with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    index: usize,
    delay: Duration,
}

impl FrameSequence {
    /// Fails with [`RasterError::EmptySequence`] when `frames` is empty.
    pub fn new(frames: Vec<Frame>, delay: Duration) -> Result<Self> {
        if frames.is_empty() {
            return Err(RasterError::EmptySequence);
        }
        tracing::debug!(
            frames = frames.len(),
            delay_ms = delay.as_millis() as u64,
            "frame sequence built"
        );
        Ok(Self {
            frames,
            index: 0,
            delay,
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; a sequence cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn current(&self) -> &Frame {
        &self.frames[self.index]
    }

    /// Move the cursor forward, wrapping to the first frame.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.frames.len();
    }

    /// Move the cursor backward, wrapping to the last frame.
    pub fn retreat(&mut self) {
        self.index = (self.index + self.frames.len() - 1) % self.frames.len();
    }

    /// Return the current frame and advance past it.
    pub fn step(&mut self) -> &Frame {
        let shown = self.index;
        self.advance();
        &self.frames[shown]
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Endless iterator over the frames starting at the cursor.
    ///
    /// Does not move the cursor; calling it again restarts from the same place.
    pub fn cycle(&self) -> impl Iterator<Item = &Frame> + '_ {
        let (head, tail) = self.frames.split_at(self.index);
        tail.iter().chain(head.iter()).cycle()
    }

    /// Emit frames round-robin until `stop` is raised.
    ///
    /// Each iteration checks `stop`, shows the current frame, advances the
    /// cursor and pauses for [`delay`](Self::delay). Returns the number of
    /// frames shown.
    pub fn play<S, P>(&mut self, sink: &mut S, pacer: &mut P, stop: &StopSignal) -> Result<usize>
    where
        S: FrameSink,
        P: Pacer,
    {
        self.run(sink, pacer, stop, None)
    }

    /// Like [`play`](Self::play), but also stops after `count` frames.
    ///
    /// No pause follows the last frame.
    pub fn play_frames<S, P>(
        &mut self,
        count: usize,
        sink: &mut S,
        pacer: &mut P,
        stop: &StopSignal,
    ) -> Result<usize>
    where
        S: FrameSink,
        P: Pacer,
    {
        self.run(sink, pacer, stop, Some(count))
    }

    fn run<S, P>(
        &mut self,
        sink: &mut S,
        pacer: &mut P,
        stop: &StopSignal,
        limit: Option<usize>,
    ) -> Result<usize>
    where
        S: FrameSink,
        P: Pacer,
    {
        tracing::info!(frames = self.len(), start = self.index, "playback started");
        let mut shown = 0usize;
        while !stop.is_stopped() {
            if limit.is_some_and(|n| shown >= n) {
                break;
            }
            tracing::trace!(index = self.index, "showing frame");
            sink.show(self.current()).map_err(RasterError::sink)?;
            shown += 1;
            self.advance();
            if limit.is_some_and(|n| shown >= n) {
                break;
            }
            pacer.pause(self.delay);
        }
        tracing::info!(shown, "playback stopped");
        Ok(shown)
    }

    /// Go back to the building phase, keeping the captured frames.
    pub fn into_sequencer(self) -> FrameSequencer {
        FrameSequencer {
            frames: self.frames,
        }
    }
}
