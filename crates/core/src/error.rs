//! Error types for canvas construction and frame playback.

use thiserror::Error;

/// Errors raised by the rasterizer core.
///
/// Out-of-bounds pixel writes and degenerate geometry are never errors; they
/// clip or draw nothing.
#[derive(Error, Debug)]
pub enum RasterError {
    /// Canvas width or height was zero or negative
    #[error("invalid canvas dimension {width}x{height}: both sides must be positive")]
    InvalidDimension { width: i32, height: i32 },

    /// Background character would break the rectangular text output
    #[error("invalid glyph {0:?}: canvas cells must be printable")]
    InvalidGlyph(char),

    /// Playback was requested before any frame was captured
    #[error("frame sequence is empty: capture at least one frame before playing")]
    EmptySequence,

    /// The display collaborator failed to show a frame
    #[error("frame sink failed: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RasterError {
    /// Wrap a display-side failure.
    pub fn sink<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        RasterError::Sink(err.into())
    }
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = RasterError::InvalidDimension {
            width: 0,
            height: 5,
        };
        assert!(err.to_string().contains("0x5"));
        assert!(RasterError::EmptySequence.to_string().contains("empty"));
        assert!(RasterError::InvalidGlyph('\n').to_string().contains("'\\n'"));
    }

    #[test]
    fn sink_errors_keep_their_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = RasterError::sink(io);
        assert!(err.to_string().contains("pipe closed"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
