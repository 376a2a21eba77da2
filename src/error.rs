use thiserror::Error;

/// Errors raised while building a color from user supplied channels
#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("{channel} channel out of range: {value} (expected 0.0..=1.0)")]
    ChannelOutOfRange { channel: &'static str, value: f32 },
}

/// Result type for color construction
pub type ColorResult<T> = Result<T, ColorError>;
