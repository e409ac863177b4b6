/// Error types for strokes operations.
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or drawing.
///
/// Line and outline primitives are total and never fail; only the fractal,
/// framebuffer construction and config loading surface errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Fractal recursion needs at least one generation.
    #[error("Invalid fractal generation: {generation} (must be at least 1)")]
    InvalidGeneration {
        /// Requested generation.
        generation: u32,
    },

    /// Zero-sized canvas or framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Malformed config document.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error while reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 600,
        };
        assert!(err.to_string().contains("0x600"));
    }

    #[test]
    fn test_generation_error_mentions_value() {
        let err = Error::InvalidGeneration { generation: 0 };
        assert!(err.to_string().contains("generation: 0"));
    }
}
