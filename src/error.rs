//! Errors raised by the few fallible entry points (hex parsing).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty hex string")]
    Empty,
    /// Only 3, 6 and 8 digit forms are understood.
    #[error("hex color must have 3, 6 or 8 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
