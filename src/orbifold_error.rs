//! OrbifoldError: Unified error type for orbifold-notation public APIs
//!
//! Parsing and classification never panic; every failure is reported through
//! this enum.

use thiserror::Error;

/// Unified error type for orbifold symbol operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrbifoldError {
    /// A character outside `0-9`, space, tab, `*`, `x`, `o` appeared in the input.
    #[error("Unsupported character in orbifold symbol: `{ch}` at position {position}")]
    UnsupportedCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of `ch` in the input.
        position: usize,
    },
    /// A digit run that is not a positive `u32` (zero, or too large).
    #[error("Invalid order `{digits}` at position {position}: expected a positive integer")]
    InvalidOrder {
        /// The digit run as written.
        digits: String,
        /// Byte offset where the run starts.
        position: usize,
    },
    /// The exact symbol string has no wallpaper-group entry.
    #[error("Orbifold symbol not recognized as a wallpaper group: {0}")]
    UnrecognizedSymbol(String),
    /// A parsed symbol failed its internal consistency checks.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl OrbifoldError {
    /// True for the errors raised while parsing a symbol string.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            OrbifoldError::UnsupportedCharacter { .. } | OrbifoldError::InvalidOrder { .. }
        )
    }
}
