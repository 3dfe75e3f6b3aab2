//! Consistency checks for parsed values.
//!
//! A [`Symbol`](crate::notation::Symbol) carries aggregate counts next to its
//! component list; these checks confirm the two views agree. They run after
//! every parse in debug builds, and in release builds with the
//! `check-invariants` or `strict-invariants` feature.

use crate::orbifold_error::OrbifoldError;

/// Self-validation for values whose fields must stay mutually consistent.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), OrbifoldError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
