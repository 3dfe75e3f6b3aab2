//! # orbifold-notation
//!
//! orbifold-notation parses Conway orbifold symbols describing 2-dimensional
//! orbifolds and derives two facts from them: the orbifold Euler
//! characteristic, and, for the 17 Euclidean patterns, the wallpaper-group name.
//!
//! ## Notation
//! - digits: a rotation of that order; a free cone point before any `*`, a
//!   corner reflector after one
//! - `*`: a mirror boundary; opens a mirror region
//! - `x`: a crosscap; closes the mirror region
//! - `o`: a handle; closes the mirror region
//! - space and tab are ignored
//!
//! ## Usage
//!
//! ```rust
//! use orbifold_notation::prelude::*;
//!
//! let symbol: Symbol = "*632".parse()?;
//! assert_eq!(symbol.wallpaper_group()?, "p6m");
//! assert_eq!(symbol.euler_characteristic(), 0.0);
//!
//! // Classification matches the exact spelling only.
//! let spaced = Symbol::parse("* 632")?;
//! assert_eq!(spaced.components(), symbol.components());
//! assert!(spaced.wallpaper_group().is_err());
//! # Ok::<(), OrbifoldError>(())
//! ```
//!
//! ## Invariant checks
//! Every parsed [`Symbol`](notation::Symbol) is checked with
//! [`DebugInvariants`] in debug builds; enable the `check-invariants` or
//! `strict-invariants` feature to keep the checks in release builds.

pub mod classify;
pub mod debug_invariants;
pub mod notation;
pub mod orbifold_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::classify::wallpaper::{WALLPAPER_GROUPS, is_wallpaper_symbol};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::notation::component::ComponentKind;
    pub use crate::notation::symbol::Symbol;
    pub use crate::orbifold_error::OrbifoldError;
}
