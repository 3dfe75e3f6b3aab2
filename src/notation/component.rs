//! Component kinds appearing in an orbifold symbol.

use std::{fmt, num::NonZeroU32};

/// One singular feature of a 2D orbifold, as written in Conway's notation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ComponentKind {
    /// Rotation centre of the given order away from any mirror (digits before `*`).
    ConePoint(NonZeroU32),
    /// Rotation centre of the given order lying on a mirror (digits after `*`).
    CornerReflector(NonZeroU32),
    /// Connect-sum with a projective plane (`x`).
    Crosscap,
    /// Connect-sum with a torus (`o`).
    Handle,
    /// A boundary circle fixed by a reflection (`*`).
    MirrorBoundary,
}

impl ComponentKind {
    /// Returns the rotation order for cone points and corner reflectors.
    pub fn order(self) -> Option<NonZeroU32> {
        match self {
            ComponentKind::ConePoint(n) | ComponentKind::CornerReflector(n) => Some(n),
            ComponentKind::Crosscap | ComponentKind::Handle | ComponentKind::MirrorBoundary => {
                None
            }
        }
    }

    /// Amount this component subtracts from the Euler characteristic on its own.
    ///
    /// Crosscaps, handles and mirror boundaries are charged through the
    /// symbol's aggregate counts instead, so they report `0.0` here.
    pub fn deficit(self) -> f64 {
        match self {
            ComponentKind::ConePoint(n) => 1.0 - 1.0 / f64::from(n.get()),
            ComponentKind::CornerReflector(n) => 1.0 - 1.0 / (2.0 * f64::from(n.get())),
            ComponentKind::Crosscap | ComponentKind::Handle | ComponentKind::MirrorBoundary => 0.0,
        }
    }
}

/// Prints the notation token for this component (`6`, `x`, `o`, `*`).
impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::ConePoint(n) | ComponentKind::CornerReflector(n) => write!(f, "{n}"),
            ComponentKind::Crosscap => f.write_str("x"),
            ComponentKind::Handle => f.write_str("o"),
            ComponentKind::MirrorBoundary => f.write_str("*"),
        }
    }
}
