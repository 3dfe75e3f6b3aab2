//! `Symbol`: an immutable, parsed orbifold symbol.
//!
//! A `Symbol` keeps the exact string it was parsed from next to the component
//! sequence and three aggregate counts. The string is what the wallpaper table
//! is matched against, so `"*632"` and `"* 632"` carry identical components but
//! classify differently.

use crate::classify::{euler, wallpaper};
use crate::debug_invariants::DebugInvariants;
use crate::notation::component::ComponentKind;
use crate::notation::parser::parse_symbol;
use crate::orbifold_error::OrbifoldError;
use std::{fmt, str::FromStr};

/// A parsed orbifold symbol.
///
/// # Example
///
/// ```rust
/// use orbifold_notation::prelude::*;
///
/// let p4g = Symbol::parse("4*2")?;
/// assert_eq!(p4g.wallpaper_group()?, "p4g");
/// assert_eq!(p4g.euler_characteristic(), 0.0);
/// # Ok::<(), OrbifoldError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    source: String,
    components: Vec<ComponentKind>,
    has_mirror_boundary: bool,
    crosscap_count: usize,
    handle_count: usize,
}

impl Symbol {
    /// Parses `input`; see [`parse_symbol`] for the accepted grammar.
    pub fn parse(input: impl Into<String>) -> Result<Self, OrbifoldError> {
        parse_symbol(input)
    }

    pub(crate) fn from_parts(
        source: String,
        components: Vec<ComponentKind>,
        has_mirror_boundary: bool,
        crosscap_count: usize,
        handle_count: usize,
    ) -> Self {
        Symbol {
            source,
            components,
            has_mirror_boundary,
            crosscap_count,
            handle_count,
        }
    }

    /// The input exactly as given, whitespace included.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Components in left-to-right order of appearance.
    #[inline]
    pub fn components(&self) -> &[ComponentKind] {
        &self.components
    }

    /// True if the symbol contains at least one `*`.
    #[inline]
    pub fn has_mirror_boundary(&self) -> bool {
        self.has_mirror_boundary
    }

    /// Number of `x` crosscaps.
    #[inline]
    pub fn crosscap_count(&self) -> usize {
        self.crosscap_count
    }

    /// Number of `o` handles.
    #[inline]
    pub fn handle_count(&self) -> usize {
        self.handle_count
    }

    /// Orbifold Euler characteristic; `0.0` for every wallpaper symbol.
    pub fn euler_characteristic(&self) -> f64 {
        euler::euler_characteristic(self)
    }

    /// Wallpaper-group name for this exact symbol string.
    ///
    /// # Errors
    /// [`OrbifoldError::UnrecognizedSymbol`] when the string is not one of the
    /// 17 table keys. The match is literal: extra whitespace or reordered
    /// tokens will not be recognized.
    pub fn wallpaper_group(&self) -> Result<&'static str, OrbifoldError> {
        wallpaper::wallpaper_group(self)
    }

    /// True if [`Symbol::wallpaper_group`] would succeed.
    pub fn is_wallpaper_group(&self) -> bool {
        wallpaper::is_wallpaper_symbol(&self.source)
    }
}

impl DebugInvariants for Symbol {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Symbol invalid");
    }

    fn validate_invariants(&self) -> Result<(), OrbifoldError> {
        let crosscaps = self
            .components
            .iter()
            .filter(|c| matches!(c, ComponentKind::Crosscap))
            .count();
        if crosscaps != self.crosscap_count {
            return Err(OrbifoldError::InvariantViolation(format!(
                "crosscap count {} but {} Crosscap components",
                self.crosscap_count, crosscaps
            )));
        }

        let handles = self
            .components
            .iter()
            .filter(|c| matches!(c, ComponentKind::Handle))
            .count();
        if handles != self.handle_count {
            return Err(OrbifoldError::InvariantViolation(format!(
                "handle count {} but {} Handle components",
                self.handle_count, handles
            )));
        }

        let mirrored = self.components.contains(&ComponentKind::MirrorBoundary);
        if mirrored != self.has_mirror_boundary {
            return Err(OrbifoldError::InvariantViolation(format!(
                "mirror flag {} disagrees with components of {:?}",
                self.has_mirror_boundary, self.source
            )));
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Conversions
// -----------------------------------------------------------------------------

impl FromStr for Symbol {
    type Err = OrbifoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_symbol(s)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = OrbifoldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_symbol(value)
    }
}

impl TryFrom<String> for Symbol {
    type Error = OrbifoldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_symbol(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.source
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

/// Prints the symbol exactly as it was written.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
