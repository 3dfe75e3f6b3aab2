//! The 17 Euclidean wallpaper groups keyed by their orbifold symbol.
//!
//! Matching is by exact string. A symbol spelled with whitespace or with its
//! tokens reordered is a different key and is not recognized, even when it
//! parses to the same components as a table entry.

use crate::notation::symbol::Symbol;
use crate::orbifold_error::OrbifoldError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// `(orbifold symbol, wallpaper group)` pairs, most symmetric first.
pub const WALLPAPER_GROUPS: [(&str, &str); 17] = [
    ("*632", "p6m"),
    ("632", "p6"),
    ("*442", "p4m"),
    ("4*2", "p4g"),
    ("442", "p4"),
    ("*333", "p3m1"),
    ("3*3", "p31m"),
    ("333", "p3"),
    ("*2222", "pmm"),
    ("2*22", "pmg"),
    ("22*", "pgg"),
    ("2222", "p2"),
    ("*22", "cmm"),
    ("*x", "cm"),
    ("xx", "pg"),
    ("o", "p1"),
    ("*", "pm"),
];

static WALLPAPER_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| WALLPAPER_GROUPS.iter().copied().collect());

/// Group name for an exact symbol string, if it is one of the 17 keys.
pub fn lookup(symbol: &str) -> Option<&'static str> {
    WALLPAPER_TABLE.get(symbol).copied()
}

/// True if `symbol` is literally one of the wallpaper-table keys.
pub fn is_wallpaper_symbol(symbol: &str) -> bool {
    WALLPAPER_TABLE.contains_key(symbol)
}

/// Classify `symbol` by its original spelling.
///
/// # Errors
/// [`OrbifoldError::UnrecognizedSymbol`] carrying the original string when it
/// is not a table key. The symbol's Euler characteristic is unaffected.
pub fn wallpaper_group(symbol: &Symbol) -> Result<&'static str, OrbifoldError> {
    lookup(symbol.as_str()).ok_or_else(|| {
        log::trace!("no wallpaper group for {:?}", symbol.as_str());
        OrbifoldError::UnrecognizedSymbol(symbol.as_str().to_owned())
    })
}
