//! Orbifold Euler characteristic.
//!
//! Starting from the sphere's `2`, every handle costs `2`, every crosscap `1`,
//! a mirror boundary `1`, each cone point of order `n` costs `1 - 1/n` and each
//! corner reflector `1 - 1/(2n)`. Symbols that are literally wallpaper-table
//! keys short-circuit to `0`.

use crate::classify::wallpaper;
use crate::notation::component::ComponentKind;
use crate::notation::symbol::Symbol;

/// Euler characteristic of `symbol`. Never fails and is not rounded.
pub fn euler_characteristic(symbol: &Symbol) -> f64 {
    if wallpaper::is_wallpaper_symbol(symbol.as_str()) {
        log::trace!("{:?} is a wallpaper symbol; chi = 0", symbol.as_str());
        return 0.0;
    }

    let mut chi = 2.0;
    chi -= 2.0 * symbol.handle_count() as f64;
    chi -= symbol.crosscap_count() as f64;
    if symbol.has_mirror_boundary() {
        chi -= 1.0;
    }

    let mut seen_mirror_boundary = false;
    for component in symbol.components() {
        match component {
            ComponentKind::ConePoint(_) | ComponentKind::CornerReflector(_) => {
                chi -= component.deficit();
            }
            // already charged through the counts
            ComponentKind::Crosscap | ComponentKind::Handle => {}
            ComponentKind::MirrorBoundary => seen_mirror_boundary = true,
        }
    }

    // Unreachable for parsed symbols: the flag and the component are set together.
    if symbol.has_mirror_boundary() && !seen_mirror_boundary {
        log::warn!(
            "mirror flag set without a MirrorBoundary component in {:?}",
            symbol.as_str()
        );
        chi -= 1.0;
    }

    chi
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chi(s: &str) -> f64 {
        euler_characteristic(&Symbol::parse(s).unwrap())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn sphere_and_surfaces() {
        assert_eq!(chi(""), 2.0);
        assert_eq!(chi("oo"), -2.0);
        assert_eq!(chi("x"), 1.0);
        assert_eq!(chi("ox"), -1.0);
    }

    #[test]
    fn cone_points_use_full_deficit() {
        // 2 - 1/2 - 2/3 - 4/5
        assert_close(chi("2 3 5"), 2.0 - 0.5 - 2.0 / 3.0 - 0.8);
        assert_close(chi("2 2"), 1.0);
        // one run, one order
        assert_close(chi("22"), 2.0 - (1.0 - 1.0 / 22.0));
    }

    #[test]
    fn corner_reflectors_use_half_deficit() {
        // disk with one corner: 2 - 1 - (1 - 1/4)
        assert_close(chi("*2"), 0.25);
        // spaced spelling is not a table key and goes through the formula
        assert_close(chi("* 6 3 2"), 1.0 - (11.0 / 12.0) - (5.0 / 6.0) - 0.75);
        assert_close(chi("* 632"), 1.0 / 1264.0);
    }

    #[test]
    fn mirror_charged_once() {
        assert_eq!(chi("**"), 1.0);
        assert_eq!(chi("*"), 0.0);
    }

    #[test]
    fn missing_mirror_component_costs_extra() {
        let s = Symbol::from_parts(String::new(), Vec::new(), true, 0, 0);
        assert_eq!(euler_characteristic(&s), 0.0);
    }
}
