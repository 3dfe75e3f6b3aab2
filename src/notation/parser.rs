//! Single-pass tokenizer for orbifold symbols.
//!
//! The scan is a fold over `char_indices` with `ParseState` as accumulator.
//! Digits are buffered until the run ends, then emitted as a cone point or a
//! corner reflector depending on whether a `*` has been seen since the last
//! `x`/`o`.

use crate::debug_invariants::DebugInvariants;
use crate::notation::component::ComponentKind;
use crate::notation::symbol::Symbol;
use crate::orbifold_error::OrbifoldError;
use std::num::NonZeroU32;

#[derive(Debug, Default)]
struct ParseState {
    components: Vec<ComponentKind>,
    has_mirror_boundary: bool,
    crosscap_count: usize,
    handle_count: usize,
    in_mirror_region: bool,
    /// Byte offset and text of a digit run not yet emitted.
    pending_digits: Option<(usize, String)>,
}

impl ParseState {
    fn step(mut self, (position, ch): (usize, char)) -> Result<Self, OrbifoldError> {
        if ch.is_ascii_digit() {
            match &mut self.pending_digits {
                Some((_, digits)) => digits.push(ch),
                None => self.pending_digits = Some((position, ch.to_string())),
            }
            return Ok(self);
        }

        self.flush_digits()?;
        match ch {
            '*' => {
                self.has_mirror_boundary = true;
                self.in_mirror_region = true;
                self.components.push(ComponentKind::MirrorBoundary);
            }
            'x' => {
                self.crosscap_count += 1;
                self.in_mirror_region = false;
                self.components.push(ComponentKind::Crosscap);
            }
            'o' => {
                self.handle_count += 1;
                self.in_mirror_region = false;
                self.components.push(ComponentKind::Handle);
            }
            ' ' | '\t' => {}
            _ => return Err(OrbifoldError::UnsupportedCharacter { ch, position }),
        }
        Ok(self)
    }

    fn flush_digits(&mut self) -> Result<(), OrbifoldError> {
        let Some((position, digits)) = self.pending_digits.take() else {
            return Ok(());
        };
        let order = digits
            .parse::<NonZeroU32>()
            .map_err(|_| OrbifoldError::InvalidOrder { digits, position })?;
        self.components.push(if self.in_mirror_region {
            ComponentKind::CornerReflector(order)
        } else {
            ComponentKind::ConePoint(order)
        });
        Ok(())
    }

    fn finish(mut self, input: String) -> Result<Symbol, OrbifoldError> {
        self.flush_digits()?;
        Ok(Symbol::from_parts(
            input,
            self.components,
            self.has_mirror_boundary,
            self.crosscap_count,
            self.handle_count,
        ))
    }
}

/// Parse an orbifold symbol such as `"*632"`, `"4*2"` or `"xx"`.
///
/// Spaces and tabs are skipped anywhere. Parsing is all-or-nothing: on error no
/// [`Symbol`] is produced.
///
/// # Errors
/// - [`OrbifoldError::UnsupportedCharacter`] for anything other than ASCII
///   digits, space, tab, `*`, `x`, `o`.
/// - [`OrbifoldError::InvalidOrder`] for a digit run that is zero or does not
///   fit in a `u32`.
pub fn parse_symbol(input: impl Into<String>) -> Result<Symbol, OrbifoldError> {
    let input = input.into();
    let state = input
        .char_indices()
        .try_fold(ParseState::default(), ParseState::step)?;
    let symbol = state.finish(input)?;
    symbol.debug_assert_invariants();
    log::debug!(
        "parsed orbifold symbol {:?} into {} components",
        symbol.as_str(),
        symbol.components().len()
    );
    Ok(symbol)
}
