//! Orbifold symbol notation: component kinds, the parser, and the parsed
//! [`Symbol`] value.
//!
//! The accepted alphabet is ASCII digits, `*`, `x`, `o`, space and tab.
//! Digit runs become cone points, or corner reflectors while inside a mirror
//! region (after `*`, until the next `x` or `o`).

pub mod component;
pub mod parser;
pub mod symbol;

pub use component::ComponentKind;
pub use parser::parse_symbol;
pub use symbol::Symbol;
