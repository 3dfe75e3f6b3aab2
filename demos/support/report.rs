use orbifold_notation::prelude::*;

/// Symbols printed by the demo.
pub const DEMO_SYMBOLS: [&str; 5] = ["*632", "4*2", "333", "*x", "o"];

/// Text block for one symbol. Failures are written into the block instead of
/// being returned.
pub fn describe(text: &str) -> String {
    let symbol = match Symbol::parse(text) {
        Ok(symbol) => symbol,
        Err(err) => return format!("Symbol: {text}\n  Parse error: {err}\n"),
    };
    let group = match symbol.wallpaper_group() {
        Ok(group) => group.to_string(),
        Err(err) => err.to_string(),
    };
    format!(
        "Symbol: {text}\n  Wallpaper group: {group}\n  Euler characteristic (approx): {}\n",
        symbol.euler_characteristic()
    )
}
