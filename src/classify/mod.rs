//! Derived facts about a parsed symbol: the Euler characteristic and the
//! wallpaper-group classification.

pub mod euler;
pub mod wallpaper;

pub use euler::euler_characteristic;
pub use wallpaper::{WALLPAPER_GROUPS, wallpaper_group};
