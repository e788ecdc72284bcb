//! Theme-dependent colours. The active theme is always passed in by the caller.

pub mod chrome;
pub mod palette;

pub use chrome::ChartChrome;
pub use palette::{assign_colors, hover_color, Palette, HOVER_ALPHA};
