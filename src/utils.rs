//! Diagnostics shared by the library and the `modelreg` binary.

pub mod errors;

pub use errors::{color_mode, configure_color, ColorMode};
