use nu_ansi_term::Color;
use std::sync::atomic::{AtomicBool, Ordering};

pub const DEFAULT_EXIT_CODE: i32 = 1;

static USE_COLOR: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ColorMode {
    On,
    Off,
}

pub fn configure_color(cmode: ColorMode) {
    USE_COLOR.store(matches!(cmode, ColorMode::On), Ordering::Relaxed);
}

pub fn color_mode() -> ColorMode {
    match USE_COLOR.load(Ordering::Relaxed) {
        true => ColorMode::On,
        false => ColorMode::Off,
    }
}

fn report(indicator: Color, label: &str, text: &str) {
    match color_mode() {
        ColorMode::On => {
            let style = indicator.bold();
            let text_style = Color::Default.bold();

            eprintln!("{} {}", style.paint(label), text_style.paint(text));
        }
        ColorMode::Off => {
            eprintln!("{} {}", label, text);
        }
    }
}

pub fn error_internal(text: &str) {
    report(Color::Red, "error:", text);
}

pub fn warn_internal(text: &str) {
    report(Color::Yellow, "warning:", text);
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => ({
        let formatted = format!($($arg)*);
        $crate::utils::errors::warn_internal(&formatted);
    })
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => ({
        let formatted = format!($($arg)*);
        $crate::utils::errors::error_internal(&formatted);
    })
}

#[macro_export]
macro_rules! die {
    ($($arg:tt)*) => ({
        let formatted = format!($($arg)*);
        $crate::utils::errors::error_internal(&formatted);
        ::std::process::exit($crate::utils::errors::DEFAULT_EXIT_CODE);
    })
}
