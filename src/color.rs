use lazy_static::lazy_static;
use modelreg::utils::{color_mode, ColorMode};
use nu_ansi_term::{AnsiString, Color, Style};

lazy_static! {
    pub(crate) static ref HEADER: Style = Style::new().bold();
    pub(crate) static ref MODEL_KEY: Style = Color::Green.bold();
}

pub(crate) trait MaybePaint {
    /// Paints `input` when color output is enabled and returns it unchanged otherwise.
    #[must_use]
    fn maybe_paint<'a>(self, input: &'a str) -> AnsiString<'a>;
}

impl MaybePaint for Style {
    fn maybe_paint<'a>(self, input: &'a str) -> AnsiString<'a> {
        match color_mode() {
            ColorMode::On => self.paint(input),
            ColorMode::Off => input.into(),
        }
    }
}
