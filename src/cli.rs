use std::io::{self, IsTerminal};

use modelreg::utils::ColorMode;

use crate::{ListingFormat, RequestedColorMode};
use list::table::IntoTable;

pub(crate) mod list;
pub(crate) mod resolve;

/// Returns whether ANSI color should be used
/// If the user has specified a preference, this is honored. This preference
/// can be specified through the command line or the "NO_COLOR" environment
/// variable. If the user hasn't stated a preference, color is enabled if the
/// output is a terminal.
pub(crate) fn resolve_color(cm: RequestedColorMode) -> ColorMode {
    match cm {
        RequestedColorMode::Auto => {
            let disable_color =
                std::env::var_os("NO_COLOR").is_some() || !io::stdout().is_terminal();

            if disable_color {
                ColorMode::Off
            } else {
                ColorMode::On
            }
        }
        RequestedColorMode::On => ColorMode::On,
        RequestedColorMode::Off => ColorMode::Off,
    }
}

pub(crate) fn format_output<O: IntoTable + serde::Serialize>(object: O, format: ListingFormat) {
    match format {
        ListingFormat::Json => match serde_json::to_string_pretty(&object) {
            Ok(output) => println!("{}", output),
            Err(err) => modelreg::die!("failed to serialize output: {}", err),
        },
        ListingFormat::Table => {
            let tab = object.into_table();

            print!("{}", tab);
        }
        ListingFormat::HeaderlessTable => {
            let mut tab = object.into_table();

            tab.print_header(false);

            print!("{}", tab);
        }
    }
}
