//! CLI presentation: listing text and current-context highlighting.

use crate::config::{CctxConfig, ENV_FORCE_COLOR, ENV_NO_COLOR};
use crate::engine::ContextEntry;
use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};
use std::io::IsTerminal;
use tracing::warn;

/// Whether listing output should carry ANSI highlighting.
///
/// The picker feed passes `force` since the picker renders ANSI itself
/// regardless of where stdout points.
pub fn color_enabled(force: bool) -> bool {
    if force {
        return true;
    }
    if std::env::var(ENV_NO_COLOR).map_or(false, |v| !v.is_empty()) {
        return false;
    }
    if std::env::var(ENV_FORCE_COLOR).map_or(false, |v| !v.is_empty()) {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// One name per line, store order, current entry highlighted when `color`.
pub fn format_listing(entries: &[ContextEntry], config: &CctxConfig, color: bool) -> String {
    entries
        .iter()
        .map(|entry| {
            if entry.active && color {
                highlight(&entry.name, config)
            } else {
                entry.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn highlight(name: &str, config: &CctxConfig) -> String {
    let mut style = Style::new().bold();
    style = style.color(
        parse_color(&config.current_fg).unwrap_or(DynColors::Ansi(AnsiColors::Yellow)),
    );
    if let Some(bg) = parse_color(&config.current_bg) {
        style = style.on_color(bg);
    }
    format!("{}", name.style(style))
}

/// Parse a color spec: a named ANSI color or `#rrggbb`.
fn parse_color(spec: &str) -> Option<DynColors> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }

    if let Some(hex) = spec.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(DynColors::Rgb(r, g, b));
        }
        warn!(spec, "Ignoring malformed hex color");
        return None;
    }

    let ansi = match spec.to_ascii_lowercase().as_str() {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "yellow" => AnsiColors::Yellow,
        "blue" => AnsiColors::Blue,
        "magenta" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "white" => AnsiColors::White,
        "bright-black" => AnsiColors::BrightBlack,
        "bright-red" => AnsiColors::BrightRed,
        "bright-green" => AnsiColors::BrightGreen,
        "bright-yellow" => AnsiColors::BrightYellow,
        "bright-blue" => AnsiColors::BrightBlue,
        "bright-magenta" => AnsiColors::BrightMagenta,
        "bright-cyan" => AnsiColors::BrightCyan,
        "bright-white" => AnsiColors::BrightWhite,
        _ => {
            warn!(spec, "Ignoring unknown color name");
            return None;
        }
    };
    Some(DynColors::Ansi(ansi))
}
