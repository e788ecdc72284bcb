use colored::Colorize;
use std::fmt;

/// Text roles used by the terminal renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Section,
    Positive,
    Negative,
    Accent,
    Muted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    /// No ANSI styling at all.
    pub plain_mode: bool,
    /// Bold instead of colour.
    pub high_contrast_mode: bool,
}

pub fn apply_style(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => text,
    };

    if prefs.plain_mode {
        return formatted;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Section | MessageKind::Positive | MessageKind::Negative => {
                formatted.bold().to_string()
            }
            _ => formatted,
        };
    }

    match kind {
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Positive => formatted.bright_green().to_string(),
        MessageKind::Negative => formatted.bright_red().to_string(),
        MessageKind::Accent => formatted.bright_blue().to_string(),
        MessageKind::Muted => formatted.dimmed().to_string(),
    }
}

/// Paints `text` with a `#rrggbb` colour, leaving it untouched in plain or
/// high-contrast mode or when the colour cannot be parsed.
pub fn paint_hex(text: &str, hex: &str, prefs: &OutputPreferences) -> String {
    if prefs.plain_mode || prefs.high_contrast_mode {
        return text.to_string();
    }
    match parse_hex(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() < 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_leaves_text_alone() {
        let prefs = OutputPreferences {
            plain_mode: true,
            ..OutputPreferences::default()
        };
        assert_eq!(apply_style(MessageKind::Section, " Weekly ", &prefs), "=== Weekly ===");
        assert_eq!(paint_hex("███", "#f59e0b", &prefs), "███");
    }

    #[test]
    fn parses_hex_with_alpha_suffix() {
        assert_eq!(parse_hex("#f59e0b"), Some((0xf5, 0x9e, 0x0b)));
        assert_eq!(parse_hex("#f59e0bCC"), Some((0xf5, 0x9e, 0x0b)));
        assert_eq!(parse_hex("rgba(0, 0, 0, 0.1)"), None);
    }
}
