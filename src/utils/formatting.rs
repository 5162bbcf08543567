//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}h")
}

pub fn format_money(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{symbol}{:.2}", amount.abs())
    } else {
        format!("{symbol}{amount:.2}")
    }
}

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Terminal width of `s`, ignoring colour codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{s}", " ".repeat(pad))
}

/// Horizontal bar of `width` cells scaled against `max`.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

/// Wrap free-text notes for display under a table row.
pub fn wrap_note(note: &str, width: usize, indent: &str) -> String {
    let opts = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(note, opts)
}
