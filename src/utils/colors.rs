/// ANSI colour helpers for terminal output.
use crate::core::normalize::NO_TIME;
use crate::models::TimeEntryStatus;
use ansi_term::Colour;

pub fn paint_status(status: TimeEntryStatus) -> String {
    let colour = match status {
        TimeEntryStatus::Approved => Colour::Green,
        TimeEntryStatus::Pending => Colour::Yellow,
        TimeEntryStatus::Rejected => Colour::Red,
    };
    colour.paint(status.label()).to_string()
}

/// Grey for placeholders (`--:--`, empty), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == NO_TIME {
        Colour::Fixed(244).paint(value).to_string()
    } else {
        value.to_string()
    }
}

pub fn paint_bar(bar: &str, status: TimeEntryStatus) -> String {
    match status {
        TimeEntryStatus::Approved => Colour::Green.paint(bar).to_string(),
        TimeEntryStatus::Pending => Colour::Yellow.paint(bar).to_string(),
        TimeEntryStatus::Rejected => Colour::Red.paint(bar).to_string(),
    }
}
