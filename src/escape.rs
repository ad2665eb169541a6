//! Escape Module — Converts finished Lines into terminal escape sequences.
//!
//! Responsibilities:
//! - Capability table: closed `Color`/`Capabilities` sets onto crossterm styles
//! - Per-fragment SGR sequences, reset after each styled fragment
//!
//! Only the final frame passes through here; layout and text never see
//! escape sequences.

use std::fmt;

use crossterm::style::{
    Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::Command;

use crate::text::{Fragment, Line};
use crate::types::{Capabilities, Color};

// ============================================================================
// Capability table
// ============================================================================

pub fn color_to_crossterm(color: Color) -> CtColor {
    match color {
        Color::Black => CtColor::Black,
        Color::Red => CtColor::DarkRed,
        Color::Green => CtColor::DarkGreen,
        Color::Yellow => CtColor::DarkYellow,
        Color::Blue => CtColor::DarkBlue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::White => CtColor::Grey,
        Color::BrightBlack => CtColor::DarkGrey,
        Color::BrightRed => CtColor::Red,
        Color::BrightGreen => CtColor::Green,
        Color::BrightYellow => CtColor::Yellow,
        Color::BrightBlue => CtColor::Blue,
        Color::BrightMagenta => CtColor::Magenta,
        Color::BrightCyan => CtColor::Cyan,
        Color::BrightWhite => CtColor::White,
    }
}

const ATTRIBUTE_TABLE: [(Capabilities, Attribute); 10] = [
    (Capabilities::BOLD, Attribute::Bold),
    (Capabilities::DIM, Attribute::Dim),
    (Capabilities::ITALIC, Attribute::Italic),
    (Capabilities::UNDERLINE, Attribute::Underlined),
    (Capabilities::BLINK, Attribute::SlowBlink),
    (Capabilities::FLASH, Attribute::RapidBlink),
    (Capabilities::REVERSE, Attribute::Reverse),
    // Standout has no SGR of its own; terminals render it as reverse video.
    (Capabilities::STANDOUT, Attribute::Reverse),
    (Capabilities::HIDDEN, Attribute::Hidden),
    (Capabilities::STRIKETHROUGH, Attribute::CrossedOut),
];

pub fn capability_attributes(capabilities: Capabilities) -> impl Iterator<Item = Attribute> {
    ATTRIBUTE_TABLE
        .into_iter()
        .filter(move |(cap, _)| capabilities.contains(*cap))
        .map(|(_, attr)| attr)
}

// ============================================================================
// Escaping
// ============================================================================

/// Display adapter that writes a line with its escape sequences.
pub struct Escaped<'a>(pub &'a Line);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in self.0.fragments() {
            write_fragment(f, fragment)?;
        }
        Ok(())
    }
}

fn write_fragment(f: &mut fmt::Formatter<'_>, fragment: &Fragment) -> fmt::Result {
    let style = &fragment.style;
    if style.is_plain() {
        return f.write_str(&fragment.text);
    }

    if let Some(fg) = style.foreground {
        SetForegroundColor(color_to_crossterm(fg)).write_ansi(f)?;
    }
    if let Some(bg) = style.background {
        SetBackgroundColor(color_to_crossterm(bg)).write_ansi(f)?;
    }
    for attr in capability_attributes(style.capabilities) {
        SetAttribute(attr).write_ansi(f)?;
    }
    Print(&fragment.text).write_ansi(f)?;
    SetAttribute(Attribute::Reset).write_ansi(f)
}

pub fn escape_line(line: &Line) -> String {
    Escaped(line).to_string()
}

/// Escape every line and join them with newlines.
pub fn escape_lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(escape_line)
        .collect::<Vec<_>>()
        .join("\n")
}
