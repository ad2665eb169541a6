//! Shared types, enums, and constants.
//!
//! The style space (colors and terminal attributes) and the key space are
//! closed sets; everything that crosses module boundaries lives here.

use bitflags::bitflags;

// ============================================================================
// Color
// ============================================================================

/// The 16 ANSI terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    pub const ALL: [Color; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Palette index 0-15 (normal colors first, bright colors at 8-15).
    pub fn ansi_index(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
            Self::BrightBlack => 8,
            Self::BrightRed => 9,
            Self::BrightGreen => 10,
            Self::BrightYellow => 11,
            Self::BrightBlue => 12,
            Self::BrightMagenta => 13,
            Self::BrightCyan => 14,
            Self::BrightWhite => 15,
        }
    }

    pub fn is_bright(self) -> bool {
        self.ansi_index() >= 8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "bright_black",
            Self::BrightRed => "bright_red",
            Self::BrightGreen => "bright_green",
            Self::BrightYellow => "bright_yellow",
            Self::BrightBlue => "bright_blue",
            Self::BrightMagenta => "bright_magenta",
            Self::BrightCyan => "bright_cyan",
            Self::BrightWhite => "bright_white",
        }
    }
}

// ============================================================================
// Capabilities (bitflags)
// ============================================================================

bitflags! {
    /// Terminal text attributes. Rendered through the capability table in
    /// `escape`, never consulted during layout.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u16 {
        const BOLD          = 0b0000_0000_0001;
        const DIM           = 0b0000_0000_0010;
        const ITALIC        = 0b0000_0000_0100;
        const UNDERLINE     = 0b0000_0000_1000;
        const BLINK         = 0b0000_0001_0000;
        const FLASH         = 0b0000_0010_0000;
        const REVERSE       = 0b0000_0100_0000;
        const STANDOUT      = 0b0000_1000_0000;
        const HIDDEN        = 0b0001_0000_0000;
        const STRIKETHROUGH = 0b0010_0000_0000;
    }
}

// ============================================================================
// Keys
// ============================================================================

/// Identity of a single keystroke as delivered by the terminal collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

impl Key {
    /// Canonical name, the inverse of [`Key::parse`].
    pub fn name(&self) -> String {
        match self {
            Self::Char(' ') => "space".to_string(),
            Self::Char(c) => c.to_string(),
            Self::Ctrl(c) => format!("ctrl-{c}"),
            Self::Up => "up".to_string(),
            Self::Down => "down".to_string(),
            Self::Left => "left".to_string(),
            Self::Right => "right".to_string(),
            Self::Enter => "enter".to_string(),
            Self::Escape => "esc".to_string(),
            Self::Tab => "tab".to_string(),
            Self::BackTab => "backtab".to_string(),
            Self::Backspace => "backspace".to_string(),
            Self::Delete => "delete".to_string(),
            Self::Insert => "insert".to_string(),
            Self::Home => "home".to_string(),
            Self::End => "end".to_string(),
            Self::PageUp => "pageup".to_string(),
            Self::PageDown => "pagedown".to_string(),
            Self::F(n) => format!("f{n}"),
        }
    }

    /// Parse a key name such as `"q"`, `"up"`, `"ctrl-c"` or `"f5"`.
    /// Single characters are case sensitive, named keys are not.
    pub fn parse(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Self::Char(c));
        }

        let lower = name.to_ascii_lowercase();
        if let Some(rest) = lower.strip_prefix("ctrl-") {
            let mut chars = rest.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Self::Ctrl(c)),
                _ => None,
            };
        }
        if let Some(n) = lower.strip_prefix('f') {
            if let Ok(n) = n.parse::<u8>() {
                return (1..=24).contains(&n).then_some(Self::F(n));
            }
        }

        match lower.as_str() {
            "space" => Some(Self::Char(' ')),
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "enter" | "return" => Some(Self::Enter),
            "esc" | "escape" => Some(Self::Escape),
            "tab" => Some(Self::Tab),
            "backtab" => Some(Self::BackTab),
            "backspace" => Some(Self::Backspace),
            "delete" | "del" => Some(Self::Delete),
            "insert" => Some(Self::Insert),
            "home" => Some(Self::Home),
            "end" => Some(Self::End),
            "pageup" => Some(Self::PageUp),
            "pagedown" => Some(Self::PageDown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_indices_are_unique_and_ordered() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.ansi_index() as usize, i);
        }
        assert!(!Color::Red.is_bright());
        assert!(Color::BrightRed.is_bright());
        assert_eq!(Color::BrightCyan.name(), "bright_cyan");
    }

    #[test]
    fn test_capabilities_bitflags() {
        let mut caps = Capabilities::empty();
        caps |= Capabilities::BOLD;
        caps |= Capabilities::UNDERLINE;
        assert!(caps.contains(Capabilities::BOLD));
        assert!(!caps.contains(Capabilities::ITALIC));
        assert!(caps.contains(Capabilities::UNDERLINE));
    }

    #[test]
    fn test_key_parse_named() {
        assert_eq!(Key::parse("up"), Some(Key::Up));
        assert_eq!(Key::parse("LEFT"), Some(Key::Left));
        assert_eq!(Key::parse("esc"), Some(Key::Escape));
        assert_eq!(Key::parse("ctrl-c"), Some(Key::Ctrl('c')));
        assert_eq!(Key::parse("f5"), Some(Key::F(5)));
        assert_eq!(Key::parse("space"), Some(Key::Char(' ')));
        assert_eq!(Key::parse("f99"), None);
        assert_eq!(Key::parse("nonsense"), None);
    }

    #[test]
    fn test_key_single_char_is_case_sensitive() {
        assert_eq!(Key::parse("q"), Some(Key::Char('q')));
        assert_eq!(Key::parse("Q"), Some(Key::Char('Q')));
        assert_eq!(Key::parse("f"), Some(Key::Char('f')));
    }

    #[test]
    fn test_key_name_round_trips() {
        for key in [
            Key::Char('x'),
            Key::Char(' '),
            Key::Ctrl('c'),
            Key::Up,
            Key::PageDown,
            Key::BackTab,
            Key::F(12),
        ] {
            assert_eq!(Key::parse(&key.name()), Some(key));
        }
    }
}
