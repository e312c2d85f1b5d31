use crossterm::style::Color;

/// Design tokens for the Kidari terminal UI.
///
/// Only 5 semantic colors (`colors::*`). Icons and borders are sourced
/// from this module so the ASCII fallback stays in one place.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const POINTER: &str = "↑";

    // Issue categories.
    pub const DURATION: &str = "⏱";
    pub const CONSECUTIVE: &str = "⇄";
    pub const CONFLICT: &str = "⚑";

    // Command identifiers (used in headers).
    pub const AUDIT: &str = "🔍";
    pub const EXPLAIN: &str = "📖";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const POINTER: &str = "^";

    pub const DURATION: &str = "[TIME]";
    pub const CONSECUTIVE: &str = "[PAIR]";
    pub const CONFLICT: &str = "[CONFLICT]";

    pub const AUDIT: &str = "[AUDIT]";
    pub const EXPLAIN: &str = "[EXPLAIN]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}
