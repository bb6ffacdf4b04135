//! Color palette for Loupe's TUI.
//!
//! A small, opinionated dark theme used throughout the interface: neutrals
//! for backgrounds and borders, subtexts for secondary content, and a few
//! accents for highlights and semantic states.
use ratatui::style::Color;

/// Application theme palette used by rendering code.
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Subtle surface color for component backgrounds.
    pub surface: Color,
    /// Muted border/overlay color.
    pub overlay: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext: Color,
    /// Accent used for the focused input border and selections.
    pub accent: Color,
    /// Accent used for query-match highlights inside titles.
    pub highlight: Color,
    /// Success/positive state color (result domains).
    pub green: Color,
    /// Warning/attention state color (loading indicator).
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's default theme palette.
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: hex((0x16, 0x16, 0x20)),
        surface: hex((0x2a, 0x2b, 0x3c)),
        overlay: hex((0x6c, 0x70, 0x86)),
        text: hex((0xc8, 0xd3, 0xf5)),
        subtext: hex((0x82, 0x8b, 0xb8)),
        accent: hex((0x82, 0xaa, 0xff)),
        highlight: hex((0xff, 0xc7, 0x77)),
        green: hex((0xc3, 0xe8, 0x8d)),
        yellow: hex((0xff, 0xc7, 0x77)),
        red: hex((0xff, 0x75, 0x7f)),
    }
}
