//! Color Constants for the Editor Theme
//!
//! Purple gradient palette of the web editor, plus the sixteen legacy chat
//! color codes (`&0`..`&f`) used in rank prefixes and colors.

use eframe::egui::Color32;

/// Window background - Gradient start
pub const BG_PRIMARY: Color32 = Color32::from_rgb(0x66, 0x7E, 0xEA);

/// Top bar background - Gradient end
pub const BG_ACCENT: Color32 = Color32::from_rgb(0x76, 0x4B, 0xA2);

/// Card background
pub const CARD_BG: Color32 = Color32::from_rgb(0xF8, 0xF9, 0xFC);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xD9, 0xDD, 0xF0);

/// Text on cards
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2D, 0x2D, 0x3A);

/// Secondary text on cards
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x6B, 0x6B, 0x80);

/// Text on the gradient background
pub const TEXT_LIGHT: Color32 = Color32::WHITE;

pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error banner / landing error
pub const ERROR: Color32 = Color32::from_rgb(0xFF, 0x6B, 0x6B);

pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Primary button background
pub const BUTTON_PRIMARY: Color32 = BG_PRIMARY;

/// Primary button hover
pub const BUTTON_PRIMARY_HOVER: Color32 = Color32::from_rgb(0x5A, 0x6F, 0xD8);

/// Destructive button background
pub const BUTTON_DANGER: Color32 = Color32::from_rgb(0xE0, 0x4F, 0x5F);

/// Color of a legacy `&x` chat code, if `code` is one
pub fn legacy_color(code: &str) -> Option<Color32> {
    let mut chars = code.trim().chars();
    if !matches!(chars.next(), Some('&') | Some('§')) {
        return None;
    }
    let digit = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }

    let rgb = match digit {
        '0' => (0x00, 0x00, 0x00),
        '1' => (0x00, 0x00, 0xAA),
        '2' => (0x00, 0xAA, 0x00),
        '3' => (0x00, 0xAA, 0xAA),
        '4' => (0xAA, 0x00, 0x00),
        '5' => (0xAA, 0x00, 0xAA),
        '6' => (0xFF, 0xAA, 0x00),
        '7' => (0xAA, 0xAA, 0xAA),
        '8' => (0x55, 0x55, 0x55),
        '9' => (0x55, 0x55, 0xFF),
        'a' => (0x55, 0xFF, 0x55),
        'b' => (0x55, 0xFF, 0xFF),
        'c' => (0xFF, 0x55, 0x55),
        'd' => (0xFF, 0x55, 0xFF),
        'e' => (0xFF, 0xFF, 0x55),
        'f' => (0xFF, 0xFF, 0xFF),
        _ => return None,
    };
    Some(Color32::from_rgb(rgb.0, rgb.1, rgb.2))
}
