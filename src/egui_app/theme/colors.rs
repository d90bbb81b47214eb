//! Color constants for the group pages.
//!
//! Warm brown/tan palette: dark chrome around light content cards.

use eframe::egui::Color32;

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Dark background for main areas
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Content card background - Off-white
pub const CARD_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Card border - Muted brown
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Post row hover - Light tan
pub const ROW_HOVER: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Recruiting badge - Green
pub const RECRUITING: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Recruitment closed badge - Gray
pub const RECRUIT_CLOSED: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Button primary background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Button secondary background
pub const BUTTON_SECONDARY: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Destructive action background
pub const BUTTON_DANGER: Color32 = Color32::from_rgb(0xB2, 0x3B, 0x3B);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xD0, 0xC0, 0xB0);

/// Accent color for links and highlights
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);
