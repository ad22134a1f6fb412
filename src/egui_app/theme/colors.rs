//! Color Constants
//!
//! Dark charcoal background with an amber accent for headings and the
//! primary actions.

use eframe::egui::Color32;

/// Top bar background - Charcoal
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);

/// Main area background
pub const BG_DARK: Color32 = Color32::from_rgb(0x1A, 0x1A, 0x1E);

/// Movie card background
pub const CARD_BG: Color32 = Color32::from_rgb(0x2A, 0x2A, 0x30);

/// Movie card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x3A, 0x3A, 0x42);

/// Dialog background
pub const DIALOG_BG: Color32 = Color32::from_rgb(0x24, 0x24, 0x2A);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF2, 0xF2, 0xF2);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0x9A, 0xA4);

/// Accent color for headings - Amber
pub const ACCENT: Color32 = Color32::from_rgb(0xFF, 0xBC, 0x42);

/// Button primary background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x19, 0x76, 0xD2);

/// Destructive action background
pub const BUTTON_DANGER: Color32 = Color32::from_rgb(0xD3, 0x2F, 0x2F);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Info color - Blue
pub const INFO: Color32 = Color32::from_rgb(0x42, 0xA5, 0xF5);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);
