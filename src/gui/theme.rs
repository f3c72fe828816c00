//! Color constants for the settings and server switcher windows

use egui::Color32;

/// Background: dark navy
pub const BG_PRIMARY: Color32 = Color32::from_rgb(20, 22, 34);
/// Secondary background for rows and panels
pub const BG_SECONDARY: Color32 = Color32::from_rgb(30, 34, 52);

/// Primary text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 245);
/// Secondary text
pub const TEXT_DIM: Color32 = Color32::from_rgb(170, 175, 200);
/// Muted text
pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 115, 140);

pub const ACCENT_GOLD: Color32 = Color32::from_rgb(255, 200, 50);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(80, 255, 120);
pub const ACCENT_RED: Color32 = Color32::from_rgb(255, 80, 80);
pub const ACCENT_CYAN: Color32 = Color32::from_rgb(0, 220, 255);
