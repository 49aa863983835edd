//! Color theme constants for the dashboard.
//!
//! Each display tier gets its own accent color; everything else stays in a
//! minimal dark palette.

use ratatui::style::Color;

use crate::aqi::DisplayTier;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Refresh spinner
pub const COLOR_BUSY: Color = Color::Yellow;

/// Destructive toast border and title
pub const COLOR_DESTRUCTIVE: Color = Color::Red;

/// Normal toast border
pub const COLOR_TOAST: Color = Color::Rgb(4, 181, 117); // green #04B575

// ============================================================================
// Tier Colors
// ============================================================================

pub const COLOR_TIER_FRESH: Color = Color::Rgb(16, 185, 129); // emerald
pub const COLOR_TIER_FAIR: Color = Color::Rgb(245, 158, 11); // amber
pub const COLOR_TIER_CAUTION: Color = Color::Rgb(249, 115, 22); // orange
pub const COLOR_TIER_POOR: Color = Color::Rgb(239, 68, 68); // red
pub const COLOR_TIER_SEVERE: Color = Color::Rgb(168, 85, 247); // purple
pub const COLOR_TIER_CRITICAL: Color = Color::Rgb(153, 27, 27); // dark red

/// Accent color for a display tier.
pub fn tier_color(tier: DisplayTier) -> Color {
    match tier {
        DisplayTier::Fresh => COLOR_TIER_FRESH,
        DisplayTier::Fair => COLOR_TIER_FAIR,
        DisplayTier::Caution => COLOR_TIER_CAUTION,
        DisplayTier::Poor => COLOR_TIER_POOR,
        DisplayTier::Severe => COLOR_TIER_SEVERE,
        DisplayTier::Critical => COLOR_TIER_CRITICAL,
    }
}
