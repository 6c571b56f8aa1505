//! Theme provider for Ujenzi Hub
//!
//! Two fixed palettes, light and dark, selected by the current
//! [`ThemeMode`]. Screens never hold a palette of their own; they read a
//! [`ThemeSnapshot`] from a [`ThemeProvider`] and re-read it when the mode
//! changes.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{palette_for, toggle_label};
//! use app_state::ThemeMode;
//!
//! let palette = palette_for(ThemeMode::Dark);
//! assert_eq!(palette.background, "#121212");
//! assert_eq!(toggle_label(ThemeMode::Dark), "Light Mode");
//! ```

use app_state::ThemeMode;
use serde::Serialize;
use tokio::sync::watch;

// =============================================================================
// Color Utilities
// =============================================================================

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

// =============================================================================
// Palettes
// =============================================================================

/// Named color tokens used by themed components
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePalette {
    /// Screen background
    pub background: &'static str,
    /// Body text
    pub text: &'static str,
    /// Text input fill
    pub input_background: &'static str,
    /// Text input outline
    pub input_border: &'static str,
    /// Primary button fill
    pub button_background: &'static str,
    /// Primary button label
    pub button_text: &'static str,
    /// Secondary labels and placeholders
    pub label: &'static str,
}

/// Light palette
pub static LIGHT_PALETTE: ThemePalette = ThemePalette {
    background: "#F5F5F5",
    text: "#333333",
    input_background: "#FFFFFF",
    input_border: "#DDDDDD",
    button_background: "#6A1B9A",
    button_text: "#FFFFFF",
    label: "#666666",
};

/// Dark palette
pub static DARK_PALETTE: ThemePalette = ThemePalette {
    background: "#121212",
    text: "#E0E0E0",
    input_background: "#1E1E1E",
    input_border: "#333333",
    button_background: "#BB86FC",
    button_text: "#121212",
    label: "#AAAAAA",
};

/// Palette for a mode
pub fn palette_for(mode: ThemeMode) -> &'static ThemePalette {
    match mode {
        ThemeMode::Light => &LIGHT_PALETTE,
        ThemeMode::Dark => &DARK_PALETTE,
    }
}

/// Label of the light/dark toggle button: names the mode it switches to
pub fn toggle_label(mode: ThemeMode) -> &'static str {
    if mode.is_dark() {
        "Light Mode"
    } else {
        "Dark Mode"
    }
}

// =============================================================================
// Provider
// =============================================================================

/// Read-only view of the theme at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    /// Mode the palette was derived from
    pub mode: ThemeMode,
    /// Active palette
    pub palette: &'static ThemePalette,
    /// Shorthand for `mode.is_dark()`
    pub is_dark: bool,
}

impl ThemeSnapshot {
    /// Derive the snapshot for a mode
    pub fn from_mode(mode: ThemeMode) -> Self {
        Self { mode, palette: palette_for(mode), is_dark: mode.is_dark() }
    }

    /// Label for the toggle button in this mode
    pub fn toggle_label(&self) -> &'static str {
        toggle_label(self.mode)
    }
}

impl Default for ThemeSnapshot {
    fn default() -> Self {
        Self::from_mode(ThemeMode::default())
    }
}

/// Hands out theme snapshots derived from a theme store subscription
///
/// The provider only observes; changing the mode goes through
/// `ThemeStore::toggle`.
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    rx: watch::Receiver<ThemeMode>,
}

impl ThemeProvider {
    /// Wrap a subscription from `ThemeStore::subscribe`
    pub fn new(rx: watch::Receiver<ThemeMode>) -> Self {
        Self { rx }
    }

    /// Snapshot for the latest mode
    pub fn current(&self) -> ThemeSnapshot {
        ThemeSnapshot::from_mode(*self.rx.borrow())
    }

    /// Wait for the next mode change and return its snapshot
    ///
    /// Returns `None` once the theme store has been dropped.
    pub async fn changed(&mut self) -> Option<ThemeSnapshot> {
        self.rx.changed().await.ok()?;
        let mode = *self.rx.borrow_and_update();
        Some(ThemeSnapshot::from_mode(mode))
    }
}
