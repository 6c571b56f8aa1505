//! User interface layer for Ujenzi Hub
//!
//! Everything here is derived from application state and holds no state
//! of its own worth persisting.
//!
//! # Modules
//!
//! - [`theme`] - Light/dark palettes and the theme provider
//! - [`navigation`] - Auth stack, main tabs and root switching
//! - [`profile`] - Profile screen data
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::Navigator;
//! use app_ui::theme::ThemeSnapshot;
//! use app_state::SessionState;
//!
//! let nav = Navigator::new(&SessionState::default());
//! assert_eq!(nav.current_screen(), "Landing");
//!
//! let theme = ThemeSnapshot::default();
//! assert_eq!(theme.toggle_label(), "Dark Mode");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;
pub mod profile;
pub mod theme;

pub use navigation::{AuthRoute, AuthStack, MainTab, Navigator, RootStack, TabBarStyle};
pub use profile::{Highlight, PostTile, ShowcaseProfile, SHOWCASE_PROFILE};
pub use theme::{
    palette_for, toggle_label, ThemePalette, ThemeProvider, ThemeSnapshot, DARK_PALETTE,
    LIGHT_PALETTE,
};
