//! Navigation for Ujenzi Hub
//!
//! The root of the app is one of two navigators:
//! - an auth stack (Landing, SignIn, SignUp) while nobody is signed in
//! - the main tabs (Home, Post, Profile) once a user is present
//!
//! [`Navigator::sync`] switches between them whenever the session changes.

use app_state::SessionState;
use serde::{Deserialize, Serialize};

use crate::theme::ThemePalette;

// =============================================================================
// Auth Stack
// =============================================================================

/// Screens reachable before sign-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AuthRoute {
    /// Welcome screen with sign-in / sign-up buttons
    #[default]
    Landing,
    /// Email + password sign-in
    SignIn,
    /// Account creation
    SignUp,
}

impl AuthRoute {
    /// Screen name
    pub fn name(&self) -> &'static str {
        match self {
            AuthRoute::Landing => "Landing",
            AuthRoute::SignIn => "SignIn",
            AuthRoute::SignUp => "SignUp",
        }
    }
}

/// Stack of auth screens, never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStack {
    root: AuthRoute,
    /// Screens pushed above the root (bottom to top)
    pushed: Vec<AuthRoute>,
}

impl Default for AuthStack {
    fn default() -> Self {
        Self::new(AuthRoute::Landing)
    }
}

impl AuthStack {
    /// Create a stack with a single root screen
    pub fn new(root: AuthRoute) -> Self {
        Self { root, pushed: Vec::new() }
    }

    /// Push a screen
    pub fn push(&mut self, route: AuthRoute) {
        self.pushed.push(route);
    }

    /// Pop the top screen (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        self.pushed.pop().is_some()
    }

    /// Current (top) screen
    pub fn current(&self) -> AuthRoute {
        self.pushed.last().copied().unwrap_or(self.root)
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.pushed.is_empty()
    }

    /// Number of screens, root included
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }
}

// =============================================================================
// Main Tabs
// =============================================================================

/// Tabs shown to a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MainTab {
    /// Home feed
    #[default]
    Home,
    /// New post
    Post,
    /// Profile
    Profile,
}

impl MainTab {
    /// Ionicons name, filled when focused
    pub fn icon(&self, focused: bool) -> &'static str {
        match (self, focused) {
            (MainTab::Home, true) => "home",
            (MainTab::Home, false) => "home-outline",
            (MainTab::Post, true) => "add-circle",
            (MainTab::Post, false) => "add-circle-outline",
            (MainTab::Profile, true) => "person",
            (MainTab::Profile, false) => "person-outline",
        }
    }

    /// Screen name
    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Home => "Home",
            MainTab::Post => "Post",
            MainTab::Profile => "Profile",
        }
    }

    /// Get all tabs in order
    pub fn all() -> [MainTab; 3] {
        [MainTab::Home, MainTab::Post, MainTab::Profile]
    }
}

/// Tab bar styling derived from the active palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarStyle {
    /// Bar background
    pub background_color: &'static str,
    /// Bar height
    pub height: u16,
    /// Top border width
    pub border_top_width: u16,
    /// Top border color
    pub border_top_color: &'static str,
    /// Android shadow depth
    pub elevation: u16,
    /// Icon size
    pub icon_size: u16,
    /// Focused icon color
    pub active_tint: &'static str,
    /// Unfocused icon color
    pub inactive_tint: &'static str,
    /// Whether labels are drawn under icons
    pub show_labels: bool,
}

impl TabBarStyle {
    /// Style for a palette
    pub fn from_palette(palette: &ThemePalette) -> Self {
        Self {
            background_color: palette.background,
            height: 60,
            border_top_width: 1,
            border_top_color: palette.input_border,
            elevation: 5,
            icon_size: 28,
            active_tint: palette.button_background,
            inactive_tint: palette.label,
            show_labels: false,
        }
    }

    /// Icon color for a tab
    pub fn icon_color(&self, focused: bool) -> &'static str {
        if focused {
            self.active_tint
        } else {
            self.inactive_tint
        }
    }
}

// =============================================================================
// Root
// =============================================================================

/// Which navigator is mounted at the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootStack {
    /// Signed out
    Auth(AuthStack),
    /// Signed in
    Main {
        /// Selected tab
        tab: MainTab,
    },
}

impl RootStack {
    /// Root for a session state
    pub fn for_session(session: &SessionState) -> Self {
        if session.is_authenticated() {
            RootStack::Main { tab: MainTab::default() }
        } else {
            RootStack::Auth(AuthStack::default())
        }
    }

    /// Whether this is the signed-in root
    pub fn is_main(&self) -> bool {
        matches!(self, RootStack::Main { .. })
    }
}

/// Navigation state for the whole app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    root: RootStack,
}

impl Navigator {
    /// Navigator mounted for the given session
    pub fn new(session: &SessionState) -> Self {
        Self { root: RootStack::for_session(session) }
    }

    /// Current root
    pub fn root(&self) -> &RootStack {
        &self.root
    }

    /// Re-mount the root if authentication changed
    ///
    /// Returns true when the root was switched. Switching always starts the
    /// new navigator from its initial screen.
    pub fn sync(&mut self, session: &SessionState) -> bool {
        if self.root.is_main() == session.is_authenticated() {
            return false;
        }

        self.root = RootStack::for_session(session);
        tracing::debug!(main = self.root.is_main(), "navigation root switched");
        true
    }

    /// Push an auth screen; ignored while signed in
    pub fn navigate(&mut self, route: AuthRoute) -> bool {
        match &mut self.root {
            RootStack::Auth(stack) => {
                stack.push(route);
                true
            }
            RootStack::Main { .. } => false,
        }
    }

    /// Go back within the auth stack
    pub fn go_back(&mut self) -> bool {
        match &mut self.root {
            RootStack::Auth(stack) => stack.pop(),
            RootStack::Main { .. } => false,
        }
    }

    /// Select a tab; ignored while signed out
    pub fn switch_tab(&mut self, tab: MainTab) -> bool {
        match &mut self.root {
            RootStack::Main { tab: current } => {
                *current = tab;
                true
            }
            RootStack::Auth(_) => false,
        }
    }

    /// Name of the visible screen
    pub fn current_screen(&self) -> &'static str {
        match &self.root {
            RootStack::Auth(stack) => stack.current().name(),
            RootStack::Main { tab } => tab.label(),
        }
    }
}
