//! UI mode state
//!
//! [`ThemeStore`] holds the light/dark flag, persists it under `"theme"` on
//! every toggle and hands out subscriptions so the UI layer can derive its
//! palette without reaching into the store.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::{keys, DurableStore};
use tokio::sync::watch;

use crate::persist::{PersistOutcome, RestoreOutcome};

/// Binary UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode
    #[default]
    Light,
    /// Dark mode
    Dark,
}

impl ThemeMode {
    /// Stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Check if this is dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!("Unknown theme mode: {}", s)),
        }
    }
}

/// What the theme store does at application startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeRestorePolicy {
    /// Ignore the persisted mode and start in light mode
    #[default]
    AlwaysLight,
    /// Apply the persisted mode when one is stored
    Restore,
}

/// UI mode container backed by durable storage
pub struct ThemeStore {
    mode: RwLock<ThemeMode>,
    tx: watch::Sender<ThemeMode>,
    store: Arc<dyn DurableStore>,
}

impl ThemeStore {
    /// Create a store in light mode
    pub fn new(store: Arc<dyn DurableStore>) -> Self {
        let (tx, _rx) = watch::channel(ThemeMode::Light);
        Self { mode: RwLock::new(ThemeMode::Light), tx, store }
    }

    /// Current mode
    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    /// Receive the mode after every change
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.tx.subscribe()
    }

    /// Flip between light and dark and persist the new mode
    ///
    /// Returns the mode now in effect. A failed write is logged; the toggle
    /// still stands for this process.
    pub async fn toggle(&self) -> ThemeMode {
        let mode = {
            let mut current = self.mode.write();
            *current = current.toggled();
            *current
        };
        self.tx.send_replace(mode);

        if let PersistOutcome::Failed = self.persist(mode).await {
            tracing::warn!(mode = %mode, "theme change not persisted");
        }
        mode
    }

    /// Overwrite the mode without persisting it
    pub fn set_mode(&self, mode: ThemeMode) {
        *self.mode.write() = mode;
        self.tx.send_replace(mode);
    }

    /// Apply the persisted mode, if a valid one is stored
    pub async fn restore(&self) -> RestoreOutcome {
        let raw = match self.store.get(keys::THEME).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return RestoreOutcome::Absent,
            Err(e) => {
                tracing::error!("Error loading theme: {}", e);
                return RestoreOutcome::Unavailable;
            }
        };

        match raw.parse::<ThemeMode>() {
            Ok(mode) => {
                self.set_mode(mode);
                RestoreOutcome::Restored
            }
            Err(e) => {
                tracing::warn!("Ignoring persisted theme: {}", e);
                RestoreOutcome::Corrupt
            }
        }
    }

    /// Run the startup step selected by `policy`
    ///
    /// Returns `None` when the policy skips restoration.
    pub async fn startup(&self, policy: ThemeRestorePolicy) -> Option<RestoreOutcome> {
        match policy {
            ThemeRestorePolicy::AlwaysLight => None,
            ThemeRestorePolicy::Restore => Some(self.restore().await),
        }
    }

    async fn persist(&self, mode: ThemeMode) -> PersistOutcome {
        match self.store.put(keys::THEME, mode.as_str()).await {
            Ok(()) => PersistOutcome::Saved,
            Err(e) => {
                tracing::error!("Error saving theme: {}", e);
                PersistOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::MemoryStore;

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("dim".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_toggle_twice_returns_to_start() {
        let store = ThemeStore::new(Arc::new(MemoryStore::new()));
        assert_eq!(store.mode(), ThemeMode::Light);

        assert_eq!(store.toggle().await, ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);

        assert_eq!(store.toggle().await, ThemeMode::Light);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_toggle_persists_raw_mode_string() {
        let kv = Arc::new(MemoryStore::new());
        let store = ThemeStore::new(kv.clone());

        store.toggle().await;
        assert_eq!(kv.get(keys::THEME).await.unwrap(), Some("dark".to_string()));

        store.toggle().await;
        assert_eq!(kv.get(keys::THEME).await.unwrap(), Some("light".to_string()));
    }

    #[tokio::test]
    async fn test_set_mode_does_not_persist() {
        let kv = Arc::new(MemoryStore::new());
        let store = ThemeStore::new(kv.clone());

        store.set_mode(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(kv.get(keys::THEME).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_applies_persisted_mode() {
        let kv: Arc<dyn DurableStore> = Arc::new(MemoryStore::new());
        ThemeStore::new(Arc::clone(&kv)).toggle().await;

        let fresh = ThemeStore::new(Arc::clone(&kv));
        assert_eq!(fresh.mode(), ThemeMode::Light);
        assert_eq!(fresh.restore().await, RestoreOutcome::Restored);
        assert_eq!(fresh.mode(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_restore_ignores_invalid_value() {
        let kv = Arc::new(MemoryStore::new());
        kv.put(keys::THEME, "sepia").await.unwrap();

        let store = ThemeStore::new(kv);
        assert_eq!(store.restore().await, RestoreOutcome::Corrupt);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_startup_policies() {
        let kv: Arc<dyn DurableStore> = Arc::new(MemoryStore::new());
        kv.put(keys::THEME, "dark").await.unwrap();

        let always_light = ThemeStore::new(Arc::clone(&kv));
        assert_eq!(always_light.startup(ThemeRestorePolicy::AlwaysLight).await, None);
        assert_eq!(always_light.mode(), ThemeMode::Light);

        let restoring = ThemeStore::new(Arc::clone(&kv));
        assert_eq!(
            restoring.startup(ThemeRestorePolicy::Restore).await,
            Some(RestoreOutcome::Restored)
        );
        assert_eq!(restoring.mode(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_subscription_tracks_toggles() {
        let store = ThemeStore::new(Arc::new(MemoryStore::new()));
        let mut rx = store.subscribe();
        assert_eq!(*rx.borrow(), ThemeMode::Light);

        store.toggle().await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ThemeMode::Dark);
    }
}
