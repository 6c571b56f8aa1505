//! Composition root
//!
//! [`App`] owns one instance of every store and service and wires them
//! together. Nothing else in the workspace is global.

use anyhow::{Context, Result};
use app_core::{AuthService, Gallery, MediaProvider};
use app_state::{MediaLibrary, RestoreOutcome, SessionStore, ThemeRestorePolicy, ThemeStore};
use app_ui::{Navigator, ThemeProvider};
use auth_client::{AuthBackend, FirebaseBackend};
use std::sync::Arc;
use storage::{DurableStore, KvStore};

use crate::config::{AppConfig, StorageLocation};

/// What happened during startup restoration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupReport {
    /// Session restore result
    pub session: RestoreOutcome,
    /// Theme restore result, `None` when the policy skipped it
    pub theme: Option<RestoreOutcome>,
}

/// The running application
pub struct App {
    store: Arc<dyn DurableStore>,
    session: Arc<SessionStore>,
    theme: Arc<ThemeStore>,
    media: Arc<MediaLibrary>,
    auth: AuthService,
    startup: StartupReport,
}

impl App {
    /// Open storage, build the backend and restore persisted state
    pub async fn bootstrap(config: AppConfig) -> Result<Self> {
        let store: Arc<dyn DurableStore> = match config.storage {
            StorageLocation::Disk(kv) => {
                let path = kv.path.clone();
                Arc::new(
                    KvStore::new(kv)
                        .with_context(|| format!("failed to open key-value store at {path}"))?,
                )
            }
            StorageLocation::Temporary => {
                Arc::new(KvStore::in_memory().context("failed to open temporary store")?)
            }
        };

        let backend =
            FirebaseBackend::new(config.firebase).context("failed to build auth backend")?;

        Ok(Self::assemble(store, Arc::new(backend), config.theme_policy).await)
    }

    /// Wire the app from existing parts and restore persisted state
    pub async fn assemble(
        store: Arc<dyn DurableStore>,
        backend: Arc<dyn AuthBackend>,
        theme_policy: ThemeRestorePolicy,
    ) -> Self {
        let session = Arc::new(SessionStore::new(Arc::clone(&store)));
        let theme = Arc::new(ThemeStore::new(Arc::clone(&store)));
        let media = Arc::new(MediaLibrary::new());
        let auth = AuthService::new(backend, Arc::clone(&session));

        let startup = StartupReport {
            session: session.restore().await,
            theme: theme.startup(theme_policy).await,
        };
        tracing::info!(
            session = ?startup.session,
            theme = ?startup.theme,
            authenticated = session.is_authenticated(),
            "app started"
        );

        Self { store, session, theme, media, auth, startup }
    }

    /// Results of the startup restore steps
    pub fn startup(&self) -> StartupReport {
        self.startup
    }

    /// Durable store shared by every container
    pub fn store(&self) -> &Arc<dyn DurableStore> {
        &self.store
    }

    /// Session state
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// UI mode state
    pub fn theme(&self) -> &Arc<ThemeStore> {
        &self.theme
    }

    /// Saved or picked media
    pub fn media(&self) -> &Arc<MediaLibrary> {
        &self.media
    }

    /// Sign-up, sign-in and logout
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Theme provider bound to this app's theme store
    pub fn theme_provider(&self) -> ThemeProvider {
        ThemeProvider::new(self.theme.subscribe())
    }

    /// Navigator mounted for the current session
    pub fn navigator(&self) -> Navigator {
        Navigator::new(&self.session.snapshot())
    }

    /// Gallery over a platform media provider
    pub fn gallery(&self, provider: Arc<dyn MediaProvider>) -> Gallery {
        Gallery::new(provider, Arc::clone(&self.media))
    }
}
