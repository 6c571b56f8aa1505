//! Application configuration
//!
//! Built in code with the builder methods below, or read from `UJENZI_*`
//! environment variables with [`AppConfig::from_env`].

use anyhow::{bail, Context, Result};
use app_state::ThemeRestorePolicy;
use auth_client::FirebaseConfig;
use std::time::Duration;
use storage::KvConfig;

/// Firebase project the app ships against
pub const DEFAULT_PROJECT_ID: &str = "ujenzihub-45ae2";

/// Where durable state lives
#[derive(Debug, Clone)]
pub enum StorageLocation {
    /// sled database on disk
    Disk(KvConfig),
    /// Temporary database, removed on drop
    Temporary,
}

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Durable storage
    pub storage: StorageLocation,
    /// Auth and profile backend
    pub firebase: FirebaseConfig,
    /// Theme behavior at startup
    pub theme_policy: ThemeRestorePolicy,
}

impl AppConfig {
    /// Configuration with default on-disk storage and the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            storage: StorageLocation::Disk(KvConfig::default()),
            firebase: FirebaseConfig::new(api_key, DEFAULT_PROJECT_ID),
            theme_policy: ThemeRestorePolicy::default(),
        }
    }

    /// Set the storage location
    pub fn storage(mut self, storage: StorageLocation) -> Self {
        self.storage = storage;
        self
    }

    /// Replace the backend configuration
    pub fn firebase(mut self, firebase: FirebaseConfig) -> Self {
        self.firebase = firebase;
        self
    }

    /// Set the theme startup policy
    pub fn theme_policy(mut self, policy: ThemeRestorePolicy) -> Self {
        self.theme_policy = policy;
        self
    }

    /// Read configuration from the process environment
    ///
    /// | variable | meaning |
    /// |---|---|
    /// | `UJENZI_API_KEY` | backend API key (required) |
    /// | `UJENZI_PROJECT_ID` | project id |
    /// | `UJENZI_DATA_PATH` | sled directory, `:memory:` for a temporary store |
    /// | `UJENZI_THEME` | `light` (default) or `restore` |
    /// | `UJENZI_IDENTITY_URL` | identity endpoint override |
    /// | `UJENZI_FIRESTORE_URL` | document endpoint override |
    /// | `UJENZI_HTTP_TIMEOUT_SECS` | request timeout |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("UJENZI_API_KEY").context("UJENZI_API_KEY is not set")?;
        let project_id =
            lookup("UJENZI_PROJECT_ID").unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string());

        let mut firebase = FirebaseConfig::new(api_key, project_id);
        if let Some(url) = lookup("UJENZI_IDENTITY_URL") {
            firebase = firebase.identity_url(url);
        }
        if let Some(url) = lookup("UJENZI_FIRESTORE_URL") {
            firebase = firebase.firestore_url(url);
        }
        if let Some(secs) = lookup("UJENZI_HTTP_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("invalid UJENZI_HTTP_TIMEOUT_SECS: {secs}"))?;
            firebase = firebase.timeout(Duration::from_secs(secs));
        }

        let storage = match lookup("UJENZI_DATA_PATH") {
            Some(path) if path == ":memory:" => StorageLocation::Temporary,
            Some(path) => StorageLocation::Disk(KvConfig::new(path)),
            None => StorageLocation::Disk(KvConfig::default()),
        };

        let theme_policy = match lookup("UJENZI_THEME").as_deref().map(str::trim) {
            None | Some("") | Some("light") => ThemeRestorePolicy::AlwaysLight,
            Some("restore") => ThemeRestorePolicy::Restore,
            Some(other) => bail!("invalid UJENZI_THEME: {other}"),
        };

        Ok(Self { storage, firebase, theme_policy })
    }
}
