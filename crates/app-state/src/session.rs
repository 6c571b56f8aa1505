//! Session state management
//!
//! [`SessionStore`] tracks who is signed in and keeps the `"user"` entry of
//! the durable store in step with it. Memory is the source of truth for the
//! running process; storage only matters for the next [`restore`].
//!
//! [`restore`]: SessionStore::restore

use auth_client::UserRecord;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use storage::{keys, DurableStore};
use tokio::sync::watch;

use crate::persist::{PersistOutcome, RestoreOutcome};

/// Snapshot of authentication state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Signed-in user, `None` when unauthenticated
    pub user: Option<UserRecord>,
    /// True only while an authentication request is in flight
    pub loading: bool,
    /// Last authentication failure message
    pub error: Option<String>,
}

impl SessionState {
    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Authentication state container backed by durable storage
pub struct SessionStore {
    state: RwLock<SessionState>,
    tx: watch::Sender<SessionState>,
    store: Arc<dyn DurableStore>,
}

impl SessionStore {
    /// Create an unauthenticated store
    ///
    /// Nothing is read from storage until [`restore`](Self::restore) is called.
    pub fn new(store: Arc<dyn DurableStore>) -> Self {
        let (tx, _rx) = watch::channel(SessionState::default());
        Self { state: RwLock::new(SessionState::default()), tx, store }
    }

    /// Current state
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Signed-in user, if any
    pub fn user(&self) -> Option<UserRecord> {
        self.state.read().user.clone()
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// Receive a fresh snapshot after every mutation
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Mark an authentication attempt as started
    pub fn begin_login(&self) {
        self.mutate(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    /// Record a successful sign-in and persist the user
    pub async fn complete_login(&self, user: UserRecord) -> PersistOutcome {
        let serialized = serde_json::to_string(&user);
        self.mutate(|state| {
            state.user = Some(user);
            state.loading = false;
        });

        match serialized {
            Ok(value) => match self.store.put(keys::USER, &value).await {
                Ok(()) => PersistOutcome::Saved,
                Err(e) => {
                    tracing::error!("Error saving user: {}", e);
                    PersistOutcome::Failed
                }
            },
            Err(e) => {
                tracing::error!("Error serializing user: {}", e);
                PersistOutcome::Failed
            }
        }
    }

    /// Record a failed authentication attempt
    pub fn fail_login(&self, message: impl Into<String>) {
        let message = message.into();
        self.mutate(|state| {
            state.error = Some(message);
            state.loading = false;
        });
    }

    /// Sign out locally and remove the persisted user
    pub async fn logout(&self) -> PersistOutcome {
        self.mutate(|state| state.user = None);

        match self.store.delete(keys::USER).await {
            Ok(()) => PersistOutcome::Saved,
            Err(e) => {
                tracing::error!("Error removing user: {}", e);
                PersistOutcome::Failed
            }
        }
    }

    /// Overwrite the user without touching storage
    pub fn set_user(&self, user: UserRecord) {
        self.mutate(|state| state.user = Some(user));
    }

    /// Load the persisted user, if any
    ///
    /// Never fails: a missing, unreadable or corrupt entry leaves the current
    /// state alone and is only logged. Calling it again simply re-applies
    /// whatever is stored.
    pub async fn restore(&self) -> RestoreOutcome {
        let raw = match self.store.get(keys::USER).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no persisted user");
                return RestoreOutcome::Absent;
            }
            Err(e) => {
                tracing::error!("Error loading user: {}", e);
                return RestoreOutcome::Unavailable;
            }
        };

        match serde_json::from_str::<Option<UserRecord>>(&raw) {
            Ok(Some(user)) => {
                tracing::info!(uid = %user.uid, "restored user session");
                self.set_user(user);
                RestoreOutcome::Restored
            }
            Ok(None) => RestoreOutcome::Absent,
            Err(e) => {
                tracing::warn!("Discarding corrupt persisted user: {}", e);
                RestoreOutcome::Corrupt
            }
        }
    }

    fn mutate<F>(&self, f: F)
    where
        F: FnOnce(&mut SessionState),
    {
        let snapshot = {
            let mut state = self.state.write();
            f(&mut state);
            state.clone()
        };
        self.tx.send_replace(snapshot);
    }
}
