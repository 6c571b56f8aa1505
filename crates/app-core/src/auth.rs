//! Authentication service for Ujenzi Hub
//!
//! This module drives the session store through sign-up, sign-in and logout:
//! `begin_login` before the backend call, then `complete_login` or
//! `fail_login` with the backend's message.

use app_state::SessionStore;
use auth_client::{AuthBackend, AuthClientError, ProfileDocument, UserRecord};
use std::sync::Arc;
use thiserror::Error;

use crate::forms::{FormError, SignInForm, SignUpForm};

/// Authentication service error types
#[derive(Debug, Error)]
pub enum AuthError {
    /// Form rejected before contacting the backend
    #[error(transparent)]
    Validation(#[from] FormError),

    /// Backend rejected or failed the request
    #[error(transparent)]
    Backend(#[from] AuthClientError),

    /// Account exists on the backend but has no profile document
    #[error("Account {uid} was created but its profile could not be saved: {source}")]
    ProfileWrite {
        /// uid of the orphaned account
        uid: String,
        /// Underlying backend error
        #[source]
        source: AuthClientError,
    },
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Authentication service
///
/// Owns no state of its own: every outcome lands in the injected
/// [`SessionStore`].
///
/// # Example
///
/// ```rust,no_run
/// use app_core::auth::AuthService;
/// use app_core::forms::SignInForm;
/// use app_state::SessionStore;
/// use auth_client::{FirebaseBackend, FirebaseConfig};
/// use std::sync::Arc;
/// use storage::MemoryStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let backend = Arc::new(FirebaseBackend::new(FirebaseConfig::new("key", "project"))?);
///     let session = Arc::new(SessionStore::new(Arc::new(MemoryStore::new())));
///     let auth = AuthService::new(backend, session);
///
///     let user = auth.sign_in(&SignInForm::new("a@b.com", "secret")).await?;
///     println!("Signed in as: {}", user.email);
///     Ok(())
/// }
/// ```
pub struct AuthService {
    backend: Arc<dyn AuthBackend>,
    session: Arc<SessionStore>,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(backend: Arc<dyn AuthBackend>, session: Arc<SessionStore>) -> Self {
        Self { backend, session }
    }

    /// The session store this service writes to
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Sign in with the sign-in screen's fields
    ///
    /// # Errors
    ///
    /// - `AuthError::Validation` - empty fields, session untouched
    /// - `AuthError::Backend` - rejected credentials or network failure,
    ///   message recorded in the session
    pub async fn sign_in(&self, form: &SignInForm) -> Result<UserRecord> {
        let credentials = form.validate()?;

        self.session.begin_login();
        match self.backend.sign_in(&credentials.email, &credentials.password).await {
            Ok(user) => {
                self.session.complete_login(user.clone()).await;
                tracing::info!(uid = %user.uid, "signed in");
                Ok(user)
            }
            Err(e) => {
                self.session.fail_login(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Create an account, write its profile document and sign in
    ///
    /// # Errors
    ///
    /// - `AuthError::Validation` - empty fields or mismatched passwords
    /// - `AuthError::Backend` - account creation failed
    /// - `AuthError::ProfileWrite` - account created but profile document
    ///   rejected; the account is left on the backend and the user is not
    ///   signed in
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<UserRecord> {
        let account = form.validate()?;

        self.session.begin_login();
        let user = match self.backend.create_account(&account.email, &account.password).await {
            Ok(user) => user,
            Err(e) => {
                self.session.fail_login(e.to_string());
                return Err(e.into());
            }
        };

        let profile = ProfileDocument::new(&user.uid, &account.name, &user.email);
        if let Err(source) = self.backend.write_profile_document(&profile).await {
            tracing::warn!(uid = %user.uid, "account created without profile document: {}", source);
            let err = AuthError::ProfileWrite { uid: user.uid, source };
            self.session.fail_login(err.to_string());
            return Err(err);
        }

        self.session.complete_login(user.clone()).await;
        tracing::info!(uid = %user.uid, "account created");
        Ok(user)
    }

    /// Sign out on the backend, then clear the local session
    ///
    /// If the backend sign-out fails the local session is kept.
    pub async fn logout(&self) -> Result<()> {
        if let Err(e) = self.backend.sign_out().await {
            tracing::error!("Logout failed: {}", e);
            return Err(e.into());
        }

        self.session.logout().await;
        Ok(())
    }
}
