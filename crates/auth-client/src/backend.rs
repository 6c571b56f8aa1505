//! Remote authentication backend seam

use async_trait::async_trait;

use crate::types::{ProfileDocument, UserRecord};
use crate::Result;

/// Remote authentication and document service
///
/// Implementations own whatever credentials the service hands back; callers
/// only see [`UserRecord`]s.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Register a new email/password account and sign it in
    async fn create_account(&self, email: &str, password: &str) -> Result<UserRecord>;

    /// Sign in with email and password
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord>;

    /// Sign the current user out
    async fn sign_out(&self) -> Result<()>;

    /// Create or replace the profile document for `profile.uid`
    async fn write_profile_document(&self, profile: &ProfileDocument) -> Result<()>;
}
