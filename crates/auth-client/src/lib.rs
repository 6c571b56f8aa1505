//! Authentication and document service client
//!
//! This crate provides the [`AuthBackend`] seam the application talks to for
//! account creation, sign-in, sign-out and profile documents, plus a
//! Firebase REST implementation of it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod firebase;
pub mod types;

pub use backend::AuthBackend;
pub use firebase::{FirebaseBackend, FirebaseConfig};
pub use types::{IdToken, ProfileDocument, UserRecord};

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, AuthClientError>;

/// Error types for backend operations
///
/// The `Display` text is what the sign-in and sign-up screens show.
#[derive(Debug, thiserror::Error)]
pub enum AuthClientError {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Unexpected response: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Sign-up with an email that already has an account
    #[error("The email address is already in use by another account")]
    EmailInUse,

    /// Password rejected by the service policy
    #[error("Weak password: {0}")]
    WeakPassword(String),

    /// Operation needs a signed-in user
    #[error("Not signed in")]
    NotSignedIn,

    /// Any other error reported by the service
    #[error("Service error ({status}): {message}")]
    Service {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },
}
