//! Firebase REST implementation of [`AuthBackend`]
//!
//! Accounts go through the Identity Toolkit password endpoints and profile
//! documents through the Firestore REST API. Sign-out is client side: the
//! cached id token is dropped.

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response as ReqwestResponse};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::backend::AuthBackend;
use crate::types::{IdToken, ProfileDocument, UserRecord, DEFAULT_TOKEN_LIFETIME_SECS};
use crate::{AuthClientError, Result};

/// Default Identity Toolkit endpoint
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com";

/// Default Firestore endpoint
pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com";

/// Collection holding one profile document per user
pub const USERS_COLLECTION: &str = "users";

/// Firebase project configuration
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Web API key
    pub api_key: String,
    /// Project id (e.g. "ujenzihub-45ae2")
    pub project_id: String,
    /// Identity Toolkit base URL
    pub identity_url: String,
    /// Firestore base URL
    pub firestore_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl FirebaseConfig {
    /// Create a configuration for the public Firebase endpoints
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id: project_id.into(),
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
            firestore_url: DEFAULT_FIRESTORE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the Identity Toolkit base URL (emulators, tests)
    pub fn identity_url(mut self, url: impl Into<String>) -> Self {
        self.identity_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the Firestore base URL (emulators, tests)
    pub fn firestore_url(mut self, url: impl Into<String>) -> Self {
        self.firestore_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}/{}",
            self.firestore_url, self.project_id, collection, id
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordAuthRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordAuthResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    profile_picture: Option<String>,
    id_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    error: ServiceErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorDetail {
    message: String,
}

/// Firebase-backed authentication client
pub struct FirebaseBackend {
    client: ReqwestClient,
    config: FirebaseConfig,
    token: RwLock<Option<IdToken>>,
}

impl FirebaseBackend {
    /// Create a new backend
    pub fn new(config: FirebaseConfig) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config, token: RwLock::new(None) })
    }

    /// Get the backend configuration
    pub fn config(&self) -> &FirebaseConfig {
        &self.config
    }

    /// Whether a signed-in token is currently held
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    async fn password_auth(&self, endpoint: &str, email: &str, password: &str) -> Result<UserRecord> {
        let url = format!("{}/v1/accounts:{}", self.config.identity_url, endpoint);
        let body = PasswordAuthRequest { email, password, return_secure_token: true };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let auth: PasswordAuthResponse = parse_response(response).await?;
        let expires_in = auth
            .expires_in
            .as_deref()
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);

        *self.token.write().await = Some(IdToken::new(auth.id_token, auth.refresh_token, expires_in));
        tracing::debug!(uid = %auth.local_id, endpoint, "password authentication succeeded");

        Ok(UserRecord {
            uid: auth.local_id,
            email: auth.email.unwrap_or_else(|| email.to_string()),
            display_name: auth.display_name.unwrap_or_default(),
            photo_url: auth.profile_picture.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl AuthBackend for FirebaseBackend {
    async fn create_account(&self, email: &str, password: &str) -> Result<UserRecord> {
        self.password_auth("signUp", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord> {
        self.password_auth("signInWithPassword", email, password).await
    }

    async fn sign_out(&self) -> Result<()> {
        self.token.write().await.take();
        Ok(())
    }

    async fn write_profile_document(&self, profile: &ProfileDocument) -> Result<()> {
        let token = match self.token.read().await.as_ref() {
            Some(token) if !token.is_expired() => token.token.clone(),
            _ => return Err(AuthClientError::NotSignedIn),
        };

        let url = self.config.document_url(USERS_COLLECTION, &profile.uid);
        let response = self
            .client
            .patch(&url)
            .bearer_auth(token)
            .json(&profile.to_firestore_fields())
            .send()
            .await?;

        let _document: serde_json::Value = parse_response(response).await?;
        Ok(())
    }
}

async fn parse_response<T>(response: ReqwestResponse) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ServiceErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| format!("HTTP {}: {}", status.as_u16(), body));
        return Err(map_service_error(status.as_u16(), message));
    }

    Ok(serde_json::from_str(&body)?)
}

/// Map an Identity Toolkit error message (`"CODE"` or `"CODE : detail"`)
fn map_service_error(status: u16, message: String) -> AuthClientError {
    let code = message.split(" : ").next().unwrap_or_default().trim().to_string();

    match code.as_str() {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            AuthClientError::InvalidCredentials
        }
        "EMAIL_EXISTS" => AuthClientError::EmailInUse,
        "WEAK_PASSWORD" => {
            let detail = message
                .split_once(" : ")
                .map(|(_, detail)| detail.trim().to_string())
                .unwrap_or(message);
            AuthClientError::WeakPassword(detail)
        }
        _ => AuthClientError::Service { status, message },
    }
}
