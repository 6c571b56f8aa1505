//! Records exchanged with the authentication and document service

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identity of a signed-in user
///
/// Serialized with the field names the client has always persisted
/// (`uid`, `email`, `displayName`, `photoURL`). Missing or `null` optional
/// fields read back as empty strings; a missing `uid` is a hard error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable user identifier issued by the service
    pub uid: String,

    /// Email address
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,

    /// Display name, empty when never set
    #[serde(rename = "displayName", default, deserialize_with = "null_as_empty")]
    pub display_name: String,

    /// Avatar URL, empty when never set
    #[serde(rename = "photoURL", default, deserialize_with = "null_as_empty")]
    pub photo_url: String,
}

impl UserRecord {
    /// Create a record with empty display name and photo
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            display_name: String::new(),
            photo_url: String::new(),
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set the avatar URL
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = url.into();
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Profile document written to `users/{uid}` when an account is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    /// Owner uid, also the document id
    pub uid: String,
    /// Name entered at sign-up
    pub name: String,
    /// Email address
    pub email: String,
    /// Avatar URL, empty at creation
    pub profile_picture: String,
    /// Free-form bio, empty at creation
    pub bio: String,
}

impl ProfileDocument {
    /// Initial profile for a freshly created account
    pub fn new(uid: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            email: email.into(),
            profile_picture: String::new(),
            bio: String::new(),
        }
    }

    /// Encode as a Firestore document body (`{"fields": {...}}`)
    pub fn to_firestore_fields(&self) -> serde_json::Value {
        serde_json::json!({
            "fields": {
                "uid": { "stringValue": self.uid },
                "name": { "stringValue": self.name },
                "email": { "stringValue": self.email },
                "profilePicture": { "stringValue": self.profile_picture },
                "bio": { "stringValue": self.bio },
            }
        })
    }
}

/// Token lifetime assumed when the service omits or garbles `expiresIn`
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Short-lived bearer token for document requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdToken {
    /// Bearer token
    pub token: String,
    /// Long-lived refresh token, when issued
    pub refresh_token: Option<String>,
    /// Expiry instant
    pub expires_at: DateTime<Utc>,
}

impl IdToken {
    /// Build a token expiring `expires_in_secs` from now
    ///
    /// A lifetime too large to represent falls back to
    /// [`DEFAULT_TOKEN_LIFETIME_SECS`].
    pub fn new(token: impl Into<String>, refresh_token: Option<String>, expires_in_secs: i64) -> Self {
        let now = Utc::now();
        let expires_at = Duration::try_seconds(expires_in_secs)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or_else(|| {
                tracing::warn!(expires_in_secs, "token lifetime out of range, using default");
                now + Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS)
            });

        Self { token: token.into(), refresh_token, expires_at }
    }

    /// Whether the token is past its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_field_names() {
        let user = UserRecord::new("u1", "a@b.com").with_display_name("A");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["uid"], "u1");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["displayName"], "A");
        assert_eq!(json["photoURL"], "");
    }

    #[test]
    fn test_user_record_null_fields_read_as_empty() {
        let raw = r#"{"uid":"u2","email":"c@d.com","displayName":null,"photoURL":null}"#;
        let user: UserRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(user, UserRecord::new("u2", "c@d.com"));
    }

    #[test]
    fn test_user_record_missing_optional_fields() {
        let user: UserRecord = serde_json::from_str(r#"{"uid":"u3"}"#).unwrap();
        assert_eq!(user.uid, "u3");
        assert!(user.email.is_empty());
        assert!(user.display_name.is_empty());
    }

    #[test]
    fn test_user_record_requires_uid() {
        assert!(serde_json::from_str::<UserRecord>(r#"{"email":"a@b.com"}"#).is_err());
    }

    #[test]
    fn test_profile_document_firestore_encoding() {
        let doc = ProfileDocument::new("u1", "Asha", "asha@example.com");
        let body = doc.to_firestore_fields();

        assert_eq!(body["fields"]["uid"]["stringValue"], "u1");
        assert_eq!(body["fields"]["name"]["stringValue"], "Asha");
        assert_eq!(body["fields"]["profilePicture"]["stringValue"], "");
        assert_eq!(body["fields"]["bio"]["stringValue"], "");
    }

    #[test]
    fn test_id_token_expiry() {
        assert!(!IdToken::new("t", None, 3600).is_expired());
        assert!(IdToken::new("t", None, -1).is_expired());
    }

    #[test]
    fn test_id_token_huge_lifetime_uses_default() {
        let before = Utc::now();
        let token = IdToken::new("t", None, 9_999_999_999_999_999);

        assert!(!token.is_expired());
        assert!(token.expires_at <= before + Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS + 60));

        let token = IdToken::new("t", None, i64::MIN);
        assert!(!token.is_expired());
    }
}
