//! Sign-in and sign-up form validation
//!
//! Validation failures stay on the screen that produced them; they never
//! reach the session store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form validation errors, displayed verbatim under the form title
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Sign-in with an empty email or password
    #[error("Please enter both email and password.")]
    MissingCredentials,

    /// Sign-up with any empty field
    #[error("All fields are required.")]
    MissingFields,

    /// Sign-up password and confirmation differ
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Validated email/password pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Trimmed email
    pub email: String,
    /// Password as typed
    pub password: String,
}

/// Validated sign-up request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Display name as typed
    pub name: String,
    /// Trimmed email
    pub email: String,
    /// Password as typed
    pub password: String,
}

/// Sign-in screen fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInForm {
    /// Email input
    pub email: String,
    /// Password input
    pub password: String,
}

impl SignInForm {
    /// Create a filled-in form
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Check the fields and produce credentials
    pub fn validate(&self) -> Result<Credentials, FormError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }

        Ok(Credentials { email: email.to_string(), password: self.password.clone() })
    }
}

/// Sign-up screen fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    /// Name input
    pub name: String,
    /// Email input
    pub email: String,
    /// Password input
    pub password: String,
    /// Confirm-password input
    pub confirm_password: String,
}

impl SignUpForm {
    /// Create a filled-in form
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Check the fields and produce a sign-up request
    pub fn validate(&self) -> Result<NewAccount, FormError> {
        let email = self.email.trim();

        if self.name.is_empty()
            || email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        Ok(NewAccount {
            name: self.name.clone(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_requires_both_fields() {
        assert_eq!(
            SignInForm::new("", "secret").validate(),
            Err(FormError::MissingCredentials)
        );
        assert_eq!(
            SignInForm::new("a@b.com", "").validate(),
            Err(FormError::MissingCredentials)
        );
        assert_eq!(
            FormError::MissingCredentials.to_string(),
            "Please enter both email and password."
        );
    }

    #[test]
    fn test_sign_in_trims_email_only() {
        let creds = SignInForm::new("  a@b.com ", " secret ").validate().unwrap();
        assert_eq!(creds.email, "a@b.com");
        assert_eq!(creds.password, " secret ");
    }

    #[test]
    fn test_sign_up_missing_fields() {
        let form = SignUpForm::new("Asha", "a@b.com", "secret", "");
        assert_eq!(form.validate(), Err(FormError::MissingFields));

        let form = SignUpForm::new("Asha", "   ", "secret", "secret");
        assert_eq!(form.validate(), Err(FormError::MissingFields));
        assert_eq!(FormError::MissingFields.to_string(), "All fields are required.");
    }

    #[test]
    fn test_sign_up_name_kept_as_typed() {
        let account = SignUpForm::new("  ", "a@b.com", "secret", "secret").validate().unwrap();
        assert_eq!(account.name, "  ");

        let account = SignUpForm::new(" Asha ", "a@b.com", "secret", "secret").validate().unwrap();
        assert_eq!(account.name, " Asha ");
    }

    #[test]
    fn test_sign_up_password_mismatch() {
        let form = SignUpForm::new("Asha", "a@b.com", "secret", "secret2");
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
        assert_eq!(FormError::PasswordMismatch.to_string(), "Passwords do not match.");
    }

    #[test]
    fn test_sign_up_valid() {
        let account = SignUpForm::new("Asha", " a@b.com ", "secret", "secret")
            .validate()
            .unwrap();

        assert_eq!(account.name, "Asha");
        assert_eq!(account.email, "a@b.com");
        assert_eq!(account.password, "secret");
    }
}
