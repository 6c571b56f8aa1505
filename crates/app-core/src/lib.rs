//! Core application logic for Ujenzi Hub
//!
//! This crate contains the flows behind the screens: form validation,
//! sign-up / sign-in / logout orchestration against the auth backend, and
//! saving or picking gallery media.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod forms;
pub mod gallery;

pub use auth::{AuthError, AuthService};
pub use forms::{Credentials, FormError, NewAccount, SignInForm, SignUpForm};
pub use gallery::{Gallery, GalleryError, MediaProvider, PermissionStatus};
