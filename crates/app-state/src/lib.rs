//! Application state management for Ujenzi Hub
//!
//! This crate provides the state containers the UI reads from: the session
//! store (signed-in user, loading flag, last error), the theme store
//! (light/dark mode) and the media library. Each container is constructed
//! explicitly and shared by reference; there are no process-wide singletons.
//!
//! Mutators change memory first and then await the matching durable write,
//! so callers observe persistence ordering directly.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod media;
pub mod persist;
pub mod session;
pub mod theme;

pub use media::MediaLibrary;
pub use persist::{PersistOutcome, RestoreOutcome};
pub use session::{SessionState, SessionStore};
pub use theme::{ThemeMode, ThemeRestorePolicy, ThemeStore};
