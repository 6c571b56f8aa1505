//! Storage layer for Ujenzi Hub
//!
//! This crate provides the durable key-value abstraction the state
//! containers persist through, with a sled-backed store for devices and an
//! in-memory store for tests and ephemeral sessions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod durable;
pub mod kv;

pub use durable::{DurableStore, MemoryStore};
pub use kv::{KvConfig, KvError, KvStore, Result};

/// Fixed keys under which the application state containers persist
pub mod keys {
    /// Serialized signed-in user record
    pub const USER: &str = "user";

    /// Raw UI mode string (`"light"` or `"dark"`)
    pub const THEME: &str = "theme";
}
