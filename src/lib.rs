//! Ujenzi Hub client core
//!
//! Session and theme state with durable persistence, email/password
//! authentication, gallery media and the derived UI state, assembled by
//! [`App`].
//!
//! # Example
//!
//! ```rust,no_run
//! use ujenzi_hub::{init_logging, App, AppConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_logging();
//!     let app = App::bootstrap(AppConfig::from_env()?).await?;
//!     println!("screen: {}", app.navigator().current_screen());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, StartupReport};
pub use config::{AppConfig, StorageLocation, DEFAULT_PROJECT_ID};
pub use logging::init_logging;

pub use app_core::{AuthError, AuthService, FormError, Gallery, SignInForm, SignUpForm};
pub use app_state::{SessionState, SessionStore, ThemeMode, ThemeRestorePolicy, ThemeStore};
pub use auth_client::{AuthBackend, FirebaseBackend, FirebaseConfig, UserRecord};
pub use storage::{DurableStore, KvConfig, KvStore, MemoryStore};
