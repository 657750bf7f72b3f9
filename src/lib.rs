// RaidScope - session radar overlay host
//
// This is the library crate containing the bootstrap, resource registry,
// diagnostic sink and platform seams. The binary crate (main.rs) wires them
// together and hands control to the overlay host.

pub mod bootstrap;
pub mod config;
pub mod instance;
pub mod logging;
pub mod models;
pub mod platform;

// Re-export commonly used types for convenience
pub use bootstrap::{Bootstrap, BootstrapError, Phase, UiHost};
pub use config::{PersistedResource, ResourceRegistry};
pub use instance::{INSTANCE_TOKEN, InstanceLock, NamedInstanceLock};
pub use logging::Logger;
pub use models::{AppConfig, AppContext};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Directory holding the persisted resource files, relative to the working
/// directory.
pub const DATA_DIR: &str = "RaidScope Data";
