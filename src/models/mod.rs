//! Data models for the raidscope bootstrap.
//!
//! This module contains the four persisted resource types plus the process-wide
//! context that carries them:
//! - [`AppConfig`]: User configuration loaded from `Config.json` (includes the
//!   `logging` flag the bootstrap consults)
//! - [`LootFilterSet`]: Named loot filters from `Filters.json`
//! - [`Watchlist`]: Watched player entries from `Watchlist.json`
//! - [`FactionRoster`]: AI faction name lists from `AIFactions.json`
//! - [`AppContext`]: Read-only bundle of the four resources, built once at
//!   startup and passed by reference to every consumer
//!
//! All resource types are serde-serializable, default-constructible, and
//! independent of each other; a failed load of one never affects another.

pub mod app_config;
pub mod context;
pub mod resources;

pub use app_config::AppConfig;
pub use context::AppContext;
pub use resources::{FactionRoster, LootFilterSet, Watchlist};
