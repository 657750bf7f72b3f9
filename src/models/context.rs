use crate::models::{AppConfig, FactionRoster, LootFilterSet, Watchlist};

/// Process-wide state published to the rest of the application.
///
/// Built exactly once by [`ResourceRegistry::load_all`](crate::config::ResourceRegistry::load_all)
/// before any UI is shown, then passed by shared reference to every consumer.
/// After construction each slot always holds an instance - the loaded one or
/// its default, never neither. Nothing in the process mutates it; the overlay
/// host persists edits through its own save paths.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub config: AppConfig,
    pub loot_filters: LootFilterSet,
    pub watchlist: Watchlist,
    pub factions: FactionRoster,
}

impl AppContext {
    /// Whether the diagnostic log sink and visible console were requested.
    pub fn logging_enabled(&self) -> bool {
        self.config.logging
    }
}
