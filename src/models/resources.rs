use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named loot filters from `Filters.json`.
///
/// Filter order is user-defined and preserved on round trips, hence the
/// `IndexMap` keyed by filter name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LootFilterSet {
    #[serde(rename = "Filters", default)]
    pub filters: IndexMap<String, LootFilter>,
}

/// One user-defined loot filter: a highlight color and the item ids it covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootFilter {
    #[serde(rename = "Enabled", default = "default_true")]
    pub enabled: bool,

    /// ARGB hex string, e.g. `"FFFF0000"`.
    #[serde(rename = "Color", default = "default_filter_color")]
    pub color: String,

    #[serde(rename = "Items", default)]
    pub items: Vec<String>,
}

impl LootFilterSet {
    /// Filters that are currently switched on, in user order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &LootFilter)> {
        self.filters
            .iter()
            .filter(|(_, f)| f.enabled)
            .map(|(name, f)| (name.as_str(), f))
    }
}

/// Watched player entries from `Watchlist.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Watchlist {
    #[serde(rename = "Entries", default)]
    pub entries: Vec<WatchlistEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistEntry {
    #[serde(rename = "AccountId")]
    pub account_id: String,

    #[serde(rename = "Reason", default)]
    pub reason: String,

    /// When the entry was added, as written by the UI. Opaque to the bootstrap.
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
}

impl Watchlist {
    /// Look up a watchlist entry by account id.
    pub fn lookup(&self, account_id: &str) -> Option<&WatchlistEntry> {
        self.entries.iter().find(|e| e.account_id == account_id)
    }
}

/// AI faction rosters from `AIFactions.json`.
///
/// Maps each faction to the in-game AI names that belong to it, so the overlay
/// can tag bosses, followers and rogues.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactionRoster {
    #[serde(rename = "Factions", default)]
    pub factions: Vec<Faction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faction {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Members", default)]
    pub members: Vec<String>,
}

impl FactionRoster {
    /// Faction an AI name belongs to, if any.
    pub fn faction_of(&self, ai_name: &str) -> Option<&str> {
        self.factions
            .iter()
            .find(|f| f.members.iter().any(|m| m.eq_ignore_ascii_case(ai_name)))
            .map(|f| f.name.as_str())
    }
}

fn default_true() -> bool {
    true
}

fn default_filter_color() -> String {
    "FF00FFFF".to_string()
}
