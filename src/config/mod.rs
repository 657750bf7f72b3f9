use crate::models::{AppConfig, AppContext, FactionRoster, LootFilterSet, Watchlist};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;
use std::fs;

/// A named resource persisted as one JSON file in the data directory.
///
/// Each resource kind owns its file name and load contract; the registry only
/// consumes the `try_load`/`Default` pair. Loads are mutually independent -
/// a corrupt `Filters.json` never affects `Config.json`.
pub trait PersistedResource: Sized + Default + DeserializeOwned {
    /// File name inside the registry's data directory.
    const FILE_NAME: &'static str;

    /// Attempt to deserialize the resource from `path`.
    ///
    /// Returns an error for a missing file, unreadable file or malformed
    /// content; callers decide whether that is fatal (the registry never
    /// treats it as such).
    fn try_load(path: &Utf8Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path))
    }
}

impl PersistedResource for AppConfig {
    const FILE_NAME: &'static str = "Config.json";
}

impl PersistedResource for LootFilterSet {
    const FILE_NAME: &'static str = "Filters.json";
}

impl PersistedResource for Watchlist {
    const FILE_NAME: &'static str = "Watchlist.json";
}

impl PersistedResource for FactionRoster {
    const FILE_NAME: &'static str = "AIFactions.json";
}

/// Load-or-default registry for the persisted resources.
///
/// Owns the data directory (created on construction) and applies the same
/// policy to every resource kind: any load failure is logged and replaced by
/// a freshly constructed default, never propagated. No individual load
/// failure is fatal to the process.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    data_dir: Utf8PathBuf,
}

impl ResourceRegistry {
    /// Create a registry rooted at `data_dir`, creating the directory if needed.
    pub fn new<P: AsRef<Utf8Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)
                .with_context(|| format!("Failed to create data directory: {}", data_dir))?;
        }

        Ok(Self { data_dir })
    }

    /// Load one resource kind, substituting its default on any failure.
    ///
    /// This never fails: a missing or corrupt file downgrades to a warning
    /// and a default instance.
    pub fn load_or_default<R: PersistedResource>(&self) -> R {
        let path = self.data_dir.join(R::FILE_NAME);
        match R::try_load(&path) {
            Ok(resource) => {
                tracing::info!("Loaded {}", path);
                resource
            }
            Err(err) => {
                tracing::warn!("Using defaults for {}: {:#}", R::FILE_NAME, err);
                R::default()
            }
        }
    }

    /// Load all four resources and assemble the process-wide context.
    ///
    /// Loads run sequentially; order does not affect correctness since the
    /// resources share no state.
    pub fn load_all(&self) -> AppContext {
        AppContext {
            config: self.load_or_default::<AppConfig>(),
            loot_filters: self.load_or_default::<LootFilterSet>(),
            watchlist: self.load_or_default::<Watchlist>(),
            factions: self.load_or_default::<FactionRoster>(),
        }
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_registry() -> (ResourceRegistry, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let data_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let registry = ResourceRegistry::new(&data_path).unwrap();
        (registry, temp_dir)
    }

    #[test]
    fn test_creates_data_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = Utf8PathBuf::try_from(temp_dir.path().join("data")).unwrap();
        let registry = ResourceRegistry::new(&nested).unwrap();
        assert!(registry.data_dir().exists());
    }

    #[test]
    fn test_missing_file_yields_default() {
        let (registry, _temp_dir) = create_test_registry();
        let config: AppConfig = registry.load_or_default();
        assert!(!config.logging);
    }

    #[test]
    fn test_malformed_json_yields_default() {
        let (registry, _temp_dir) = create_test_registry();
        fs::write(registry.data_dir().join("Config.json"), "{ not json").unwrap();

        let config: AppConfig = registry.load_or_default();
        assert!(!config.logging);
        assert_eq!(config.default_zoom, 100);
    }

    #[test]
    fn test_schema_mismatch_yields_default() {
        let (registry, _temp_dir) = create_test_registry();
        // Valid JSON, wrong shape for the watchlist.
        fs::write(
            registry.data_dir().join("Watchlist.json"),
            r#"{"Entries": 7}"#,
        )
        .unwrap();

        let watchlist: Watchlist = registry.load_or_default();
        assert!(watchlist.entries.is_empty());
    }

    #[test]
    fn test_valid_file_loads() {
        let (registry, _temp_dir) = create_test_registry();
        fs::write(
            registry.data_dir().join("Config.json"),
            r#"{"Logging": true, "DefaultZoom": 150}"#,
        )
        .unwrap();

        let config: AppConfig = registry.load_or_default();
        assert!(config.logging);
        assert_eq!(config.default_zoom, 150);
    }

    #[test]
    fn test_one_corrupt_resource_does_not_affect_others() {
        let (registry, _temp_dir) = create_test_registry();
        fs::write(registry.data_dir().join("Filters.json"), "corrupt").unwrap();
        fs::write(
            registry.data_dir().join("AIFactions.json"),
            r#"{"Factions": [{"Name": "Raiders", "Members": ["Killa"]}]}"#,
        )
        .unwrap();

        let ctx = registry.load_all();
        assert!(ctx.loot_filters.filters.is_empty());
        assert_eq!(ctx.factions.faction_of("Killa"), Some("Raiders"));
    }

    #[test]
    fn test_load_all_populates_every_slot() {
        let (registry, _temp_dir) = create_test_registry();
        let ctx = registry.load_all();

        // Cold start: every slot holds a default, never "nothing".
        assert!(!ctx.logging_enabled());
        assert!(ctx.loot_filters.filters.is_empty());
        assert!(ctx.watchlist.entries.is_empty());
        assert!(ctx.factions.factions.is_empty());
    }
}
