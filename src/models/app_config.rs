use serde::{Deserialize, Serialize};

/// User configuration from `Config.json`.
///
/// Every field carries a serde default so a partially written or older config
/// file still deserializes; unknown fields are ignored. The bootstrap itself
/// only consults [`logging`](AppConfig::logging) - the remaining fields are
/// published to the overlay host through [`AppContext`](crate::models::AppContext).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Enables the diagnostic log sink and keeps the console window visible.
    #[serde(rename = "Logging", default)]
    pub logging: bool,

    #[serde(rename = "UIScale", default = "default_ui_scale")]
    pub ui_scale: f32,

    #[serde(rename = "DefaultZoom", default = "default_zoom")]
    pub default_zoom: u32,

    #[serde(rename = "MaxDistance", default = "default_max_distance")]
    pub max_distance: f32,

    #[serde(rename = "LootEnabled", default = "default_true")]
    pub loot_enabled: bool,

    #[serde(rename = "AimviewEnabled", default)]
    pub aimview_enabled: bool,

    #[serde(rename = "FontSize", default = "default_font_size")]
    pub font_size: u32,

    #[serde(rename = "PrimaryTeammateId", default)]
    pub primary_teammate_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: false,
            ui_scale: default_ui_scale(),
            default_zoom: default_zoom(),
            max_distance: default_max_distance(),
            loot_enabled: true,
            aimview_enabled: false,
            font_size: default_font_size(),
            primary_teammate_id: String::new(),
        }
    }
}

fn default_ui_scale() -> f32 {
    1.0
}

fn default_zoom() -> u32 {
    100
}

fn default_max_distance() -> f32 {
    325.0
}

fn default_font_size() -> u32 {
    13
}

fn default_true() -> bool {
    true
}
