use coolbar_core::Event;
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `coolbar.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Container settings.
    pub bar: BarSettings,
    /// Items in creation order.
    pub items: Vec<ItemConfig>,
    /// Pointer gestures replayed against the bar after it is built.
    pub script: Vec<Event>,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            bar: BarSettings::default(),
            items: vec![
                ItemConfig::new("file", 60, 120, 24),
                ItemConfig::new("edit", 60, 160, 24),
                ItemConfig::new("search", 80, 200, 24),
            ],
            script: Vec::new(),
        }
    }
}

/// Container settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSettings {
    /// Client width of the container in pixels.
    pub width: i32,
    /// Initial container height; the bar resizes it on the first relayout.
    pub height: i32,
    /// Flat rendering: no row spacing and no separators.
    pub flat: bool,
    /// Start locked (no drag / resize gestures).
    pub locked: bool,
}

impl Default for BarSettings {
    fn default() -> Self {
        Self {
            width:  400,
            height: 0,
            flat:   false,
            locked: false,
        }
    }
}

/// Config block for a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    /// Display label, used in logs and the printed arrangement.
    pub label: String,
    /// Hard floor for the item width, grip included.
    #[serde(default)]
    pub minimum_width: i32,
    #[serde(default)]
    pub preferred_width: i32,
    #[serde(default)]
    pub preferred_height: i32,
}

impl ItemConfig {
    pub fn new(label: impl Into<String>, minimum_width: i32, preferred_width: i32, preferred_height: i32) -> Self {
        Self {
            label: label.into(),
            minimum_width,
            preferred_width,
            preferred_height,
        }
    }
}
