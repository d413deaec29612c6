use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::Currency;

/// Tunable parameters of the helper API.
///
/// Every section defaults to the values the host ships with, so a config file
/// only needs to name what differs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Trader cloned by `create_new_trader`.
    pub reference_trader: String,
    pub assort: AssortConfig,
    pub loadout: LoadoutConfig,
    pub spawn: SpawnConfig,
    /// Money template per currency. Missing entries fall back to
    /// [`Currency::template_id`].
    pub currencies: HashMap<Currency, String>,
}

impl ApiConfig {
    pub const DEFAULT_REFERENCE_TRADER: &'static str = "ragfair";

    pub fn new() -> Self {
        Self {
            reference_trader: Self::DEFAULT_REFERENCE_TRADER.to_string(),
            assort: AssortConfig::default(),
            loadout: LoadoutConfig::default(),
            spawn: SpawnConfig::default(),
            currencies: Currency::iter()
                .map(|currency| (currency, currency.template_id().to_string()))
                .collect(),
        }
    }

    /// Money template id used for prices in `currency`.
    pub fn currency_template(&self, currency: Currency) -> &str {
        self.currencies
            .get(&currency)
            .map(String::as_str)
            .unwrap_or_else(|| currency.template_id())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Defaults applied to new trader assort lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssortConfig {
    pub unlimited_by_default: bool,
    pub default_stock: u32,
    /// `parentId` and `slotId` of top-level assort items.
    pub root_parent: String,
}

impl AssortConfig {
    pub const DEFAULT_STOCK: u32 = 999_999;
    pub const ROOT_PARENT: &'static str = "hideout";
}

impl Default for AssortConfig {
    fn default() -> Self {
        Self {
            unlimited_by_default: true,
            default_stock: Self::DEFAULT_STOCK,
            root_parent: Self::ROOT_PARENT.to_string(),
        }
    }
}

/// Bounds of the bot loadout slot walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadoutConfig {
    /// Number of item levels whose slots are recorded, counting the
    /// equipment item itself as level 1.
    pub max_depth: usize,
    /// Parent category of magazines. Items under it also record their first
    /// cartridge allow-list, or their first chamber when they have no
    /// cartridges. This applies at every walked level, the equipment item
    /// included; the ammo itself is never walked.
    pub magazine_parent: String,
}

impl LoadoutConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 4;
    pub const MAGAZINE_PARENT: &'static str = "5448bc234bdc2d3c308b4569";
}

impl Default for LoadoutConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            magazine_parent: Self::MAGAZINE_PARENT.to_string(),
        }
    }
}

/// Fixed parts of new spawn point descriptors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub delay_to_can_spawn_sec: f64,
    pub collider_radius: f64,
}

impl SpawnConfig {
    pub const DEFAULT_DELAY_SEC: f64 = 5.0;
    pub const DEFAULT_COLLIDER_RADIUS: f64 = 80.0;
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            delay_to_can_spawn_sec: Self::DEFAULT_DELAY_SEC,
            collider_radius: Self::DEFAULT_COLLIDER_RADIUS,
        }
    }
}
