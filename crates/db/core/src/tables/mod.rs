//! Typed view of the host server's database tables.
//!
//! [`Database`] is the context object every helper operation receives. The
//! host owns its lifecycle; this crate only models the fields the helpers
//! read or write and keeps everything else in flattened `extra` maps.
mod bots;
mod handbook;
mod items;
mod locales;
mod locations;
mod traders;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DbError, Result, Table};

pub use bots::{BotInventory, BotType, Bots};
pub use handbook::{Handbook, HandbookItem};
pub use items::{ItemProps, ItemTemplate, Prefab, Slot, SlotFilter, SlotKind, SlotProps};
pub use locales::{ItemLocale, LocaleBundle, Locales, LocationLocale, QuestLocale, TraderLocale};
pub use locations::{ColliderParams, Location, LocationBase, SpawnPoint, SphereCollider, Vector3};
pub use traders::{
    Assort, AssortItem, AssortUpd, BarterCondition, Insurance, LoyaltyLevel, QuestAssort, Trader,
    TraderBase, UnlockType,
};

/// Root of the host database.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub templates: Templates,
    #[serde(default)]
    pub locales: Locales,
    #[serde(default)]
    pub traders: HashMap<String, Trader>,
    #[serde(default)]
    pub bots: Bots,
    #[serde(default)]
    pub locations: HashMap<String, Location>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Templates {
    #[serde(default)]
    pub items: HashMap<String, ItemTemplate>,
    #[serde(default)]
    pub handbook: Handbook,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Database {
    pub fn item(&self, id: &str) -> Result<&ItemTemplate> {
        self.templates
            .items
            .get(id)
            .ok_or_else(|| DbError::not_found(Table::Items, id))
    }

    pub fn item_mut(&mut self, id: &str) -> Result<&mut ItemTemplate> {
        self.templates
            .items
            .get_mut(id)
            .ok_or_else(|| DbError::not_found(Table::Items, id))
    }

    /// Language bundle for `lang`. Bundles are never created on demand.
    pub fn locale_mut(&mut self, lang: &str) -> Result<&mut LocaleBundle> {
        self.locales
            .global
            .get_mut(lang)
            .ok_or_else(|| DbError::not_found(Table::Locales, lang))
    }

    pub fn trader(&self, id: &str) -> Result<&Trader> {
        self.traders
            .get(id)
            .ok_or_else(|| DbError::not_found(Table::Traders, id))
    }

    pub fn trader_mut(&mut self, id: &str) -> Result<&mut Trader> {
        self.traders
            .get_mut(id)
            .ok_or_else(|| DbError::not_found(Table::Traders, id))
    }

    pub fn bot(&self, role: &str) -> Result<&BotType> {
        self.bots
            .types
            .get(role)
            .ok_or_else(|| DbError::not_found(Table::Bots, role))
    }

    pub fn bot_mut(&mut self, role: &str) -> Result<&mut BotType> {
        self.bots
            .types
            .get_mut(role)
            .ok_or_else(|| DbError::not_found(Table::Bots, role))
    }

    pub fn location_mut(&mut self, map: &str) -> Result<&mut Location> {
        self.locations
            .get_mut(map)
            .ok_or_else(|| DbError::not_found(Table::Locations, map))
    }
}
