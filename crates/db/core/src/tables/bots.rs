use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::FilterSet;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bots {
    /// Bot role (`"assault"`, `"pmcbot"`, ...) to its generation record.
    #[serde(default)]
    pub types: HashMap<String, BotType>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BotType {
    #[serde(default)]
    pub inventory: BotInventory,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BotInventory {
    /// Equipment type (`"Headwear"`, `"FirstPrimaryWeapon"`, ...) to the item
    /// ids a bot may spawn with.
    #[serde(default)]
    pub equipment: HashMap<String, Vec<String>>,
    /// Item id to its slot names and the ids allowed in each.
    #[serde(default)]
    pub mods: HashMap<String, HashMap<String, FilterSet>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
