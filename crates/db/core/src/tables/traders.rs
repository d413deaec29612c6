//! Trader records: base config, assortment and quest unlocks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use crate::error::{DbError, Result, Table};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trader {
    #[serde(default)]
    pub base: TraderBase,
    #[serde(default)]
    pub assort: Assort,
    #[serde(default)]
    pub questassort: QuestAssort,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraderBase {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub working: bool,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub currency: String,
    #[serde(rename = "loyaltyLevels", default)]
    pub loyalty_levels: Vec<LoyaltyLevel>,
    #[serde(default)]
    pub insurance: Insurance,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TraderBase {
    /// Overwrites one `base` entry by its host name.
    ///
    /// Works like [`crate::ItemTemplate::set_property`]: modelled fields are
    /// decoded, the rest is stored as given. On error the record is unchanged.
    pub fn set_property(&mut self, property: &str, value: Value) -> Result<()> {
        let key = self.id.clone();
        let mut raw = serde_json::to_value(&*self).map_err(|source| DbError::Malformed {
            table: Table::Traders,
            key: key.clone(),
            source,
        })?;
        if let Value::Object(fields) = &mut raw {
            fields.insert(property.to_string(), value);
        }
        let updated = serde_json::from_value(raw).map_err(|source| DbError::InvalidProperty {
            table: Table::Traders,
            key,
            property: property.to_string(),
            source,
        })?;
        *self = updated;
        Ok(())
    }
}

/// Requirements to reach one loyalty tier.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyLevel {
    #[serde(rename = "minLevel")]
    pub min_level: u32,
    #[serde(rename = "minSalesSum")]
    pub min_sales_sum: u64,
    #[serde(rename = "minStanding")]
    pub min_standing: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Insurance terms offered by a trader. Return times are in hours.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insurance {
    pub availability: bool,
    pub min_payment: u64,
    pub min_return_hour: u32,
    pub max_return_hour: u32,
    pub max_storage_time: u32,
    /// Item ids or categories that cannot be insured.
    pub excluded_category: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Items a trader sells, with their prices and loyalty gates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Assort {
    #[serde(default)]
    pub items: Vec<AssortItem>,
    /// Assort id to its alternative payment options; each option is a list
    /// of conditions that must all be met.
    #[serde(default)]
    pub barter_scheme: HashMap<String, Vec<Vec<BarterCondition>>>,
    #[serde(default)]
    pub loyal_level_items: HashMap<String, u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Assort {
    /// Whether `id` is a top-level or attached assort item.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssortItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_tpl")]
    pub tpl: String,
    #[serde(rename = "parentId")]
    pub parent_id: String,
    #[serde(rename = "slotId")]
    pub slot_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upd: Option<AssortUpd>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Stack state of an assort item. Attached parts usually omit
/// `UnlimitedCount`; restriction fields such as `BuyRestrictionMax` stay in
/// `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssortUpd {
    #[serde(rename = "UnlimitedCount", default)]
    pub unlimited_count: bool,
    #[serde(rename = "StackObjectsCount", default)]
    pub stack_objects_count: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssortUpd {
    pub fn new(unlimited_count: bool, stack_objects_count: u32) -> Self {
        Self {
            unlimited_count,
            stack_objects_count,
            extra: Map::new(),
        }
    }
}

/// One payment requirement: `count` units of item `tpl`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarterCondition {
    pub count: f64,
    #[serde(rename = "_tpl")]
    pub tpl: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BarterCondition {
    pub fn new(count: f64, tpl: impl Into<String>) -> Self {
        Self {
            count,
            tpl: tpl.into(),
            extra: Map::new(),
        }
    }
}

/// Quest progress state that reveals an assort entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UnlockType {
    Started,
    Success,
    Fail,
}

/// Assort id to quest id, per unlock type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestAssort {
    #[serde(default)]
    pub started: HashMap<String, String>,
    #[serde(default)]
    pub success: HashMap<String, String>,
    #[serde(default)]
    pub fail: HashMap<String, String>,
}

impl QuestAssort {
    pub fn bucket(&self, kind: UnlockType) -> &HashMap<String, String> {
        match kind {
            UnlockType::Started => &self.started,
            UnlockType::Success => &self.success,
            UnlockType::Fail => &self.fail,
        }
    }

    pub fn bucket_mut(&mut self, kind: UnlockType) -> &mut HashMap<String, String> {
        match kind {
            UnlockType::Started => &mut self.started,
            UnlockType::Success => &mut self.success,
            UnlockType::Fail => &mut self.fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_property_keeps_record_on_bad_value() {
        let mut base = TraderBase {
            id: "trader".into(),
            working: true,
            ..TraderBase::default()
        };

        base.set_property("nickname", json!("Spaceman")).unwrap();
        assert_eq!(base.extra["nickname"], "Spaceman");

        base.set_property("working", json!(false)).unwrap();
        assert!(!base.working);

        assert!(base.set_property("working", json!("yes")).is_err());
        assert!(!base.working);
        assert_eq!(base.extra["nickname"], "Spaceman");
    }

    #[test]
    fn assort_keeps_host_fields() {
        let raw = json!({
            "items": [
                {
                    "_id": "offer",
                    "_tpl": "rifle",
                    "parentId": "hideout",
                    "slotId": "hideout",
                    "upd": { "UnlimitedCount": true, "StackObjectsCount": 5, "BuyRestrictionMax": 2 }
                },
                {
                    "_id": "offer_mag",
                    "_tpl": "mag",
                    "parentId": "offer",
                    "slotId": "mod_magazine",
                    "upd": { "StackObjectsCount": 1 },
                    "location": 0
                }
            ],
            "barter_scheme": {
                "offer": [[{ "count": 2.0, "_tpl": "ammo", "onlyFunctional": true }]]
            },
            "loyal_level_items": { "offer": 1 }
        });

        let assort: Assort = serde_json::from_value(raw.clone()).unwrap();
        let part = &assort.items[1];
        assert_eq!(part.upd, Some(AssortUpd::new(false, 1)));
        assert_eq!(part.extra["location"], 0);
        assert_eq!(assort.items[0].upd.as_ref().unwrap().extra["BuyRestrictionMax"], 2);

        let encoded = serde_json::to_value(&assort).unwrap();
        assert_eq!(encoded["items"][0]["upd"]["BuyRestrictionMax"], 2);
        assert_eq!(encoded["items"][1]["location"], 0);
        assert_eq!(encoded["barter_scheme"]["offer"][0][0]["onlyFunctional"], true);
        assert_eq!(serde_json::from_value::<Assort>(encoded).unwrap(), assort);
    }

    #[test]
    fn insurance_keeps_unmodelled_keys() {
        let insurance: Insurance =
            serde_json::from_value(json!({ "availability": true, "min_payment": 0, "insurance_price_coef": 25 }))
                .unwrap();
        assert!(insurance.availability);
        assert_eq!(insurance.max_storage_time, 0);
        assert_eq!(serde_json::to_value(&insurance).unwrap()["insurance_price_coef"], 25);
    }

    #[test]
    fn unlock_type_parses_host_keys() {
        assert_eq!("success".parse::<UnlockType>().unwrap(), UnlockType::Success);
        assert_eq!(UnlockType::Fail.to_string(), "fail");
    }
}
