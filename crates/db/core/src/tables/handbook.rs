use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The handbook table: category tree plus per-item price entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Handbook {
    #[serde(rename = "Categories", default)]
    pub categories: Vec<Value>,
    #[serde(rename = "Items", default)]
    pub items: Vec<HandbookItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Price and category of one item. Duplicates are tolerated by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HandbookItem {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "ParentId")]
    pub parent_id: String,
    #[serde(rename = "Price")]
    pub price: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
