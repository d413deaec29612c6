//! Item templates and their slot containers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::Display;

use crate::FilterSet;
use crate::error::{DbError, Result, Table};

/// Item template as stored under `templates.items[id]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_name", default)]
    pub name: String,
    #[serde(rename = "_parent", default)]
    pub parent: String,
    #[serde(rename = "_type", default)]
    pub kind: String,
    #[serde(rename = "_props", default)]
    pub props: ItemProps,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemTemplate {
    /// Slot containers of the given kind, in declaration order.
    pub fn containers(&self, kind: SlotKind) -> &[Slot] {
        match kind {
            SlotKind::Slots => &self.props.slots,
            SlotKind::Grids => &self.props.grids,
            SlotKind::Cartridges => &self.props.cartridges,
            SlotKind::Chambers => &self.props.chambers,
        }
    }

    pub fn containers_mut(&mut self, kind: SlotKind) -> &mut Vec<Slot> {
        match kind {
            SlotKind::Slots => &mut self.props.slots,
            SlotKind::Grids => &mut self.props.grids,
            SlotKind::Cartridges => &mut self.props.cartridges,
            SlotKind::Chambers => &mut self.props.chambers,
        }
    }

    /// Position of the slot named `name` among `_props.Slots`.
    pub fn slot_index(&self, name: &str) -> Option<usize> {
        self.props.slots.iter().position(|slot| slot.name == name)
    }

    /// Overwrites one `_props` entry by its host name.
    ///
    /// Modelled properties (`Slots`, `Prefab`, ...) are decoded from `value`;
    /// anything else is stored verbatim.
    pub fn set_property(&mut self, property: &str, value: Value) -> Result<()> {
        let mut raw = serde_json::to_value(&self.props).map_err(|source| DbError::Malformed {
            table: Table::Items,
            key: self.id.clone(),
            source,
        })?;
        if let Value::Object(fields) = &mut raw {
            fields.insert(property.to_string(), value);
        }
        let props = serde_json::from_value(raw).map_err(|source| DbError::InvalidProperty {
            table: Table::Items,
            key: self.id.clone(),
            property: property.to_string(),
            source,
        })?;
        self.props = props;
        Ok(())
    }
}

/// The `_props` bag of an item template.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemProps {
    #[serde(rename = "Prefab", default, skip_serializing_if = "Option::is_none")]
    pub prefab: Option<Prefab>,
    #[serde(rename = "Slots", default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Slot>,
    #[serde(rename = "Grids", default, skip_serializing_if = "Vec::is_empty")]
    pub grids: Vec<Slot>,
    #[serde(rename = "Cartridges", default, skip_serializing_if = "Vec::is_empty")]
    pub cartridges: Vec<Slot>,
    #[serde(rename = "Chambers", default, skip_serializing_if = "Vec::is_empty")]
    pub chambers: Vec<Slot>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Rendered asset reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Prefab {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub rcid: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Which container collection of `_props` an operation addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum SlotKind {
    Slots,
    Grids,
    Cartridges,
    Chambers,
}

/// A slot, grid, cartridge or chamber container.
///
/// All four share the `_name` / `_props.filters[]` layout; grids and
/// cartridges carry extra sizing fields that stay in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "_parent", default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(rename = "_props", default)]
    pub props: SlotProps,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Slot {
    /// Creates a container with a single allow-list.
    pub fn new(name: impl Into<String>, allowed: FilterSet) -> Self {
        Self {
            name: name.into(),
            props: SlotProps {
                filters: vec![SlotFilter::new(allowed)],
                extra: Map::new(),
            },
            ..Self::default()
        }
    }

    /// The first allow-list, which is the only one the host consults.
    pub fn first_filter(&self) -> Option<&FilterSet> {
        self.props.filters.first().map(|filter| &filter.filter)
    }

    pub fn first_filter_mut(&mut self) -> Option<&mut FilterSet> {
        self.props.filters.first_mut().map(|filter| &mut filter.filter)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotProps {
    #[serde(default)]
    pub filters: Vec<SlotFilter>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotFilter {
    #[serde(rename = "Filter", default)]
    pub filter: FilterSet,
    #[serde(rename = "ExcludedFilter", default, skip_serializing_if = "Option::is_none")]
    pub excluded: Option<FilterSet>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SlotFilter {
    pub fn new(filter: FilterSet) -> Self {
        Self {
            filter,
            excluded: None,
            extra: Map::new(),
        }
    }
}
