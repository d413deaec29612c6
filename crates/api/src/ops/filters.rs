//! Slot, grid, cartridge and chamber allow-list helpers.
//!
//! The host only consults the first filter of a container, so every helper
//! reads and writes `filters[0].Filter`.

use db_core::{FilterSet, ItemTemplate, SlotKind};
use tracing::{debug, warn};

use crate::{ApiError, Result, SpaceApi};

/// Outcome of a slot lookup by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotLookup {
    Found(usize),
    NotFound,
}

impl SlotLookup {
    pub fn index(self) -> Option<usize> {
        match self {
            SlotLookup::Found(index) => Some(index),
            SlotLookup::NotFound => None,
        }
    }
}

fn first_filter<'a>(item: &'a ItemTemplate, kind: SlotKind, index: usize) -> Result<&'a FilterSet> {
    let containers = item.containers(kind);
    let container = containers
        .get(index)
        .ok_or_else(|| ApiError::ContainerIndexOutOfRange {
            item: item.id.clone(),
            kind,
            index,
            len: containers.len(),
        })?;
    container.first_filter().ok_or_else(|| ApiError::MissingFilter {
        item: item.id.clone(),
        kind,
        index,
    })
}

impl SpaceApi<'_> {
    /// Adds `child` to the first filter of container `index` of `kind`.
    ///
    /// Returns `false` when the id was already allowed.
    pub fn add_filter(&mut self, item_id: &str, kind: SlotKind, index: usize, child: &str) -> Result<bool> {
        let containers = self.db.item_mut(item_id)?.containers_mut(kind);
        let len = containers.len();
        let filter = containers
            .get_mut(index)
            .ok_or_else(|| ApiError::ContainerIndexOutOfRange {
                item: item_id.to_string(),
                kind,
                index,
                len,
            })?
            .first_filter_mut()
            .ok_or_else(|| ApiError::MissingFilter {
                item: item_id.to_string(),
                kind,
                index,
            })?;

        let added = filter.insert(child);
        debug!(item = item_id, %kind, index, child, added, "added filter entry");
        Ok(added)
    }

    pub fn is_in_filter(&self, item_id: &str, kind: SlotKind, index: usize, child: &str) -> Result<bool> {
        let item = self.db.item(item_id)?;
        Ok(first_filter(item, kind, index)?.contains(child))
    }

    pub fn add_item_slot_filter(&mut self, item_id: &str, child: &str, slot_index: usize) -> Result<bool> {
        self.add_filter(item_id, SlotKind::Slots, slot_index, child)
    }

    pub fn add_item_grid_filter(&mut self, item_id: &str, child: &str, grid_index: usize) -> Result<bool> {
        self.add_filter(item_id, SlotKind::Grids, grid_index, child)
    }

    pub fn add_cartridge_filter(&mut self, item_id: &str, child: &str) -> Result<bool> {
        self.add_filter(item_id, SlotKind::Cartridges, 0, child)
    }

    pub fn add_chamber_filter(&mut self, item_id: &str, child: &str) -> Result<bool> {
        self.add_filter(item_id, SlotKind::Chambers, 0, child)
    }

    pub fn is_item_in_slot_filter(&self, item_id: &str, child: &str, slot_index: usize) -> Result<bool> {
        self.is_in_filter(item_id, SlotKind::Slots, slot_index, child)
    }

    pub fn is_item_in_grid_filter(&self, item_id: &str, child: &str, grid_index: usize) -> Result<bool> {
        self.is_in_filter(item_id, SlotKind::Grids, grid_index, child)
    }

    pub fn is_item_in_cartridge_filter(&self, item_id: &str, child: &str) -> Result<bool> {
        self.is_in_filter(item_id, SlotKind::Cartridges, 0, child)
    }

    pub fn is_item_in_chamber_filter(&self, item_id: &str, child: &str) -> Result<bool> {
        self.is_in_filter(item_id, SlotKind::Chambers, 0, child)
    }

    /// Position of the slot named `slot_name` in the item's `Slots`.
    ///
    /// An unknown slot name is reported as [`SlotLookup::NotFound`] and
    /// logged; only a missing item is an error.
    pub fn find_slot_index(&self, item_id: &str, slot_name: &str) -> Result<SlotLookup> {
        let item = self.db.item(item_id)?;
        match item.slot_index(slot_name) {
            Some(index) => Ok(SlotLookup::Found(index)),
            None => {
                warn!(item = item_id, slot = slot_name, "slot not found");
                Ok(SlotLookup::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture;
    use db_core::ClassifiedError;

    #[test]
    fn insert_is_idempotent() {
        let mut db = fixture();
        let mut api = SpaceApi::new(&mut db);

        assert!(api.add_item_slot_filter("rifle", "mag_60", 0).unwrap());
        assert!(!api.add_item_slot_filter("rifle", "mag_60", 0).unwrap());
        assert!(!api.add_item_slot_filter("rifle", "mag_30", 0).unwrap());
        assert!(api.is_item_in_slot_filter("rifle", "mag_60", 0).unwrap());

        let filter = db.item("rifle").unwrap().props.slots[0].first_filter().unwrap();
        assert_eq!(filter.as_slice(), ["mag_30", "mag_60"]);
    }

    #[test]
    fn each_container_kind() {
        let mut db = fixture();
        let mut api = SpaceApi::new(&mut db);

        assert!(api.add_item_grid_filter("backpack", "rifle", 0).unwrap());
        assert!(api.add_cartridge_filter("mag_30", "ammo_762").unwrap());
        assert!(api.add_chamber_filter("rifle", "ammo_762").unwrap());

        assert!(api.is_item_in_grid_filter("backpack", "rifle", 0).unwrap());
        assert!(api.is_item_in_grid_filter("backpack", "54009119af1c881c07000029", 0).unwrap());
        assert!(api.is_item_in_cartridge_filter("mag_30", "ammo_762").unwrap());
        assert!(api.is_item_in_chamber_filter("rifle", "ammo_556").unwrap());
        assert!(!api.is_item_in_chamber_filter("rifle", "ammo_9mm").unwrap());
    }

    #[test]
    fn out_of_range_container() {
        let mut db = fixture();
        let mut api = SpaceApi::new(&mut db);

        let err = api.add_item_slot_filter("rifle", "mag_60", 7).unwrap_err();
        assert!(matches!(
            err,
            ApiError::ContainerIndexOutOfRange { index: 7, len: 2, kind: SlotKind::Slots, .. }
        ));
        let err = api.is_item_in_cartridge_filter("rifle", "ammo_556").unwrap_err();
        assert_eq!(err.error_code(), "API_CONTAINER_INDEX_OUT_OF_RANGE");
    }

    #[test]
    fn container_without_filters() {
        let mut db = fixture();
        let err = SpaceApi::new(&mut db)
            .add_item_slot_filter("backpack", "pouch", 0)
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingFilter { index: 0, .. }));
        assert!(db.item("backpack").unwrap().props.slots[0].props.filters.is_empty());
    }

    #[test]
    fn slot_lookup_by_name() {
        let mut db = fixture();
        let api = SpaceApi::new(&mut db);

        assert_eq!(api.find_slot_index("rifle", "mod_stock").unwrap(), SlotLookup::Found(1));
        assert_eq!(api.find_slot_index("rifle", "mod_scope").unwrap(), SlotLookup::NotFound);
        assert_eq!(api.find_slot_index("rifle", "mod_scope").unwrap().index(), None);
        assert!(api.find_slot_index("ghost", "mod_stock").is_err());
    }
}
