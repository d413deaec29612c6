//! Item template and handbook helpers.

use db_core::{HandbookItem, Prefab};
use serde_json::Value;
use tracing::debug;

use crate::{Result, SpaceApi};

impl SpaceApi<'_> {
    /// Clones `id_to_clone` under `new_id`.
    ///
    /// The copy is independent of the source. `parent` replaces the copy's
    /// `_parent` and `new_path` its `_props.Prefab.path`; an existing item
    /// under `new_id` is replaced.
    pub fn create_new_item(
        &mut self,
        id_to_clone: &str,
        new_id: &str,
        parent: Option<&str>,
        new_path: Option<&str>,
    ) -> Result<()> {
        let mut item = self.db.item(id_to_clone)?.clone();

        item.id = new_id.to_string();
        if let Some(parent) = parent {
            item.parent = parent.to_string();
        }
        if let Some(path) = new_path {
            item.props.prefab.get_or_insert_with(Prefab::default).path = path.to_string();
        }

        debug!(source = id_to_clone, item = new_id, "cloned item template");
        self.db.templates.items.insert(new_id.to_string(), item);
        Ok(())
    }

    /// Overwrites one `_props` entry of an item.
    pub fn edit_simple_item_data(&mut self, id: &str, property: &str, value: Value) -> Result<()> {
        self.db.item_mut(id)?.set_property(property, value)?;
        debug!(item = id, property, "edited item property");
        Ok(())
    }

    /// Appends a handbook price entry for `id` under `category`.
    ///
    /// Repeated calls add repeated entries.
    pub fn create_handbook_item(&mut self, id: &str, category: &str, price: u64) {
        self.db.templates.handbook.items.push(HandbookItem {
            id: id.to_string(),
            parent_id: category.to_string(),
            price,
            ..HandbookItem::default()
        });
        debug!(item = id, category, price, "added handbook entry");
    }
}
