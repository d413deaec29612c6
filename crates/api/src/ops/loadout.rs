//! Bot loadout population.
//!
//! Adding an equipment item also teaches the bot role which parts fit it:
//! the item's slot tree is walked with [`slot_walk::Walker`] and every
//! visited slot's allow-list is copied into `inventory.mods`.

use std::collections::HashMap;

use db_core::{DbError, FilterSet, ItemTemplate, SlotKind, Table};
use slot_walk::{Rule, SlotTree, Visit, Walker};
use tracing::debug;

use crate::{ApiError, Result, SpaceApi};

/// Item templates viewed as a slot tree.
///
/// Children are the ids in each slot's first filter. A slot without filters
/// has no children.
struct ItemSlots<'a> {
    items: &'a HashMap<String, ItemTemplate>,
}

impl ItemSlots<'_> {
    fn item(&self, id: &str) -> Result<&ItemTemplate> {
        self.items
            .get(id)
            .ok_or_else(|| DbError::not_found(Table::Items, id).into())
    }
}

fn walk_slots(item: &ItemTemplate, kind: SlotKind) -> impl Iterator<Item = slot_walk::Slot<String>> + '_ {
    item.containers(kind).iter().map(|slot| {
        let allowed: Vec<String> = slot
            .first_filter()
            .map(|filter| filter.iter().map(str::to_string).collect())
            .unwrap_or_default();
        slot_walk::Slot::new(slot.name.clone(), allowed)
    })
}

impl SlotTree for ItemSlots<'_> {
    type Id = String;
    type Error = ApiError;

    fn slots(&self, node: &String) -> Result<Vec<slot_walk::Slot<String>>> {
        Ok(walk_slots(self.item(node)?, SlotKind::Slots).collect())
    }
}

/// Records the ammo a magazine accepts without walking into the ammo.
///
/// Matches items whose parent is the magazine category and contributes
/// their first cartridge container, or their first chamber when they have
/// no cartridges.
struct MagazineRule<'a> {
    parent: &'a str,
}

impl<'a> Rule<ItemSlots<'a>> for MagazineRule<'_> {
    fn terminal_slots(&self, tree: &ItemSlots<'a>, node: &String) -> Result<Vec<slot_walk::Slot<String>>> {
        let item = tree.item(node)?;
        if item.parent != self.parent {
            return Ok(Vec::new());
        }
        Ok(walk_slots(item, SlotKind::Cartridges)
            .chain(walk_slots(item, SlotKind::Chambers))
            .take(1)
            .collect())
    }
}

impl SpaceApi<'_> {
    /// Adds item `id` to the `equipment_type` pool of `bot_role` and records
    /// the parts that fit it.
    ///
    /// Slots are recorded for up to `loadout.max_depth` item levels, the
    /// equipment item being level 1. Repeated calls push the id again and
    /// refresh the recorded slots. Nothing is written when the bot role or
    /// any item in the tree is unknown.
    pub fn add_equipment_to_loadout(&mut self, equipment_type: &str, id: &str, bot_role: &str) -> Result<()> {
        self.db.bot(bot_role)?;

        let visits = self.loadout_visits(id)?;

        let inventory = &mut self.db.bot_mut(bot_role)?.inventory;
        inventory
            .equipment
            .entry(equipment_type.to_string())
            .or_default()
            .push(id.to_string());

        let recorded = visits.len();
        for visit in visits {
            let mods = inventory.mods.entry(visit.node).or_default();
            for slot in visit.slots.into_iter().chain(visit.terminal) {
                mods.insert(slot.name, slot.allowed.into_iter().collect::<FilterSet>());
            }
        }

        debug!(bot = bot_role, equipment_type, item = id, recorded, "added equipment to loadout");
        Ok(())
    }

    fn loadout_visits(&self, id: &str) -> Result<Vec<Visit<String>>> {
        let tree = ItemSlots {
            items: &self.db.templates.items,
        };
        let rule = MagazineRule {
            parent: &self.config.loadout.magazine_parent,
        };
        Walker::new(self.config.loadout.max_depth)
            .with_rule(rule)
            .walk(&tree, id.to_string())
    }
}
