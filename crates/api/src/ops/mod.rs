//! `SpaceApi` operations, one module per host table.

mod assort;
mod filters;
mod items;
mod loadout;
mod locales;
mod spawns;
mod traders;

pub use assort::{AssortLine, AssortUnlockEdit, BarterScheme, Stock, parse_currency};
pub use filters::SlotLookup;
pub use locales::QuestText;
pub use spawns::SpawnPointSpec;
