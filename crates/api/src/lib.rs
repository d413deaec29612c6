//! Helper API for mods that edit a game server's in-memory database.
//!
//! [`SpaceApi`] borrows a [`db_core::Database`] and offers one-call helpers
//! for the edits mods usually perform: cloning item templates, registering
//! locale texts, selling items through traders, widening slot allow-lists,
//! teaching bots new equipment and adding spawn points.
//!
//! ```no_run
//! use db_core::{Currency, Database};
//! use space_api::{AssortLine, SpaceApi};
//!
//! # fn run(db: &mut Database) -> space_api::Result<()> {
//! let mut api = SpaceApi::new(db);
//! api.create_new_item("5447a9cd4bdc2dbd208b4567", "my_rifle", None, None)?;
//! api.create_trader_assort("ragfair", AssortLine::new("my_rifle_offer", "my_rifle", 1), 45000.0, Currency::Rub)?;
//! # Ok(())
//! # }
//! ```

mod error;
pub mod logging;
mod ops;
mod registry;
mod space;

#[cfg(test)]
mod test_support;

pub use error::{ApiError, Result};
pub use ops::{
    AssortLine, AssortUnlockEdit, BarterScheme, QuestText, SlotLookup, SpawnPointSpec, Stock,
    parse_currency,
};
pub use registry::ModRegistry;
pub use space::SpaceApi;
