//! Typed model of a game server's JSON database tables.
//!
//! `db-core` describes the records the helper API edits (item templates,
//! handbook entries, locale bundles, traders, bot loadouts and map spawn
//! points) and the [`Database`] context that owns them. It also defines the
//! shared building blocks used by the API layer:
//! - [`FilterSet`] for slot allow-lists with set semantics
//! - [`Currency`] for the fixed money templates
//! - [`ApiConfig`] for tunable constants
//! - [`DbError`] and the [`ClassifiedError`] trait
pub mod config;
pub mod currency;
pub mod error;
pub mod filter;
pub mod tables;

pub use config::{ApiConfig, AssortConfig, LoadoutConfig, SpawnConfig};
pub use currency::Currency;
pub use error::{ClassifiedError, DbError, ErrorSeverity, Table};
pub use filter::FilterSet;
pub use tables::{
    Assort, AssortItem, AssortUpd, BarterCondition, BotInventory, BotType, Bots, ColliderParams,
    Database, Handbook, HandbookItem, Insurance, ItemLocale, ItemProps, ItemTemplate, LocaleBundle,
    Locales, Location, LocationBase, LocationLocale, LoyaltyLevel, Prefab, QuestAssort,
    QuestLocale, Slot, SlotFilter, SlotKind, SlotProps, SpawnPoint, SphereCollider, Templates,
    Trader, TraderBase, TraderLocale, UnlockType, Vector3,
};
