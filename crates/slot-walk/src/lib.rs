//! Bounded-depth traversal of item slot trees.
//!
//! Items expose named slots, each with an allow-list of child items, which in
//! turn expose slots of their own. This crate walks such a graph from a root
//! down to a configurable number of levels and reports what it saw, without
//! knowing anything about the concrete item storage.
//!
//! - **Read-only**: the walk returns [`Visit`] records; applying them is up to
//!   the caller
//! - **Bounded**: depth is a parameter, not a property of the code
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`SlotTree`]: data source for a node's slots
//! - [`Rule`]: special case contributing terminal slots (e.g. a magazine's
//!   ammo list)
//! - [`Walker`]: breadth-first traversal parameterized by depth and rule

pub mod rule;
pub mod tree;
pub mod walker;

pub use rule::{NoRule, Rule};
pub use tree::{Slot, SlotTree};
pub use walker::{Visit, Walker};
