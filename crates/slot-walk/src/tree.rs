//! The tree abstraction walked by [`crate::Walker`].

use core::hash::Hash;

/// A named allow-list hanging off a node.
///
/// Every id in `allowed` is a child node that may be walked further.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot<Id> {
    pub name: String,
    pub allowed: Vec<Id>,
}

impl<Id> Slot<Id> {
    pub fn new(name: impl Into<String>, allowed: Vec<Id>) -> Self {
        Self {
            name: name.into(),
            allowed,
        }
    }
}

/// Source of slot data for a node graph.
///
/// Implementations usually borrow a lookup table; `slots` fails when `node`
/// is not part of the table.
pub trait SlotTree {
    type Id: Clone + Eq + Hash;
    type Error;

    /// Slots declared by `node`, in declaration order.
    fn slots(&self, node: &Self::Id) -> Result<Vec<Slot<Self::Id>>, Self::Error>;
}
