//! Special-case rules applied to visited nodes.
//!
//! A rule contributes extra, *terminal* slots for a node: they are reported
//! alongside the node's regular slots but their ids are never descended into.

use crate::{Slot, SlotTree};

/// Contributes terminal slots for selected nodes.
pub trait Rule<T: SlotTree + ?Sized> {
    /// Extra slots recorded for `node`. Return an empty list to skip it.
    fn terminal_slots(&self, tree: &T, node: &T::Id) -> Result<Vec<Slot<T::Id>>, T::Error>;
}

/// Rule that never contributes anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRule;

impl<T: SlotTree + ?Sized> Rule<T> for NoRule {
    #[inline]
    fn terminal_slots(&self, _tree: &T, _node: &T::Id) -> Result<Vec<Slot<T::Id>>, T::Error> {
        Ok(Vec::new())
    }
}

impl<T, F> Rule<T> for F
where
    T: SlotTree + ?Sized,
    F: Fn(&T, &T::Id) -> Result<Vec<Slot<T::Id>>, T::Error>,
{
    fn terminal_slots(&self, tree: &T, node: &T::Id) -> Result<Vec<Slot<T::Id>>, T::Error> {
        self(tree, node)
    }
}
