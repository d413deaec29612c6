//! Breadth-first, depth-bounded slot traversal.

use std::collections::{HashSet, VecDeque};

use crate::rule::{NoRule, Rule};
use crate::{Slot, SlotTree};

/// One expanded node and everything recorded for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visit<Id> {
    pub node: Id,
    /// Level of the node; the root is level 1.
    pub depth: usize,
    /// Regular slots of the node.
    pub slots: Vec<Slot<Id>>,
    /// Slots contributed by the walker's rule.
    pub terminal: Vec<Slot<Id>>,
}

/// Walks a [`SlotTree`] from a root down to a fixed number of levels.
///
/// # Semantics
///
/// - The root is level 1; nodes at level `max_depth` are recorded but their
///   children are not visited
/// - Nodes are visited breadth-first, so a node reachable through several
///   paths is recorded once, at its shallowest level
/// - The rule is consulted for every visited node; its slots are recorded
///   but never expanded
/// - Nodes without regular or terminal slots produce no [`Visit`]
///
/// The walk only reads the tree. Any error from the tree or the rule aborts
/// it, so callers can compute the full result before writing anything.
#[derive(Clone, Debug)]
pub struct Walker<R = NoRule> {
    max_depth: usize,
    rule: R,
}

impl Walker<NoRule> {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            rule: NoRule,
        }
    }
}

impl<R> Walker<R> {
    /// Replaces the special-case rule.
    pub fn with_rule<R2>(self, rule: R2) -> Walker<R2> {
        Walker {
            max_depth: self.max_depth,
            rule,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Collects the visits reachable from `root`, in breadth-first order.
    pub fn walk<T>(&self, tree: &T, root: T::Id) -> Result<Vec<Visit<T::Id>>, T::Error>
    where
        T: SlotTree + ?Sized,
        R: Rule<T>,
    {
        let mut visits = Vec::new();
        if self.max_depth == 0 {
            return Ok(visits);
        }

        let mut seen = HashSet::new();
        seen.insert(root.clone());
        let mut queue = VecDeque::from([(root, 1usize)]);

        while let Some((node, depth)) = queue.pop_front() {
            let slots = tree.slots(&node)?;
            let terminal = self.rule.terminal_slots(tree, &node)?;

            if depth < self.max_depth {
                for child in slots.iter().flat_map(|slot| slot.allowed.iter()) {
                    if seen.insert(child.clone()) {
                        queue.push_back((child.clone(), depth + 1));
                    }
                }
            }

            if !slots.is_empty() || !terminal.is_empty() {
                visits.push(Visit {
                    node,
                    depth,
                    slots,
                    terminal,
                });
            }
        }

        Ok(visits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Adjacency table: node -> [(slot name, children)].
    struct Table(HashMap<&'static str, Vec<(&'static str, Vec<&'static str>)>>);

    impl SlotTree for Table {
        type Id = &'static str;
        type Error = String;

        fn slots(&self, node: &&'static str) -> Result<Vec<Slot<&'static str>>, String> {
            let entries = self
                .0
                .get(node)
                .ok_or_else(|| format!("unknown node {node}"))?;
            Ok(entries
                .iter()
                .map(|(name, children)| Slot::new(*name, children.clone()))
                .collect())
        }
    }

    /// Linear chain n1 -> n2 -> ... -> n6, one slot per link.
    fn chain() -> Table {
        let mut nodes = HashMap::new();
        nodes.insert("n1", vec![("s1", vec!["n2"])]);
        nodes.insert("n2", vec![("s2", vec!["n3"])]);
        nodes.insert("n3", vec![("s3", vec!["n4"])]);
        nodes.insert("n4", vec![("s4", vec!["n5"])]);
        nodes.insert("n5", vec![("s5", vec!["n6"])]);
        nodes.insert("n6", vec![]);
        Table(nodes)
    }

    #[test]
    fn stops_at_max_depth() {
        let visits = Walker::new(4).walk(&chain(), "n1").unwrap();
        let nodes: Vec<_> = visits.iter().map(|visit| (visit.node, visit.depth)).collect();
        assert_eq!(nodes, vec![("n1", 1), ("n2", 2), ("n3", 3), ("n4", 4)]);
    }

    #[test]
    fn zero_depth_visits_nothing() {
        assert!(Walker::new(0).walk(&chain(), "n1").unwrap().is_empty());
    }

    #[test]
    fn shared_children_recorded_once_at_shallowest_level() {
        let mut nodes = HashMap::new();
        nodes.insert("root", vec![("a", vec!["x", "y"])]);
        nodes.insert("x", vec![("inner", vec!["y"])]);
        nodes.insert("y", vec![("leaf", vec![])]);
        let visits = Walker::new(4).walk(&Table(nodes), "root").unwrap();

        let y: Vec<_> = visits.iter().filter(|visit| visit.node == "y").collect();
        assert_eq!(y.len(), 1);
        assert_eq!(y[0].depth, 2);
    }

    #[test]
    fn rule_slots_are_not_expanded() {
        let rule = |_: &Table, node: &&'static str| -> Result<Vec<Slot<&'static str>>, String> {
            if *node == "n2" {
                Ok(vec![Slot::new("extra", vec!["unknown"])])
            } else {
                Ok(Vec::new())
            }
        };
        let visits = Walker::new(2).with_rule(rule).walk(&chain(), "n1").unwrap();

        assert_eq!(visits.len(), 2);
        assert_eq!(visits[1].terminal, vec![Slot::new("extra", vec!["unknown"])]);
    }

    #[test]
    fn unknown_child_aborts_walk() {
        let mut nodes = HashMap::new();
        nodes.insert("root", vec![("a", vec!["ghost"])]);
        let err = Walker::new(4).walk(&Table(nodes), "root").unwrap_err();
        assert_eq!(err, "unknown node ghost");
    }
}
