//! The shared namespace tree.
//!
//! A name tree rooted at a fixed prefix. The coordinator merges fetched
//! names into it; local application logic inserts into it too. Insertion is
//! idempotent, which is what makes remote merges safe to replay.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::core::{Name, NameComponent, NameError};

/// One node of the namespace tree. Children are kept sorted by component.
#[derive(Debug, Default)]
struct Node {
    children: BTreeMap<NameComponent, Node>,
}

impl Node {
    fn count(&self) -> usize {
        1 + self.children.values().map(Node::count).sum::<usize>()
    }
}

/// A shared namespace: the tree of all names known under a root prefix.
///
/// Nodes are created on insert and never removed. Re-inserting a known name
/// is a no-op, so merging the same fetched name twice leaves the tree
/// unchanged.
#[derive(Debug)]
pub struct Namespace {
    prefix: Name,
    root: Node,
}

impl Namespace {
    /// Create an empty namespace rooted at `prefix`.
    pub fn new(prefix: Name) -> Self {
        Self {
            prefix,
            root: Node::default(),
        }
    }

    /// The root prefix all inserted names must fall under.
    pub fn prefix(&self) -> &Name {
        &self.prefix
    }

    /// Insert a full name, creating any missing intermediate nodes.
    ///
    /// Returns `true` if the insert created at least one new node, `false`
    /// if the name was already present. Names outside the root prefix are
    /// rejected.
    pub fn insert(&mut self, name: &Name) -> Result<bool, NameError> {
        let suffix = name
            .suffix_after(&self.prefix)
            .ok_or_else(|| NameError::OutsidePrefix {
                name: name.to_string(),
                prefix: self.prefix.to_string(),
            })?;

        let mut node = &mut self.root;
        let mut created = false;
        for component in suffix {
            node = match node.children.entry(component.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    created = true;
                    entry.insert(Node::default())
                }
            };
        }
        Ok(created)
    }

    /// Check whether a full name is present.
    pub fn contains(&self, name: &Name) -> bool {
        let Some(suffix) = name.suffix_after(&self.prefix) else {
            return false;
        };
        let mut node = &self.root;
        for component in suffix {
            match node.children.get(component) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// The sorted components of the children directly under `name`,
    /// or `None` if `name` is not in the tree.
    pub fn child_components(&self, name: &Name) -> Option<Vec<NameComponent>> {
        let suffix = name.suffix_after(&self.prefix)?;
        let mut node = &self.root;
        for component in suffix {
            node = node.children.get(component)?;
        }
        Some(node.children.keys().cloned().collect())
    }

    /// Total number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// Check whether only the root exists.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace() -> Namespace {
        Namespace::new(Name::parse("/app/slides").unwrap())
    }

    #[test]
    fn test_insert_creates_chain() {
        let mut ns = namespace();
        let name = Name::parse("/app/slides/alice/doc/1").unwrap();
        assert!(ns.insert(&name).unwrap());
        assert!(ns.contains(&name));
        assert!(ns.contains(&Name::parse("/app/slides/alice").unwrap()));
        // root + alice + doc + 1
        assert_eq!(ns.len(), 4);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut ns = namespace();
        let name = Name::parse("/app/slides/alice/doc").unwrap();
        assert!(ns.insert(&name).unwrap());
        assert!(!ns.insert(&name).unwrap());
        assert_eq!(ns.len(), 3);
    }

    #[test]
    fn test_insert_prefix_of_existing_is_noop() {
        let mut ns = namespace();
        ns.insert(&Name::parse("/app/slides/alice/doc").unwrap())
            .unwrap();
        let created = ns
            .insert(&Name::parse("/app/slides/alice").unwrap())
            .unwrap();
        assert!(!created);
    }

    #[test]
    fn test_insert_outside_prefix_rejected() {
        let mut ns = namespace();
        let err = ns
            .insert(&Name::parse("/other/root/x").unwrap())
            .unwrap_err();
        assert!(matches!(err, NameError::OutsidePrefix { .. }));
    }

    #[test]
    fn test_child_components_sorted() {
        let mut ns = namespace();
        ns.insert(&Name::parse("/app/slides/charlie").unwrap())
            .unwrap();
        ns.insert(&Name::parse("/app/slides/alice").unwrap())
            .unwrap();
        ns.insert(&Name::parse("/app/slides/bob").unwrap()).unwrap();

        let prefix = ns.prefix().clone();
        let children = ns.child_components(&prefix).unwrap();
        let names: Vec<_> = children.iter().map(|c| c.as_str().to_string()).collect();
        assert_eq!(names, ["alice", "bob", "charlie"]);
    }

    #[test]
    fn test_contains_absent() {
        let ns = namespace();
        assert!(!ns.contains(&Name::parse("/app/slides/ghost").unwrap()));
        assert!(!ns.contains(&Name::parse("/elsewhere").unwrap()));
    }
}
