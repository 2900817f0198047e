//! Value location by guided descent
//!
//! One pure read routine serves membership tests, insertion-point
//! discovery, and the gap cases of the order queries: descend from the
//! root comparing against each node, and stop either on the node holding
//! the value or on the last real node before the sentinel.

use crate::key::SetKey;

use super::node::{NodeId, NIL};
use super::OrdSet;

/// Outcome of locating a value in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Locate {
    /// The value is present at this node.
    Found(NodeId),

    /// The value is absent; it would be attached as a new leaf under
    /// `parent` (on the side given by comparing against `parent`'s key).
    Missing { parent: NodeId },

    /// The tree has no nodes at all.
    Empty,
}

impl<K: SetKey> OrdSet<K> {
    /// Locate `key`, or the node under which it would be inserted.
    ///
    /// Never mutates; O(log n).
    pub(super) fn locate(&self, key: K) -> Locate {
        if self.root == NIL {
            return Locate::Empty;
        }

        let mut current = self.root;
        loop {
            let at = self.key(current);
            let next = if key == at {
                return Locate::Found(current);
            } else if key < at {
                self.left(current)
            } else {
                self.right(current)
            };

            if next == NIL {
                return Locate::Missing { parent: current };
            }
            current = next;
        }
    }
}
