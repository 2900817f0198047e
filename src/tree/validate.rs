//! Structural invariant checks
//!
//! Test support: verifies the red-black properties, the BST ordering, the
//! cached extrema, and the parent-link consistency of the whole tree.
//! None of this runs on the query paths.

use crate::key::SetKey;

use super::node::{Color, NodeId, NIL};
use super::OrdSet;

impl<K: SetKey> OrdSet<K> {
    /// Check every structural invariant of the tree.
    ///
    /// Valid means: the root is BLACK with no parent, no RED node has a
    /// RED child, every root-to-sentinel path carries the same number of
    /// BLACK nodes, the in-order walk is strictly ascending and matches
    /// `len`, the cached min/max equal the leftmost/rightmost values, and
    /// every child's parent link points back at its parent.
    pub fn is_valid(&self) -> bool {
        if self.root == NIL {
            return self.min().is_none() && self.max().is_none() && self.len() == 0;
        }

        if self.color(self.root) != Color::Black || self.parent(self.root) != NIL {
            return false;
        }
        if !self.no_red_red(self.root) {
            return false;
        }

        let expected = self.leftmost_black_height();
        if !self.black_height_matches(self.root, expected, 0) {
            return false;
        }

        let elements = self.to_vec();
        if elements.len() != self.len() {
            return false;
        }
        if !elements.windows(2).all(|pair| pair[0] < pair[1]) {
            return false;
        }
        if self.min() != elements.first().copied() || self.max() != elements.last().copied() {
            return false;
        }

        self.links_consistent(self.root, NIL)
    }

    /// Number of nodes on the longest root-to-leaf path.
    ///
    /// A valid red-black tree with n nodes stays within 2*log2(n+1).
    pub fn height(&self) -> usize {
        self.depth_below(self.root)
    }

    fn depth_below(&self, node: NodeId) -> usize {
        if node == NIL {
            return 0;
        }
        1 + self
            .depth_below(self.left(node))
            .max(self.depth_below(self.right(node)))
    }

    /// No RED node may have a RED child.
    fn no_red_red(&self, node: NodeId) -> bool {
        if node == NIL {
            return true;
        }

        if self.color(node) == Color::Red
            && (self.color(self.left(node)) == Color::Red
                || self.color(self.right(node)) == Color::Red)
        {
            return false;
        }

        self.no_red_red(self.left(node)) && self.no_red_red(self.right(node))
    }

    /// BLACK count along the leftmost path, used as the reference height.
    fn leftmost_black_height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;
        while current != NIL {
            if self.color(current) == Color::Black {
                height += 1;
            }
            current = self.left(current);
        }
        height
    }

    /// Every path from `node` down to a sentinel must accumulate exactly
    /// `expected` BLACK nodes.
    fn black_height_matches(&self, node: NodeId, expected: usize, acc: usize) -> bool {
        if node == NIL {
            return acc == expected;
        }

        let acc = if self.color(node) == Color::Black {
            acc + 1
        } else {
            acc
        };

        self.black_height_matches(self.left(node), expected, acc)
            && self.black_height_matches(self.right(node), expected, acc)
    }

    /// Child links and parent back-references must agree.
    fn links_consistent(&self, node: NodeId, parent: NodeId) -> bool {
        if node == NIL {
            return true;
        }
        if self.parent(node) != parent {
            return false;
        }
        self.links_consistent(self.left(node), node)
            && self.links_consistent(self.right(node), node)
    }
}
