//! Order queries: successor, predecessor, range extrema, closest match
//!
//! All of these are computed from tree shape on demand. The tree carries
//! no threaded order links: cached successor/predecessor pointers go stale
//! the moment a rotation moves nodes, while the ancestor walk reads the
//! links that rotations do keep consistent.
//!
//! Every query here is a guided descent or an ancestor walk, O(log n).

use crate::key::SetKey;

use super::node::{NodeId, NIL};
use super::OrdSet;

/// Which neighbour wins a closest-match tie.
///
/// When a probe value sits exactly halfway between its neighbours below
/// and above, either is a defensible answer; [`OrdSet::closest_match`]
/// uses [`TieBreak::Upper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Prefer the smaller neighbour.
    Lower,

    /// Prefer the larger neighbour.
    #[default]
    Upper,
}

impl<K: SetKey> OrdSet<K> {
    /// Smallest element strictly greater than `after`, with `None` meaning
    /// "before everything": `successor(None)` is the minimum, and the
    /// successor of the maximum is `None`.
    ///
    /// `after` does not need to be in the set; the answer is the smallest
    /// element above it either way. Calling this repeatedly, feeding each
    /// answer back in, enumerates the whole set in ascending order.
    pub fn successor(&self, after: Option<K>) -> Option<K> {
        match after {
            None => self.min(),
            Some(key) => self.strictly_above(key),
        }
    }

    /// Largest element strictly smaller than `before`; mirror of
    /// [`successor`](Self::successor). `predecessor(None)` is the maximum,
    /// the predecessor of the minimum is `None`, and repeated calls
    /// enumerate the set in descending order.
    pub fn predecessor(&self, before: Option<K>) -> Option<K> {
        match before {
            None => self.max(),
            Some(key) => self.strictly_below(key),
        }
    }

    /// Smallest element in `[low, high]`, or `None` if the range is empty
    /// or inverted (`low > high`).
    ///
    /// Bounded-successor descent: find the smallest element `>= low`, then
    /// check it against `high`. Subtrees outside the range are pruned, so
    /// this is O(log n), never a scan.
    pub fn min_in_range(&self, low: K, high: K) -> Option<K> {
        if low > high {
            return None;
        }
        self.first_at_least(low).filter(|&v| v <= high)
    }

    /// Largest element in `[low, high]`; mirror of
    /// [`min_in_range`](Self::min_in_range).
    pub fn max_in_range(&self, low: K, high: K) -> Option<K> {
        if low > high {
            return None;
        }
        self.last_at_most(high).filter(|&v| v >= low)
    }

    /// Element closest to `key` by absolute distance; `key` itself when
    /// present, `None` only when the set is empty.
    ///
    /// Ties between the neighbours below and above go to the larger value
    /// ([`TieBreak::Upper`]); use
    /// [`closest_match_with`](Self::closest_match_with) to choose.
    pub fn closest_match(&self, key: K) -> Option<K> {
        self.closest_match_with(key, TieBreak::default())
    }

    /// [`closest_match`](Self::closest_match) with an explicit tie-break
    /// policy.
    pub fn closest_match_with(&self, key: K, tie: TieBreak) -> Option<K> {
        if self.contains(key) {
            return Some(key);
        }

        let below = self.strictly_below(key);
        let above = self.strictly_above(key);
        match (below, above) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(a)) => Some(a),
            (Some(b), Some(a)) => {
                let down = key.distance(b);
                let up = key.distance(a);
                if down < up {
                    Some(b)
                } else if up < down {
                    Some(a)
                } else {
                    match tie {
                        TieBreak::Lower => Some(b),
                        TieBreak::Upper => Some(a),
                    }
                }
            }
        }
    }

    /// Smallest element `> key`, present or not.
    ///
    /// If `key` is in the tree, this is the textbook node successor
    /// (minimum of the right subtree, else the first ancestor reached
    /// through a left link). If it is absent, the insertion parent found
    /// by the locator is itself one of the two neighbours of the gap.
    fn strictly_above(&self, key: K) -> Option<K> {
        use super::locate::Locate;

        match self.locate(key) {
            Locate::Empty => None,
            Locate::Found(node) => self.node_key(self.node_successor(node)),
            Locate::Missing { parent } => {
                if key < self.key(parent) {
                    Some(self.key(parent))
                } else {
                    self.node_key(self.node_successor(parent))
                }
            }
        }
    }

    /// Largest element `< key`; mirror of
    /// [`strictly_above`](Self::strictly_above).
    fn strictly_below(&self, key: K) -> Option<K> {
        use super::locate::Locate;

        match self.locate(key) {
            Locate::Empty => None,
            Locate::Found(node) => self.node_key(self.node_predecessor(node)),
            Locate::Missing { parent } => {
                if key > self.key(parent) {
                    Some(self.key(parent))
                } else {
                    self.node_key(self.node_predecessor(parent))
                }
            }
        }
    }

    /// Smallest element `>= low` by guided descent.
    fn first_at_least(&self, low: K) -> Option<K> {
        let mut current = self.root;
        let mut best = None;
        while current != NIL {
            let at = self.key(current);
            if at < low {
                current = self.right(current);
            } else {
                // Candidate; anything smaller still in range is to the left.
                best = Some(at);
                current = self.left(current);
            }
        }
        best
    }

    /// Largest element `<= high` by guided descent.
    fn last_at_most(&self, high: K) -> Option<K> {
        let mut current = self.root;
        let mut best = None;
        while current != NIL {
            let at = self.key(current);
            if at > high {
                current = self.left(current);
            } else {
                best = Some(at);
                current = self.right(current);
            }
        }
        best
    }

    /// Successor of a node in tree order, or [`NIL`].
    fn node_successor(&self, node: NodeId) -> NodeId {
        if self.right(node) != NIL {
            return self.subtree_min(self.right(node));
        }

        // Climb until we arrive from a left child; that ancestor is next.
        let mut child = node;
        let mut ancestor = self.parent(node);
        while ancestor != NIL && child == self.right(ancestor) {
            child = ancestor;
            ancestor = self.parent(ancestor);
        }
        ancestor
    }

    /// Predecessor of a node in tree order, or [`NIL`].
    fn node_predecessor(&self, node: NodeId) -> NodeId {
        if self.left(node) != NIL {
            return self.subtree_max(self.left(node));
        }

        let mut child = node;
        let mut ancestor = self.parent(node);
        while ancestor != NIL && child == self.left(ancestor) {
            child = ancestor;
            ancestor = self.parent(ancestor);
        }
        ancestor
    }

    /// Leftmost node of the subtree rooted at `node` (must be real).
    pub(super) fn subtree_min(&self, node: NodeId) -> NodeId {
        debug_assert_ne!(node, NIL);
        let mut current = node;
        while self.left(current) != NIL {
            current = self.left(current);
        }
        current
    }

    /// Rightmost node of the subtree rooted at `node` (must be real).
    pub(super) fn subtree_max(&self, node: NodeId) -> NodeId {
        debug_assert_ne!(node, NIL);
        let mut current = node;
        while self.right(current) != NIL {
            current = self.right(current);
        }
        current
    }

    /// Key of a possibly-sentinel handle.
    fn node_key(&self, node: NodeId) -> Option<K> {
        if node == NIL {
            None
        } else {
            Some(self.key(node))
        }
    }
}
