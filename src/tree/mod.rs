//! Red-black tree backing the ordered set
//!
//! The tree owns its nodes through a `Vec` arena; handles are `u32`
//! indices, with slot 0 reserved for the shared BLACK sentinel. Cached
//! minimum and maximum make the extrema O(1); every other query runs by
//! guided descent from the root.
//!
//! Submodules split the core along its algorithms: locating a value,
//! rebalancing after insertion, order queries, and in-order traversal.

mod balance;
mod locate;
mod node;
mod order;
mod traversal;
mod validate;

pub use order::TieBreak;

use crate::key::SetKey;
use crate::OrdSetError;

use locate::Locate;
use node::{Color, Node, NodeId, NIL};

/// Ordered set of unique scalar values.
///
/// Backed by a red-black tree, so membership, insertion, order queries
/// (successor/predecessor), range lookups, and closest-match all run in
/// O(log n); the cached extrema are O(1). Duplicate inserts are no-ops.
///
/// # Example
///
/// ```
/// use ordset::OrdSet;
///
/// let mut set = OrdSet::new();
/// set.insert(30u64)?;
/// set.insert(10)?;
/// set.insert(20)?;
///
/// assert!(set.contains(20));
/// assert_eq!(set.min(), Some(10));
/// assert_eq!(set.successor(Some(10)), Some(20));
/// assert_eq!(set.min_in_range(15, 25), Some(20));
/// # Ok::<(), ordset::OrdSetError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OrdSet<K: SetKey> {
    /// Node arena; slot 0 is the sentinel.
    nodes: Vec<Node<K>>,

    /// Root handle, [`NIL`] when the set is empty.
    root: NodeId,

    /// Cached smallest element.
    min: Option<K>,

    /// Cached largest element.
    max: Option<K>,

    /// Number of elements.
    len: usize,
}

impl<K: SetKey> OrdSet<K> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            root: NIL,
            min: None,
            max: None,
            len: 0,
        }
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest element, or `None` when empty. O(1).
    pub fn min(&self) -> Option<K> {
        self.min
    }

    /// Largest element, or `None` when empty. O(1).
    pub fn max(&self) -> Option<K> {
        self.max
    }

    /// Whether `key` is in the set. O(log n).
    pub fn contains(&self, key: K) -> bool {
        matches!(self.locate(key), Locate::Found(_))
    }

    /// Insert `key`, keeping the set duplicate-free.
    ///
    /// Returns `Ok(true)` if the key was newly inserted and `Ok(false)` if
    /// it was already present (the structure is left untouched). The only
    /// failure is exhaustion of node storage, surfaced as a recoverable
    /// [`OrdSetError`] rather than an abort.
    pub fn insert(&mut self, key: K) -> Result<bool, OrdSetError> {
        match self.locate(key) {
            Locate::Found(_) => Ok(false),
            Locate::Empty => {
                let id = self.alloc_node(key, NIL)?;
                // A lone root is BLACK; no fixup needed.
                self.nodes[id as usize].color = Color::Black;
                self.root = id;
                self.min = Some(key);
                self.max = Some(key);
                self.len = 1;
                Ok(true)
            }
            Locate::Missing { parent } => {
                let id = self.alloc_node(key, parent)?;
                if key < self.key(parent) {
                    self.nodes[parent as usize].left = id;
                } else {
                    self.nodes[parent as usize].right = id;
                }

                // Independent extrema checks: a new value can be a new min
                // or a new max, and on a one-element set either may apply.
                if self.max.map_or(true, |m| key > m) {
                    self.max = Some(key);
                }
                if self.min.map_or(true, |m| key < m) {
                    self.min = Some(key);
                }

                self.len += 1;
                self.insert_fixup(id);
                Ok(true)
            }
        }
    }

    /// Allocate an arena slot for a fresh RED node.
    ///
    /// Storage growth goes through `try_reserve` so an out-of-memory
    /// condition comes back as an error instead of aborting the process.
    fn alloc_node(&mut self, key: K, parent: NodeId) -> Result<NodeId, OrdSetError> {
        if self.nodes.len() >= NodeId::MAX as usize {
            return Err(OrdSetError::HandleSpaceExhausted(self.nodes.len()));
        }
        self.nodes.try_reserve(1)?;
        let id = self.nodes.len() as NodeId;
        self.nodes.push(Node::new(key, parent));
        Ok(id)
    }

    // Link accessors, shared by the balancing and query submodules.

    #[inline]
    fn key(&self, id: NodeId) -> K {
        self.nodes[id as usize].key
    }

    #[inline]
    fn left(&self, id: NodeId) -> NodeId {
        self.nodes[id as usize].left
    }

    #[inline]
    fn right(&self, id: NodeId) -> NodeId {
        self.nodes[id as usize].right
    }

    #[inline]
    fn parent(&self, id: NodeId) -> NodeId {
        self.nodes[id as usize].parent
    }

    #[inline]
    fn color(&self, id: NodeId) -> Color {
        self.nodes[id as usize].color
    }

    #[inline]
    fn set_color(&mut self, id: NodeId, color: Color) {
        debug_assert_ne!(id, NIL, "the sentinel is never recolored");
        self.nodes[id as usize].color = color;
    }
}

impl<K: SetKey> Default for OrdSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_reports_nothing() {
        let set = OrdSet::<u64>::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
        assert!(!set.contains(0));
    }

    #[test]
    fn insert_and_contains() {
        let mut set = OrdSet::new();
        for key in [10u64, 20, 5, 15] {
            assert_eq!(set.insert(key), Ok(true));
        }
        assert_eq!(set.len(), 4);

        for key in [10u64, 20, 5, 15] {
            assert!(set.contains(key));
        }
        assert!(!set.contains(0));
        assert!(!set.contains(25));
    }

    #[test]
    fn duplicate_insert_is_a_noop() {
        let mut set = OrdSet::new();
        assert_eq!(set.insert(7u64), Ok(true));
        assert_eq!(set.insert(7), Ok(false));
        assert_eq!(set.len(), 1);
        assert_eq!(set.min(), Some(7));
        assert_eq!(set.max(), Some(7));

        let mut seen = Vec::new();
        set.for_each(|v| seen.push(v));
        assert_eq!(seen, vec![7]);
    }

    #[test]
    fn extrema_track_inserts() {
        let mut set = OrdSet::new();
        set.insert(50u64).unwrap();
        assert_eq!((set.min(), set.max()), (Some(50), Some(50)));

        set.insert(10).unwrap();
        assert_eq!((set.min(), set.max()), (Some(10), Some(50)));

        set.insert(90).unwrap();
        assert_eq!((set.min(), set.max()), (Some(10), Some(90)));

        // Interior values leave the extrema alone.
        set.insert(40).unwrap();
        assert_eq!((set.min(), set.max()), (Some(10), Some(90)));
    }

    #[test]
    fn dropping_an_empty_set_is_fine() {
        let set = OrdSet::<u64>::new();
        drop(set);
    }
}
