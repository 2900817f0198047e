//! In-order traversal
//!
//! Visits every element in ascending order with an explicit stack, so the
//! walk never recurses and deep trees cannot exhaust the call stack. The
//! stack holds at most one handle per tree level.

use crate::key::SetKey;

use super::node::NIL;
use super::OrdSet;

impl<K: SetKey> OrdSet<K> {
    /// Visit every element in ascending order.
    ///
    /// `visit` runs synchronously on the caller's thread; the set cannot
    /// be mutated while the walk borrows it. O(n) total, O(log n) scratch.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(K),
    {
        let mut stack = Vec::new();
        let mut current = self.root;

        loop {
            while current != NIL {
                stack.push(current);
                current = self.left(current);
            }
            match stack.pop() {
                Some(node) => {
                    visit(self.key(node));
                    current = self.right(node);
                }
                None => break,
            }
        }
    }

    /// Collect the elements in ascending order.
    ///
    /// Convenience over [`for_each`](Self::for_each) for tests and the CLI
    /// harness; the set itself exposes no iterator object.
    pub fn to_vec(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.len());
        self.for_each(|key| out.push(key));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_inserts_walk_in_order() {
        let mut set = OrdSet::new();
        for key in 0..10u64 {
            set.insert(key).unwrap();
        }
        assert_eq!(set.to_vec(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn mixed_insert_order_still_walks_sorted() {
        let mut set = OrdSet::new();
        for key in (11..=20u64).rev() {
            set.insert(key).unwrap();
        }
        for key in 0..10u64 {
            set.insert(key).unwrap();
        }

        let expected: Vec<u64> = (0..10).chain(11..=20).collect();
        assert_eq!(set.to_vec(), expected);
    }

    #[test]
    fn empty_set_visits_nothing() {
        let set = OrdSet::<u64>::new();
        let mut count = 0;
        set.for_each(|_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn traversal_matches_successor_enumeration() {
        let mut set = OrdSet::new();
        for key in [50u64, 3, 78, 12, 64, 9, 31] {
            set.insert(key).unwrap();
        }

        let mut by_successor = Vec::new();
        let mut cursor = None;
        while let Some(v) = set.successor(cursor) {
            by_successor.push(v);
            cursor = Some(v);
        }
        assert_eq!(set.to_vec(), by_successor);
    }
}
