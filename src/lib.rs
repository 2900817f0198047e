//! # Ordered Set over a Red-Black Tree
//!
//! This library implements a dynamic ordered set of unique scalar values
//! with O(log n) membership and insertion and sorted-order traversal that
//! never sorts.
//!
//! ## Core Algorithm
//!
//! 1. **Balanced search tree**: red-black insertion fixup keeps the height
//!    within 2·log2(n+1)
//! 2. **Guided descent**: range and order queries prune subtrees outside
//!    their bounds, so they stay logarithmic
//! 3. **Cached extrema**: min and max are maintained on insert, O(1) reads
//! 4. **Arena nodes**: the tree owns its nodes through `u32` handles into a
//!    `Vec`, with a single shared BLACK sentinel in slot 0
//!
//! ## Usage Example
//!
//! ```
//! use ordset::OrdSet;
//!
//! let mut set = OrdSet::new();
//! for value in [20u64, 5, 12, 5] {
//!     set.insert(value)?; // duplicate 5 is a no-op
//! }
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.successor(Some(5)), Some(12));
//! assert_eq!(set.closest_match(11), Some(12));
//! # Ok::<(), ordset::OrdSetError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements a key component of the set
pub mod key; // Element trait (unsigned scalars)
pub mod tree; // Red-black tree: balancing, locating, order queries

// Re-exports for convenience
pub use key::SetKey;
pub use tree::{OrdSet, TieBreak};

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while growing a set.
///
/// Queries never fail; only insertion can, and only because node storage
/// could not grow. Callers may retry or shed load instead of aborting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrdSetError {
    /// The node arena could not reserve space for one more node.
    #[error("failed to reserve storage for a new node")]
    NodeAlloc(#[from] TryReserveError),

    /// The `u32` handle space is exhausted.
    #[error("node handle space exhausted ({0} slots in use)")]
    HandleSpaceExhausted(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_errors_are_values_not_aborts() {
        // The error type itself must be comparable and printable so
        // callers can branch on it.
        let err = OrdSetError::HandleSpaceExhausted(4_294_967_295);
        assert!(err.to_string().contains("handle space exhausted"));
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn reexports_compose() {
        let mut set: OrdSet<u32> = OrdSet::default();
        set.insert(3).unwrap();
        assert_eq!(set.closest_match_with(9, TieBreak::Lower), Some(3));
    }
}
