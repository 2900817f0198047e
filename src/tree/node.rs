//! Red-black tree nodes and the shared sentinel
//!
//! Nodes live in a `Vec` arena and link to each other through `u32`
//! handles. Slot 0 always holds the one BLACK sentinel node of the tree,
//! so "no child" and "no parent" are the handle [`NIL`] rather than an
//! `Option` — rotation and fixup can read a color or a child slot without
//! branching on absence.

use crate::key::SetKey;

/// Arena handle of a node.
pub(crate) type NodeId = u32;

/// Handle of the sentinel node (arena slot 0).
///
/// Stands in for every absent subtree and for the root's missing parent.
/// The sentinel is BLACK and never mutated after construction.
pub(crate) const NIL: NodeId = 0;

/// Node color for red-black balancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// A tree node: one element plus its links.
///
/// Child links are the owning edges of the tree; the parent link is a plain
/// back-reference used only while navigating during rotation and fixup.
#[derive(Debug, Clone)]
pub(crate) struct Node<K: SetKey> {
    /// Element stored at this node (key and payload in one).
    pub key: K,

    /// Left subtree, or [`NIL`].
    pub left: NodeId,

    /// Right subtree, or [`NIL`].
    pub right: NodeId,

    /// Parent node, or [`NIL`] for the root.
    pub parent: NodeId,

    /// RED on creation; fixup recolors as needed.
    pub color: Color,
}

impl<K: SetKey> Node<K> {
    /// Fresh RED leaf holding `key`, attached under `parent`.
    pub fn new(key: K, parent: NodeId) -> Self {
        Self {
            key,
            left: NIL,
            right: NIL,
            parent,
            color: Color::Red,
        }
    }

    /// The immutable sentinel occupying arena slot 0.
    ///
    /// Its key is never compared against; only its BLACK color and its
    /// handle identity matter.
    pub fn sentinel() -> Self {
        Self {
            key: K::default(),
            left: NIL,
            right: NIL,
            parent: NIL,
            color: Color::Black,
        }
    }
}
