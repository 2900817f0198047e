//! Rotations and post-insert fixup
//!
//! The two rotations are the standard constant-time restructurings; fixup
//! is the ascending repair loop that restores the red-black invariants
//! after a RED leaf has been attached. Both lean on the sentinel: an
//! absent uncle reads as BLACK and an absent parent reads as BLACK, so
//! the loop needs no absence branches.

use crate::key::SetKey;

use super::node::{Color, NodeId, NIL};
use super::OrdSet;

impl<K: SetKey> OrdSet<K> {
    /// Rotate left around `x`; `x`'s right child takes its place.
    ///
    /// `x.right` must be a real node. If `x` was the root, its right child
    /// becomes the new root.
    fn rotate_left(&mut self, x: NodeId) {
        let y = self.right(x);
        debug_assert_ne!(y, NIL, "rotate_left needs a real right child");

        let y_left = self.left(y);
        self.nodes[x as usize].right = y_left;
        if y_left != NIL {
            self.nodes[y_left as usize].parent = x;
        }

        let x_parent = self.parent(x);
        self.nodes[y as usize].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if x == self.left(x_parent) {
            self.nodes[x_parent as usize].left = y;
        } else {
            self.nodes[x_parent as usize].right = y;
        }

        self.nodes[y as usize].left = x;
        self.nodes[x as usize].parent = y;
    }

    /// Rotate right around `x`; mirror of [`rotate_left`](Self::rotate_left).
    fn rotate_right(&mut self, x: NodeId) {
        let y = self.left(x);
        debug_assert_ne!(y, NIL, "rotate_right needs a real left child");

        let y_right = self.right(y);
        self.nodes[x as usize].left = y_right;
        if y_right != NIL {
            self.nodes[y_right as usize].parent = x;
        }

        let x_parent = self.parent(x);
        self.nodes[y as usize].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if x == self.right(x_parent) {
            self.nodes[x_parent as usize].right = y;
        } else {
            self.nodes[x_parent as usize].left = y;
        }

        self.nodes[y as usize].right = x;
        self.nodes[x as usize].parent = y;
    }

    /// Restore the red-black invariants after attaching the RED node `z`.
    ///
    /// While `z`'s parent is RED: a RED uncle means recolor and move two
    /// levels up; a BLACK uncle means at most two rotations, which also
    /// ends the loop. The root is forced BLACK on the way out.
    pub(super) fn insert_fixup(&mut self, mut z: NodeId) {
        while self.color(self.parent(z)) == Color::Red {
            let parent = self.parent(z);
            // A RED parent is never the root, so the grandparent is real.
            let grandparent = self.parent(parent);

            if parent == self.left(grandparent) {
                let uncle = self.right(grandparent);
                if self.color(uncle) == Color::Red {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    z = grandparent;
                } else {
                    if z == self.right(parent) {
                        // Inner child: rotate to the outer position first.
                        z = parent;
                        self.rotate_left(z);
                    }
                    let parent = self.parent(z);
                    let grandparent = self.parent(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.left(grandparent);
                if self.color(uncle) == Color::Red {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    z = grandparent;
                } else {
                    if z == self.left(parent) {
                        z = parent;
                        self.rotate_right(z);
                    }
                    let parent = self.parent(z);
                    let grandparent = self.parent(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }
}
