//! Red-black invariant maintenance.
//!
//! Every primitive takes ownership of the local root it restructures and hands
//! back the (possibly different) node that now roots the subtree. Sizes are
//! recomputed for every node whose children change.

use crate::node::{Color, Node, is_left_red, is_red};

type Tree<K, V> = Box<Node<K, V>>;

/// Turns a right-leaning red link into a left-leaning one.
pub(crate) fn rotate_left<K, V>(mut h: Tree<K, V>) -> Tree<K, V> {
    debug_assert!(is_red(&h.right), "rotate_left requires a red right link");
    let mut x = h.right.take().expect("rotate_left requires right");
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    x.size = h.size;
    h.update_size();
    x.left = Some(h);
    x
}

pub(crate) fn rotate_right<K, V>(mut h: Tree<K, V>) -> Tree<K, V> {
    debug_assert!(is_red(&h.left), "rotate_right requires a red left link");
    let mut x = h.left.take().expect("rotate_right requires left");
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    x.size = h.size;
    h.update_size();
    x.right = Some(h);
    x
}

/// Splits a temporary 4-node (or merges three 2-nodes into one) by toggling
/// the colors of `h` and both of its children.
pub(crate) fn flip_colors<K, V>(h: &mut Node<K, V>) {
    debug_assert!(
        h.left.is_some() && h.right.is_some(),
        "flip_colors requires both children"
    );
    h.color = h.color.flip();
    if let Some(left) = h.left.as_deref_mut() {
        left.color = left.color.flip();
    }
    if let Some(right) = h.right.as_deref_mut() {
        right.color = right.color.flip();
    }
}

/// Makes `h.left` or one of its children red, borrowing from the right
/// sibling when it can spare a node.
///
/// Requires `h` red with `h.left` and `h.left.left` black.
pub(crate) fn move_red_left<K, V>(mut h: Tree<K, V>) -> Tree<K, V> {
    debug_assert!(h.is_red() && !is_red(&h.left) && !is_left_red(&h.left));
    flip_colors(&mut h);
    if is_left_red(&h.right) {
        let right = h.right.take().expect("move_red_left requires right");
        h.right = Some(rotate_right(right));
        h = rotate_left(h);
        flip_colors(&mut h);
    }
    h
}

/// Mirror of [`move_red_left`].
///
/// Requires `h` red with `h.right` and `h.right.left` black.
pub(crate) fn move_red_right<K, V>(mut h: Tree<K, V>) -> Tree<K, V> {
    debug_assert!(h.is_red() && !is_red(&h.right) && !is_left_red(&h.right));
    flip_colors(&mut h);
    if is_left_red(&h.left) {
        h = rotate_right(h);
        flip_colors(&mut h);
    }
    h
}

/// Restores the local invariants on the way back up a recursive descent,
/// assuming both child subtrees already satisfy them.
pub(crate) fn balance<K, V>(mut h: Tree<K, V>) -> Tree<K, V> {
    if is_red(&h.right) && !is_red(&h.left) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && is_left_red(&h.left) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        flip_colors(&mut h);
    }
    h.update_size();
    h
}
