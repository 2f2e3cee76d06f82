//! Recursive insertion and deletion.
//!
//! Each function consumes the subtree it descends into and returns the new
//! subtree root; the caller reattaches it. None of them touch the color of the
//! overall root, which is the façade's job.

use std::cmp::Ordering;
use std::mem;

use crate::balance::{balance, move_red_left, move_red_right, rotate_right};
use crate::compare::Comparator;
use crate::node::{Link, Node, is_left_red, is_red};

/// Inserts `key`, overwriting the value of an equal key.
///
/// Returns the new subtree root and the replaced value, if any.
pub(crate) fn insert<K, V, C>(
    link: Link<K, V>,
    cmp: &C,
    key: K,
    value: V,
) -> (Box<Node<K, V>>, Option<V>)
where
    C: Comparator<K>,
{
    let Some(mut h) = link else {
        return (Node::new(key, value), None);
    };

    let old = match cmp.compare(&key, &h.key) {
        Ordering::Less => {
            let (left, old) = insert(h.left.take(), cmp, key, value);
            h.left = Some(left);
            old
        }
        Ordering::Greater => {
            let (right, old) = insert(h.right.take(), cmp, key, value);
            h.right = Some(right);
            old
        }
        Ordering::Equal => Some(mem::replace(&mut h.value, value)),
    };

    (balance(h), old)
}

/// Detaches the minimum node of the subtree.
///
/// Requires `h` or `h.left` to be red.
pub(crate) fn delete_min<K, V>(mut h: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    debug_assert!(h.is_red() || is_red(&h.left), "delete_min entered on a 2-node");
    if h.left.is_none() {
        debug_assert!(h.right.is_none());
        return (None, h);
    }
    if !is_red(&h.left) && !is_left_red(&h.left) {
        h = move_red_left(h);
    }
    let left = h.left.take().expect("delete_min requires left");
    let (left, min) = delete_min(left);
    h.left = left;
    (Some(balance(h)), min)
}

/// Detaches the maximum node of the subtree.
///
/// Requires `h` or one of its children to be red. After a borrowing
/// `move_red_right` the red link handed down may lean right.
pub(crate) fn delete_max<K, V>(mut h: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    debug_assert!(
        h.is_red() || is_red(&h.left) || is_red(&h.right),
        "delete_max entered on a 2-node"
    );
    if is_red(&h.left) {
        h = rotate_right(h);
    }
    if h.right.is_none() {
        debug_assert!(h.left.is_none());
        return (None, h);
    }
    if !is_red(&h.right) && !is_left_red(&h.right) {
        h = move_red_right(h);
    }
    let right = h.right.take().expect("delete_max requires right");
    let (right, max) = delete_max(right);
    h.right = right;
    (Some(balance(h)), max)
}

/// Removes `key`, which must be present in the subtree.
///
/// Returns the new subtree root and the removed entry.
pub(crate) fn remove<K, V, C>(mut h: Box<Node<K, V>>, cmp: &C, key: &K) -> (Link<K, V>, (K, V))
where
    C: Comparator<K>,
{
    let removed = if cmp.compare(key, &h.key) == Ordering::Less {
        if !is_red(&h.left) && !is_left_red(&h.left) {
            h = move_red_left(h);
        }
        let left = h.left.take().expect("remove: key missing from left subtree");
        let (left, removed) = remove(left, cmp, key);
        h.left = left;
        removed
    } else {
        if is_red(&h.left) {
            h = rotate_right(h);
        }
        if cmp.compare(key, &h.key) == Ordering::Equal && h.right.is_none() {
            debug_assert!(h.left.is_none());
            return (None, h.into_entry());
        }
        if !is_red(&h.right) && !is_left_red(&h.right) {
            h = move_red_right(h);
        }
        let right = h.right.take().expect("remove: key missing from right subtree");
        if cmp.compare(key, &h.key) == Ordering::Equal {
            let (right, successor) = delete_min(right);
            h.right = right;
            let (key, value) = successor.into_entry();
            (mem::replace(&mut h.key, key), mem::replace(&mut h.value, value))
        } else {
            let (right, removed) = remove(right, cmp, key);
            h.right = right;
            removed
        }
    };

    (Some(balance(h)), removed)
}
