//! Read-only queries on a subtree.

use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::node::{Link, Node, size};

pub(crate) fn find<'a, K, V, C>(link: &'a Link<K, V>, cmp: &C, key: &K) -> Option<&'a Node<K, V>>
where
    C: Comparator<K>,
{
    let mut cur = link.as_deref();
    while let Some(node) = cur {
        match cmp.compare(key, &node.key) {
            Ordering::Less => cur = node.left.as_deref(),
            Ordering::Greater => cur = node.right.as_deref(),
            Ordering::Equal => return Some(node),
        }
    }
    None
}

pub(crate) fn find_mut<'a, K, V, C>(
    link: &'a mut Link<K, V>,
    cmp: &C,
    key: &K,
) -> Option<&'a mut Node<K, V>>
where
    C: Comparator<K>,
{
    let mut cur = link.as_deref_mut();
    while let Some(node) = cur {
        match cmp.compare(key, &node.key) {
            Ordering::Less => cur = node.left.as_deref_mut(),
            Ordering::Greater => cur = node.right.as_deref_mut(),
            Ordering::Equal => return Some(node),
        }
    }
    None
}

pub(crate) fn contains<K, V, C>(link: &Link<K, V>, cmp: &C, key: &K) -> bool
where
    C: Comparator<K>,
{
    find(link, cmp, key).is_some()
}

pub(crate) fn min<K, V>(node: &Node<K, V>) -> &Node<K, V> {
    let mut cur = node;
    while let Some(left) = cur.left.as_deref() {
        cur = left;
    }
    cur
}

pub(crate) fn max<K, V>(node: &Node<K, V>) -> &Node<K, V> {
    let mut cur = node;
    while let Some(right) = cur.right.as_deref() {
        cur = right;
    }
    cur
}

/// Largest key `<= key`. An exact match returns immediately.
pub(crate) fn floor<'a, K, V, C>(link: &'a Link<K, V>, cmp: &C, key: &K) -> Option<&'a Node<K, V>>
where
    C: Comparator<K>,
{
    let node = link.as_deref()?;
    match cmp.compare(key, &node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => floor(&node.left, cmp, key),
        Ordering::Greater => floor(&node.right, cmp, key).or(Some(node)),
    }
}

/// Smallest key `>= key`. An exact match returns immediately.
pub(crate) fn ceiling<'a, K, V, C>(
    link: &'a Link<K, V>,
    cmp: &C,
    key: &K,
) -> Option<&'a Node<K, V>>
where
    C: Comparator<K>,
{
    let node = link.as_deref()?;
    match cmp.compare(key, &node.key) {
        Ordering::Equal => Some(node),
        Ordering::Greater => ceiling(&node.right, cmp, key),
        Ordering::Less => ceiling(&node.left, cmp, key).or(Some(node)),
    }
}

/// Number of keys strictly less than `key`.
pub(crate) fn rank<K, V, C>(link: &Link<K, V>, cmp: &C, key: &K) -> usize
where
    C: Comparator<K>,
{
    let mut rank = 0;
    let mut cur = link.as_deref();
    while let Some(node) = cur {
        match cmp.compare(key, &node.key) {
            Ordering::Less => cur = node.left.as_deref(),
            Ordering::Greater => {
                rank += 1 + size(&node.left);
                cur = node.right.as_deref();
            }
            Ordering::Equal => return rank + size(&node.left),
        }
    }
    rank
}

/// Node with exactly `index` smaller keys.
pub(crate) fn select<K, V>(link: &Link<K, V>, mut index: usize) -> Option<&Node<K, V>> {
    let mut cur = link.as_deref();
    while let Some(node) = cur {
        let left = size(&node.left);
        match index.cmp(&left) {
            Ordering::Less => cur = node.left.as_deref(),
            Ordering::Greater => {
                index -= left + 1;
                cur = node.right.as_deref();
            }
            Ordering::Equal => return Some(node),
        }
    }
    None
}

/// Nodes on the longest root-to-leaf path.
pub(crate) fn height<K, V>(link: &Link<K, V>) -> usize {
    match link.as_deref() {
        None => 0,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

/// Appends every node of the subtree to `out` in key order.
pub(crate) fn snapshot<'a, K, V>(link: &'a Link<K, V>, out: &mut Vec<&'a Node<K, V>>) {
    if let Some(node) = link.as_deref() {
        snapshot(&node.left, out);
        out.push(node);
        snapshot(&node.right, out);
    }
}

/// Moves every entry of the subtree into `out` in key order.
pub(crate) fn drain_into<K, V>(link: Link<K, V>, out: &mut Vec<(K, V)>) {
    if let Some(node) = link {
        let Node {
            key,
            value,
            left,
            right,
            ..
        } = *node;
        drain_into(left, out);
        out.push((key, value));
        drain_into(right, out);
    }
}

#[cfg(test)]
mod tests {
    use super::{ceiling, contains, find, floor, height, max, min, rank, select, snapshot};
    use crate::compare::NaturalOrder;
    use crate::node::{Color, Link, Node};

    // Perfectly balanced, all black: 1 2 3 4 5 6 7.
    fn sample() -> Link<u32, char> {
        fn build(keys: &[u32]) -> Link<u32, char> {
            if keys.is_empty() {
                return None;
            }
            let mid = keys.len() / 2;
            let mut node = Node::new(keys[mid], char::from(b'a' + keys[mid] as u8));
            node.color = Color::Black;
            node.left = build(&keys[..mid]);
            node.right = build(&keys[mid + 1..]);
            node.update_size();
            Some(node)
        }
        build(&[1, 2, 3, 4, 5, 6, 7])
    }

    #[test]
    fn point_lookups() {
        let root = sample();
        assert_eq!(find(&root, &NaturalOrder, &5).map(|n| n.value), Some('f'));
        assert!(find(&root, &NaturalOrder, &8).is_none());
        assert!(contains(&root, &NaturalOrder, &1));
        assert!(!contains(&root, &NaturalOrder, &0));
        assert!(!contains(&None::<Box<Node<u32, ()>>>, &NaturalOrder, &0));
    }

    #[test]
    fn extremes() {
        let root = sample();
        let node = root.as_deref().unwrap();
        assert_eq!(min(node).key, 1);
        assert_eq!(max(node).key, 7);
    }

    #[test]
    fn floor_and_ceiling_in_gaps() {
        let mut root: Link<u32, char> = None;
        for key in [10, 20, 30] {
            let mut node = Node::new(key, 'x');
            node.color = Color::Black;
            node.left = root.take();
            node.update_size();
            root = Some(node);
        }
        // Degenerate left spine 30 -> 20 -> 10 still answers by BST order.
        let key = |n: Option<&Node<u32, char>>| n.map(|n| n.key);
        assert_eq!(key(floor(&root, &NaturalOrder, &25)), Some(20));
        assert_eq!(key(floor(&root, &NaturalOrder, &30)), Some(30));
        assert_eq!(key(floor(&root, &NaturalOrder, &9)), None);
        assert_eq!(key(floor(&root, &NaturalOrder, &99)), Some(30));
        assert_eq!(key(ceiling(&root, &NaturalOrder, &25)), Some(30));
        assert_eq!(key(ceiling(&root, &NaturalOrder, &10)), Some(10));
        assert_eq!(key(ceiling(&root, &NaturalOrder, &31)), None);
        assert_eq!(key(ceiling(&root, &NaturalOrder, &0)), Some(10));
    }

    #[test]
    fn rank_and_select_agree() {
        let root = sample();
        for i in 0..7 {
            let node = select(&root, i).unwrap();
            assert_eq!(node.key, i as u32 + 1);
            assert_eq!(rank(&root, &NaturalOrder, &node.key), i);
        }
        assert!(select(&root, 7).is_none());
        assert_eq!(rank(&root, &NaturalOrder, &0), 0);
        assert_eq!(rank(&root, &NaturalOrder, &100), 7);
    }

    #[test]
    fn snapshot_is_in_order() {
        let root = sample();
        let mut out = Vec::new();
        snapshot(&root, &mut out);
        let keys: Vec<u32> = out.iter().map(|n| n.key).collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(height(&root), 3);
    }
}
