use std::fmt;

use crate::OrderedMap;
use crate::compare::{Comparator, NaturalOrder};
use crate::error::TreeError;
use crate::iter::{IntoIter, Iter, Keys, Values};
use crate::tree::Tree;
use crate::validate::Violation;

/// Ordered map backed by a left-leaning red-black tree.
///
/// Keys are ordered by the comparator `C` fixed at construction. Insertion,
/// lookup, removal and every order-statistics query run in `O(log n)` worst
/// case; `len` is `O(1)`.
///
/// ```
/// use llrb::LlrbMap;
///
/// let mut map = LlrbMap::new();
/// map.insert(3, "c");
/// map.insert(1, "a");
/// assert_eq!(map.min(), Ok((&1, &"a")));
/// assert_eq!(map.floor(&2), Ok((&1, &"a")));
/// ```
#[derive(Clone)]
pub struct LlrbMap<K, V, C = NaturalOrder> {
    tree: Tree<K, V, C>,
}

impl<K: Ord, V> LlrbMap<K, V> {
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> LlrbMap<K, V, C> {
    /// Creates an empty map ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            tree: Tree::new(cmp),
        }
    }

    pub fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Smallest entry, or [`TreeError::EmptyTree`].
    pub fn min(&self) -> Result<(&K, &V), TreeError> {
        self.tree.min().map(|n| (&n.key, &n.value))
    }

    /// Largest entry, or [`TreeError::EmptyTree`].
    pub fn max(&self) -> Result<(&K, &V), TreeError> {
        self.tree.max().map(|n| (&n.key, &n.value))
    }

    /// Removes and returns the smallest entry.
    pub fn delete_min(&mut self) -> Result<(K, V), TreeError> {
        self.tree.delete_min()
    }

    /// Removes and returns the largest entry.
    pub fn delete_max(&mut self) -> Result<(K, V), TreeError> {
        self.tree.delete_max()
    }

    /// Entry with exactly `rank` smaller keys.
    pub fn select(&self, rank: usize) -> Option<(&K, &V)> {
        self.tree.select(rank).map(|n| (&n.key, &n.value))
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// In-order iterator over a snapshot taken now.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.tree.snapshot())
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Owned copy of every entry in key order. Later mutation of the map does
    /// not affect it.
    pub fn snapshot(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K, V, C: Comparator<K>> LlrbMap<K, V, C> {
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.find(key).map(|n| &n.value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.find_mut(key).map(|n| &mut n.value)
    }

    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.find(key).map(|n| (&n.key, &n.value))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    /// Inserts `key`, returning the value it replaced. The stored key is kept
    /// when it was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.tree.insert(key, value)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.tree.remove(key)
    }

    /// Entry with the largest key `<= key`.
    pub fn floor(&self, key: &K) -> Result<(&K, &V), TreeError> {
        self.tree.floor(key).map(|n| (&n.key, &n.value))
    }

    /// Entry with the smallest key `>= key`.
    pub fn ceiling(&self, key: &K) -> Result<(&K, &V), TreeError> {
        self.tree.ceiling(key).map(|n| (&n.key, &n.value))
    }

    /// Number of keys strictly less than `key`.
    pub fn rank(&self, key: &K) -> usize {
        self.tree.rank(key)
    }

    /// Number of keys in `lo..=hi`.
    pub fn range_count(&self, lo: &K, hi: &K) -> usize {
        self.tree.range_count(lo, hi)
    }

    /// Walks the whole tree and reports the first broken invariant.
    pub fn validate(&self) -> Result<(), Violation> {
        self.tree.validate()
    }
}

impl<K, V, C: Default> Default for LlrbMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for LlrbMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for LlrbMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for LlrbMap<K, V, C> {}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for LlrbMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for LlrbMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C> IntoIterator for LlrbMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.tree.into_entries().into_iter(),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a LlrbMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord, V, C: Comparator<K> + Default> OrderedMap for LlrbMap<K, V, C> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        Self::default()
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn get(&mut self, key: &Self::Key) -> Option<&Self::Value> {
        self.tree.find(key).map(|n| &n.value)
    }

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value> {
        self.tree.insert(key, value)
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value> {
        self.tree.remove(key).map(|(_, v)| v)
    }

    fn lower_bound(&mut self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)> {
        self.ceiling(key).ok()
    }
}
