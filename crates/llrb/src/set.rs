use std::fmt;

use crate::compare::{Comparator, NaturalOrder};
use crate::error::TreeError;
use crate::iter::{Iter, SetIntoIter, SetIter};
use crate::tree::Tree;
use crate::validate::Violation;

/// Ordered set backed by a left-leaning red-black tree.
///
/// Shares its tree with [`LlrbMap`](crate::LlrbMap); values are stored as
/// keys with a unit payload, so floor/ceiling tie-breaking is identical.
#[derive(Clone)]
pub struct LlrbSet<T, C = NaturalOrder> {
    tree: Tree<T, (), C>,
}

impl<T: Ord> LlrbSet<T> {
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> LlrbSet<T, C> {
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

    pub fn min(&self) -> Result<&T, TreeError> {
        self.tree.min().map(|n| &n.key)
    }

    pub fn max(&self) -> Result<&T, TreeError> {
        self.tree.max().map(|n| &n.key)
    }

    pub fn delete_min(&mut self) -> Result<T, TreeError> {
        self.tree.delete_min().map(|(t, ())| t)
    }

    pub fn delete_max(&mut self) -> Result<T, TreeError> {
        self.tree.delete_max().map(|(t, ())| t)
    }

    pub fn select(&self, rank: usize) -> Option<&T> {
        self.tree.select(rank).map(|n| &n.key)
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    pub fn iter(&self) -> SetIter<'_, T> {
        SetIter {
            inner: Iter::new(self.tree.snapshot()),
        }
    }

    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, C: Comparator<T>> LlrbSet<T, C> {
    pub fn contains(&self, value: &T) -> bool {
        self.tree.contains(value)
    }

    /// Adds `value`; returns `false` if an equal value was already present,
    /// in which case the stored value is kept.
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value, ()).is_none()
    }

    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the stored value equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.tree.remove(value).map(|(t, ())| t)
    }

    pub fn floor(&self, value: &T) -> Result<&T, TreeError> {
        self.tree.floor(value).map(|n| &n.key)
    }

    pub fn ceiling(&self, value: &T) -> Result<&T, TreeError> {
        self.tree.ceiling(value).map(|n| &n.key)
    }

    pub fn rank(&self, value: &T) -> usize {
        self.tree.rank(value)
    }

    pub fn range_count(&self, lo: &T, hi: &T) -> usize {
        self.tree.range_count(lo, hi)
    }

    pub fn validate(&self) -> Result<(), Violation> {
        self.tree.validate()
    }
}

impl<T, C: Default> Default for LlrbSet<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for LlrbSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, C> PartialEq for LlrbSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for LlrbSet<T, C> {}

impl<T, C: Comparator<T>> Extend<T> for LlrbSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for LlrbSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, C> IntoIterator for LlrbSet<T, C> {
    type Item = T;
    type IntoIter = SetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIter {
            inner: self.tree.into_entries().into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a LlrbSet<T, C> {
    type Item = &'a T;
    type IntoIter = SetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
