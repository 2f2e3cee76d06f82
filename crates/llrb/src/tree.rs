//! The generic container behind [`LlrbMap`](crate::LlrbMap) and
//! [`LlrbSet`](crate::LlrbSet).
//!
//! `Tree` owns the root link and the comparator. Between public calls it is
//! either empty or rooted at a black node with every invariant intact; the
//! recursive primitives may break them transiently, so every mutation goes
//! through here to recolor the root before and after.

use log::trace;

use crate::compare::Comparator;
use crate::error::TreeError;
use crate::mutation;
use crate::navigation;
use crate::node::{Color, Link, Node, is_red, size};
use crate::validate::{self, Violation};

#[derive(Clone)]
pub(crate) struct Tree<K, V, C> {
    root: Link<K, V>,
    cmp: C,
}

impl<K, V, C> Tree<K, V, C> {
    pub(crate) fn new(cmp: C) -> Self {
        Self { root: None, cmp }
    }

    pub(crate) fn len(&self) -> usize {
        size(&self.root)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.cmp
    }

    pub(crate) fn clear(&mut self) {
        trace!("llrb: clear {} entries", self.len());
        self.root = None;
    }

    pub(crate) fn min(&self) -> Result<&Node<K, V>, TreeError> {
        let root = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        Ok(navigation::min(root))
    }

    pub(crate) fn max(&self) -> Result<&Node<K, V>, TreeError> {
        let root = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        Ok(navigation::max(root))
    }

    pub(crate) fn select(&self, index: usize) -> Option<&Node<K, V>> {
        navigation::select(&self.root, index)
    }

    pub(crate) fn height(&self) -> usize {
        navigation::height(&self.root)
    }

    /// Point-in-time, in-order view of every node.
    pub(crate) fn snapshot(&self) -> Vec<&Node<K, V>> {
        let mut out = Vec::with_capacity(self.len());
        navigation::snapshot(&self.root, &mut out);
        out
    }

    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        let mut out = Vec::with_capacity(self.len());
        navigation::drain_into(self.root, &mut out);
        out
    }

    pub(crate) fn delete_min(&mut self) -> Result<(K, V), TreeError> {
        let root = self.prepare_delete()?;
        let (root, min) = mutation::delete_min(root);
        self.finish_delete(root);
        trace!("llrb: delete_min, {} entries left", self.len());
        Ok(min.into_entry())
    }

    pub(crate) fn delete_max(&mut self) -> Result<(K, V), TreeError> {
        let root = self.prepare_delete()?;
        let (root, max) = mutation::delete_max(root);
        self.finish_delete(root);
        trace!("llrb: delete_max, {} entries left", self.len());
        Ok(max.into_entry())
    }

    /// Takes the root out for a top-down deletion, coloring it red when
    /// neither child is, so the descent starts with a red link on hand.
    fn prepare_delete(&mut self) -> Result<Box<Node<K, V>>, TreeError> {
        let mut root = self.root.take().ok_or(TreeError::EmptyTree)?;
        if !is_red(&root.left) && !is_red(&root.right) {
            root.color = Color::Red;
        }
        Ok(root)
    }

    fn finish_delete(&mut self, root: Link<K, V>) {
        self.root = root;
        match self.root.as_deref_mut() {
            Some(node) => node.color = Color::Black,
            None => trace!("llrb: tree is now empty"),
        }
    }
}

impl<K, V, C: Comparator<K>> Tree<K, V, C> {
    pub(crate) fn find(&self, key: &K) -> Option<&Node<K, V>> {
        navigation::find(&self.root, &self.cmp, key)
    }

    pub(crate) fn find_mut(&mut self, key: &K) -> Option<&mut Node<K, V>> {
        navigation::find_mut(&mut self.root, &self.cmp, key)
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        navigation::contains(&self.root, &self.cmp, key)
    }

    /// Inserts or overwrites; returns the replaced value.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let was_empty = self.is_empty();
        let (mut root, old) = mutation::insert(self.root.take(), &self.cmp, key, value);
        root.color = Color::Black;
        self.root = Some(root);
        if was_empty {
            trace!("llrb: first entry inserted");
        }
        old
    }

    /// Removes `key`, leaving the tree untouched when it is absent.
    pub(crate) fn remove(&mut self, key: &K) -> Option<(K, V)> {
        if !self.contains(key) {
            return None;
        }
        let root = self.prepare_delete().ok()?;
        let (root, removed) = mutation::remove(root, &self.cmp, key);
        self.finish_delete(root);
        trace!("llrb: remove, {} entries left", self.len());
        Some(removed)
    }

    pub(crate) fn floor(&self, key: &K) -> Result<&Node<K, V>, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        navigation::floor(&self.root, &self.cmp, key).ok_or(TreeError::NoBound)
    }

    pub(crate) fn ceiling(&self, key: &K) -> Result<&Node<K, V>, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        navigation::ceiling(&self.root, &self.cmp, key).ok_or(TreeError::NoBound)
    }

    pub(crate) fn rank(&self, key: &K) -> usize {
        navigation::rank(&self.root, &self.cmp, key)
    }

    /// Keys `k` with `lo <= k <= hi`.
    pub(crate) fn range_count(&self, lo: &K, hi: &K) -> usize {
        if self.cmp.compare(lo, hi).is_gt() {
            return 0;
        }
        let below_hi = self.rank(hi) + usize::from(self.contains(hi));
        below_hi - self.rank(lo)
    }

    pub(crate) fn validate(&self) -> Result<(), Violation> {
        validate::check(&self.root, &self.cmp)
    }
}
