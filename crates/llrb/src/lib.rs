//! Ordered map and set on a left-leaning red-black tree.
//!
//! Both containers share one generic tree. Ordering comes only from the
//! [`Comparator`] chosen at construction; [`NaturalOrder`] uses `Ord`.

mod balance;
mod compare;
mod error;
mod iter;
mod map;
mod mutation;
mod navigation;
mod node;
mod set;
mod tree;
mod validate;

pub use compare::{Comparator, NaturalOrder, Reversed};
pub use error::TreeError;
pub use iter::{IntoIter, Iter, Keys, SetIntoIter, SetIter, Values};
pub use map::LlrbMap;
pub use set::LlrbSet;
pub use validate::Violation;

/// Ordered map interface.
///
/// - Keys are unique.
/// - `insert` overwrites the existing value and returns the old one.
/// - `lower_bound` returns the smallest `(k, v)` with `k >= key`.
pub trait OrderedMap {
    type Key: Ord;
    type Value;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&mut self, key: &Self::Key) -> Option<&Self::Value>;

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn lower_bound(&mut self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)>;
}
