//! The `Sequence<T>` value and its constructors.

use std::fmt;

use crate::sort::chain::ComparerChain;

/// An ordered, owned collection plus the comparer chain of its last sort.
///
/// Equality is structural over the elements; the comparer chain is ignored.
pub struct Sequence<T> {
    pub(crate) items: Vec<T>,
    pub(crate) chain: Option<ComparerChain<T>>,
}

impl<T> Sequence<T> {
    /// The canonical zero-length sequence.
    pub fn empty() -> Self {
        Self::from_vec(Vec::new())
    }

    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        Self { items, chain: None }
    }

    pub(crate) fn with_chain(items: Vec<T>, chain: ComparerChain<T>) -> Self {
        Self {
            items,
            chain: Some(chain),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the sequence and hand back its buffer without copying.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// True when a primary sort has established a comparer chain.
    pub fn is_ordered(&self) -> bool {
        self.chain.is_some()
    }

    /// Number of comparers in the chain (0 when unordered).
    pub fn sort_depth(&self) -> usize {
        self.chain.as_ref().map(|c| c.len()).unwrap_or(0)
    }
}

impl Sequence<i64> {
    /// `count` consecutive integers beginning at `start`.
    ///
    /// Each element is computed from its index, so a range ending exactly at
    /// `i64::MAX` never steps past it. Values past `i64::MAX` wrap.
    pub fn range(start: i64, count: usize) -> Self {
        (0..count).map(|i| start.wrapping_add(i as i64)).collect()
    }
}

impl<T: Clone> Sequence<T> {
    /// `value` repeated `count` times.
    pub fn repeat(value: T, count: usize) -> Self {
        Self::from_vec(vec![value; count])
    }

    /// Defensive copy of `slice`; later operators never see the caller's buffer.
    pub fn from_slice(slice: &[T]) -> Self {
        Self::from_vec(slice.to_vec())
    }

    /// Defensive copy of the backing buffer.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            chain: self.chain.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("items", &self.items)
            .field("sort_depth", &self.sort_depth())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
