//! Element-selecting operators: filter, skip, take, distinct.
//!
//! All of these preserve relative order and drop any comparer chain.

use std::collections::HashSet;
use std::hash::Hash;

use enumerable_core::SequenceConfig;

use crate::sequence::Sequence;
use crate::trace::emit_op;

impl<T: Clone> Sequence<T> {
    /// Keep the elements for which `pred` holds (LINQ `Where`).
    pub fn filter<P>(&self, mut pred: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool,
    {
        let reserve = SequenceConfig::global().filter_reserve(self.items.len());
        let mut out = Vec::with_capacity(reserve);
        for x in &self.items {
            if pred(x) {
                out.push(x.clone());
            }
        }
        emit_op("filter", self.items.len(), out.len());
        Sequence::from_vec(out)
    }

    /// Drop the first `n` elements, or all of them if `n >= len`.
    pub fn skip(&self, n: usize) -> Sequence<T> {
        let start = n.min(self.items.len());
        let out = self.items[start..].to_vec();
        emit_op("skip", self.items.len(), out.len());
        Sequence::from_vec(out)
    }

    /// Keep the first `n` elements, or all of them if `n >= len`.
    pub fn take(&self, n: usize) -> Sequence<T> {
        let end = n.min(self.items.len());
        let out = self.items[..end].to_vec();
        emit_op("take", self.items.len(), out.len());
        Sequence::from_vec(out)
    }
}

impl<T: Clone + Eq + Hash> Sequence<T> {
    /// First occurrence of each distinct element, in first-seen order.
    pub fn distinct(&self) -> Sequence<T> {
        let mut seen: HashSet<&T> = HashSet::with_capacity(self.items.len());
        let mut out = Vec::with_capacity(self.items.len());
        for x in &self.items {
            if seen.insert(x) {
                out.push(x.clone());
            }
        }
        emit_op("distinct", self.items.len(), out.len());
        Sequence::from_vec(out)
    }
}
