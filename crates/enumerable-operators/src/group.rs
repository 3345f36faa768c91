//! GroupBy: partition a sequence into per-key element lists.

use std::collections::HashMap;
use std::hash::Hash;

use crate::sequence::Sequence;
use crate::trace::emit_op;

impl<T: Clone> Sequence<T> {
    /// Map each key to the elements that produced it, in input order.
    ///
    /// Iteration order over the returned map is unspecified.
    pub fn group_by<K, F>(&self, mut key: F) -> HashMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups: HashMap<K, Vec<T>> = HashMap::new();
        for x in &self.items {
            groups.entry(key(x)).or_default().push(x.clone());
        }
        emit_op("group_by", self.items.len(), groups.len());
        groups
    }
}
