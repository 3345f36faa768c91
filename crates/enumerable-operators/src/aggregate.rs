//! Scalar and mapping results: count, any/all, first/last, min/max/sum,
//! for_each, to_map.
//!
//! None of these build a new `Sequence`. Lookups that can come up empty return
//! `enumerable_core::Result`; the `_or_default` forms swallow that error.

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::Sum;

use enumerable_core::prelude::{partial_max, partial_min, Error, Lookup, Result};

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// True iff the sequence has at least one element.
    pub fn any(&self) -> bool {
        !self.items.is_empty()
    }

    /// True if `pred` holds for at least one element.
    pub fn any_where<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(pred)
    }

    /// True iff `pred` holds for every element; vacuously true when empty.
    pub fn all<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(pred)
    }

    /// Smallest projected value.
    pub fn min<K, F>(&self, selector: F) -> Result<K>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        partial_min(self.items.iter().map(selector)).ok_or(Error::EmptySequence { op: "min" })
    }

    /// Largest projected value.
    pub fn max<K, F>(&self, selector: F) -> Result<K>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        partial_max(self.items.iter().map(selector)).ok_or(Error::EmptySequence { op: "max" })
    }

    /// Sum of projected values; the additive identity for an empty sequence.
    pub fn sum<S, F>(&self, selector: F) -> S
    where
        S: Sum<S>,
        F: FnMut(&T) -> S,
    {
        self.items.iter().map(selector).sum()
    }

    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(action)
    }

    /// Key -> value mapping. A later duplicate key overwrites the earlier entry.
    pub fn to_map<K, V, KF, VF>(&self, mut key: KF, mut value: VF) -> HashMap<K, V>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
        VF: FnMut(&T) -> V,
    {
        let mut m = HashMap::with_capacity(self.items.len());
        for x in &self.items {
            m.insert(key(x), value(x));
        }
        m
    }
}

impl<T: Clone> Sequence<T> {
    pub fn first(&self) -> Result<T> {
        self.items.first().cloned().ok_or(Error::NotFound {
            op: "first",
            reason: Lookup::EmptySequence,
        })
    }

    pub fn first_where<P>(&self, mut pred: P) -> Result<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .find(|x| pred(*x))
            .cloned()
            .ok_or(Error::NotFound {
                op: "first",
                reason: Lookup::NoMatch,
            })
    }

    pub fn first_or_default(&self, default: T) -> T {
        self.first().unwrap_or(default)
    }

    pub fn first_where_or_default<P>(&self, pred: P, default: T) -> T
    where
        P: FnMut(&T) -> bool,
    {
        self.first_where(pred).unwrap_or(default)
    }

    pub fn last(&self) -> Result<T> {
        self.items.last().cloned().ok_or(Error::NotFound {
            op: "last",
            reason: Lookup::EmptySequence,
        })
    }

    pub fn last_where<P>(&self, mut pred: P) -> Result<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .rev()
            .find(|x| pred(*x))
            .cloned()
            .ok_or(Error::NotFound {
                op: "last",
                reason: Lookup::NoMatch,
            })
    }

    pub fn last_or_default(&self, default: T) -> T {
        self.last().unwrap_or(default)
    }

    pub fn last_where_or_default<P>(&self, pred: P, default: T) -> T
    where
        P: FnMut(&T) -> bool,
    {
        self.last_where(pred).unwrap_or(default)
    }
}
