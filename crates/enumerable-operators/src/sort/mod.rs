//! Ordering operators: order_by / then_by and their descending and
//! custom-comparator forms.
//!
//! Primary sorts start a fresh comparer chain; secondary sorts extend the
//! receiver's chain and re-sort the whole buffer. All sorts are stable, so
//! elements that tie on every key keep their input order.

pub mod chain;

use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::trace::{emit_op, misuse};

use self::chain::{build_comparer, Comparer, ComparerChain};

fn ord_cmp<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

impl<T: Clone + 'static> Sequence<T> {
    /// Ascending stable sort by `key`.
    pub fn order_by<K, F>(&self, key: F) -> Sequence<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.order_by_with(key, ord_cmp::<K>)
    }

    /// Descending stable sort by `key`.
    pub fn order_by_descending<K, F>(&self, key: F) -> Sequence<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.order_by_descending_with(key, ord_cmp::<K>)
    }

    /// Ascending stable sort by `key` under an explicit key comparison,
    /// e.g. `f64::total_cmp` for float keys.
    pub fn order_by_with<K, F, C>(&self, key: F, cmp: C) -> Sequence<T>
    where
        K: 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
        C: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        self.sorted("order_by", ComparerChain::new(build_comparer(key, cmp, false)))
    }

    pub fn order_by_descending_with<K, F, C>(&self, key: F, cmp: C) -> Sequence<T>
    where
        K: 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
        C: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        self.sorted(
            "order_by_descending",
            ComparerChain::new(build_comparer(key, cmp, true)),
        )
    }

    /// Ascending secondary key.
    ///
    /// # Panics
    /// If no `order_by*` established a comparer chain on `self`.
    pub fn then_by<K, F>(&self, key: F) -> Sequence<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.then_by_with(key, ord_cmp::<K>)
    }

    /// Descending secondary key.
    ///
    /// # Panics
    /// If no `order_by*` established a comparer chain on `self`.
    pub fn then_by_descending<K, F>(&self, key: F) -> Sequence<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.then_by_descending_with(key, ord_cmp::<K>)
    }

    /// # Panics
    /// If no `order_by*` established a comparer chain on `self`.
    pub fn then_by_with<K, F, C>(&self, key: F, cmp: C) -> Sequence<T>
    where
        K: 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
        C: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        self.extend_sort("then_by", build_comparer(key, cmp, false))
    }

    /// # Panics
    /// If no `order_by*` established a comparer chain on `self`.
    pub fn then_by_descending_with<K, F, C>(&self, key: F, cmp: C) -> Sequence<T>
    where
        K: 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
        C: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        self.extend_sort("then_by_descending", build_comparer(key, cmp, true))
    }

    #[track_caller]
    fn extend_sort(&self, op: &'static str, next: Comparer<T>) -> Sequence<T> {
        let chain = match &self.chain {
            Some(chain) => chain.extended(next),
            None => misuse(op, "order_by first"),
        };
        self.sorted(op, chain)
    }

    fn sorted(&self, op: &'static str, chain: ComparerChain<T>) -> Sequence<T> {
        let mut out = self.items.clone();
        out.sort_by(|a, b| chain.compare(a, b));
        emit_op(op, self.items.len(), out.len());
        Sequence::with_chain(out, chain)
    }
}
