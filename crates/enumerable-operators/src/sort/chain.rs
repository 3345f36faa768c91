//! Comparer chains for multi-key sorts.
//!
//! A chain is immutable once built. `extended` copies the comparer handles into
//! a new chain, so two sequences never share a chain that one of them grows.

use std::cmp::Ordering;
use std::sync::Arc;

/// Element comparator produced from a key selector.
pub type Comparer<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

pub struct ComparerChain<T> {
    comparers: Arc<[Comparer<T>]>,
}

impl<T> Clone for ComparerChain<T> {
    fn clone(&self) -> Self {
        Self {
            comparers: Arc::clone(&self.comparers),
        }
    }
}

impl<T> ComparerChain<T> {
    pub fn new(primary: Comparer<T>) -> Self {
        Self {
            comparers: Arc::from(vec![primary]),
        }
    }

    /// A new chain with `next` appended; `self` is left as it was.
    pub fn extended(&self, next: Comparer<T>) -> Self {
        let mut comparers: Vec<Comparer<T>> = Vec::with_capacity(self.comparers.len() + 1);
        comparers.extend(self.comparers.iter().cloned());
        comparers.push(next);
        Self {
            comparers: Arc::from(comparers),
        }
    }

    /// Lexicographic comparison: the first non-`Equal` comparer decides.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for cmp in self.comparers.iter() {
            match cmp(a, b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    pub fn len(&self) -> usize {
        self.comparers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparers.is_empty()
    }
}

/// Build an element comparator from a key selector and a key comparison.
///
/// `descending` flips the key comparison.
pub fn build_comparer<T, K, KF, CF>(key: KF, cmp: CF, descending: bool) -> Comparer<T>
where
    T: 'static,
    K: 'static,
    KF: Fn(&T) -> K + Send + Sync + 'static,
    CF: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
{
    Arc::new(move |a: &T, b: &T| {
        let ord = cmp(&key(a), &key(b));
        if descending {
            ord.reverse()
        } else {
            ord
        }
    })
}
