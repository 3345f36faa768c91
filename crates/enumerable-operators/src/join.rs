//! Inner equijoin (nested loop).
//!
//! No hashing or indexing: every outer key is compared against every inner
//! key, so cost is `len(outer) * len(inner)` comparisons. Keys only need
//! `PartialEq`.

use crate::sequence::Sequence;
use crate::trace::emit_op;

impl<T> Sequence<T> {
    /// Emit `result(outer, inner)` for every pair whose keys compare equal.
    ///
    /// Output is outer-major, inner-minor, following both inputs' order.
    /// Unmatched elements on either side are dropped.
    pub fn join<U, K, R, OK, IK, RS>(
        &self,
        inner: &Sequence<U>,
        mut outer_key: OK,
        inner_key: IK,
        mut result: RS,
    ) -> Sequence<R>
    where
        K: PartialEq,
        OK: FnMut(&T) -> K,
        IK: FnMut(&U) -> K,
        RS: FnMut(&T, &U) -> R,
    {
        // Inner keys are projected once; matching is still pairwise.
        let inner_keys: Vec<K> = inner.items.iter().map(inner_key).collect();

        let mut out = Vec::new();
        for o in &self.items {
            let ok = outer_key(o);
            for (i, ik) in inner.items.iter().zip(&inner_keys) {
                if *ik == ok {
                    out.push(result(o, i));
                }
            }
        }
        emit_op("join", self.items.len() + inner.items.len(), out.len());
        Sequence::from_vec(out)
    }
}
