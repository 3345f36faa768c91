//! Extremum helpers over partially ordered projections.
//!
//! `f64` projections are only `PartialOrd`. A `NaN` never replaces the current
//! extremum, but it is kept when it is the first value seen.

/// Smallest of `values`, or `None` when empty.
pub fn partial_min<K, I>(values: I) -> Option<K>
where
    K: PartialOrd,
    I: IntoIterator<Item = K>,
{
    values
        .into_iter()
        .fold(None, |acc, v| match acc {
            Some(cur) if v < cur => Some(v),
            Some(cur) => Some(cur),
            None => Some(v),
        })
}

/// Largest of `values`, or `None` when empty.
pub fn partial_max<K, I>(values: I) -> Option<K>
where
    K: PartialOrd,
    I: IntoIterator<Item = K>,
{
    values
        .into_iter()
        .fold(None, |acc, v| match acc {
            Some(cur) if v > cur => Some(v),
            Some(cur) => Some(cur),
            None => Some(v),
        })
}
