//! Element-transforming operators: select, cast, reverse.

use crate::sequence::Sequence;
use crate::trace::emit_op;

impl<T> Sequence<T> {
    /// One output per input, in order (LINQ `Select`).
    pub fn select<U, F>(&self, f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        let out: Vec<U> = self.items.iter().map(f).collect();
        emit_op("select", self.items.len(), out.len());
        Sequence::from_vec(out)
    }

    /// Element-wise type conversion through `convert`.
    ///
    /// Same shape as `select`; kept as its own operator so call sites read as a
    /// conversion rather than a projection.
    pub fn cast<U, F>(&self, convert: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        let out: Vec<U> = self.items.iter().map(convert).collect();
        emit_op("cast", self.items.len(), out.len());
        Sequence::from_vec(out)
    }
}

impl<T: Clone> Sequence<T> {
    /// Convert every element through its `Into<U>` impl.
    pub fn cast_into<U>(&self) -> Sequence<U>
    where
        T: Into<U>,
    {
        self.cast(|x| x.clone().into())
    }

    pub fn reverse(&self) -> Sequence<T> {
        let out: Vec<T> = self.items.iter().rev().cloned().collect();
        emit_op("reverse", self.items.len(), out.len());
        Sequence::from_vec(out)
    }
}
