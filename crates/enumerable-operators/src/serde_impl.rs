//! `Sequence<T>` (de)serializes as a plain list of elements.
//!
//! The comparer chain holds closures and is not serialized; a deserialized
//! sequence is always unordered.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::sequence::Sequence;

impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Sequence::from_vec)
    }
}
