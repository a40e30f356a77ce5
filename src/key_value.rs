//! Key/value pair threaded through map-sourced and map-targeted pipelines

use serde::{Deserialize, Serialize};

/// An immutable association of `key` with `value`.
///
/// [`from_map`](crate::stream::from_map) produces `KeyValue<&K, &V>` and
/// [`to_map`](crate::stream::StreamTerminalExt::to_map) consumes
/// `KeyValue<K, V>`, so a pipeline that needs owned keys maps between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct KeyValue<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Exchange key and value
    pub fn swap(self) -> KeyValue<V, K> {
        KeyValue {
            key: self.value,
            value: self.key,
        }
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<KeyValue<K, V>> for (K, V) {
    fn from(kv: KeyValue<K, V>) -> Self {
        kv.into_tuple()
    }
}

impl<K: Clone, V: Clone> KeyValue<&K, &V> {
    /// Clone both halves out of a borrowed pair
    pub fn to_owned_pair(&self) -> KeyValue<K, V> {
        KeyValue {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}
