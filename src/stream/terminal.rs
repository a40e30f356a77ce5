//! Terminal consumers: reduce, for_each, to_vec, to_map and friends
//!
//! Every terminal obtains one fresh cursor from the stream and pulls it to
//! exhaustion (or, for `first`, until the first element). The stream itself
//! is only borrowed, so the same pipeline can be consumed again.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use super::core::{Cursor, Stream};
use crate::error::{StreamError, StreamResult};
use crate::key_value::KeyValue;
use crate::stream_configuration::{CollectConfig, DuplicateKeyPolicy};

pub trait StreamTerminalExt: Stream {
    /// Strict left fold of one traversal, starting from `seed`.
    fn reduce<U, F>(&self, seed: U, mut acc: F) -> U
    where
        F: FnMut(U, Self::Item) -> U,
    {
        let mut cursor = self.cursor();
        let mut result = seed;
        let mut pulled = 0usize;
        while let Some(item) = cursor.advance() {
            result = acc(result, item);
            pulled += 1;
        }
        log::trace!("reduce folded {} elements", pulled);
        result
    }

    /// Call `action` with a zero-based index for every produced element.
    fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(usize, Self::Item),
    {
        let mut cursor = self.cursor();
        let mut index = 0usize;
        while let Some(item) = cursor.advance() {
            action(index, item);
            index += 1;
        }
        log::trace!("for_each visited {} elements", index);
    }

    fn to_vec(&self) -> Vec<Self::Item> {
        let mut result = Vec::new();
        self.for_each(|_, item| result.push(item));
        result
    }

    /// Collect pairs into a `HashMap`; a repeated key keeps its last value.
    fn to_map<K, V>(&self) -> HashMap<K, V>
    where
        Self: Stream<Item = KeyValue<K, V>>,
        K: Eq + Hash,
    {
        let mut result = HashMap::new();
        self.for_each(|_, kv| {
            result.insert(kv.key, kv.value);
        });
        result
    }

    fn to_vec_with(&self, config: &CollectConfig) -> StreamResult<Vec<Self::Item>> {
        config.validate()?;
        let mut result = Vec::with_capacity(config.initial_capacity);
        self.for_each(|_, item| result.push(item));
        Ok(result)
    }

    /// Collect pairs into a `HashMap`, resolving repeated keys with
    /// `config.duplicate_keys`.
    ///
    /// With [`DuplicateKeyPolicy::Reject`] the first repeated key stops the
    /// traversal and reports the index of the offending element.
    fn to_map_with<K, V>(&self, config: &CollectConfig) -> StreamResult<HashMap<K, V>>
    where
        Self: Stream<Item = KeyValue<K, V>>,
        K: Eq + Hash,
    {
        config.validate()?;
        let mut result = HashMap::with_capacity(config.initial_capacity);
        let mut cursor = self.cursor();
        let mut index = 0usize;
        let mut duplicates = 0usize;
        while let Some(KeyValue { key, value }) = cursor.advance() {
            match result.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(mut slot) => {
                    duplicates += 1;
                    match config.duplicate_keys {
                        DuplicateKeyPolicy::LastWriteWins => {
                            slot.insert(value);
                        }
                        DuplicateKeyPolicy::FirstWriteWins => {}
                        DuplicateKeyPolicy::Reject => {
                            return Err(StreamError::DuplicateKey { index });
                        }
                    }
                }
            }
            index += 1;
        }
        if duplicates > 0 {
            log::debug!(
                "to_map_with resolved {} duplicate keys using {:?}",
                duplicates,
                config.duplicate_keys
            );
        }
        Ok(result)
    }

    /// Collect into any default-constructible, extendable container.
    fn collect<B>(&self) -> B
    where
        B: Default + Extend<Self::Item>,
    {
        let mut collection = B::default();
        self.for_each(|_, item| collection.extend(std::iter::once(item)));
        collection
    }

    fn count(&self) -> usize {
        self.reduce(0, |n, _| n + 1)
    }

    /// Pull a single element; the rest of the stream is never touched.
    fn first(&self) -> Option<Self::Item> {
        self.cursor().advance()
    }

    fn last(&self) -> Option<Self::Item> {
        self.reduce(None, |_, item| Some(item))
    }

    /// Adapt a fresh cursor into a standard library iterator.
    fn iter(&self) -> Iter<Self::Cursor<'_>> {
        Iter {
            cursor: self.cursor(),
        }
    }
}

impl<S: Stream + ?Sized> StreamTerminalExt for S {}

/// Standard library iterator over one traversal, see [`StreamTerminalExt::iter`].
pub struct Iter<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance()
    }
}
