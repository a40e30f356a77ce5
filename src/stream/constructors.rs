//! Stream constructors: from_slice, from_map, from_iter, from_fn, empty, once
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::iter::Fuse;
use std::marker::PhantomData;

use super::core::{Cursor, Stream};
use crate::key_value::KeyValue;

// ================================
// Collection Sources
// ================================

/// Stream over a borrowed slice, see [`from_slice`].
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct FromSlice<'a, T> {
    src: &'a [T],
}

impl<T> Clone for FromSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FromSlice<'_, T> {}

impl<'a, T> Stream for FromSlice<'a, T> {
    type Item = &'a T;
    type Cursor<'s>
        = SliceCursor<'a, T>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor {
            src: self.src,
            index: 0,
        }
    }
}

pub struct SliceCursor<'a, T> {
    src: &'a [T],
    index: usize,
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn advance(&mut self) -> Option<Self::Item> {
        let item = self.src.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}

/// Stream over the entries of a borrowed `HashMap`, see [`from_map`].
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct FromMap<'a, K, V, H = RandomState> {
    src: &'a HashMap<K, V, H>,
}

impl<K, V, H> Clone for FromMap<'_, K, V, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, H> Copy for FromMap<'_, K, V, H> {}

impl<'a, K, V, H> Stream for FromMap<'a, K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    type Item = KeyValue<&'a K, &'a V>;
    type Cursor<'s>
        = MapEntryCursor<'a, K, V, H>
    where
        Self: 's;

    // The key set is snapshotted here, once per traversal.
    fn cursor(&self) -> Self::Cursor<'_> {
        MapEntryCursor {
            src: self.src,
            keys: self.src.keys().collect(),
            index: 0,
        }
    }
}

pub struct MapEntryCursor<'a, K, V, H> {
    src: &'a HashMap<K, V, H>,
    keys: Vec<&'a K>,
    index: usize,
}

impl<'a, K, V, H> Cursor for MapEntryCursor<'a, K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    type Item = KeyValue<&'a K, &'a V>;

    fn advance(&mut self) -> Option<Self::Item> {
        while let Some(&key) = self.keys.get(self.index) {
            self.index += 1;
            // Values are read at pull time, not at snapshot time.
            if let Some(value) = self.src.get(key) {
                return Some(KeyValue::new(key, value));
            }
        }
        None
    }
}

/// Stream re-running a cloneable `IntoIterator` for every traversal, see [`from_iter`].
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct FromIter<I> {
    iter: I,
}

impl<I> Stream for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Cursor<'s>
        = IterCursor<I::IntoIter>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor {
            iter: self.iter.clone().into_iter().fuse(),
        }
    }
}

/// Cursor driving a standard library iterator.
pub struct IterCursor<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

// ================================
// Function-based Constructors
// ================================

/// Stream whose cursors come from a factory closure, see [`from_fn`].
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct FromFn<F> {
    factory: F,
}

impl<F, C> Stream for FromFn<F>
where
    F: Fn() -> C,
    C: Cursor,
{
    type Item = C::Item;
    type Cursor<'s>
        = C
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        (self.factory)()
    }
}

/// Cursor backed by a closure over its own state, see [`from_cursor_fn`].
#[derive(Debug, Clone)]
pub struct CursorFn<F> {
    f: F,
}

impl<T, F> Cursor for CursorFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn advance(&mut self) -> Option<Self::Item> {
        (self.f)()
    }
}

// ================================
// Basic Constructors
// ================================

#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct Empty<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Stream for Empty<T> {
    type Item = T;
    type Cursor<'s>
        = EmptyCursor<T>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        EmptyCursor {
            _phantom: PhantomData,
        }
    }
}

pub struct EmptyCursor<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn advance(&mut self) -> Option<Self::Item> {
        None
    }
}

#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct Once<T> {
    value: T,
}

impl<T: Clone> Stream for Once<T> {
    type Item = T;
    type Cursor<'s>
        = OnceCursor<'s, T>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        OnceCursor {
            value: Some(&self.value),
        }
    }
}

pub struct OnceCursor<'s, T> {
    value: Option<&'s T>,
}

impl<T: Clone> Cursor for OnceCursor<'_, T> {
    type Item = T;

    fn advance(&mut self) -> Option<Self::Item> {
        self.value.take().cloned()
    }
}

// ================================
// Constructor functions
// ================================

/// Create a stream that walks `src` by increasing index.
///
/// Every traversal starts again at index 0. Elements are produced by
/// reference; chain [`cloned`](crate::stream::UtilityStreamExt::cloned) or
/// [`copied`](crate::stream::UtilityStreamExt::copied) to get owned values.
pub fn from_slice<T>(src: &[T]) -> FromSlice<'_, T> {
    FromSlice { src }
}

/// Create a stream over the entries of `src`.
///
/// Each traversal snapshots the key set when its cursor is created and then
/// looks values up as it goes. The order is whatever the map's hasher
/// yields. With the default `RandomState` it is stable for one map instance
/// but differs between maps, so callers must not rely on it.
pub fn from_map<K, V, H>(src: &HashMap<K, V, H>) -> FromMap<'_, K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    FromMap { src }
}

/// Create a stream from anything that can be cloned and iterated again,
/// such as a range or a `Vec`.
pub fn from_iter<I>(iter: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter { iter }
}

/// Create a stream from a cursor factory. The factory runs once per traversal.
pub fn from_fn<F, C>(factory: F) -> FromFn<F>
where
    F: Fn() -> C,
    C: Cursor,
{
    FromFn { factory }
}

/// Create a cursor from a closure returning `None` on exhaustion.
///
/// The closure is trusted to keep returning `None` once it has done so;
/// wrap the stream in [`fuse`](crate::stream::UtilityStreamExt::fuse) if it
/// might not.
pub fn from_cursor_fn<T, F>(f: F) -> CursorFn<F>
where
    F: FnMut() -> Option<T>,
{
    CursorFn { f }
}

/// Create a stream that never produces values
pub fn empty<T>() -> Empty<T> {
    Empty {
        _phantom: PhantomData,
    }
}

/// Create a stream that produces `value` once per traversal
pub fn once<T: Clone>(value: T) -> Once<T> {
    Once { value }
}
