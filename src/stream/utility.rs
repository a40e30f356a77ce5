//! Utility stages: cloned, copied, inspect, enumerate, fuse
use super::core::{Cursor, Stream};

// Cloned
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct Cloned<S> {
    pub(crate) stream: S,
}

impl<'a, S, T> Stream for Cloned<S>
where
    S: Stream<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;
    type Cursor<'s>
        = ClonedCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        ClonedCursor {
            upstream: self.stream.cursor(),
        }
    }
}

pub struct ClonedCursor<C> {
    upstream: C,
}

impl<'a, C, T> Cursor for ClonedCursor<C>
where
    C: Cursor<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;

    fn advance(&mut self) -> Option<Self::Item> {
        self.upstream.advance().cloned()
    }
}

// Copied
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct Copied<S> {
    pub(crate) stream: S,
}

impl<'a, S, T> Stream for Copied<S>
where
    S: Stream<Item = &'a T>,
    T: Copy + 'a,
{
    type Item = T;
    type Cursor<'s>
        = CopiedCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        CopiedCursor {
            upstream: self.stream.cursor(),
        }
    }
}

pub struct CopiedCursor<C> {
    upstream: C,
}

impl<'a, C, T> Cursor for CopiedCursor<C>
where
    C: Cursor<Item = &'a T>,
    T: Copy + 'a,
{
    type Item = T;

    fn advance(&mut self) -> Option<Self::Item> {
        self.upstream.advance().copied()
    }
}

// Inspect
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct Inspect<S, F> {
    pub(crate) stream: S,
    pub(crate) f: F,
}

impl<S, F> Stream for Inspect<S, F>
where
    S: Stream,
    F: Fn(&S::Item),
{
    type Item = S::Item;
    type Cursor<'s>
        = InspectCursor<'s, S::Cursor<'s>, F>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        InspectCursor {
            upstream: self.stream.cursor(),
            f: &self.f,
        }
    }
}

pub struct InspectCursor<'s, C, F> {
    upstream: C,
    f: &'s F,
}

impl<C, F> Cursor for InspectCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(&C::Item),
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        let item = self.upstream.advance()?;
        (self.f)(&item);
        Some(item)
    }
}

// Enumerate
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct Enumerate<S> {
    pub(crate) stream: S,
}

impl<S: Stream> Stream for Enumerate<S> {
    type Item = (usize, S::Item);
    type Cursor<'s>
        = EnumerateCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        EnumerateCursor {
            upstream: self.stream.cursor(),
            index: 0,
        }
    }
}

pub struct EnumerateCursor<C> {
    upstream: C,
    index: usize,
}

impl<C: Cursor> Cursor for EnumerateCursor<C> {
    type Item = (usize, C::Item);

    fn advance(&mut self) -> Option<Self::Item> {
        let item = self.upstream.advance()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }
}

// Fuse
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct Fuse<S> {
    pub(crate) stream: S,
}

impl<S: Stream> Stream for Fuse<S> {
    type Item = S::Item;
    type Cursor<'s>
        = FuseCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        FuseCursor {
            upstream: self.stream.cursor(),
            done: false,
        }
    }
}

pub struct FuseCursor<C> {
    upstream: C,
    done: bool,
}

impl<C: Cursor> Cursor for FuseCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.upstream.advance();
        self.done = item.is_none();
        item
    }
}

// Extension trait for these stages
pub trait UtilityStreamExt: Stream + Sized {
    /// Turn a stream of references into a stream of owned clones
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Stream<Item = &'a T>,
        T: Clone + 'a,
    {
        Cloned { stream: self }
    }

    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Stream<Item = &'a T>,
        T: Copy + 'a,
    {
        Copied { stream: self }
    }

    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        F: Fn(&Self::Item),
    {
        Inspect { stream: self, f }
    }

    /// Pair each element with its zero-based index within the traversal
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate { stream: self }
    }

    /// Stop pulling upstream after the first exhaustion signal
    fn fuse(self) -> Fuse<Self> {
        Fuse { stream: self }
    }
}

impl<S: Stream + Sized> UtilityStreamExt for S {}
