//! Core cursor protocol, the stream trait and the basic stages
//!
//! A [`Stream`] is only a recipe. Calling [`Stream::cursor`] runs the recipe
//! and hands back a fresh [`Cursor`]. Stages own their upstream stream and
//! build their cursor around the upstream one, so nothing is pulled until a
//! terminal consumer asks for it.

/// Pull-based cursor over a sequence.
///
/// `advance` returns `Some(item)` while elements remain and `None` once the
/// sequence is exhausted. After the first `None` every later call must also
/// return `None`.
pub trait Cursor {
    type Item;

    fn advance(&mut self) -> Option<Self::Item>;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        (**self).advance()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        (**self).advance()
    }
}

/// Factory of independent cursors.
///
/// A stream holds no cursor state. Every call to [`cursor`](Stream::cursor)
/// starts a new traversal that neither affects nor is affected by any other
/// cursor obtained from the same stream. The cursor may borrow from the
/// stream, which is why it is a generic associated type.
pub trait Stream {
    type Item;
    type Cursor<'s>: Cursor<Item = Self::Item>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_>;
}

impl<S: Stream + ?Sized> Stream for &S {
    type Item = S::Item;
    type Cursor<'s>
        = S::Cursor<'s>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

/// Extension trait providing the lazy stages
pub trait StreamExt: Stream + Sized {
    fn map<R, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> R;
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool;
    fn filter_map<R, F>(self, f: F) -> FilterMap<Self, F>
    where
        F: Fn(Self::Item) -> Option<R>;
    fn take(self, n: usize) -> Take<Self>;
    fn skip(self, n: usize) -> Skip<Self>;
}

impl<S: Stream + Sized> StreamExt for S {
    fn map<R, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> R,
    {
        Map { stream: self, f }
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter { stream: self, predicate }
    }

    fn filter_map<R, F>(self, f: F) -> FilterMap<Self, F>
    where
        F: Fn(Self::Item) -> Option<R>,
    {
        FilterMap { stream: self, f }
    }

    fn take(self, n: usize) -> Take<Self> {
        Take { stream: self, n }
    }

    fn skip(self, n: usize) -> Skip<Self> {
        Skip { stream: self, n }
    }
}

// Map

#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct Map<S, F> {
    stream: S,
    f: F,
}

impl<S, F, R> Stream for Map<S, F>
where
    S: Stream,
    F: Fn(S::Item) -> R,
{
    type Item = R;
    type Cursor<'s>
        = MapCursor<'s, S::Cursor<'s>, F>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            upstream: self.stream.cursor(),
            f: &self.f,
        }
    }
}

pub struct MapCursor<'s, C, F> {
    upstream: C,
    f: &'s F,
}

impl<C, F, R> Cursor for MapCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> R,
{
    type Item = R;

    fn advance(&mut self) -> Option<Self::Item> {
        let item = self.upstream.advance()?;
        Some((self.f)(item))
    }
}

// Filter

#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct Filter<S, P> {
    stream: S,
    predicate: P,
}

impl<S, P> Stream for Filter<S, P>
where
    S: Stream,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'s>
        = FilterCursor<'s, S::Cursor<'s>, P>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            upstream: self.stream.cursor(),
            predicate: &self.predicate,
        }
    }
}

pub struct FilterCursor<'s, C, P> {
    upstream: C,
    predicate: &'s P,
}

impl<C, P> Cursor for FilterCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    // May drain the whole upstream without producing anything.
    fn advance(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.upstream.advance() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}

// FilterMap

#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct FilterMap<S, F> {
    stream: S,
    f: F,
}

impl<S, F, R> Stream for FilterMap<S, F>
where
    S: Stream,
    F: Fn(S::Item) -> Option<R>,
{
    type Item = R;
    type Cursor<'s>
        = FilterMapCursor<'s, S::Cursor<'s>, F>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterMapCursor {
            upstream: self.stream.cursor(),
            f: &self.f,
        }
    }
}

pub struct FilterMapCursor<'s, C, F> {
    upstream: C,
    f: &'s F,
}

impl<C, F, R> Cursor for FilterMapCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> Option<R>,
{
    type Item = R;

    fn advance(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.upstream.advance() {
            if let Some(mapped) = (self.f)(item) {
                return Some(mapped);
            }
        }
        None
    }
}

// Take

#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct Take<S> {
    stream: S,
    n: usize,
}

impl<S: Stream> Stream for Take<S> {
    type Item = S::Item;
    type Cursor<'s>
        = TakeCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        TakeCursor {
            upstream: self.stream.cursor(),
            remaining: self.n,
        }
    }
}

pub struct TakeCursor<C> {
    upstream: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.upstream.advance()?;
        self.remaining -= 1;
        Some(item)
    }
}

// Skip

#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless a terminal consumer drives them"]
pub struct Skip<S> {
    stream: S,
    n: usize,
}

impl<S: Stream> Stream for Skip<S> {
    type Item = S::Item;
    type Cursor<'s>
        = SkipCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        SkipCursor {
            upstream: self.stream.cursor(),
            remaining: self.n,
        }
    }
}

pub struct SkipCursor<C> {
    upstream: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.upstream.advance()?;
        }
        self.upstream.advance()
    }
}
