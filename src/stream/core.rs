//! Core extractor contract and the counting/mapping stages: skip, take, filter, map

use crate::error::{StreamError, StreamResult};

/// A pull-based cursor over a sequence of elements.
///
/// Every stage of a stream implements this two-step contract. `advance` moves
/// the cursor according to the stage's policy and reports whether a new
/// current element exists. `try_get` (or the panicking `get`) reads that
/// element without moving the cursor.
///
/// Stages hold their upstream stage by value, so a chain like
/// `Map<Filter<Sequence<_, _, _>, _>, _, _>` is a single statically dispatched type
/// and pulling one element walks the chain down to the source and back.
///
/// Reading before the first successful `advance`, or after `advance`
/// returned `false`, is an error: `try_get` reports it and `get` panics.
pub trait Extractor {
    type Item;

    /// Moves to the next element. Returns `false` once this stage is exhausted.
    fn advance(&mut self) -> bool;

    /// Returns the element produced by the most recent successful `advance`.
    fn try_get(&mut self) -> StreamResult<&Self::Item>;

    /// Like `try_get`, but panics when there is no current element.
    fn get(&mut self) -> &Self::Item {
        match self.try_get() {
            Ok(item) => item,
            Err(err) => panic!("Extractor::get: {}", err),
        }
    }
}

impl<E> Extractor for &mut E
where
    E: Extractor + ?Sized,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        (**self).try_get()
    }
}

// Allows `Box<dyn Extractor<Item = T>>` when a chain must be type-erased
impl<E> Extractor for Box<E>
where
    E: Extractor + ?Sized,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        (**self).try_get()
    }
}

// Skip
#[derive(Debug, Clone)]
pub struct Skip<E> {
    pub(crate) source: E,
    pub(crate) remaining: usize,
}

impl<E> Extractor for Skip<E>
where
    E: Extractor,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        while self.remaining != 0 {
            self.remaining -= 1;
            if !self.source.advance() {
                return false;
            }
        }
        self.source.advance()
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        self.source.try_get()
    }
}

// Take
#[derive(Debug, Clone)]
pub struct Take<E> {
    pub(crate) source: E,
    pub(crate) remaining: usize,
    pub(crate) exhausted: bool,
}

impl<E> Extractor for Take<E>
where
    E: Extractor,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        // Once stopped, never consult upstream again
        if self.exhausted || self.remaining == 0 {
            self.exhausted = true;
            return false;
        }
        self.remaining -= 1;
        if self.source.advance() {
            true
        } else {
            self.exhausted = true;
            false
        }
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        if self.exhausted {
            return Err(StreamError::Exhausted);
        }
        self.source.try_get()
    }
}

// Filter
#[derive(Debug, Clone)]
pub struct Filter<E, F> {
    pub(crate) source: E,
    pub(crate) f: F,
}

impl<E, F> Extractor for Filter<E, F>
where
    E: Extractor,
    F: FnMut(&E::Item) -> bool,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        loop {
            if !self.source.advance() {
                return false;
            }
            if (self.f)(self.source.get()) {
                return true;
            }
        }
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        self.source.try_get()
    }
}

/// Transforms each element with `f`.
///
/// The output is computed on the first read after each `advance` and kept in
/// a slot owned by this stage, so `f` runs at most once per element and
/// references from `get` are invalidated by the next `advance`.
#[derive(Debug, Clone)]
pub struct Map<E, U, F> {
    pub(crate) source: E,
    pub(crate) f: F,
    pub(crate) value: Option<U>,
}

impl<E, U, F> Extractor for Map<E, U, F>
where
    E: Extractor,
    F: FnMut(&E::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        self.value = None;
        self.source.advance()
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        if self.value.is_none() {
            let input = self.source.try_get()?;
            self.value = Some((self.f)(input));
        }
        self.value.as_ref().ok_or(StreamError::NotAdvanced)
    }
}
