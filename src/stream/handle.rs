//! The `Stream` handle: chaining methods that wrap the current extractor in a
//! new stage, and terminal methods that pull it to completion.

use std::fmt::Debug;

use crate::stream_configuration::TraceConfig;
use super::constructors::{SkipWhile, TakeWhile};
use super::core::{Extractor, Filter, Map, Skip, Take};
use super::utility::{Inspect, Trace};

/// Caller-facing handle owning the outermost stage of an extractor chain.
///
/// Chaining methods consume the handle and move its chain into the new
/// stage, so building a pipeline never copies upstream stages. To keep an
/// independent cursor, `clone()` the handle first (this deep-copies the
/// chain, which requires every stage and closure to be `Clone`).
///
/// Terminal methods borrow the handle mutably. Calling one again resumes
/// from wherever the previous call left the cursor; an exhausted stream
/// stays exhausted.
///
/// # Panics
///
/// Every method that reads elements panics if an extractor reports a
/// successful `advance` but then has no current element (see
/// [`Extractor::get`]).
#[derive(Debug, Clone)]
#[must_use = "streams are lazy and do nothing unless consumed"]
pub struct Stream<E> {
    extractor: E,
}

impl<E> Stream<E>
where
    E: Extractor,
{
    /// Wrap an existing extractor
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    pub fn into_inner(self) -> E {
        self.extractor
    }

    /// Wrap a mutable borrow of this stream's chain, so a sub-pipeline can be
    /// consumed while this handle keeps ownership.
    pub fn by_ref(&mut self) -> Stream<&mut E> {
        Stream::new(&mut self.extractor)
    }

    // ================================
    // Chaining
    // ================================

    pub fn map<U, F>(self, f: F) -> Stream<Map<E, U, F>>
    where
        F: FnMut(&E::Item) -> U,
    {
        log::trace!("stream: appending map stage");
        Stream::new(Map { source: self.extractor, f, value: None })
    }

    pub fn filter<F>(self, f: F) -> Stream<Filter<E, F>>
    where
        F: FnMut(&E::Item) -> bool,
    {
        log::trace!("stream: appending filter stage");
        Stream::new(Filter { source: self.extractor, f })
    }

    /// Drop the first `n` elements. The skipped elements are pulled from
    /// upstream on the first `advance`, not at construction.
    pub fn skip(self, n: usize) -> Stream<Skip<E>> {
        log::trace!("stream: appending skip({}) stage", n);
        Stream::new(Skip { source: self.extractor, remaining: n })
    }

    pub fn skip_while<F>(self, f: F) -> Stream<SkipWhile<E, F>>
    where
        F: FnMut(&E::Item) -> bool,
    {
        log::trace!("stream: appending skip_while stage");
        Stream::new(SkipWhile { source: self.extractor, f, skipping: true })
    }

    pub fn take(self, n: usize) -> Stream<Take<E>> {
        log::trace!("stream: appending take({}) stage", n);
        Stream::new(Take { source: self.extractor, remaining: n, exhausted: false })
    }

    pub fn take_while<F>(self, f: F) -> Stream<TakeWhile<E, F>>
    where
        F: FnMut(&E::Item) -> bool,
    {
        log::trace!("stream: appending take_while stage");
        Stream::new(TakeWhile { source: self.extractor, f, done: false })
    }

    /// Observe elements as they are read, without changing them
    pub fn inspect<F>(self, f: F) -> Stream<Inspect<E, F>>
    where
        F: FnMut(&E::Item),
    {
        log::trace!("stream: appending inspect stage");
        Stream::new(Inspect { source: self.extractor, f, inspected: false })
    }

    /// Log elements as they are read, see [`Trace`]
    pub fn trace(self, config: TraceConfig) -> Stream<Trace<E>>
    where
        E::Item: Debug,
    {
        log::trace!("stream: appending trace stage '{}'", config.label);
        Stream::new(Trace { source: self.extractor, config, seen: 0, logged: false })
    }

    // ================================
    // Position-advancing
    // ================================

    /// Advance once and return a copy of the element, or `None` when exhausted
    pub fn next(&mut self) -> Option<E::Item>
    where
        E::Item: Clone,
    {
        if self.extractor.advance() {
            Some(self.extractor.get().clone())
        } else {
            None
        }
    }

    /// Discard `n` elements, then behave like `next`
    pub fn nth(&mut self, mut n: usize) -> Option<E::Item>
    where
        E::Item: Clone,
    {
        while n != 0 {
            if !self.extractor.advance() {
                return None;
            }
            n -= 1;
        }
        self.next()
    }

    // ================================
    // Terminal
    // ================================

    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&E::Item),
    {
        while self.extractor.advance() {
            f(self.extractor.get());
        }
    }

    /// Number of elements left. Elements are advanced over but never read,
    /// so `map` and `inspect` callbacks do not run.
    pub fn count(&mut self) -> usize {
        let mut count: usize = 0;
        while self.extractor.advance() {
            count = count.saturating_add(1);
        }
        count
    }

    /// Stops at the first element satisfying `f`
    pub fn any<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&E::Item) -> bool,
    {
        while self.extractor.advance() {
            if f(self.extractor.get()) {
                return true;
            }
        }
        false
    }

    /// Stops at the first element failing `f`
    pub fn all<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&E::Item) -> bool,
    {
        while self.extractor.advance() {
            if !f(self.extractor.get()) {
                return false;
            }
        }
        true
    }

    pub fn fold<B, F>(&mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, &E::Item) -> B,
    {
        let mut acc = init;
        while self.extractor.advance() {
            acc = f(acc, self.extractor.get());
        }
        acc
    }

    /// Copy the remaining elements, in order, into a new collection
    pub fn collect<C>(&mut self) -> C
    where
        E::Item: Clone,
        C: Default + Extend<E::Item>,
    {
        let mut collection = C::default();
        while self.extractor.advance() {
            collection.extend(Some(self.extractor.get().clone()));
        }
        collection
    }

    pub fn find<F>(&mut self, mut f: F) -> Option<E::Item>
    where
        E::Item: Clone,
        F: FnMut(&E::Item) -> bool,
    {
        while self.extractor.advance() {
            let item = self.extractor.get();
            if f(item) {
                return Some(item.clone());
            }
        }
        None
    }

    /// Index of the first matching element, counted from the current position
    pub fn position<F>(&mut self, mut f: F) -> Option<usize>
    where
        F: FnMut(&E::Item) -> bool,
    {
        let mut pos: usize = 0;
        while self.extractor.advance() {
            if f(self.extractor.get()) {
                return Some(pos);
            }
            pos = pos.saturating_add(1);
        }
        None
    }

    pub fn last(&mut self) -> Option<E::Item>
    where
        E::Item: Clone,
    {
        let mut last = None;
        while self.extractor.advance() {
            last = Some(self.extractor.get().clone());
        }
        last
    }

    /// Borrowing `Iterator` view that clones each element out of the chain
    pub fn iter(&mut self) -> Iter<'_, E> {
        Iter { extractor: &mut self.extractor }
    }
}

/// Iterator over a borrowed stream, see [`Stream::iter`]
#[derive(Debug)]
pub struct Iter<'s, E> {
    extractor: &'s mut E,
}

impl<'s, E> Iterator for Iter<'s, E>
where
    E: Extractor,
    E::Item: Clone,
{
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.extractor.advance() {
            Some(self.extractor.get().clone())
        } else {
            None
        }
    }
}

/// Owning iterator returned by `Stream::into_iter`
#[derive(Debug, Clone)]
pub struct IntoIter<E> {
    extractor: E,
}

impl<E> Iterator for IntoIter<E>
where
    E: Extractor,
    E::Item: Clone,
{
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.extractor.advance() {
            Some(self.extractor.get().clone())
        } else {
            None
        }
    }
}

impl<E> IntoIterator for Stream<E>
where
    E: Extractor,
    E::Item: Clone,
{
    type Item = E::Item;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { extractor: self.extractor }
    }
}
