//! Source extractors (borrowed sequences, owned iterators, repeat) and the
//! predicate-driven skip_while / take_while stages

use crate::error::{StreamError, StreamResult};
use super::core::Extractor;
use super::handle::Stream;

// ================================
// Cursor slot shared by the sources
// ================================

#[derive(Debug, Clone)]
pub(crate) enum Slot<V> {
    Start,
    At(V),
    End,
}

impl<V> Slot<V> {
    fn read(&self) -> StreamResult<&V> {
        match self {
            Slot::Start => Err(StreamError::NotAdvanced),
            Slot::At(value) => Ok(value),
            Slot::End => Err(StreamError::Exhausted),
        }
    }

    fn is_end(&self) -> bool {
        matches!(self, Slot::End)
    }
}

// ================================
// Sources
// ================================

/// Source over a borrowed container.
///
/// Holds the container's borrowing iterator and a reference to the current
/// element; elements are never copied. Once the iterator runs dry it is not
/// polled again.
#[derive(Debug)]
pub struct Sequence<'a, T, I> {
    pub(crate) iter: I,
    pub(crate) slot: Slot<&'a T>,
}

// Manual impl: cloning copies references, so `T: Clone` is not required
impl<'a, T, I> Clone for Sequence<'a, T, I>
where
    I: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            slot: self.slot.clone(),
        }
    }
}

impl<'a, T, I> Extractor for Sequence<'a, T, I>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
{
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.slot.is_end() {
            return false;
        }
        match self.iter.next() {
            Some(item) => {
                self.slot = Slot::At(item);
                true
            }
            None => {
                self.slot = Slot::End;
                false
            }
        }
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        self.slot.read().copied()
    }
}

/// Source that owns an iterator and keeps its last item in a slot
#[derive(Debug, Clone)]
pub struct FromIter<I>
where
    I: Iterator,
{
    pub(crate) iter: I,
    pub(crate) slot: Slot<I::Item>,
}

impl<I> Extractor for FromIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        if self.slot.is_end() {
            return false;
        }
        match self.iter.next() {
            Some(item) => {
                self.slot = Slot::At(item);
                true
            }
            None => {
                self.slot = Slot::End;
                false
            }
        }
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        self.slot.read()
    }
}

pub type Empty<T> = FromIter<std::iter::Empty<T>>;

pub type Once<T> = FromIter<std::option::IntoIter<T>>;

/// Endless source yielding the same value
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    pub(crate) value: T,
    pub(crate) started: bool,
}

impl<T> Extractor for Repeat<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.started = true;
        true
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        if self.started {
            Ok(&self.value)
        } else {
            Err(StreamError::NotAdvanced)
        }
    }
}

// ================================
// Conditional Stages
// ================================

/// Drops leading elements while the predicate holds. After the first
/// rejection the predicate is never consulted again.
#[derive(Debug, Clone)]
pub struct SkipWhile<E, F> {
    pub(crate) source: E,
    pub(crate) f: F,
    pub(crate) skipping: bool,
}

impl<E, F> Extractor for SkipWhile<E, F>
where
    E: Extractor,
    F: FnMut(&E::Item) -> bool,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        if !self.skipping {
            return self.source.advance();
        }
        while self.source.advance() {
            if !(self.f)(self.source.get()) {
                self.skipping = false;
                return true;
            }
        }
        // Upstream ran dry while skipping; stays in skipping mode
        false
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        self.source.try_get()
    }
}

/// Yields elements while the predicate holds. The first rejected element is
/// consumed from upstream but not yielded, and the stage stays stopped.
#[derive(Debug, Clone)]
pub struct TakeWhile<E, F> {
    pub(crate) source: E,
    pub(crate) f: F,
    pub(crate) done: bool,
}

impl<E, F> Extractor for TakeWhile<E, F>
where
    E: Extractor,
    F: FnMut(&E::Item) -> bool,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if !self.source.advance() {
            self.done = true;
            return false;
        }
        let taking = (self.f)(self.source.get());
        if !taking {
            self.done = true;
        }
        taking
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        if self.done {
            return Err(StreamError::Exhausted);
        }
        self.source.try_get()
    }
}

// ================================
// Constructor Functions
// ================================

/// Create a stream over a borrowed container.
///
/// Works for anything whose shared reference iterates by reference: `Vec`,
/// arrays, slices, `VecDeque`, `BTreeSet` and so on. The stream borrows the
/// container for its whole life, so it cannot outlive it:
///
/// ```compile_fail
/// let mut stream = rs2_pull::from(&vec![1, 2, 3]);
/// stream.next();
/// ```
///
/// ```
/// let data = vec![1, 2, 3, 4, 5, 6];
/// let evens: Vec<i32> = rs2_pull::from(&data)
///     .filter(|x| x % 2 == 0)
///     .map(|x| x * 10)
///     .collect();
/// assert_eq!(evens, vec![20, 40, 60]);
/// ```
pub fn from<'a, C, T>(
    container: &'a C,
) -> Stream<Sequence<'a, T, <&'a C as IntoIterator>::IntoIter>>
where
    C: ?Sized,
    T: 'a,
    &'a C: IntoIterator<Item = &'a T>,
{
    Stream::new(Sequence {
        iter: container.into_iter(),
        slot: Slot::Start,
    })
}

/// Create a stream that owns the items of an iterator. The iterator may be
/// infinite; bound it with `take` or `take_while` before a terminal call.
pub fn from_iter<I>(iter: I) -> Stream<FromIter<I::IntoIter>>
where
    I: IntoIterator,
{
    Stream::new(FromIter {
        iter: iter.into_iter(),
        slot: Slot::Start,
    })
}

/// Create an empty stream
pub fn empty<T>() -> Stream<Empty<T>> {
    from_iter(std::iter::empty())
}

/// Create a stream that emits a single value
pub fn once<T>(value: T) -> Stream<Once<T>> {
    from_iter(Some(value))
}

/// Create a stream that repeats a value indefinitely
pub fn repeat<T>(value: T) -> Stream<Repeat<T>> {
    Stream::new(Repeat {
        value,
        started: false,
    })
}
