//! Pull-based stream stages
//!
//! Every stage implements [`Extractor`]; a [`Stream`] handle owns the
//! outermost stage and exposes chaining and terminal methods over it.

pub mod core;
pub mod constructors;
pub mod utility;
pub mod handle;

// Re-export core types
pub use self::core::{Extractor, Filter, Map, Skip, Take};

// Re-export sources and constructors
pub use constructors::{
    from, from_iter, empty, once, repeat,
    Sequence, FromIter, Empty, Once, Repeat, SkipWhile, TakeWhile,
};

// Re-export observation stages
pub use utility::{Inspect, Trace};

pub use handle::{Stream, Iter, IntoIter};
