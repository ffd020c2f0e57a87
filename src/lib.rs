//! Lazy, pull-based stream combinators.
//!
//! A stream is a chain of stages, each holding the stage before it by value.
//! Chaining methods (`map`, `filter`, `skip`, `take`, ...) only build the
//! chain; terminal methods (`for_each`, `count`, `fold`, `collect`, ...) pull
//! elements through it one at a time, without materialising intermediate
//! sequences.
//!
//! ```
//! let data = [5, 6, 1, 2, 9];
//! let head: Vec<i32> = rs2_pull::from(&data).take_while(|x| *x > 3).collect();
//! assert_eq!(head, vec![5, 6]);
//! ```

pub mod error;
pub mod stream;
pub mod stream_configuration;

pub use error::{StreamError, StreamResult};
pub use stream::{
    from, from_iter, empty, once, repeat,
    Extractor, Stream, Iter, IntoIter,
    Sequence, FromIter, Empty, Once, Repeat,
    Skip, SkipWhile, Take, TakeWhile, Filter, Map, Inspect, Trace,
};
pub use stream_configuration::TraceConfig;
