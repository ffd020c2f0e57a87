//! Error types for extractor access
//!
//! Running out of elements is not an error: `advance` reports it as `false`
//! and `next` as `None`. The errors here only describe reading the current
//! element from a stage that has no current element.

/// Reasons an extractor cannot hand out its current element
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// `get` was called before the first successful `advance`
    #[error("extractor read before the first successful advance")]
    NotAdvanced,

    /// `get` was called after `advance` reported exhaustion
    #[error("extractor read after advance reported exhaustion")]
    Exhausted,
}

/// Result type for checked extractor access
pub type StreamResult<T> = Result<T, StreamError>;
