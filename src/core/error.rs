//! Errors raised by rich iterator operations.

use thiserror::Error;

/// Errors that can occur when reading from or transforming a [`RichIter`].
///
/// Running out of values is not an error: reads report exhaustion as
/// `Ok(None)` (or `None` through [`Iterator`]).
///
/// [`RichIter`]: crate::RichIter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterError {
    /// An argument was rejected before any state was touched.
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Integer indexing ran past the end of the sequence.
    #[error("Index {index} out of range")]
    OutOfRange { index: usize },

    /// The cursor was handed to a derived iterator under the exclusive policy.
    #[error("iterator can no longer be used")]
    UseAfterInvalidation,

    /// A mutable iterator moved its cursor into an iterator of another item type.
    #[error("iterator was rebound by `{op}`; continue through the iterator it returned")]
    Rebound { op: &'static str },

    /// The iterator tried to pull from itself while already being pulled.
    #[error("iterator is already being pulled")]
    ReentrantPull,

    #[error("Iterator is not rewindable. Build it with .rewindable(true)")]
    NotRewindable,

    #[error("Source not specified. Call .source(..), .reusable(..), .count(..) or .repeat(..) before .build()")]
    MissingSource,
}

impl IterError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Whether this error means the iterator can never be read again.
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::UseAfterInvalidation | Self::Rebound { .. })
    }
}

/// Shorthand result type for rich iterator operations.
pub type Result<T, E = IterError> = std::result::Result<T, E>;
