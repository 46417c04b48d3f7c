//! Cursor slot held by every rich iterator.
//!
//! The slot is the only place a cursor lives. Instead of swapping in a
//! poisoned sentinel cursor, a consumed slot records *why* it can no longer
//! be read, and every read reports that reason again.

use super::error::{IterError, Result};
use std::mem;

/// A single-pass, type-erased sequence producer.
pub type Cursor<T> = Box<dyn Iterator<Item = T>>;

/// The state of an iterator's cursor reference.
pub(crate) enum Slot<T> {
    /// Safe to pull from.
    Live(Cursor<T>),
    /// Handed off under the exclusive policy.
    Invalidated,
    /// Moved by a mutable iterator into an iterator of another item type.
    Rebound { op: &'static str },
}

impl<T> Slot<T> {
    pub(crate) fn live(cursor: Cursor<T>) -> Self {
        Slot::Live(cursor)
    }

    pub(crate) fn is_live(&self) -> bool {
        matches!(self, Slot::Live(_))
    }

    /// The permanent error of a slot that is no longer live.
    fn dead_error(&self) -> Option<IterError> {
        match self {
            Slot::Live(_) => None,
            Slot::Invalidated => Some(IterError::UseAfterInvalidation),
            Slot::Rebound { op } => Some(IterError::Rebound { op: *op }),
        }
    }

    /// Fail with the slot's permanent error unless it is live.
    pub(crate) fn check(&self) -> Result<()> {
        self.dead_error().map_or(Ok(()), Err)
    }

    pub(crate) fn cursor_mut(&mut self) -> Result<&mut Cursor<T>> {
        match self {
            Slot::Live(cursor) => Ok(cursor),
            Slot::Invalidated => Err(IterError::UseAfterInvalidation),
            Slot::Rebound { op } => Err(IterError::Rebound { op: *op }),
        }
    }

    /// Move the cursor out, leaving `replacement` behind.
    ///
    /// A non-live slot is left untouched and reports its error.
    pub(crate) fn take(&mut self, replacement: Slot<T>) -> Result<Cursor<T>> {
        match mem::replace(self, replacement) {
            Slot::Live(cursor) => Ok(cursor),
            dead => {
                let err = dead.dead_error().unwrap_or(IterError::UseAfterInvalidation);
                *self = dead;
                Err(err)
            }
        }
    }
}

impl<T> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Live(_) => f.write_str("Live"),
            Slot::Invalidated => f.write_str("Invalidated"),
            Slot::Rebound { op } => f.debug_struct("Rebound").field("op", op).finish(),
        }
    }
}
