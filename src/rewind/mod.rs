//! Replay of values an iterator has already produced.
//!
//! A rewindable iterator keeps one of two strategies, chosen when it is
//! built:
//!
//! - **Record**: every value the iterator yields is appended to a buffer.
//!   Rewinding puts the buffer back in front of the remaining cursor.
//! - **Restart**: the source can hand out fresh traversals, so rewinding
//!   just asks for a new one and nothing is buffered.
//!
//! Both strategies produce the same values after a rewind.

use crate::core::Cursor;
use std::fmt;
use std::rc::Rc;

/// Which rewind strategy an iterator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewindStrategy {
    /// Values are buffered as they are produced.
    Record,
    /// A fresh traversal is requested from a reusable source.
    Restart,
}

/// Factory for fresh traversals of a reusable source.
pub(crate) type Restart<T> = Rc<dyn Fn() -> Cursor<T>>;

pub(crate) enum Rewind<T> {
    Record(Vec<T>),
    Restart(Restart<T>),
}

impl<T> Rewind<T> {
    /// Record strategy with an empty buffer.
    pub(crate) fn record() -> Self {
        Rewind::Record(Vec::new())
    }

    pub(crate) fn strategy(&self) -> RewindStrategy {
        match self {
            Rewind::Record(_) => RewindStrategy::Record,
            Rewind::Restart(_) => RewindStrategy::Restart,
        }
    }

    /// Note a value yielded to the caller.
    pub(crate) fn observe(&mut self, value: &T)
    where
        T: Clone,
    {
        if let Rewind::Record(seen) = self {
            seen.push(value.clone());
        }
    }

    /// Build the cursor that continues after a rewind.
    ///
    /// `rest` is the live remainder: the pending peeked value (if any)
    /// followed by the current cursor. It is discarded by the restart
    /// strategy.
    pub(crate) fn replay(&mut self, rest: Cursor<T>) -> (Cursor<T>, usize)
    where
        T: 'static,
    {
        match self {
            Rewind::Record(seen) => {
                let replayed = std::mem::take(seen);
                let len = replayed.len();
                (Box::new(replayed.into_iter().chain(rest)), len)
            }
            Rewind::Restart(start) => (start(), 0),
        }
    }
}

impl<T> fmt::Debug for Rewind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rewind::Record(seen) => f.debug_struct("Record").field("len", &seen.len()).finish(),
            Rewind::Restart(_) => f.write_str("Restart"),
        }
    }
}
