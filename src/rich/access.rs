use super::RichIter;
use crate::core::{IterError, Result};
use crate::index::{non_negative, Islice, SliceBounds};
use tracing::trace;

impl<T: Clone + 'static> RichIter<T> {
    /// Read the value `index` positions ahead.
    ///
    /// The values before it are pulled and discarded, so this consumes
    /// `index + 1` values from the iterator. It is a read, not a
    /// transformation: the state policy does not apply, and a rewindable
    /// iterator records everything it passes over.
    ///
    /// ```rust
    /// use rich_iter::{rich_iter, IterError};
    ///
    /// let iter = rich_iter(vec![1, 2, 3]);
    /// assert_eq!(iter.at(1), Ok(2));
    /// assert_eq!(iter.at(0), Ok(3));
    /// assert_eq!(iter.at(0), Err(IterError::OutOfRange { index: 0 }));
    /// ```
    pub fn at(&self, index: isize) -> Result<T> {
        let wanted = non_negative("index", index)?;
        for _ in 0..wanted {
            if self.try_next()?.is_none() {
                return Err(IterError::OutOfRange { index: wanted });
            }
        }
        let value = self.try_next()?.ok_or(IterError::OutOfRange { index: wanted });
        if value.is_err() {
            trace!(index = wanted, "index past the end");
        }
        value
    }

    /// Lazily keep the values at positions `start..stop` stepping by `step`.
    pub fn slice(&self, bounds: impl Into<SliceBounds>) -> Result<RichIter<T>> {
        let (start, stop, step) = bounds.into().resolve()?;
        self.rebind("slice", |cursor| {
            Box::new(Islice::new(cursor, start, stop, step))
        })
    }
}
