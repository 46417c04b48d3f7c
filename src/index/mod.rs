//! Bounded-index access over single-pass cursors.
//!
//! Indexing and slicing only ever move forward: an index is reached by
//! pulling and discarding the values before it, and a slice is a lazy
//! [`Islice`] over the cursor. Negative components are rejected because a
//! single-pass cursor cannot seek backwards from an unknown end.

mod islice;

pub use islice::Islice;

use crate::core::{IterError, Result};
use std::num::NonZeroUsize;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// Signed `start:stop:step` bounds, validated when a slice is applied.
///
/// # Example
///
/// ```rust
/// use rich_iter::{rich_iter, SliceBounds};
///
/// let odd_positions = rich_iter(0..10).slice(SliceBounds::from(1..).step_by(2)).unwrap();
/// assert_eq!(odd_positions.to_vec().unwrap(), vec![1, 3, 5, 7, 9]);
///
/// let window = rich_iter(0..10).slice(2..5).unwrap();
/// assert_eq!(window.to_vec().unwrap(), vec![2, 3, 4]);
///
/// assert!(rich_iter(0..10).slice(SliceBounds::new(Some(-1), None, None)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceBounds {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceBounds {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Replace the step, keeping start and stop.
    pub fn step_by(self, step: isize) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Resolve to unsigned `(start, stop, step)`, rejecting negative
    /// components and a zero step.
    pub(crate) fn resolve(&self) -> Result<(usize, Option<usize>, NonZeroUsize)> {
        let start = non_negative("start", self.start.unwrap_or(0))?;
        let stop = self.stop.map(|stop| non_negative("stop", stop)).transpose()?;
        let step = non_negative("step", self.step.unwrap_or(1))?;
        let step = NonZeroUsize::new(step)
            .ok_or_else(|| IterError::invalid("slice step must be at least 1, got 0"))?;
        Ok((start, stop, step))
    }
}

/// Convert a signed index, rejecting negative values.
pub(crate) fn non_negative(what: &str, value: isize) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        IterError::invalid(format!(
            "{what} must be non-negative on a single-pass iterator, got {value}"
        ))
    })
}

fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

impl From<Range<usize>> for SliceBounds {
    fn from(range: Range<usize>) -> Self {
        Self::new(Some(signed(range.start)), Some(signed(range.end)), None)
    }
}

impl From<RangeFrom<usize>> for SliceBounds {
    fn from(range: RangeFrom<usize>) -> Self {
        Self::new(Some(signed(range.start)), None, None)
    }
}

impl From<RangeTo<usize>> for SliceBounds {
    fn from(range: RangeTo<usize>) -> Self {
        Self::new(None, Some(signed(range.end)), None)
    }
}

impl From<RangeFull> for SliceBounds {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}
