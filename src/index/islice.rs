use std::num::NonZeroUsize;

/// Forward-only slice of a single-pass iterator.
///
/// Skips to `start`, yields every `step`-th value, and stops at absolute
/// position `stop` (exclusive) or at exhaustion. Once the next wanted
/// position would reach `stop`, the remaining gap up to `stop` is still
/// consumed, and nothing past `stop` ever is.
pub struct Islice<I> {
    iter: I,
    /// Absolute position of the next value to yield.
    next: usize,
    /// Number of values pulled from `iter` so far.
    consumed: usize,
    stop: Option<usize>,
    step: NonZeroUsize,
}

impl<I: Iterator> Islice<I> {
    pub fn new(iter: I, start: usize, stop: Option<usize>, step: NonZeroUsize) -> Self {
        let next = match stop {
            Some(stop) => start.min(stop),
            None => start,
        };
        Self {
            iter,
            next,
            consumed: 0,
            stop,
            step,
        }
    }
}

impl<I: Iterator> Iterator for Islice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.consumed < self.next {
            self.iter.next()?;
            self.consumed += 1;
        }
        if self.stop.is_some_and(|stop| self.consumed >= stop) {
            return None;
        }

        let value = self.iter.next()?;
        self.consumed += 1;
        self.next = match self.next.checked_add(self.step.get()) {
            Some(next) => self.stop.map_or(next, |stop| next.min(stop)),
            None => self.stop.unwrap_or(usize::MAX),
        };
        Some(value)
    }
}
