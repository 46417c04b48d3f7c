//! Errors from rich iterators read inside another rich iterator's pull.
//!
//! A rich iterator passed as the second sequence of `zip`, `chain` and the
//! like is read through its `Iterator` impl, and a tee fork is read the same
//! way by every branch; neither has a way to return an error. Every `try_next` opens a frame for the duration of its pull; an
//! iterator read from inside that pull parks its error in the innermost
//! frame and reports exhaustion, and the enclosing `try_next` returns the
//! parked error.

use super::error::{IterError, Result};
use std::cell::RefCell;

thread_local! {
    static FRAMES: RefCell<Vec<Option<IterError>>> = const { RefCell::new(Vec::new()) };
}

/// An open pull. Closed on drop, also when the pull unwinds.
struct Frame {
    depth: usize,
}

impl Frame {
    fn open() -> Self {
        FRAMES.with(|frames| {
            let mut frames = frames.borrow_mut();
            frames.push(None);
            Frame {
                depth: frames.len(),
            }
        })
    }

    fn parked(&self) -> Option<IterError> {
        FRAMES.with(|frames| {
            frames
                .borrow_mut()
                .get_mut(self.depth - 1)
                .and_then(Option::take)
        })
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        FRAMES.with(|frames| frames.borrow_mut().truncate(self.depth - 1));
    }
}

/// Run `pull` in a frame, failing with the first error parked during it.
pub(crate) fn within_pull<R>(pull: impl FnOnce() -> Result<R>) -> Result<R> {
    let frame = Frame::open();
    let result = pull();
    match frame.parked() {
        Some(err) => Err(err),
        None => result,
    }
}

/// Park `err` in the innermost open pull.
///
/// Hands the error back when no pull is open.
pub(crate) fn park(err: IterError) -> Result<()> {
    FRAMES.with(|frames| match frames.borrow_mut().last_mut() {
        Some(slot) => {
            slot.get_or_insert(err);
            Ok(())
        }
        None => Err(err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn park_outside_a_pull_hands_error_back() {
        assert_eq!(park(IterError::ReentrantPull), Err(IterError::ReentrantPull));
    }

    #[test]
    fn first_parked_error_wins() {
        let result = within_pull(|| {
            park(IterError::ReentrantPull)?;
            park(IterError::UseAfterInvalidation)?;
            Ok(1)
        });
        assert_eq!(result, Err(IterError::ReentrantPull));
    }

    #[test]
    fn errors_park_in_the_innermost_frame() {
        let outer = within_pull(|| {
            let inner = within_pull(|| {
                park(IterError::NotRewindable)?;
                Ok(())
            });
            assert_eq!(inner, Err(IterError::NotRewindable));
            Ok("clean")
        });
        assert_eq!(outer, Ok("clean"));
    }

    #[test]
    fn frames_close_on_unwind() {
        let _ = std::panic::catch_unwind(|| within_pull(|| -> Result<()> { panic!("boom") }));
        assert_eq!(park(IterError::ReentrantPull), Err(IterError::ReentrantPull));
    }
}
