//! The rich iterator wrapper and its state-policy machinery.
//!
//! A [`RichIter`] is a handle to one cursor slot. Handles are cheap: cloning
//! a handle with [`RichIter::alias`] gives a second reference to the *same*
//! iterator, which is how the mutable policy can hand back "the same
//! iterator" and how the exclusive policy can leave stale handles that fail
//! loudly.
//!
//! Every transformation goes through one of two doors:
//!
//! - `derive` for transformations that change the item type,
//! - `rebind` for transformations that keep it.
//!
//! Both apply the iterator's [`StatePolicy`] before the new cursor is built.
//! Arguments are validated by the callers before either door is entered, so
//! a failing operation never leaves the slot half-updated.

mod access;
mod chain;
mod ops;
mod transform;

pub use chain::ChainProxy;

use crate::adapters::TeeFork;
use crate::builder::{IterConfig, RichIterBuilder};
use crate::core::nested;
use crate::core::slot::Slot;
use crate::core::{Cursor, IterError, Result, StatePolicy};
use crate::rewind::{Restart, Rewind, RewindStrategy};
use std::cell::{RefCell, RefMut};
use std::fmt;
use std::iter;
use std::ops::Add;
use std::rc::Rc;
use tracing::{debug, trace};

/// Mutable state behind a rich iterator handle.
struct Inner<T> {
    slot: Slot<T>,
    /// Value pulled by `has_next` and not yet handed out.
    peeked: Option<T>,
    rewind: Option<Rewind<T>>,
}

impl<T: Clone + 'static> Inner<T> {
    fn pull(&mut self) -> Result<Option<T>> {
        self.slot.check()?;
        let value = match self.peeked.take() {
            Some(value) => Some(value),
            None => self.slot.cursor_mut()?.next(),
        };
        if let (Some(value), Some(rewind)) = (&value, self.rewind.as_mut()) {
            rewind.observe(value);
        }
        Ok(value)
    }

    fn peek(&mut self) -> Result<bool> {
        self.slot.check()?;
        if self.peeked.is_none() {
            self.peeked = self.slot.cursor_mut()?.next();
        }
        Ok(self.peeked.is_some())
    }

    /// Move the cursor out, splicing a peeked value back in front of it.
    fn take_cursor(&mut self, replacement: Slot<T>) -> Result<Cursor<T>> {
        let cursor = self.slot.take(replacement)?;
        Ok(match self.peeked.take() {
            Some(value) => Box::new(iter::once(value).chain(cursor)),
            None => cursor,
        })
    }

    /// Keep one fork of the cursor and return `n` more.
    fn fork(&mut self, n: usize) -> Result<Vec<TeeFork<T>>> {
        let own = TeeFork::new(self.take_cursor(Slot::Invalidated)?);
        let forks = (0..n).map(|_| own.sibling()).collect();
        self.slot = Slot::live(Box::new(own));
        Ok(forks)
    }

    /// Keep one fork of the cursor and return the other.
    fn split_off(&mut self) -> Result<Cursor<T>> {
        let own = TeeFork::new(self.take_cursor(Slot::Invalidated)?);
        let theirs = own.sibling();
        self.slot = Slot::live(Box::new(own));
        Ok(Box::new(theirs))
    }

    fn rewind(&mut self) -> Result<usize> {
        self.slot.check()?;
        if self.rewind.is_none() {
            return Err(IterError::NotRewindable);
        }
        let rest = self.take_cursor(Slot::Invalidated)?;
        let (cursor, replayed) = match self.rewind.as_mut() {
            Some(rewind) => rewind.replay(rest),
            None => (rest, 0),
        };
        self.slot = Slot::live(cursor);
        Ok(replayed)
    }
}

/// Iterator wrapper exposing chained transformations under a fixed
/// [`StatePolicy`], with optional rewind.
///
/// Under the shared policy every transformation forks the cursor. The fork
/// this iterator keeps holds each value a derived iterator has read and this
/// one has not, for as long as this iterator is alive. Drop or drain the
/// source when only the derived iterator is needed.
///
/// # Example
///
/// ```rust
/// use rich_iter::{IterConfig, RichIter, StatePolicy};
///
/// let numbers = RichIter::new(vec![1, 2, 3, 4, 5]);
/// let odd = numbers.filter(|n| n % 2 == 1).unwrap();
///
/// // Shared policy: the source is still readable on its own.
/// assert_eq!(odd.to_vec().unwrap(), vec![1, 3, 5]);
/// assert_eq!(numbers.to_vec().unwrap(), vec![1, 2, 3, 4, 5]);
///
/// // Exclusive policy: the source becomes a tripwire.
/// let numbers = RichIter::with_config(vec![1, 2, 3], IterConfig::new(StatePolicy::Exclusive));
/// let doubled = numbers.map(|n| n * 2).unwrap();
/// assert!(numbers.try_next().is_err());
/// assert_eq!(doubled.to_vec().unwrap(), vec![2, 4, 6]);
/// ```
pub struct RichIter<T> {
    inner: Rc<RefCell<Inner<T>>>,
    config: IterConfig,
}

/// Wrap a source with the default configuration (shared, not rewindable).
pub fn rich_iter<I>(source: I) -> RichIter<I::Item>
where
    I: IntoIterator,
    I::Item: Clone + 'static,
    I::IntoIter: 'static,
{
    RichIter::new(source)
}

/// Fresh-traversal factory for an arithmetic progression.
pub(crate) fn counter<T>(start: T, step: T) -> Restart<T>
where
    T: Clone + Add<Output = T> + 'static,
{
    Rc::new(move || -> Cursor<T> {
        let step = step.clone();
        Box::new(iter::successors(Some(start.clone()), move |value| {
            Some(value.clone() + step.clone())
        }))
    })
}

/// Fresh-traversal factory for a repeated value; `None` repeats forever.
pub(crate) fn repeater<T>(value: T, times: Option<usize>) -> Restart<T>
where
    T: Clone + 'static,
{
    Rc::new(move || -> Cursor<T> {
        match times {
            Some(times) => Box::new(iter::repeat(value.clone()).take(times)),
            None => Box::new(iter::repeat(value.clone())),
        }
    })
}

/// Fresh-traversal factory for a reusable source.
pub(crate) fn restarter<S>(source: S) -> Restart<S::Item>
where
    S: IntoIterator + Clone + 'static,
    S::IntoIter: 'static,
{
    Rc::new(move || -> Cursor<S::Item> { Box::new(source.clone().into_iter()) })
}

impl<T: Clone + 'static> RichIter<T> {
    fn assemble(cursor: Cursor<T>, rewind: Option<Rewind<T>>, config: IterConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                slot: Slot::live(cursor),
                peeked: None,
                rewind,
            })),
            config,
        }
    }

    pub(crate) fn from_cursor(cursor: Cursor<T>, config: IterConfig) -> Self {
        let rewind = config.rewindable.then(Rewind::record);
        Self::assemble(cursor, rewind, config)
    }

    pub(crate) fn from_restart(restart: Restart<T>, config: IterConfig) -> Self {
        let cursor = restart();
        let rewind = config.rewindable.then(|| Rewind::Restart(restart));
        Self::assemble(cursor, rewind, config)
    }

    /// Wrap a source with the default configuration.
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::with_config(source, IterConfig::default())
    }

    /// Wrap a single-pass source.
    ///
    /// When the configuration is rewindable, values are recorded as they are
    /// produced so that [`rewind`](Self::rewind) can replay them.
    pub fn with_config<I>(source: I, config: IterConfig) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_cursor(Box::new(source.into_iter()), config)
    }

    /// Wrap a source that can be traversed again from the start by cloning it.
    ///
    /// Rewinding restarts the traversal instead of buffering values.
    ///
    /// ```rust
    /// use rich_iter::{IterConfig, RewindStrategy, RichIter, StatePolicy};
    ///
    /// let config = IterConfig::new(StatePolicy::Shared).with_rewind();
    /// let letters = RichIter::reusable(vec!['a', 'b', 'c'], config);
    /// assert_eq!(letters.rewind_strategy(), Some(RewindStrategy::Restart));
    ///
    /// letters.try_next().unwrap();
    /// letters.try_next().unwrap();
    /// assert_eq!(letters.rewind().unwrap().to_vec().unwrap(), vec!['a', 'b', 'c']);
    /// ```
    pub fn reusable<S>(source: S, config: IterConfig) -> Self
    where
        S: IntoIterator<Item = T> + Clone + 'static,
        S::IntoIter: 'static,
    {
        Self::from_restart(restarter(source), config)
    }

    /// Infinite arithmetic progression `start, start + step, ...`.
    pub fn count(start: T, step: T, config: IterConfig) -> Self
    where
        T: Add<Output = T>,
    {
        Self::from_restart(counter(start, step), config)
    }

    /// `value` repeated `times` times, or forever when `times` is `None`.
    pub fn repeat(value: T, times: Option<usize>, config: IterConfig) -> Self {
        Self::from_restart(repeater(value, times), config)
    }

    pub fn builder() -> RichIterBuilder<T> {
        RichIterBuilder::new()
    }

    fn state(&self) -> Result<RefMut<'_, Inner<T>>> {
        self.inner
            .try_borrow_mut()
            .map_err(|_| IterError::ReentrantPull)
    }

    /// Pull the next value.
    ///
    /// Returns `Ok(None)` at exhaustion. Fails with the slot's permanent
    /// error, on every call, once the cursor has been invalidated or rebound.
    ///
    /// Another rich iterator read from inside this pull, for example the
    /// second sequence of a `zip`, reports its errors here instead of
    /// panicking.
    pub fn try_next(&self) -> Result<Option<T>> {
        let result = nested::within_pull(|| self.state()?.pull());
        if let Err(err) = &result {
            trace!(error = %err, policy = %self.config.policy, "read rejected");
        }
        result
    }

    /// Check whether another value is available.
    ///
    /// The value pulled to answer is held back and returned by the next read.
    pub fn has_next(&self) -> Result<bool> {
        nested::within_pull(|| self.state()?.peek())
    }

    /// Drain the remaining values.
    pub fn to_vec(&self) -> Result<Vec<T>> {
        let mut values = Vec::new();
        while let Some(value) = self.try_next()? {
            values.push(value);
        }
        Ok(values)
    }

    /// Replay values produced since the last rewind point, then continue.
    ///
    /// Returns the same iterator for chaining.
    pub fn rewind(&self) -> Result<&Self> {
        let replayed = self.state()?.rewind()?;
        debug!(
            replayed,
            strategy = ?self.rewind_strategy(),
            "rewound iterator"
        );
        Ok(self)
    }

    /// Fork into `n` new iterators that each see the remaining values.
    ///
    /// This iterator keeps its own fork and stays readable under every
    /// policy.
    pub fn tee(&self, n: usize) -> Result<Vec<RichIter<T>>> {
        let forks = self.state()?.fork(n)?;
        debug!(n, policy = %self.config.policy, "forked iterator");
        Ok(forks
            .into_iter()
            .map(|fork| RichIter::from_cursor(Box::new(fork), self.config))
            .collect())
    }

    /// Fork a single independent copy.
    pub fn fork(&self) -> Result<RichIter<T>> {
        let cursor = self.state()?.split_off()?;
        debug!(policy = %self.config.policy, "forked iterator");
        Ok(RichIter::from_cursor(cursor, self.config))
    }

    /// Apply a transformation that changes the item type.
    pub(crate) fn derive<U, F>(&self, op: &'static str, build: F) -> Result<RichIter<U>>
    where
        U: Clone + 'static,
        F: FnOnce(Cursor<T>) -> Cursor<U>,
    {
        let policy = self.config.policy;
        let (cursor, source) = {
            let mut state = self.state()?;
            match policy {
                StatePolicy::Shared => (state.split_off()?, "forked"),
                StatePolicy::Mutable => (state.take_cursor(Slot::Rebound { op })?, "rebound"),
                StatePolicy::Exclusive => (state.take_cursor(Slot::Invalidated)?, "invalidated"),
            }
        };
        debug!(op, %policy, source, "derived iterator");
        Ok(RichIter::from_cursor(build(cursor), self.config))
    }

    /// Apply a transformation that keeps the item type.
    ///
    /// Under the mutable policy the cursor is replaced in place and a handle
    /// to this same iterator is returned.
    pub(crate) fn rebind<F>(&self, op: &'static str, build: F) -> Result<RichIter<T>>
    where
        F: FnOnce(Cursor<T>) -> Cursor<T>,
    {
        if self.config.policy != StatePolicy::Mutable {
            return self.derive(op, build);
        }

        {
            let mut state = self.state()?;
            let cursor = state.take_cursor(Slot::Invalidated)?;
            state.slot = Slot::live(build(cursor));
            if self.config.rewindable {
                state.rewind = Some(Rewind::record());
            }
        }
        debug!(op, policy = %self.config.policy, "rebound iterator in place");
        Ok(self.alias())
    }

    pub fn rewind_strategy(&self) -> Option<RewindStrategy> {
        self.inner
            .try_borrow()
            .ok()
            .and_then(|state| state.rewind.as_ref().map(Rewind::strategy))
    }
}

impl<T> RichIter<T> {
    /// A second handle to this same iterator.
    pub fn alias(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            config: self.config,
        }
    }

    /// Whether `other` is a handle to this same iterator.
    pub fn same_as(&self, other: &RichIter<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn config(&self) -> IterConfig {
        self.config
    }

    pub fn policy(&self) -> StatePolicy {
        self.config.policy
    }

    pub fn is_rewindable(&self) -> bool {
        self.config.rewindable
    }

    /// Whether the cursor can still be read.
    ///
    /// False once the exclusive policy invalidated it or the mutable policy
    /// rebound it to another item type. True while called from inside this
    /// iterator's own pull, which only runs on a live cursor.
    pub fn is_live(&self) -> bool {
        match self.inner.try_borrow() {
            Ok(state) => state.slot.is_live(),
            // Borrowed mutably: a pull or peek passed the slot check and is
            // still running. Transformations hold the borrow without running
            // caller code.
            Err(_) => true,
        }
    }
}

impl<T> fmt::Debug for RichIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("RichIter");
        out.field("policy", &self.config.policy)
            .field("rewindable", &self.config.rewindable);
        if let Ok(state) = self.inner.try_borrow() {
            out.field("slot", &state.slot)
                .field("peeked", &state.peeked.is_some())
                .field("rewind", &state.rewind);
        }
        out.finish()
    }
}

fn pull_or_panic<T: Clone + 'static>(iter: &RichIter<T>) -> Option<T> {
    match iter.try_next() {
        Ok(value) => value,
        Err(err) => match nested::park(err) {
            Ok(()) => None,
            Err(err) => panic!("{err}"),
        },
    }
}

/// Reads through a shared reference.
///
/// Inside another rich iterator's pull, an error ends this sequence and is
/// returned by the enclosing [`RichIter::try_next`].
///
/// # Panics
///
/// Outside any pull, `next` panics with the [`IterError`] message when the
/// cursor was invalidated or rebound. Use [`RichIter::try_next`] to handle
/// these as errors.
impl<T: Clone + 'static> Iterator for &RichIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        pull_or_panic(self)
    }
}

/// Owning iterator over a [`RichIter`] handle.
///
/// Other handles to the same iterator stay valid and observe the reads.
///
/// # Panics
///
/// Same as the iterator over `&RichIter`.
pub struct IntoIter<T>(RichIter<T>);

impl<T: Clone + 'static> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        pull_or_panic(&self.0)
    }
}

impl<T: Clone + 'static> IntoIterator for RichIter<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(policy: StatePolicy) -> IterConfig {
        IterConfig::new(policy)
    }

    #[test]
    fn pulls_in_source_order() {
        let iter = RichIter::new(0..10);
        assert_eq!(iter.try_next(), Ok(Some(0)));
        assert_eq!(iter.try_next(), Ok(Some(1)));
        assert_eq!(iter.to_vec().unwrap(), (2..10).collect::<Vec<_>>());
        assert_eq!(iter.try_next(), Ok(None));
        assert_eq!(iter.to_vec().unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn has_next_never_drops_the_peeked_value() {
        let iter = RichIter::new(vec![1, 2]);
        assert_eq!(iter.has_next(), Ok(true));
        assert_eq!(iter.has_next(), Ok(true));
        assert_eq!(iter.try_next(), Ok(Some(1)));
        assert_eq!(iter.try_next(), Ok(Some(2)));
        assert_eq!(iter.has_next(), Ok(false));
    }

    #[test]
    fn peeked_value_travels_into_transformations() {
        for policy in StatePolicy::ALL {
            let iter = RichIter::with_config(vec![1, 2, 3], config(policy));
            assert_eq!(iter.has_next(), Ok(true));
            let doubled = iter.map(|n| n * 2).unwrap();
            assert_eq!(doubled.to_vec().unwrap(), vec![2, 4, 6], "{policy}");
        }
    }

    #[test]
    fn shared_derive_leaves_source_intact() {
        let iter = RichIter::new(vec![1, 2, 3]);
        let strings = iter.map(|n| n.to_string()).unwrap();
        assert!(iter.is_live());
        assert_eq!(iter.to_vec().unwrap(), vec![1, 2, 3]);
        assert_eq!(strings.to_vec().unwrap(), vec!["1", "2", "3"]);
    }

    #[test]
    fn mutable_rebind_returns_same_iterator() {
        let iter = RichIter::with_config(1..=6, config(StatePolicy::Mutable));
        let evens = iter.filter(|n| n % 2 == 0).unwrap();
        assert!(evens.same_as(&iter));
        assert_eq!(iter.to_vec().unwrap(), vec![2, 4, 6]);
    }

    #[test]
    fn mutable_type_change_marks_source_rebound() {
        let iter = RichIter::with_config(vec![1, 2], config(StatePolicy::Mutable));
        let strings = iter.map(|n| n.to_string()).unwrap();
        assert!(!iter.is_live());
        assert_eq!(iter.try_next(), Err(IterError::Rebound { op: "map" }));
        assert_eq!(strings.to_vec().unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn exclusive_invalidation_is_permanent() {
        let iter = RichIter::with_config(vec![1, 2], config(StatePolicy::Exclusive));
        let _derived = iter.map(|n| n + 1).unwrap();
        for _ in 0..3 {
            assert_eq!(iter.try_next(), Err(IterError::UseAfterInvalidation));
            assert_eq!(iter.has_next(), Err(IterError::UseAfterInvalidation));
        }
        assert!(matches!(
            iter.filter(|_| true),
            Err(IterError::UseAfterInvalidation)
        ));
    }

    #[test]
    fn tee_never_invalidates_source() {
        let iter = RichIter::with_config(vec![1, 2, 3], config(StatePolicy::Exclusive));
        let forks = iter.tee(2).unwrap();
        assert_eq!(forks.len(), 2);
        assert_eq!(iter.to_vec().unwrap(), vec![1, 2, 3]);
        for fork in &forks {
            assert_eq!(fork.policy(), StatePolicy::Exclusive);
            assert_eq!(fork.to_vec().unwrap(), vec![1, 2, 3]);
        }
    }

    #[test]
    fn mutable_chain_with_itself_reports_reentrant_pull() {
        let iter = RichIter::with_config(vec![1], config(StatePolicy::Mutable));
        let looped = iter.chain().with(iter.alias()).unwrap();
        assert!(looped.same_as(&iter));
        assert_eq!(looped.try_next(), Ok(Some(1)));
        assert_eq!(looped.try_next(), Err(IterError::ReentrantPull));
        assert_eq!(looped.try_next(), Err(IterError::ReentrantPull));
    }

    #[test]
    fn mutable_zip_with_itself_reports_rebound() {
        let iter = RichIter::with_config(vec![1, 2], config(StatePolicy::Mutable));
        let pairs = iter.zip(iter.alias()).unwrap();
        assert_eq!(pairs.try_next(), Err(IterError::Rebound { op: "zip" }));
        assert_eq!(pairs.to_vec(), Err(IterError::Rebound { op: "zip" }));
    }

    #[test]
    fn exclusive_combination_with_itself_reports_invalidation() {
        let iter = RichIter::with_config(vec![1, 2, 3], config(StatePolicy::Exclusive));
        let pairs = iter.zip(iter.alias()).unwrap();
        assert_eq!(pairs.try_next(), Err(IterError::UseAfterInvalidation));

        let iter = RichIter::with_config(vec![1, 2], config(StatePolicy::Exclusive));
        let joined = iter.chain().with(iter.alias()).unwrap();
        assert_eq!(joined.try_next(), Ok(Some(1)));
        assert_eq!(joined.try_next(), Ok(Some(2)));
        assert_eq!(joined.try_next(), Err(IterError::UseAfterInvalidation));
        assert_eq!(joined.has_next(), Err(IterError::UseAfterInvalidation));
    }

    #[test]
    fn shared_combination_with_itself_reads_the_kept_fork() {
        // The derived iterator reads its fork first, then the source.
        let iter = RichIter::new(vec![1, 2, 3]);
        let pairs = iter.zip(iter.alias()).unwrap();
        assert_eq!(pairs.to_vec().unwrap(), vec![(1, 1), (2, 2), (3, 3)]);
        assert_eq!(iter.try_next(), Ok(None));

        let iter = RichIter::new(vec![1, 2]);
        let joined = iter.chain().with(iter.alias()).unwrap();
        assert_eq!(joined.to_vec().unwrap(), vec![1, 2, 1, 2]);
        assert_eq!(iter.try_next(), Ok(None));
    }

    #[test]
    fn compress_by_itself_under_every_policy() {
        for (policy, expected) in [
            (StatePolicy::Shared, Ok(vec![true, true])),
            (StatePolicy::Mutable, Err(IterError::ReentrantPull)),
            (StatePolicy::Exclusive, Err(IterError::UseAfterInvalidation)),
        ] {
            let flags = RichIter::with_config(vec![true, false, true], config(policy));
            let kept = flags.compress(flags.alias()).unwrap();
            assert_eq!(kept.to_vec(), expected, "{policy}");
        }
    }

    #[test]
    fn fork_reading_its_own_tee_reports_reentrant_pull() {
        let iter = RichIter::with_config(vec![1], config(StatePolicy::Mutable));
        iter.chain().with(iter.alias()).unwrap();
        let copy = iter.fork().unwrap();
        assert_eq!(copy.try_next(), Ok(Some(1)));
        assert_eq!(copy.try_next(), Err(IterError::ReentrantPull));
    }

    #[test]
    fn is_live_inside_own_pull() {
        let iter = RichIter::with_config(vec![1, 2], config(StatePolicy::Mutable));
        let alias = iter.alias();
        let checked = iter.filter(move |_| alias.is_live()).unwrap();
        assert_eq!(checked.to_vec().unwrap(), vec![1, 2]);
    }

    #[test]
    fn alias_shares_reads() {
        let iter = RichIter::new(vec![1, 2, 3]);
        let alias = iter.alias();
        assert!(alias.same_as(&iter));
        assert_eq!(alias.try_next(), Ok(Some(1)));
        assert_eq!(iter.try_next(), Ok(Some(2)));
    }

    #[test]
    fn iterator_impls_collect() {
        let iter = RichIter::new(vec![1, 2, 3]);
        assert_eq!((&iter).take(2).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(iter.into_iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    #[should_panic(expected = "iterator can no longer be used")]
    fn iterator_panics_after_invalidation() {
        let iter = RichIter::with_config(vec![1], config(StatePolicy::Exclusive));
        let _derived = iter.map(|n| n).unwrap();
        let _ = (&iter).next();
    }

    #[test]
    fn generative_constructors() {
        let counter = RichIter::count(10, 5, IterConfig::default());
        assert_eq!((&counter).take(3).collect::<Vec<_>>(), vec![10, 15, 20]);

        let bounded = RichIter::repeat('x', Some(3), IterConfig::default());
        assert_eq!(bounded.to_vec().unwrap(), vec!['x'; 3]);

        let forever = RichIter::repeat(7, None, IterConfig::default());
        assert_eq!((&forever).take(4).collect::<Vec<_>>(), vec![7; 4]);
    }
}
