//! Builder for constructing rich iterators.

use crate::builder::IterConfig;
use crate::core::{Cursor, IterError, Result, StatePolicy};
use crate::rewind::Restart;
use crate::rich::{counter, repeater, restarter, RichIter};
use std::fmt;
use std::ops::Add;
use tracing::debug;

enum Source<T> {
    /// Read once; rewinding records values.
    SinglePass(Cursor<T>),
    /// Can be traversed again; rewinding restarts it.
    Reusable(Restart<T>),
}

/// Builder for constructing rich iterators with a fluent API.
///
/// # Example
///
/// ```rust
/// use rich_iter::{IterError, RichIter, RewindStrategy};
///
/// let iter = RichIter::builder()
///     .policy_named("mutable")?
///     .rewindable(true)
///     .reusable(vec![1, 2, 3])
///     .build()?;
/// assert_eq!(iter.rewind_strategy(), Some(RewindStrategy::Restart));
///
/// let missing = RichIter::<i32>::builder().build();
/// assert_eq!(missing.unwrap_err(), IterError::MissingSource);
/// # Ok::<(), IterError>(())
/// ```
pub struct RichIterBuilder<T> {
    config: IterConfig,
    source: Option<Source<T>>,
}

impl<T: Clone + 'static> RichIterBuilder<T> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: IterConfig::default(),
            source: None,
        }
    }

    pub fn policy(mut self, policy: StatePolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Set the policy by its configuration name.
    /// Returns an error for names other than `shared`, `mutable` and `exclusive`.
    pub fn policy_named(self, name: &str) -> Result<Self> {
        Ok(self.policy(name.parse()?))
    }

    pub fn rewindable(mut self, rewindable: bool) -> Self {
        self.config.rewindable = rewindable;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: IterConfig) -> Self {
        self.config = config;
        self
    }

    /// Read from a single-pass source.
    pub fn source<I>(mut self, source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        self.source = Some(Source::SinglePass(Box::new(source.into_iter())));
        self
    }

    /// Read from a source that is cloned for every fresh traversal.
    pub fn reusable<S>(mut self, source: S) -> Self
    where
        S: IntoIterator<Item = T> + Clone + 'static,
        S::IntoIter: 'static,
    {
        self.source = Some(Source::Reusable(restarter(source)));
        self
    }

    /// Count up from `start` by `step`, forever.
    pub fn count(mut self, start: T, step: T) -> Self
    where
        T: Add<Output = T>,
    {
        self.source = Some(Source::Reusable(counter(start, step)));
        self
    }

    /// Repeat `value` `times` times, or forever when `times` is `None`.
    pub fn repeat(mut self, value: T, times: Option<usize>) -> Self {
        self.source = Some(Source::Reusable(repeater(value, times)));
        self
    }

    /// Build the iterator.
    /// Returns an error if no source was given.
    pub fn build(self) -> Result<RichIter<T>> {
        let source = self.source.ok_or(IterError::MissingSource)?;
        debug!(
            policy = %self.config.policy,
            rewindable = self.config.rewindable,
            "building rich iterator"
        );
        Ok(match source {
            Source::SinglePass(cursor) => RichIter::from_cursor(cursor, self.config),
            Source::Reusable(restart) => RichIter::from_restart(restart, self.config),
        })
    }
}

impl<T: Clone + 'static> Default for RichIterBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RichIterBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            None => "none",
            Some(Source::SinglePass(_)) => "single-pass",
            Some(Source::Reusable(_)) => "reusable",
        };
        f.debug_struct("RichIterBuilder")
            .field("config", &self.config)
            .field("source", &source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RewindStrategy;

    #[test]
    fn builder_validates_required_source() {
        let result = RichIterBuilder::<i32>::new().policy(StatePolicy::Mutable).build();

        assert!(matches!(result, Err(IterError::MissingSource)));
    }

    #[test]
    fn builder_rejects_unknown_policy_name() {
        let result = RichIterBuilder::<i32>::new().policy_named("immutable");

        assert!(matches!(result, Err(IterError::InvalidArgument { .. })));
    }

    #[test]
    fn fluent_api_builds_iterator() {
        let iter = RichIterBuilder::new()
            .policy(StatePolicy::Exclusive)
            .rewindable(true)
            .source(vec!['a', 'b'])
            .build()
            .unwrap();

        assert_eq!(iter.policy(), StatePolicy::Exclusive);
        assert_eq!(iter.rewind_strategy(), Some(RewindStrategy::Record));
        assert_eq!(iter.to_vec().unwrap(), vec!['a', 'b']);
    }

    #[test]
    fn later_source_replaces_earlier() {
        let iter = RichIterBuilder::new()
            .source(vec![1])
            .count(5, 5)
            .build()
            .unwrap();

        assert_eq!((&iter).take(3).collect::<Vec<_>>(), vec![5, 10, 15]);
    }

    #[test]
    fn config_replaces_individual_settings() {
        let iter = RichIterBuilder::new()
            .rewindable(true)
            .config(IterConfig::new(StatePolicy::Mutable))
            .repeat(0, Some(2))
            .build()
            .unwrap();

        assert_eq!(iter.config(), IterConfig::new(StatePolicy::Mutable));
        assert_eq!(iter.rewind_strategy(), None);
    }

    #[test]
    fn reusable_source_rewinds_by_restarting() {
        let iter = RichIterBuilder::new()
            .rewindable(true)
            .reusable("xyz".to_string().into_bytes())
            .build()
            .unwrap();

        assert_eq!(iter.try_next(), Ok(Some(b'x')));
        iter.rewind().unwrap();
        assert_eq!(iter.to_vec().unwrap(), b"xyz".to_vec());
    }
}
