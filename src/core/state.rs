//! State policies governing cursor ownership across transformations.
//!
//! A policy is picked once, when an iterator is built, and every iterator
//! derived from it inherits the same policy.

use super::error::IterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What happens to an iterator's own cursor when a transformation consumes it.
///
/// # Example
///
/// ```rust
/// use rich_iter::StatePolicy;
///
/// let policy: StatePolicy = "exclusive".parse().unwrap();
/// assert_eq!(policy, StatePolicy::Exclusive);
/// assert!(policy.invalidates_source());
///
/// // The historical `immutable` policy is not supported.
/// assert!("immutable".parse::<StatePolicy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatePolicy {
    /// The source keeps an independent fork of its cursor and a new iterator
    /// is returned for the transformed values.
    ///
    /// Values read by the derived iterator stay buffered in the source's fork
    /// until the source reads them too or is dropped.
    #[default]
    Shared,

    /// The source iterator itself is rebound to the transformed cursor.
    Mutable,

    /// The cursor moves into the new iterator and the source becomes a
    /// tripwire that fails every later read.
    Exclusive,
}

impl StatePolicy {
    /// All supported policies, in declaration order.
    pub const ALL: [StatePolicy; 3] = [Self::Shared, Self::Mutable, Self::Exclusive];

    /// Get the policy's name as used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Mutable => "mutable",
            Self::Exclusive => "exclusive",
        }
    }

    /// Check whether a transformation leaves the source permanently unusable.
    pub fn invalidates_source(&self) -> bool {
        matches!(self, Self::Exclusive)
    }

    /// Check whether a transformation keeps the source readable on its own.
    pub fn preserves_source(&self) -> bool {
        matches!(self, Self::Shared)
    }
}

impl fmt::Display for StatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatePolicy {
    type Err = IterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.name() == s)
            .ok_or_else(|| IterError::invalid(format!("Invalid state {s:?}")))
    }
}
