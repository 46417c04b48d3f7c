use crate::core::StatePolicy;
use serde::{Deserialize, Serialize};

/// Settings fixed when an iterator is built and inherited by every iterator
/// derived from it.
///
/// Missing fields deserialize to their defaults, so `{}` is the shared,
/// non-rewindable configuration.
///
/// # Example
///
/// ```rust
/// use rich_iter::{IterConfig, StatePolicy};
///
/// let config: IterConfig = serde_json::from_str(r#"{"policy": "mutable"}"#).unwrap();
/// assert_eq!(config, IterConfig::new(StatePolicy::Mutable));
/// assert!(!config.rewindable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IterConfig {
    pub policy: StatePolicy,
    pub rewindable: bool,
}

impl IterConfig {
    pub fn new(policy: StatePolicy) -> Self {
        Self {
            policy,
            rewindable: false,
        }
    }

    /// Same policy, with rewind enabled.
    pub fn with_rewind(self) -> Self {
        Self {
            rewindable: true,
            ..self
        }
    }
}

impl From<StatePolicy> for IterConfig {
    fn from(policy: StatePolicy) -> Self {
        Self::new(policy)
    }
}
