//! Core types shared by every rich iterator.
//!
//! This module contains the small state machine behind cursor ownership:
//! - State policies via the `StatePolicy` enum
//! - The cursor slot and its live / invalidated / rebound states
//! - The error taxonomy for reads and transformations
//! - Error hand-off from rich iterators read inside another one's pull

mod error;
pub(crate) mod nested;
pub(crate) mod slot;
mod state;

pub use error::{IterError, Result};
pub use slot::Cursor;
pub use state::StatePolicy;
