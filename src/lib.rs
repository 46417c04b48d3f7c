//! Rich Iter: chainable iterator transformations with explicit state policies
//!
//! A [`RichIter`] wraps any iterator and exposes a catalog of lazy
//! transformations (mapping, filtering, chaining, grouping, combinatorics,
//! slicing) as methods and operators. What happens to the source when it is
//! transformed is decided up front by its [`StatePolicy`], so reusing a
//! consumed iterator is either well defined or a loud error, never a silent
//! empty read.
//!
//! # Core Concepts
//!
//! - **State policies**: `shared` forks the source, `mutable` rebinds it in
//!   place, `exclusive` moves the cursor and invalidates the source
//! - **Rewind**: opt-in replay of everything produced since the last rewind
//!   point, by recording values or restarting a reusable source
//! - **Bounded-index access**: forward-only indexing and slicing with
//!   non-negative bounds
//!
//! # Example
//!
//! ```rust
//! use rich_iter::{IterConfig, IterError, RichIter, StatePolicy};
//!
//! let config = IterConfig::new(StatePolicy::Exclusive).with_rewind();
//! let words = RichIter::with_config(vec!["apple", "bob", "cat", "anna"], config);
//!
//! let lengths = words.filter(|w| w.starts_with('a'))?.map(|w| w.len())?;
//! assert_eq!(words.try_next(), Err(IterError::UseAfterInvalidation));
//!
//! assert_eq!(lengths.try_next()?, Some(5));
//! assert_eq!(lengths.rewind()?.to_vec()?, vec![5, 4]);
//! # Ok::<(), IterError>(())
//! ```

pub mod adapters;
pub mod builder;
pub mod core;
pub mod index;
pub mod rewind;
mod rich;

// Re-export commonly used types
pub use builder::{IterConfig, RichIterBuilder};
pub use core::{Cursor, IterError, Result, StatePolicy};
pub use index::SliceBounds;
pub use rewind::RewindStrategy;
pub use rich::{rich_iter, ChainProxy, IntoIter, RichIter};
