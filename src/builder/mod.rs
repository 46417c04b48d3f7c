//! Configuration and fluent construction of rich iterators.
//!
//! [`IterConfig`] is the plain, serializable part: a state policy and a
//! rewind flag. [`RichIterBuilder`] combines a config with a source and
//! validates the combination in `build()`.

pub mod config;
pub mod iter;

pub use config::IterConfig;
pub use iter::RichIterBuilder;
