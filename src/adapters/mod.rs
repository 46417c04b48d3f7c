//! Iterator adapters that the standard library and `itertools` do not
//! provide in the shape rich iterators need.
//!
//! All of them are plain single-pass iterators over an owned source and know
//! nothing about state policies.

mod accumulate;
mod cycle;
mod deferred;
mod group;
mod tee;

pub use accumulate::Accumulate;
pub use cycle::Cycle;
pub use deferred::Deferred;
pub use group::GroupBy;
pub use tee::TeeFork;
