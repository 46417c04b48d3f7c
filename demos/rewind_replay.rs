//! Rewind and Replay
//!
//! This example demonstrates the two rewind strategies and bounded-index
//! access over single-pass sources.
//!
//! Key concepts:
//! - Record: values are buffered as they are read, then replayed
//! - Restart: reusable sources start a fresh traversal instead
//! - Indexing and slicing only move forward
//!
//! Run with: RUST_LOG=debug cargo run --example rewind_replay

use rich_iter::{IterConfig, IterError, RichIter, SliceBounds, StatePolicy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), IterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Rewind and Replay Example ===\n");

    let config = IterConfig::new(StatePolicy::Shared).with_rewind();

    // A line reader can only be read once, so values are recorded
    let lines = "alpha\nbeta\ngamma".lines().map(str::to_string);
    let recorded = RichIter::with_config(lines, config);
    println!("Strategy: {:?}", recorded.rewind_strategy());
    println!("First read: {:?}", recorded.try_next()?);
    println!("Peek: {}", recorded.has_next()?);
    println!("After rewind: {:?}\n", recorded.rewind()?.to_vec()?);

    // Counting can always start over, so nothing is buffered
    let counter = RichIter::count(0u64, 3, config);
    println!("Strategy: {:?}", counter.rewind_strategy());
    println!("Value at index 4: {}", counter.at(4)?);
    counter.rewind()?;
    let window = counter.slice(SliceBounds::new(Some(2), Some(12), Some(3)))?;
    println!("Positions 2..12 step 3: {:?}\n", window.to_vec()?);

    match counter.at(-1) {
        Ok(value) => println!("Unexpected value {value}"),
        Err(err) => println!("Negative index rejected: {err}"),
    }

    let plain = RichIter::new(vec![1, 2, 3]);
    if let Err(err) = plain.rewind() {
        println!("Plain iterator: {err}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
