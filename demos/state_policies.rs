//! State Policies
//!
//! This example shows what happens to a source iterator when it is
//! transformed under each state policy.
//!
//! Key concepts:
//! - Shared: the source keeps its own fork and stays readable
//! - Mutable: same-type transformations rebind the source in place
//! - Exclusive: the source becomes a tripwire after one transformation
//! - Forking with tee never invalidates the source
//!
//! Run with: RUST_LOG=debug cargo run --example state_policies

use rich_iter::{IterConfig, IterError, RichIter, StatePolicy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), IterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== State Policies Example ===\n");

    for policy in StatePolicy::ALL {
        println!("--- {policy} ---");
        let numbers = RichIter::with_config(1..=6, IterConfig::new(policy));
        let evens = numbers.filter(|n| n % 2 == 0)?;

        println!("  filter returned the source itself: {}", evens.same_as(&numbers));
        println!("  evens: {:?}", evens.to_vec()?);
        match numbers.try_next() {
            Ok(next) => println!("  source after filter: next = {next:?}"),
            Err(err) => println!("  source after filter: {err}"),
        }
        println!();
    }

    println!("--- mutable, type-changing ---");
    let numbers = RichIter::with_config(1..=3, IterConfig::new(StatePolicy::Mutable));
    let labels = numbers.map(|n| format!("item-{n}"))?;
    println!("  labels: {:?}", labels.to_vec()?);
    if let Err(err) = numbers.try_next() {
        println!("  source: {err}");
    }

    println!("\n--- exclusive tee ---");
    let numbers = RichIter::with_config(1..=3, IterConfig::new(StatePolicy::Exclusive));
    let forks = numbers.tee(2)?;
    for (i, fork) in forks.iter().enumerate() {
        println!("  fork {i}: {:?}", fork.to_vec()?);
    }
    println!("  source: {:?}", numbers.to_vec()?);

    println!("\n--- operators ---");
    let words = RichIter::new(vec!["ant", "bee", "cat", "dog"]);
    let pairs = (&words / 2)?;
    println!("  combinations of 2: {}", pairs.to_vec()?.len());
    let shouted = (&words | (|w: &str| w.to_uppercase()))?;
    println!("  shouted: {:?}", shouted.to_vec()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
