//! Property-based tests for rich iterator semantics.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use rich_iter::{IterConfig, IterError, RichIter, SliceBounds, StatePolicy};

prop_compose! {
    fn arbitrary_policy()(variant in 0..3u8) -> StatePolicy {
        match variant {
            0 => StatePolicy::Shared,
            1 => StatePolicy::Mutable,
            _ => StatePolicy::Exclusive,
        }
    }
}

prop_compose! {
    fn arbitrary_values()(values in prop::collection::vec(-100i32..100, 0..40)) -> Vec<i32> {
        values
    }
}

proptest! {
    #[test]
    fn map_and_filter_match_std(values in arbitrary_values(), policy in arbitrary_policy()) {
        let iter = RichIter::with_config(values.clone(), IterConfig::new(policy));
        let result = iter
            .filter(|n| n % 3 != 0)
            .and_then(|kept| kept.map(|n| i64::from(n) * 2))
            .unwrap()
            .to_vec()
            .unwrap();

        let expected: Vec<i64> = values
            .iter()
            .filter(|n| *n % 3 != 0)
            .map(|n| i64::from(*n) * 2)
            .collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn shared_source_is_never_consumed_by_transformations(values in arbitrary_values()) {
        let iter = RichIter::new(values.clone());
        let doubled = iter.map(|n| n * 2).unwrap();
        let _ = doubled.to_vec().unwrap();
        let _ = iter.filter(|n| *n > 0).unwrap().to_vec().unwrap();

        prop_assert_eq!(iter.to_vec().unwrap(), values);
    }

    #[test]
    fn exclusive_source_fails_every_later_read(
        values in arbitrary_values(),
        reads in 1..5usize,
    ) {
        let iter = RichIter::with_config(values, IterConfig::new(StatePolicy::Exclusive));
        let _derived = iter.takewhile(|_| true).unwrap();

        for _ in 0..reads {
            prop_assert_eq!(iter.try_next(), Err(IterError::UseAfterInvalidation));
        }
    }

    #[test]
    fn tee_forks_are_independent_under_interleaving(
        values in arbitrary_values(),
        schedule in prop::collection::vec(0..3usize, 0..120),
        policy in arbitrary_policy(),
    ) {
        let iter = RichIter::with_config(values.clone(), IterConfig::new(policy));
        let mut forks = iter.tee(2).unwrap();
        forks.push(iter);
        let mut seen = vec![Vec::new(); forks.len()];

        for which in schedule {
            if let Some(value) = forks[which].try_next().unwrap() {
                seen[which].push(value);
            }
        }
        for (fork, seen) in forks.iter().zip(seen.iter_mut()) {
            seen.extend(fork.to_vec().unwrap());
            prop_assert_eq!(&*seen, &values);
        }
    }

    #[test]
    fn rewind_replays_everything_since_the_rewind_point(
        values in arbitrary_values(),
        pulled in 0..50usize,
        reusable in any::<bool>(),
    ) {
        let config = IterConfig::default().with_rewind();
        let iter = if reusable {
            RichIter::reusable(values.clone(), config)
        } else {
            RichIter::with_config(values.clone(), config)
        };
        for _ in 0..pulled {
            let _ = iter.try_next().unwrap();
        }

        prop_assert_eq!(iter.rewind().unwrap().to_vec().unwrap(), values.clone());
        prop_assert_eq!(iter.rewind().unwrap().to_vec().unwrap(), values);
    }

    #[test]
    fn slice_matches_skip_take_step(
        values in arbitrary_values(),
        start in 0..50isize,
        stop in prop::option::of(0..50isize),
        step in 1..6isize,
    ) {
        let iter = RichIter::new(values.clone());
        let sliced = iter
            .slice(SliceBounds::new(Some(start), stop, Some(step)))
            .unwrap()
            .to_vec()
            .unwrap();

        let start = start as usize;
        let len = stop.map_or(usize::MAX, |stop| (stop as usize).saturating_sub(start));
        let expected: Vec<i32> = values
            .iter()
            .copied()
            .skip(start)
            .take(len)
            .step_by(step as usize)
            .collect();
        prop_assert_eq!(sliced, expected);
    }

    #[test]
    fn index_matches_vec_get(values in arbitrary_values(), index in 0..50isize) {
        let iter = RichIter::new(values.clone());
        let expected = values
            .get(index as usize)
            .copied()
            .ok_or(IterError::OutOfRange { index: index as usize });
        prop_assert_eq!(iter.at(index), expected);
    }

    #[test]
    fn running_total_matches_scan(values in arbitrary_values()) {
        let totals = RichIter::new(values.clone()).running_total().unwrap().to_vec().unwrap();
        let expected: Vec<i32> = values
            .iter()
            .scan(0, |acc, n| {
                *acc += n;
                Some(*acc)
            })
            .collect();
        prop_assert_eq!(totals, expected);
    }

    #[test]
    fn groups_concatenate_back_to_input(values in prop::collection::vec(0..4u8, 0..40)) {
        let groups = RichIter::new(values.clone()).group(false).unwrap().to_vec().unwrap();

        for window in groups.windows(2) {
            prop_assert_ne!(window[0].0, window[1].0);
        }
        let flattened: Vec<u8> = groups.into_iter().flat_map(|(_, group)| group).collect();
        prop_assert_eq!(flattened, values);
    }
}
