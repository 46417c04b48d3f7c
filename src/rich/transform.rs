//! The transformation catalog.
//!
//! Each method validates its arguments, then hands the cursor to `derive`
//! (new item type) or `rebind` (same item type). Nothing is pulled until the
//! returned iterator is read; transformations that need their whole input
//! wait for the first pull via [`Deferred`].

use super::RichIter;
use crate::adapters::{Accumulate, Cycle, Deferred, GroupBy};
use crate::core::{Cursor, Result};
use itertools::{EitherOrBoth, Itertools};
use std::iter;
use std::ops::Add;

impl<T: Clone + 'static> RichIter<T> {
    pub fn map<U, F>(&self, f: F) -> Result<RichIter<U>>
    where
        U: Clone + 'static,
        F: FnMut(T) -> U + 'static,
    {
        self.derive("map", |cursor| Box::new(cursor.map(f)))
    }

    /// Apply `f` to pairs drawn from this sequence and `other`, stopping at
    /// the shorter side.
    pub fn map_with<I, U, F>(&self, other: I, mut f: F) -> Result<RichIter<U>>
    where
        I: IntoIterator,
        I::IntoIter: 'static,
        U: Clone + 'static,
        F: FnMut(T, I::Item) -> U + 'static,
    {
        let other = other.into_iter();
        self.derive("map", |cursor| {
            Box::new(cursor.zip(other).map(move |(left, right)| f(left, right)))
        })
    }

    pub fn filter<P>(&self, predicate: P) -> Result<RichIter<T>>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        self.rebind("filter", |cursor| Box::new(cursor.filter(predicate)))
    }

    /// Keep the values for which `predicate` is false.
    pub fn filterfalse<P>(&self, mut predicate: P) -> Result<RichIter<T>>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        self.rebind("filterfalse", |cursor| {
            Box::new(cursor.filter(move |value| !predicate(value)))
        })
    }

    /// Skip values while `predicate` holds, then yield everything.
    pub fn dropwhile<P>(&self, predicate: P) -> Result<RichIter<T>>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        self.rebind("dropwhile", |cursor| Box::new(cursor.skip_while(predicate)))
    }

    /// Yield values while `predicate` holds, then stop.
    pub fn takewhile<P>(&self, predicate: P) -> Result<RichIter<T>>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        self.rebind("takewhile", |cursor| Box::new(cursor.take_while(predicate)))
    }

    /// Keep the values whose matching selector is `true`.
    ///
    /// Stops when either the values or the selectors run out.
    pub fn compress<S>(&self, selectors: S) -> Result<RichIter<T>>
    where
        S: IntoIterator<Item = bool>,
        S::IntoIter: 'static,
    {
        let selectors = selectors.into_iter();
        self.rebind("compress", |cursor| {
            Box::new(
                cursor
                    .zip(selectors)
                    .filter_map(|(value, keep)| keep.then_some(value)),
            )
        })
    }

    /// Group runs of consecutive values with equal keys.
    ///
    /// With `sort`, the input is first stably sorted by key, so equal keys
    /// end up in one group. Sorting reads the whole input on the first pull.
    ///
    /// ```rust
    /// use rich_iter::rich_iter;
    ///
    /// let runs = rich_iter("AABAA".chars()).groupby(|c| *c, false).unwrap();
    /// let runs: Vec<_> = runs.map(|(key, group)| (key, group.len())).unwrap().to_vec().unwrap();
    /// assert_eq!(runs, vec![('A', 2), ('B', 1), ('A', 2)]);
    ///
    /// let sorted = rich_iter("AABAA".chars()).groupby(|c| *c, true).unwrap();
    /// let sorted: Vec<_> = sorted.map(|(key, group)| (key, group.len())).unwrap().to_vec().unwrap();
    /// assert_eq!(sorted, vec![('A', 4), ('B', 1)]);
    /// ```
    pub fn groupby<K, F>(&self, mut key: F, sort: bool) -> Result<RichIter<(K, Vec<T>)>>
    where
        K: Ord + Clone + 'static,
        F: FnMut(&T) -> K + 'static,
    {
        self.derive("groupby", move |cursor| -> Cursor<(K, Vec<T>)> {
            if !sort {
                return Box::new(GroupBy::new(cursor, key));
            }
            Box::new(Deferred::new(move || {
                let mut keyed: Vec<(K, T)> = cursor.map(|value| (key(&value), value)).collect();
                keyed.sort_by(|a, b| a.0.cmp(&b.0));
                GroupBy::new(keyed.into_iter(), |(key, _): &(K, T)| key.clone())
                    .map(|(key, group)| {
                        (key, group.into_iter().map(|(_, value)| value).collect::<Vec<T>>())
                    })
            }))
        })
    }

    /// Group runs of equal values, using each value as its own key.
    pub fn group(&self, sort: bool) -> Result<RichIter<(T, Vec<T>)>>
    where
        T: Ord,
    {
        self.groupby(T::clone, sort)
    }

    /// Running fold: the first value unchanged, then `op(acc, value)`.
    pub fn accumulate<F>(&self, op: F) -> Result<RichIter<T>>
    where
        F: FnMut(T, T) -> T + 'static,
    {
        self.rebind("accumulate", |cursor| Box::new(Accumulate::new(cursor, op)))
    }

    /// Running sum.
    pub fn running_total(&self) -> Result<RichIter<T>>
    where
        T: Add<Output = T>,
    {
        self.accumulate(|acc, value| acc + value)
    }

    /// Repeat the values forever; an empty sequence stays empty.
    pub fn cycle(&self) -> Result<RichIter<T>> {
        self.rebind("cycle", |cursor| Box::new(Cycle::new(cursor)))
    }

    /// Pair values up, stopping at the shorter side.
    pub fn zip<I>(&self, other: I) -> Result<RichIter<(T, I::Item)>>
    where
        I: IntoIterator,
        I::Item: Clone + 'static,
        I::IntoIter: 'static,
    {
        let other = other.into_iter();
        self.derive("zip", |cursor| Box::new(cursor.zip(other)))
    }

    /// Zip with any number of sequences of the same item type.
    ///
    /// Each output holds one value from this sequence followed by one from
    /// each of `others`. Stops as soon as any sequence runs out.
    pub fn zip_all<I>(&self, others: I) -> Result<RichIter<Vec<T>>>
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = T>,
        <I::Item as IntoIterator>::IntoIter: 'static,
    {
        let others: Vec<Cursor<T>> = others
            .into_iter()
            .map(|other| Box::new(other.into_iter()) as Cursor<T>)
            .collect();
        self.derive("zip", |cursor| {
            let mut cursors = others;
            cursors.insert(0, cursor);
            Box::new(iter::from_fn(move || {
                cursors.iter_mut().map(|cursor| cursor.next()).collect::<Option<Vec<T>>>()
            }))
        })
    }

    /// Pair values up, padding the shorter side with its fill value.
    pub fn zip_longest<I>(
        &self,
        other: I,
        fill_self: T,
        fill_other: I::Item,
    ) -> Result<RichIter<(T, I::Item)>>
    where
        I: IntoIterator,
        I::Item: Clone + 'static,
        I::IntoIter: 'static,
    {
        let other = other.into_iter();
        self.derive("zip_longest", |cursor| {
            Box::new(cursor.zip_longest(other).map(move |pair| match pair {
                EitherOrBoth::Both(left, right) => (left, right),
                EitherOrBoth::Left(left) => (left, fill_other.clone()),
                EitherOrBoth::Right(right) => (fill_self.clone(), right),
            }))
        })
    }

    /// Cartesian product of this sequence and `others`, the whole list
    /// repeated `repeat` times.
    ///
    /// Every input is read in full on the first pull. A `repeat` of zero
    /// yields a single empty product.
    ///
    /// ```rust
    /// use rich_iter::rich_iter;
    ///
    /// let squares = rich_iter(vec![0, 1]).product(Vec::<Vec<i32>>::new(), 2).unwrap();
    /// assert_eq!(
    ///     squares.to_vec().unwrap(),
    ///     vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
    /// );
    /// ```
    pub fn product<I>(&self, others: I, repeat: usize) -> Result<RichIter<Vec<T>>>
    where
        I: IntoIterator + 'static,
        I::Item: IntoIterator<Item = T>,
    {
        self.derive("product", move |cursor| {
            Box::new(Deferred::new(move || -> Cursor<Vec<T>> {
                if repeat == 0 {
                    return Box::new(iter::once(Vec::new()));
                }
                let mut pools: Vec<Vec<T>> = vec![cursor.collect()];
                pools.extend(others.into_iter().map(|pool| pool.into_iter().collect::<Vec<T>>()));
                let pools: Vec<Vec<T>> = (0..repeat).flat_map(|_| pools.clone()).collect();
                Box::new(pools.into_iter().map(Vec::into_iter).multi_cartesian_product())
            }))
        })
    }

    /// Cartesian product with a sequence of another item type.
    pub fn product_with<I>(&self, other: I) -> Result<RichIter<(T, I::Item)>>
    where
        I: IntoIterator + 'static,
        I::Item: Clone + 'static,
    {
        self.derive("product", |cursor| {
            Box::new(Deferred::new(move || {
                let pool: Vec<I::Item> = other.into_iter().collect();
                cursor.cartesian_product(pool)
            }))
        })
    }

    /// Ordered arrangements of `r` values; all values when `r` is `None`.
    pub fn permutations(&self, r: Option<usize>) -> Result<RichIter<Vec<T>>> {
        self.derive("permutations", move |cursor| -> Cursor<Vec<T>> {
            match r {
                Some(r) => Box::new(cursor.permutations(r)),
                None => Box::new(Deferred::new(move || {
                    let pool: Vec<T> = cursor.collect();
                    let r = pool.len();
                    pool.into_iter().permutations(r)
                })),
            }
        })
    }

    /// Subsequences of length `r`, in position order.
    pub fn combinations(&self, r: usize) -> Result<RichIter<Vec<T>>> {
        self.derive("combinations", |cursor| Box::new(cursor.combinations(r)))
    }

    /// Subsequences of length `r` where a value may repeat.
    pub fn combinations_with_replacement(&self, r: usize) -> Result<RichIter<Vec<T>>> {
        self.derive("combinations_with_replacement", |cursor| {
            Box::new(cursor.combinations_with_replacement(r))
        })
    }
}

impl<A, B> RichIter<(A, B)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    /// Apply `f` to the two halves of each pair.
    pub fn starmap<U, F>(&self, mut f: F) -> Result<RichIter<U>>
    where
        U: Clone + 'static,
        F: FnMut(A, B) -> U + 'static,
    {
        self.derive("starmap", |cursor| {
            Box::new(cursor.map(move |(left, right)| f(left, right)))
        })
    }
}
