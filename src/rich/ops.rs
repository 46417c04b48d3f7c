//! Operator shorthand on `&RichIter`.
//!
//! | Operator | Method |
//! |---|---|
//! | `a + b` | `a.chain().with(b)` |
//! | `a * b` | `a.zip(b)` |
//! | `a \| f` | `a.map(f)` |
//! | `a & p` | `a.filter(p)` |
//! | `a ^ p` | `a.filterfalse(p)` |
//! | `a >> p` | `a.dropwhile(p)` |
//! | `a << p` | `a.takewhile(p)` |
//! | `a % r` | `a.permutations(Some(r))` |
//! | `a / r` | `a.combinations(r)` |
//!
//! A `Vec` on the left of `+` or `*` is placed in front: `values + &a`
//! yields the values and then `a`, and `values * &a` pairs each value with
//! one of `a` as `(value, item)`. Both apply `a`'s policy.
//!
//! Every operator returns the same `Result` as its method, so they compose
//! with `?`:
//!
//! ```rust
//! use rich_iter::{rich_iter, Result, RichIter};
//!
//! fn evens_squared(source: &RichIter<i32>) -> Result<RichIter<i32>> {
//!     let evens = (source & (|n: &i32| n % 2 == 0))?;
//!     &evens | (|n: i32| n * n)
//! }
//!
//! let squares = evens_squared(&rich_iter(1..=6)).unwrap();
//! assert_eq!(squares.to_vec().unwrap(), vec![4, 16, 36]);
//! ```

use super::RichIter;
use crate::core::Result;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Rem, Shl, Shr};

impl<T, I> Add<I> for &RichIter<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
{
    type Output = Result<RichIter<T>>;

    fn add(self, other: I) -> Self::Output {
        self.chain().with(other)
    }
}

impl<T, I> Mul<I> for &RichIter<T>
where
    T: Clone + 'static,
    I: IntoIterator,
    I::Item: Clone + 'static,
    I::IntoIter: 'static,
{
    type Output = Result<RichIter<(T, I::Item)>>;

    fn mul(self, other: I) -> Self::Output {
        RichIter::zip(self, other)
    }
}

impl<T, U, F> BitOr<F> for &RichIter<T>
where
    T: Clone + 'static,
    U: Clone + 'static,
    F: FnMut(T) -> U + 'static,
{
    type Output = Result<RichIter<U>>;

    fn bitor(self, f: F) -> Self::Output {
        RichIter::map(self, f)
    }
}

impl<T, P> BitAnd<P> for &RichIter<T>
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool + 'static,
{
    type Output = Result<RichIter<T>>;

    fn bitand(self, predicate: P) -> Self::Output {
        RichIter::filter(self, predicate)
    }
}

impl<T, P> BitXor<P> for &RichIter<T>
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool + 'static,
{
    type Output = Result<RichIter<T>>;

    fn bitxor(self, predicate: P) -> Self::Output {
        RichIter::filterfalse(self, predicate)
    }
}

impl<T, P> Shr<P> for &RichIter<T>
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool + 'static,
{
    type Output = Result<RichIter<T>>;

    fn shr(self, predicate: P) -> Self::Output {
        RichIter::dropwhile(self, predicate)
    }
}

impl<T, P> Shl<P> for &RichIter<T>
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool + 'static,
{
    type Output = Result<RichIter<T>>;

    fn shl(self, predicate: P) -> Self::Output {
        RichIter::takewhile(self, predicate)
    }
}

impl<T: Clone + 'static> Rem<usize> for &RichIter<T> {
    type Output = Result<RichIter<Vec<T>>>;

    fn rem(self, r: usize) -> Self::Output {
        RichIter::permutations(self, Some(r))
    }
}

impl<T: Clone + 'static> Div<usize> for &RichIter<T> {
    type Output = Result<RichIter<Vec<T>>>;

    fn div(self, r: usize) -> Self::Output {
        RichIter::combinations(self, r)
    }
}

impl<T: Clone + 'static> Add<&RichIter<T>> for Vec<T> {
    type Output = Result<RichIter<T>>;

    fn add(self, iter: &RichIter<T>) -> Self::Output {
        iter.rebind("chain", |cursor| Box::new(self.into_iter().chain(cursor)))
    }
}

impl<T, U> Mul<&RichIter<T>> for Vec<U>
where
    T: Clone + 'static,
    U: Clone + 'static,
{
    type Output = Result<RichIter<(U, T)>>;

    fn mul(self, iter: &RichIter<T>) -> Self::Output {
        iter.derive("zip", |cursor| Box::new(self.into_iter().zip(cursor)))
    }
}
