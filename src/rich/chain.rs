use super::RichIter;
use crate::core::Result;

/// Call forms of [`RichIter::chain`].
///
/// ```rust
/// use rich_iter::rich_iter;
///
/// let letters = rich_iter(vec!['a', 'b']);
/// let joined = letters.chain().with_all(vec![vec!['c'], vec!['d', 'e']]).unwrap();
/// assert_eq!(joined.to_vec().unwrap(), vec!['a', 'b', 'c', 'd', 'e']);
///
/// let nested = rich_iter(vec![vec![1, 2], vec![], vec![3]]);
/// assert_eq!(nested.chain().from_iterable().unwrap().to_vec().unwrap(), vec![1, 2, 3]);
/// ```
pub struct ChainProxy<'a, T> {
    iter: &'a RichIter<T>,
}

impl<T: Clone + 'static> RichIter<T> {
    pub fn chain(&self) -> ChainProxy<'_, T> {
        ChainProxy { iter: self }
    }

    /// Flatten one level of nesting.
    pub fn chain_from_iterable(&self) -> Result<RichIter<T::Item>>
    where
        T: IntoIterator,
        T::Item: Clone + 'static,
        T::IntoIter: 'static,
    {
        self.chain().from_iterable()
    }
}

impl<T: Clone + 'static> ChainProxy<'_, T> {
    /// Continue with `other` once this iterator is exhausted.
    pub fn with<I>(self, other: I) -> Result<RichIter<T>>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let other = other.into_iter();
        self.iter
            .rebind("chain", |cursor| Box::new(cursor.chain(other)))
    }

    /// Continue with each of `others` in turn.
    pub fn with_all<I>(self, others: I) -> Result<RichIter<T>>
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = T>,
        I::IntoIter: 'static,
        <I::Item as IntoIterator>::IntoIter: 'static,
    {
        let others = others.into_iter();
        self.iter
            .rebind("chain", |cursor| Box::new(cursor.chain(others.flatten())))
    }

    /// Treat each value as a sequence and yield their elements in order.
    pub fn from_iterable(self) -> Result<RichIter<T::Item>>
    where
        T: IntoIterator,
        T::Item: Clone + 'static,
        T::IntoIter: 'static,
    {
        self.iter
            .derive("chain.from_iterable", |cursor| Box::new(cursor.flatten()))
    }
}
