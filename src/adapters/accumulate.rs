/// Running fold that yields every intermediate result.
///
/// The first value passes through unchanged; each later value is combined
/// with the previous result as `op(acc, value)`.
pub struct Accumulate<I: Iterator, F> {
    iter: I,
    op: F,
    acc: Option<I::Item>,
}

impl<I: Iterator, F> Accumulate<I, F> {
    pub fn new(iter: I, op: F) -> Self {
        Self {
            iter,
            op,
            acc: None,
        }
    }
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let value = self.iter.next()?;
        let next = match self.acc.take() {
            Some(acc) => (self.op)(acc, value),
            None => value,
        };
        self.acc = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
