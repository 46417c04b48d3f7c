/// An iterator built on its first pull.
///
/// Adapters that must see their whole input before producing anything
/// (sorting, Cartesian products, full-length permutations) are wrapped in
/// `Deferred` so that applying them stays lazy.
pub struct Deferred<I, F> {
    init: Option<F>,
    iter: Option<I>,
}

impl<I, F> Deferred<I, F>
where
    I: Iterator,
    F: FnOnce() -> I,
{
    pub fn new(init: F) -> Self {
        Self {
            init: Some(init),
            iter: None,
        }
    }
}

impl<I, F> Iterator for Deferred<I, F>
where
    I: Iterator,
    F: FnOnce() -> I,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(init) = self.init.take() {
            self.iter = Some(init());
        }
        self.iter.as_mut()?.next()
    }
}
