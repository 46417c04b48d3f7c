/// Repeats a single-pass sequence forever.
///
/// Values are saved during the first pass and replayed from the saved copy
/// afterwards, so the source is only traversed once. An empty source stays
/// empty.
pub struct Cycle<I: Iterator> {
    iter: Option<I>,
    saved: Vec<I::Item>,
    index: usize,
}

impl<I: Iterator> Cycle<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter: Some(iter),
            saved: Vec::new(),
            index: 0,
        }
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(iter) = self.iter.as_mut() {
            match iter.next() {
                Some(value) => {
                    self.saved.push(value.clone());
                    return Some(value);
                }
                None => self.iter = None,
            }
        }

        let value = self.saved.get(self.index)?.clone();
        self.index = (self.index + 1) % self.saved.len();
        Some(value)
    }
}
