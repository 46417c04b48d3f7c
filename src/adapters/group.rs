/// Groups runs of consecutive values that share a key.
///
/// Each group is collected into a `Vec` as it is reached, so only one group
/// (plus one look-ahead value) is held at a time. The key function is called
/// exactly once per value.
pub struct GroupBy<I: Iterator, K, F> {
    iter: I,
    key: F,
    pending: Option<(K, I::Item)>,
}

impl<I, K, F> GroupBy<I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    pub fn new(iter: I, key: F) -> Self {
        Self {
            iter,
            key,
            pending: None,
        }
    }
}

impl<I, K, F> Iterator for GroupBy<I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    type Item = (K, Vec<I::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, first) = match self.pending.take() {
            Some(pending) => pending,
            None => {
                let value = self.iter.next()?;
                ((self.key)(&value), value)
            }
        };

        let mut group = vec![first];
        for value in self.iter.by_ref() {
            let next_key = (self.key)(&value);
            if next_key == key {
                group.push(value);
            } else {
                self.pending = Some((next_key, value));
                break;
            }
        }
        Some((key, group))
    }
}
