use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::core::{nested, Cursor, IterError};

/// Buffer shared by all forks of one source cursor.
///
/// `buffer[0]` holds the value at absolute position `offset`. Each fork keeps
/// its own absolute position; values are dropped once every live fork has
/// moved past them.
struct TeeBuffer<T> {
    source: Cursor<T>,
    buffer: VecDeque<T>,
    offset: usize,
    positions: Vec<Option<usize>>,
}

impl<T> TeeBuffer<T> {
    fn trim(&mut self) {
        let min = self.positions.iter().flatten().min().copied();
        let keep_from = min.unwrap_or(self.offset + self.buffer.len());
        while self.offset < keep_from && self.buffer.pop_front().is_some() {
            self.offset += 1;
        }
    }
}

/// One independent branch of a forked cursor.
///
/// Every fork observes the identical sequence from the fork point forward,
/// regardless of how pulls on different forks are interleaved.
pub struct TeeFork<T> {
    shared: Rc<RefCell<TeeBuffer<T>>>,
    id: usize,
}

impl<T> TeeFork<T> {
    /// Start forking `source`. The returned fork is the first branch.
    pub fn new(source: Cursor<T>) -> Self {
        let shared = TeeBuffer {
            source,
            buffer: VecDeque::new(),
            offset: 0,
            positions: vec![Some(0)],
        };
        Self {
            shared: Rc::new(RefCell::new(shared)),
            id: 0,
        }
    }

    /// Another branch that continues from this fork's current position.
    pub fn sibling(&self) -> Self {
        let mut shared = self.shared.borrow_mut();
        let position = shared.positions[self.id].unwrap_or(shared.offset);
        shared.positions.push(Some(position));
        Self {
            shared: Rc::clone(&self.shared),
            id: shared.positions.len() - 1,
        }
    }
}

impl<T: Clone> Iterator for TeeFork<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let Ok(mut shared) = self.shared.try_borrow_mut() else {
            // The source is reading this tee again through another branch.
            if let Err(err) = nested::park(IterError::ReentrantPull) {
                panic!("{err}");
            }
            return None;
        };
        let pos = shared.positions[self.id]?;
        let index = pos - shared.offset;
        let value = if index < shared.buffer.len() {
            shared.buffer[index].clone()
        } else {
            let value = shared.source.next()?;
            shared.buffer.push_back(value.clone());
            value
        };
        shared.positions[self.id] = Some(pos + 1);
        shared.trim();
        Some(value)
    }
}

impl<T> Drop for TeeFork<T> {
    fn drop(&mut self) {
        if let Ok(mut shared) = self.shared.try_borrow_mut() {
            shared.positions[self.id] = None;
            shared.trim();
        }
    }
}
