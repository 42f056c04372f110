#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times a callback has been run. Clones share the same count, so a clone can be
/// moved into a closure while the original is inspected afterwards.
#[derive(Debug, Default, Clone)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> CallCounter {
        CallCounter::default()
    }

    /// Records a single call.
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// Returns the number of recorded calls.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}
