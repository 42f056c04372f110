use std::sync::atomic::{AtomicI32, Ordering};

use tracing::trace;

/// An integer cell which can be read and replaced from multiple threads. Unlike
/// [`Atomic`](super::Atomic), comparisons are by value.
///
/// All operations are sequentially consistent.
#[derive(Debug, Default)]
pub struct AtomicInt {
    pub(crate) inner: AtomicI32,
}

impl AtomicInt {
    pub const fn new(initial: i32) -> AtomicInt {
        AtomicInt {
            inner: AtomicI32::new(initial),
        }
    }

    pub fn get(&self) -> i32 {
        self.inner.load(Ordering::SeqCst)
    }

    pub fn set(&self, value: i32) {
        self.inner.store(value, Ordering::SeqCst);
    }

    pub fn get_and_set(&self, value: i32) -> i32 {
        self.inner.swap(value, Ordering::SeqCst)
    }

    /// Sets the value to `new` if it is currently equal to `expected`, returning whether the swap
    /// took place.
    pub fn compare_and_set(&self, expected: i32, new: i32) -> bool {
        self.inner
            .compare_exchange(expected, new, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Adds `delta`, wrapping on overflow, and returns the previous value.
    pub fn get_and_add(&self, delta: i32) -> i32 {
        self.inner.fetch_add(delta, Ordering::SeqCst)
    }

    /// Adds `delta`, wrapping on overflow, and returns the new value.
    pub fn add_and_get(&self, delta: i32) -> i32 {
        self.get_and_add(delta).wrapping_add(delta)
    }

    pub fn increment_and_get(&self) -> i32 {
        self.add_and_get(1)
    }

    pub fn decrement_and_get(&self) -> i32 {
        self.add_and_get(-1)
    }

    /// Replaces the value with the result of `f`, retrying until no other thread interferes, and
    /// returns the new value. `f` may be called more than once.
    pub fn update_and_get(&self, mut f: impl FnMut(i32) -> i32) -> i32 {
        let mut attempt: usize = 0;
        loop {
            let current = self.get();
            let next = f(current);
            if self.compare_and_set(current, next) {
                return next;
            }
            attempt += 1;
            trace!(attempt, "lost compare-and-set race, retrying update");
        }
    }
}

impl From<i32> for AtomicInt {
    fn from(value: i32) -> Self {
        AtomicInt::new(value)
    }
}
