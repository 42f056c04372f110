use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

/// A cell holding a single value of type `V`, which can be read and replaced from multiple threads.
///
/// Values are stored behind an [`Arc`], and [`get`](Atomic::get) hands out a clone of that handle
/// rather than a copy of the value.
///
/// # Identity
/// [`compare_and_set`](Atomic::compare_and_set) compares the current handle with the expected one
/// by pointer, **not** by [`PartialEq`]. Two structurally equal values stored separately are
/// different as far as this cell is concerned. The expected handle should therefore always come
/// from a previous call to `get` (or a related method) on the same cell.
///
/// Because the caller holds the expected handle, its allocation can't be freed and reused while
/// the comparison takes place, so a pointer match always means the same stored value.
pub struct Atomic<V> {
    pub(crate) slot: Mutex<Arc<V>>,
}

impl<V> Atomic<V> {
    /// Creates a new cell holding `initial`.
    pub fn new(initial: V) -> Atomic<V> {
        Atomic::from_arc(Arc::new(initial))
    }

    /// Creates a new cell holding an existing handle.
    pub fn from_arc(initial: Arc<V>) -> Atomic<V> {
        Atomic {
            slot: Mutex::new(initial),
        }
    }

    /// Returns a handle to the current value.
    pub fn get(&self) -> Arc<V> {
        Arc::clone(&*self.slot.lock())
    }

    /// Replaces the current value with `value`.
    pub fn set(&self, value: V) {
        self.get_and_set(value);
    }

    /// Replaces the current value with `value`, returning a handle to the previous one.
    pub fn get_and_set(&self, value: V) -> Arc<V> {
        self.get_and_set_arc(Arc::new(value))
    }

    /// Replaces the current handle with `value`, returning the previous one.
    pub fn get_and_set_arc(&self, value: Arc<V>) -> Arc<V> {
        mem::replace(&mut *self.slot.lock(), value)
    }

    /// Sets the value to `new` if the current value is the same allocation as `expected`,
    /// returning whether the swap took place. See the [identity](Atomic#identity) note.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use fp_core::atomic::Atomic;
    /// let cell = Atomic::new(String::from("a"));
    /// let current = cell.get();
    ///
    /// assert!(!cell.compare_and_set(&Arc::new(String::from("a")), String::from("b")));
    /// assert!(cell.compare_and_set(&current, String::from("b")));
    /// assert_eq!(*cell.get(), "b");
    /// ```
    pub fn compare_and_set(&self, expected: &Arc<V>, new: V) -> bool {
        self.compare_and_set_arc(expected, Arc::new(new))
    }

    /// Handle based variant of [`compare_and_set`](Atomic::compare_and_set).
    pub fn compare_and_set_arc(&self, expected: &Arc<V>, new: Arc<V>) -> bool {
        let mut slot = self.slot.lock();
        if Arc::ptr_eq(&*slot, expected) {
            *slot = new;
            true
        } else {
            false
        }
    }

    /// Attempts to replace the value with the result of `f` once, returning whether the update
    /// was applied. Fails if another thread changed the value after it was read.
    pub fn try_update(&self, f: impl FnOnce(&V) -> V) -> bool {
        let current = self.get();
        self.compare_and_set(&current, f(&current))
    }

    /// Replaces the value with the result of `f`, retrying until no other thread interferes.
    ///
    /// `f` may be called more than once, so it should be free of side effects.
    pub fn update(&self, f: impl FnMut(&V) -> V) {
        self.retry_update(f);
    }

    /// Like [`update`](Atomic::update), returning a handle to the value that was replaced.
    pub fn get_and_update(&self, f: impl FnMut(&V) -> V) -> Arc<V> {
        self.retry_update(f).0
    }

    /// Like [`update`](Atomic::update), returning a handle to the value that was stored.
    pub fn update_and_get(&self, f: impl FnMut(&V) -> V) -> Arc<V> {
        self.retry_update(f).1
    }

    fn retry_update(&self, mut f: impl FnMut(&V) -> V) -> (Arc<V>, Arc<V>) {
        let mut attempt: usize = 0;
        loop {
            let current = self.get();
            let next = Arc::new(f(&current));
            if self.compare_and_set_arc(&current, Arc::clone(&next)) {
                return (current, next);
            }
            attempt += 1;
            trace!(attempt, "lost compare-and-set race, retrying update");
        }
    }
}

impl<V: Default> Default for Atomic<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V: Debug> Debug for Atomic<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Atomic").field(&self.get()).finish()
    }
}
