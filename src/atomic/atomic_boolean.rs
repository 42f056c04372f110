use super::AtomicInt;

/// A boolean cell which can be read and replaced from multiple threads, stored as `0` or `1` in an
/// [`AtomicInt`].
#[derive(Debug, Default)]
pub struct AtomicBoolean {
    pub(crate) inner: AtomicInt,
}

impl AtomicBoolean {
    pub const fn new(initial: bool) -> AtomicBoolean {
        AtomicBoolean {
            inner: AtomicInt::new(initial as i32),
        }
    }

    pub fn get(&self) -> bool {
        self.inner.get() != 0
    }

    pub fn set(&self, value: bool) {
        self.inner.set(i32::from(value));
    }

    pub fn get_and_set(&self, value: bool) -> bool {
        self.inner.get_and_set(i32::from(value)) != 0
    }

    /// Sets the value to `new` if it is currently equal to `expected`, returning whether the swap
    /// took place.
    pub fn compare_and_set(&self, expected: bool, new: bool) -> bool {
        self.inner
            .compare_and_set(i32::from(expected), i32::from(new))
    }
}

impl From<bool> for AtomicBoolean {
    fn from(value: bool) -> Self {
        AtomicBoolean::new(value)
    }
}
