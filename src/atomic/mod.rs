//! Atomic cells for sharing a single mutable value between threads.
//!
//! [`Atomic`] holds any value behind a shared handle and compares by identity, while
//! [`AtomicInt`] and [`AtomicBoolean`] hold plain values and compare by value.
//!
//! Every cell is sequentially consistent for its own slot, but no ordering is guaranteed across
//! different cells. Coordinating several cells requires a protocol of the caller's own, such as a
//! retry loop around [`compare_and_set`](Atomic::compare_and_set).

mod atomic;
mod atomic_boolean;
mod atomic_int;

pub use atomic::*;
pub use atomic_boolean::*;
pub use atomic_int::*;
