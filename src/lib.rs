//! This crate is a small functional programming core: a disjoint union ([`Either`]), an optional
//! container ([`Option`]), a list that can't be empty ([`NonEmptyList`]), and the combinators that
//! tie them together.
//!
//! # Purpose
//! The interesting part of this crate is [`Either`] and its accumulation protocol. Chaining
//! fallible steps with [`flat_map`](Either::flat_map) stops at the first failure, which is usually
//! what you want. When the steps are independent though, reporting only the first failure is
//! frustrating (think of a form that tells you about one invalid field at a time).
//! [`ZipOrAccumulate`] and the [`zip_all`] family run every step and report every failure, either
//! folded together with a function or collected into a [`NonEmptyList`].
//!
//! # Method
//! All types here are plain enums and structs with exhaustive matching, and all of them are
//! immutable values: transformations consume `self` and produce a new value. Nothing in the core
//! uses interior mutability, so sharing values between threads needs no coordination.
//!
//! There are no Semigroup or Monoid traits. Where a combination is needed, the combining function
//! is passed explicitly, which keeps the call site honest about which combination is being used.
//!
//! # Error Handling
//! Failures are values, carried on the left side of an [`Either`]. The only fallible constructor
//! is building a [`NonEmptyList`] from a source that might be empty, which returns
//! [`None`](std::option::Option::None) (or an [`EmptyCollection`](nel::EmptyCollection) error
//! through [`TryFrom`]) instead of a broken list.
//!
//! Indexing out of bounds is a programmer error and panics, in the same way as indexing a slice.
//! Each panicking accessor has a `try_` counterpart returning a strongly typed error.
//!
//! # Features
//! - `either`, `nel` and `option` gate the core types, all enabled by `core-all`.
//! - `atomic` enables [`atomic`], a compare-and-set cell for sharing a value between threads.
//!
//! # Dependencies
//! This crate depends on some derive macros (`derive_more`) because they remove the need for some
//! very repetitive programming, `tracing` for the few trace level events emitted at run time and
//! `parking_lot` for the lock inside [`atomic::Atomic`].

// #![warn(missing_docs)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "atomic")]
pub mod atomic;
#[cfg(feature = "either")]
pub mod either;
#[cfg(feature = "nel")]
pub mod nel;
#[cfg(feature = "option")]
pub mod option;

pub(crate) mod util;

#[cfg(feature = "either")]
#[doc(inline)]
pub use either::{
    Accumulator, Either, EitherNel, IntoEither, ZipOrAccumulate, zip_all, zip_all_by,
    zip_all_flat, zip_all_with,
};
#[cfg(feature = "nel")]
#[doc(inline)]
pub use nel::NonEmptyList;
#[cfg(feature = "option")]
#[doc(inline)]
pub use option::Option;
