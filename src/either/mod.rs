//! A module containing [`Either`] and the accumulation protocol built on top of it.
//!
//! # Purpose
//! [`Either`] models a computation that produced either a failure ([`Left`](Either::Left)) or a
//! success ([`Right`](Either::Right)). Most operations are right-biased: they transform the
//! success and pass a failure through untouched, so that the first failure short-circuits a chain
//! of [`flat_map`](Either::flat_map) calls.
//!
//! Sometimes stopping at the first failure is the wrong thing to do, for example when validating
//! every field of a form. The [`ZipOrAccumulate`] trait (and the sequence based [`zip_all`]
//! family) combine many independent Eithers and report every failure at once, either folded
//! together with a caller supplied function or collected into a [`NonEmptyList`].
//!
//! [`Either`] is also re-exported at the crate root.
//!
//! [`NonEmptyList`]: crate::NonEmptyList

mod accumulate;
mod combine;
mod either;
mod iter;

pub use accumulate::*;
pub use either::*;
pub use iter::*;
