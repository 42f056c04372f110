//! A module containing [`NonEmptyList`] and associated types.
//!
//! Other than the list itself, this module contains [`Iter`] and [`IntoIter`] for borrowed and
//! owned iteration, and the [`nel!`](crate::nel!) macro for literal construction. There is no
//! mutable iterator, because a NonEmptyList is never modified after it is built.
//!
//! [`NonEmptyList`] is also re-exported at the crate root.

mod iter;
mod non_empty_list;
mod tests;

pub use iter::*;
pub use non_empty_list::*;

/// Creates a [`NonEmptyList`] containing the provided elements, in order. At least one element is
/// required, so an empty invocation fails to compile rather than producing an invalid list.
///
/// # Examples
/// ```
/// # use fp_core::nel;
/// let list = nel![1, 2, 3];
/// assert_eq!(*list.head(), 1);
/// assert_eq!(list.tail(), &[2, 3]);
/// ```
#[macro_export]
macro_rules! nel {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::nel::NonEmptyList::new($head, ::std::vec![$($tail),*])
    };
}
