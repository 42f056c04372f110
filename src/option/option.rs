use derive_more::{Display, IsVariant};

use super::Iter;

/// A container which either holds a single value ([`Some`](Option::Some)) or nothing
/// ([`None`](Option::None)).
///
/// Within this crate, `Option` always refers to this type. The standard library's Option is
/// referred to by its full path.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, IsVariant)]
pub enum Option<A> {
    #[default]
    #[display("None")]
    None,
    #[display("Some({_0})")]
    Some(A),
}

impl<A> Option<A> {
    /// Deconstructs the Option, calling `if_none` if it is empty or `if_some` with the contained
    /// value. Exactly one of the two functions is called.
    pub fn fold<C>(self, if_none: impl FnOnce() -> C, if_some: impl FnOnce(A) -> C) -> C {
        match self {
            Option::None => if_none(),
            Option::Some(value) => if_some(value),
        }
    }

    /// Applies `f` to the contained value, if there is one.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Option<B> {
        self.flat_map(|value| Option::Some(f(value)))
    }

    /// Applies `f` to the contained value, if there is one, and returns the Option it produces.
    pub fn flat_map<B>(self, f: impl FnOnce(A) -> Option<B>) -> Option<B> {
        self.fold(|| Option::None, f)
    }

    /// Returns the contained value, or computes one with `default` if the Option is empty.
    pub fn get_or_else(self, default: impl FnOnce() -> A) -> A {
        self.fold(default, |value| value)
    }

    /// Converts into a [`std::option::Option`], the nullable representation.
    pub fn get_or_null(self) -> std::option::Option<A> {
        self.into()
    }

    /// Keeps the contained value only if it satisfies `predicate`.
    pub fn filter(self, predicate: impl FnOnce(&A) -> bool) -> Option<A> {
        self.flat_map(|value| {
            if predicate(&value) {
                Option::Some(value)
            } else {
                Option::None
            }
        })
    }

    /// Converts from `&Option<A>` to `Option<&A>`.
    pub const fn as_ref(&self) -> Option<&A> {
        match self {
            Option::None => Option::None,
            Option::Some(value) => Option::Some(value),
        }
    }

    /// Returns a borrowed iterator over the contained value, which yields at most one element.
    pub fn iter(&self) -> Iter<'_, A> {
        self.into_iter()
    }
}

impl<A> From<std::option::Option<A>> for Option<A> {
    fn from(value: std::option::Option<A>) -> Self {
        match value {
            std::option::Option::None => Option::None,
            std::option::Option::Some(value) => Option::Some(value),
        }
    }
}

impl<A> From<Option<A>> for std::option::Option<A> {
    fn from(value: Option<A>) -> Self {
        match value {
            Option::None => std::option::Option::None,
            Option::Some(value) => std::option::Option::Some(value),
        }
    }
}
