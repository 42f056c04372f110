use derive_more::{Display, IsVariant};

use super::Iter;
use crate::nel::NonEmptyList;
use crate::option;

/// An [`Either`] whose failures are collected in a [`NonEmptyList`].
pub type EitherNel<E, A> = Either<NonEmptyList<E>, A>;

/// A disjoint union of two types. Exactly one side holds a value at any time.
///
/// By convention, [`Left`](Either::Left) holds a failure and [`Right`](Either::Right) holds a
/// success. `L` and `R` may be the same type, in which case only the variant tells the two sides
/// apart.
///
/// Equality, ordering and hashing are structural: two Eithers are equal if they are the same
/// variant and their payloads are equal.
///
/// # Examples
/// ```
/// # use fp_core::Either;
/// let parsed: Either<String, u8> = Either::Right(12);
/// assert_eq!(parsed.map(|i| i + 1), Either::Right(13));
///
/// let failed: Either<String, u8> = Either::Left("not a number".into());
/// assert_eq!(failed.get_or_else(|e| e.len() as u8), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, IsVariant)]
pub enum Either<L, R> {
    /// The left side, conventionally a failure.
    #[display("Left({_0})")]
    Left(L),
    /// The right side, conventionally a success.
    #[display("Right({_0})")]
    Right(R),
}

use Either::*;

impl<L, R> Either<L, R> {
    /// Deconstructs the Either by applying `on_left` or `on_right`, depending on the variant.
    /// Exactly one of the two functions is called, exactly once.
    ///
    /// Every other transformation on Either can be written in terms of `fold`.
    ///
    /// # Examples
    /// ```
    /// # use fp_core::Either;
    /// assert_eq!(Either::<&str, i32>::Right(1).fold(|_| -1, |r| r + 1), 2);
    /// assert_eq!(Either::<&str, i32>::Left("boom").fold(|_| -1, |r| r + 1), -1);
    /// ```
    pub fn fold<C>(self, on_left: impl FnOnce(L) -> C, on_right: impl FnOnce(R) -> C) -> C {
        match self {
            Left(value) => on_left(value),
            Right(value) => on_right(value),
        }
    }

    /// Transforms the right value with `f`, leaving a Left untouched.
    pub fn map<C>(self, f: impl FnOnce(R) -> C) -> Either<L, C> {
        self.flat_map(|value| Right(f(value)))
    }

    /// Transforms the left value with `f`, leaving a Right untouched.
    pub fn map_left<C>(self, f: impl FnOnce(L) -> C) -> Either<C, R> {
        self.fold(|value| Left(f(value)), Right)
    }

    /// Transforms whichever side is present, with `on_left` or `on_right` respectively.
    pub fn bimap<C, D>(
        self,
        on_left: impl FnOnce(L) -> C,
        on_right: impl FnOnce(R) -> D,
    ) -> Either<C, D> {
        self.fold(|value| Left(on_left(value)), |value| Right(on_right(value)))
    }

    /// Replaces a right value with the Either produced by `f`. A Left short-circuits, so `f` is
    /// never called and the existing left value is propagated.
    ///
    /// # Examples
    /// ```
    /// # use fp_core::Either;
    /// let half = |i: u8| if i % 2 == 0 { Either::Right(i / 2) } else { Either::Left("odd") };
    /// assert_eq!(Either::Right(8).flat_map(half).flat_map(half), Either::Right(2));
    /// assert_eq!(Either::Right(6).flat_map(half).flat_map(half), Either::Left("odd"));
    /// ```
    pub fn flat_map<C>(self, f: impl FnOnce(R) -> Either<L, C>) -> Either<L, C> {
        match self {
            Left(value) => Left(value),
            Right(value) => f(value),
        }
    }

    /// Exchanges the two sides, keeping the payload.
    pub fn swap(self) -> Either<R, L> {
        self.fold(Right, Left)
    }

    /// Calls `action` with the right value, if there is one, and returns the Either unchanged.
    pub fn on_right(self, action: impl FnOnce(&R)) -> Either<L, R> {
        if let Right(value) = &self {
            action(value);
        }
        self
    }

    /// Calls `action` with the left value, if there is one, and returns the Either unchanged.
    pub fn on_left(self, action: impl FnOnce(&L)) -> Either<L, R> {
        if let Left(value) = &self {
            action(value);
        }
        self
    }

    /// Returns the right value, or computes a fallback from the left value with `default`.
    /// `default` is only called for a Left.
    pub fn get_or_else(self, default: impl FnOnce(L) -> R) -> R {
        self.fold(default, |value| value)
    }

    /// Returns the right value as a [`std::option::Option`], discarding a left value.
    pub fn get_or_null(self) -> Option<R> {
        self.fold(|_| None, Some)
    }

    /// Returns the right value as a crate [`Option`](option::Option), discarding a left value.
    pub fn get_or_none(self) -> option::Option<R> {
        self.fold(|_| option::Option::None, option::Option::Some)
    }

    /// Returns the left value as a [`std::option::Option`], discarding a right value.
    pub fn left(self) -> Option<L> {
        self.fold(Some, |_| None)
    }

    /// Returns the right value as a [`std::option::Option`], discarding a left value. This is an
    /// alias of [`get_or_null`](Either::get_or_null) named to mirror [`left`](Either::left).
    pub fn right(self) -> Option<R> {
        self.get_or_null()
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Left(value) => Left(value),
            Right(value) => Right(value),
        }
    }

    /// Returns true if this is a Right whose value satisfies `predicate`.
    pub fn exists(&self, predicate: impl FnOnce(&R) -> bool) -> bool {
        match self {
            Left(_) => false,
            Right(value) => predicate(value),
        }
    }

    /// Folds the right value into `initial` with `f`. A Left returns `initial` as is.
    pub fn fold_left<C>(self, initial: C, f: impl FnOnce(C, R) -> C) -> C {
        match self {
            Left(_) => initial,
            Right(value) => f(initial, value),
        }
    }

    /// Folds whichever value is present into `initial`, with `on_left` or `on_right`.
    pub fn bifold_left<C>(
        self,
        initial: C,
        on_left: impl FnOnce(C, L) -> C,
        on_right: impl FnOnce(C, R) -> C,
    ) -> C {
        match self {
            Left(value) => on_left(initial, value),
            Right(value) => on_right(initial, value),
        }
    }

    /// Turns a Right which fails `predicate` into a Left produced by `default`.
    pub fn filter_or_else(
        self,
        predicate: impl FnOnce(&R) -> bool,
        default: impl FnOnce() -> L,
    ) -> Either<L, R> {
        self.filter_or_other(predicate, |_| default())
    }

    /// Turns a Right which fails `predicate` into a Left produced from the rejected value.
    pub fn filter_or_other(
        self,
        predicate: impl FnOnce(&R) -> bool,
        default: impl FnOnce(R) -> L,
    ) -> Either<L, R> {
        self.flat_map(|value| {
            if predicate(&value) {
                Right(value)
            } else {
                Left(default(value))
            }
        })
    }

    /// Returns a borrowed iterator over the right value, which yields at most one element.
    pub fn iter(&self) -> Iter<'_, R> {
        self.into_iter()
    }

    /// Builds a Right with `if_true` when `test` holds, otherwise a Left with `if_false`.
    pub fn cond(test: bool, if_false: impl FnOnce() -> L, if_true: impl FnOnce() -> R) -> Self {
        if test { Right(if_true()) } else { Left(if_false()) }
    }

    /// Builds a Right from a present `value`, or a Left produced by `default` when it is absent.
    pub fn from_option_or_else(value: Option<R>, default: impl FnOnce() -> L) -> Self {
        match value {
            Some(value) => Right(value),
            None => Left(default()),
        }
    }

    /// Converts into a [`Result`], with Right becoming [`Ok`] and Left becoming [`Err`].
    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }
}

impl<L, R: Clone> Either<L, R> {
    /// Repeats the right value `n` times. A Left passes through untouched.
    pub fn replicate(self, n: usize) -> Either<L, Vec<R>> {
        self.map(|value| vec![value; n])
    }
}

impl<L, R: PartialEq> Either<L, R> {
    /// Returns true if this is a Right whose value equals `elem`.
    pub fn contains(&self, elem: &R) -> bool {
        self.exists(|value| value == elem)
    }
}

impl<L, R> Either<L, Option<R>> {
    /// Turns a Right holding [`None`] into a Left produced by `default`, unwrapping a present
    /// right value.
    pub fn left_if_none(self, default: impl FnOnce() -> L) -> Either<L, R> {
        self.flat_map(|value| Either::from_option_or_else(value, default))
    }
}

impl<R> Either<(), R> {
    /// Builds a Right from a present `value`, or `Left(())` when it is absent.
    pub fn from_nullable(value: Option<R>) -> Self {
        Either::from_option_or_else(value, || ())
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(value) => Right(value),
            Err(error) => Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(value: Either<L, R>) -> Self {
        value.into_result()
    }
}

impl<A> option::Option<A> {
    /// Converts into an Either, holding the value on the right or a Left produced by `if_none`.
    pub fn to_either<L>(self, if_none: impl FnOnce() -> L) -> Either<L, A> {
        self.fold(|| Left(if_none()), Right)
    }
}

/// Lifts any value into either side of an [`Either`].
///
/// # Examples
/// ```
/// # use fp_core::{Either, IntoEither};
/// assert_eq!(5.into_right::<&str>(), Either::Right(5));
/// assert_eq!("boom".into_left::<i32>(), Either::Left("boom"));
/// ```
pub trait IntoEither: Sized {
    /// Wraps `self` as the left value of an Either.
    fn into_left<R>(self) -> Either<Self, R> {
        Left(self)
    }

    /// Wraps `self` as the right value of an Either.
    fn into_right<L>(self) -> Either<L, Self> {
        Right(self)
    }
}

impl<T> IntoEither for T {}
