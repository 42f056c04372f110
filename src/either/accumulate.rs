use tracing::trace;

use super::Either::{self, *};
use super::EitherNel;
use crate::nel::NonEmptyList;
use crate::util::option::OptionExtension;

/// A strategy for gathering the left values of a failed zip into a single error.
///
/// Left values are pushed in positional order, and [`finish`](Accumulator::finish) is called once
/// every input has been inspected. An accumulator that received at least one error must return
/// [`Some`] from `finish`.
pub trait Accumulator<E> {
    type Error;

    fn push(&mut self, error: E);

    fn finish(self) -> Option<Self::Error>;
}

/// Folds errors pairwise with a caller supplied function. The first error seeds the accumulator
/// and every following error is merged in as `combine(accumulated, next)`, so `combine` doesn't
/// need to be commutative.
#[derive(Debug, Clone)]
pub struct Combining<E, F> {
    acc: Option<E>,
    combine: F,
}

impl<E, F: FnMut(E, E) -> E> Combining<E, F> {
    pub const fn new(combine: F) -> Combining<E, F> {
        Combining { acc: None, combine }
    }
}

impl<E, F: FnMut(E, E) -> E> Accumulator<E> for Combining<E, F> {
    type Error = E;

    fn push(&mut self, error: E) {
        self.acc = Some(match self.acc.take() {
            None => error,
            Some(acc) => (self.combine)(acc, error),
        });
    }

    fn finish(self) -> Option<E> {
        self.acc
    }
}

/// Collects errors into a [`NonEmptyList`], with the first failing position as its head.
#[derive(Debug, Clone)]
pub struct Collecting<E> {
    errors: Vec<E>,
}

impl<E> Collecting<E> {
    pub const fn new() -> Collecting<E> {
        Collecting { errors: Vec::new() }
    }
}

impl<E> Default for Collecting<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Accumulator<E> for Collecting<E> {
    type Error = NonEmptyList<E>;

    fn push(&mut self, error: E) {
        self.errors.push(error);
    }

    fn finish(self) -> Option<NonEmptyList<E>> {
        NonEmptyList::from_vec(self.errors)
    }
}

/// Concatenates errors which are already [`NonEmptyList`]s into one flat list, rather than nesting
/// them.
#[derive(Debug, Clone)]
pub struct Flattening<E> {
    errors: Vec<E>,
}

impl<E> Flattening<E> {
    pub const fn new() -> Flattening<E> {
        Flattening { errors: Vec::new() }
    }
}

impl<E> Default for Flattening<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Accumulator<NonEmptyList<E>> for Flattening<E> {
    type Error = NonEmptyList<E>;

    fn push(&mut self, errors: NonEmptyList<E>) {
        self.errors.extend(errors);
    }

    fn finish(self) -> Option<NonEmptyList<E>> {
        NonEmptyList::from_vec(self.errors)
    }
}

fn settle<E, A: Accumulator<E>, V>(
    accumulator: A,
    failures: usize,
    inputs: usize,
) -> Either<A::Error, V> {
    trace!(failures, inputs, "zip accumulated failures");
    // UNREACHABLE: Only called once at least one Left has been pushed.
    Left(accumulator.finish().unreachable())
}

/// Zips a fixed number of independent Eithers, implemented for tuples of 2 to 10 Eithers sharing
/// the same left type.
///
/// If every input is a Right, the result is a Right holding a tuple of all right values in
/// position order. Otherwise, every left value is handed to an [`Accumulator`] in position order
/// and right values are dropped without being inspected.
///
/// The result can be passed to [`Either::map`] to assemble the successes into any other type.
///
/// # Examples
/// ```
/// # use fp_core::{nel, Either, ZipOrAccumulate};
/// let name: Either<&str, &str> = Either::Right("Ada");
/// let age: Either<&str, u8> = Either::Left("age missing");
/// let email: Either<&str, &str> = Either::Left("email missing");
///
/// assert_eq!(
///     (name, age, email).zip_or_accumulate(),
///     Either::Left(nel!["age missing", "email missing"]),
/// );
///
/// let joined = (Either::<String, u8>::Left("a".into()), Either::<String, u8>::Left("b".into()))
///     .zip_or_accumulate_with(|a, b| a + &b);
/// assert_eq!(joined, Either::Left("ab".to_string()));
/// ```
pub trait ZipOrAccumulate<E>: Sized {
    /// The tuple of right values produced when every input is a Right.
    type Values;

    /// Zips the inputs, gathering failures with the provided `accumulator`.
    fn zip_or_accumulate_by<A: Accumulator<E>>(self, accumulator: A)
    -> Either<A::Error, Self::Values>;

    /// Zips the inputs, folding failures together with `combine` in position order.
    fn zip_or_accumulate_with<F: FnMut(E, E) -> E>(self, combine: F) -> Either<E, Self::Values> {
        self.zip_or_accumulate_by(Combining::new(combine))
    }

    /// Zips the inputs, collecting failures into a [`NonEmptyList`].
    fn zip_or_accumulate(self) -> EitherNel<E, Self::Values> {
        self.zip_or_accumulate_by(Collecting::new())
    }

    /// Zips inputs whose failures are already [`NonEmptyList`]s, concatenating them in position
    /// order into a single flat list.
    fn zip_or_accumulate_flat<T>(self) -> EitherNel<T, Self::Values>
    where
        Flattening<T>: Accumulator<E, Error = NonEmptyList<T>>,
    {
        self.zip_or_accumulate_by(Flattening::new())
    }
}

macro_rules! impl_zip_or_accumulate {
    ($($value:ident $input:ident),+) => {
        impl<E, $($value),+> ZipOrAccumulate<E> for ($(Either<E, $value>,)+) {
            type Values = ($($value,)+);

            fn zip_or_accumulate_by<Acc: Accumulator<E>>(
                self,
                mut accumulator: Acc,
            ) -> Either<Acc::Error, Self::Values> {
                match self {
                    ($(Right($input),)+) => Right(($($input,)+)),
                    ($($input,)+) => {
                        let mut failures = 0;
                        let mut inputs = 0;
                        $(
                            inputs += 1;
                            if let Left(error) = $input {
                                failures += 1;
                                accumulator.push(error);
                            }
                        )+
                        settle::<E, _, _>(accumulator, failures, inputs)
                    },
                }
            }
        }
    };
}

impl_zip_or_accumulate!(A a, B b);
impl_zip_or_accumulate!(A a, B b, C c);
impl_zip_or_accumulate!(A a, B b, C c, D d);
impl_zip_or_accumulate!(A a, B b, C c, D d, F f);
impl_zip_or_accumulate!(A a, B b, C c, D d, F f, G g);
impl_zip_or_accumulate!(A a, B b, C c, D d, F f, G g, H h);
impl_zip_or_accumulate!(A a, B b, C c, D d, F f, G g, H h, I i);
impl_zip_or_accumulate!(A a, B b, C c, D d, F f, G g, H h, I i, J j);
impl_zip_or_accumulate!(A a, B b, C c, D d, F f, G g, H h, I i, J j, K k);

/// Zips any number of Eithers sharing both types, gathering failures with the provided
/// `accumulator`.
///
/// If every input is a Right, the result is a Right holding all right values in input order. An
/// empty input produces an empty Right.
pub fn zip_all_by<E, V, A, I>(inputs: I, mut accumulator: A) -> Either<A::Error, Vec<V>>
where
    I: IntoIterator<Item = Either<E, V>>,
    A: Accumulator<E>,
{
    let mut values = Vec::new();
    let mut failures = 0;
    let mut count = 0;

    for input in inputs {
        count += 1;
        match input {
            Right(value) if failures == 0 => values.push(value),
            Right(_) => {},
            Left(error) => {
                failures += 1;
                accumulator.push(error);
            },
        }
    }

    match failures {
        0 => Right(values),
        _ => settle::<E, _, _>(accumulator, failures, count),
    }
}

/// Zips any number of Eithers, folding failures together with `combine` in input order.
///
/// # Examples
/// ```
/// # use fp_core::{zip_all_with, Either};
/// let inputs: Vec<Either<String, u8>> = vec![
///     Either::Right(1),
///     Either::Left("a".into()),
///     Either::Right(2),
///     Either::Left("b".into()),
/// ];
/// assert_eq!(zip_all_with(inputs, |a, b| a + &b), Either::Left("ab".to_string()));
/// ```
pub fn zip_all_with<E, V, I, F>(inputs: I, combine: F) -> Either<E, Vec<V>>
where
    I: IntoIterator<Item = Either<E, V>>,
    F: FnMut(E, E) -> E,
{
    zip_all_by(inputs, Combining::new(combine))
}

/// Zips any number of Eithers, collecting failures into a [`NonEmptyList`].
pub fn zip_all<E, V, I>(inputs: I) -> EitherNel<E, Vec<V>>
where
    I: IntoIterator<Item = Either<E, V>>,
{
    zip_all_by(inputs, Collecting::new())
}

/// Zips any number of [`EitherNel`]s, concatenating their failures into one flat list.
pub fn zip_all_flat<E, V, I>(inputs: I) -> EitherNel<E, Vec<V>>
where
    I: IntoIterator<Item = EitherNel<E, V>>,
{
    zip_all_by(inputs, Flattening::new())
}

impl<E, A> Either<E, A> {
    /// Zips `self` with `other`, passing both right values to `transform`, or folding both left
    /// values with `combine` (self first).
    pub fn zip_with_or_accumulate<B, Z>(
        self,
        other: Either<E, B>,
        combine: impl FnMut(E, E) -> E,
        transform: impl FnOnce(A, B) -> Z,
    ) -> Either<E, Z> {
        (self, other)
            .zip_or_accumulate_with(combine)
            .map(|(a, b)| transform(a, b))
    }

    /// Zips `self` with `other`, passing both right values to `transform`, or collecting the left
    /// values into a [`NonEmptyList`].
    pub fn zip_or_accumulate<B, Z>(
        self,
        other: Either<E, B>,
        transform: impl FnOnce(A, B) -> Z,
    ) -> EitherNel<E, Z> {
        (self, other)
            .zip_or_accumulate()
            .map(|(a, b)| transform(a, b))
    }
}

impl<E, A> EitherNel<E, A> {
    /// Zips `self` with `other`, passing both right values to `transform`, or concatenating both
    /// lists of failures.
    pub fn zip_or_accumulate_flat<B, Z>(
        self,
        other: EitherNel<E, B>,
        transform: impl FnOnce(A, B) -> Z,
    ) -> EitherNel<E, Z> {
        (self, other)
            .zip_or_accumulate_flat()
            .map(|(a, b)| transform(a, b))
    }
}
