use super::Either;
use super::Either::*;

impl<L, R> Either<L, R> {
    /// Merges two Eithers of the same shape.
    ///
    /// - Two Rights are merged with `combine_right`.
    /// - Two Lefts are merged with `combine_left`.
    /// - Otherwise, whichever side is a Left is returned as is. A failure always dominates a
    ///   success, regardless of which operand it came from.
    ///
    /// # Examples
    /// ```
    /// # use fp_core::Either;
    /// let add = |a: i32, b: i32| a + b;
    /// let concat = |a: String, b: String| a + &b;
    ///
    /// let both = Either::<String, i32>::Right(1).combine(Either::Right(2), concat, add);
    /// assert_eq!(both, Either::Right(3));
    ///
    /// let mixed = Either::Right(1).combine(Either::Left("b".to_string()), concat, add);
    /// assert_eq!(mixed, Either::Left("b".to_string()));
    /// ```
    pub fn combine(
        self,
        other: Either<L, R>,
        combine_left: impl FnOnce(L, L) -> L,
        combine_right: impl FnOnce(R, R) -> R,
    ) -> Either<L, R> {
        match (self, other) {
            (Left(a), Left(b)) => Left(combine_left(a, b)),
            (Left(a), Right(_)) => Left(a),
            (Right(_), Left(b)) => Left(b),
            (Right(a), Right(b)) => Right(combine_right(a, b)),
        }
    }

    /// Combines every Either produced by `iter`, in order, starting from `Right(empty)`.
    ///
    /// The result is a Right only if every input is a Right, in which case all right values are
    /// merged with `combine_right`. Otherwise, all left values are merged with `combine_left`
    /// and right values are discarded.
    pub fn combine_all<I>(
        iter: I,
        empty: R,
        mut combine_left: impl FnMut(L, L) -> L,
        mut combine_right: impl FnMut(R, R) -> R,
    ) -> Either<L, R>
    where
        I: IntoIterator<Item = Either<L, R>>,
    {
        iter.into_iter().fold(Right(empty), |acc, next| {
            acc.combine(next, &mut combine_left, &mut combine_right)
        })
    }
}
