pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch, marking
    /// the call site as one where None is impossible rather than merely unexpected.
    ///
    /// No panics annotation is used to allow it to pass the clippy lint. The whole semantics are
    /// that if used, the function indicates that None can't occur.
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!(),
        }
    }
}
