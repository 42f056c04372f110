use std::iter::FusedIterator;

use super::Either;

// Iteration is right-biased, matching map and flat_map: a Left yields nothing.

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;

    type IntoIter = IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.get_or_null().into_iter(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntoIter<R> {
    pub(crate) inner: std::option::IntoIter<R>,
}

impl<R> Iterator for IntoIter<R> {
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R> DoubleEndedIterator for IntoIter<R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<R> FusedIterator for IntoIter<R> {}

impl<R> ExactSizeIterator for IntoIter<R> {}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;

    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.as_ref().get_or_null().into_iter(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a, R> {
    pub(crate) inner: std::option::IntoIter<&'a R>,
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, R> DoubleEndedIterator for Iter<'a, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, R> FusedIterator for Iter<'a, R> {}

impl<'a, R> ExactSizeIterator for Iter<'a, R> {}
