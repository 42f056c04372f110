use std::iter::FusedIterator;

use super::Option;

impl<A> IntoIterator for Option<A> {
    type Item = A;

    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.get_or_null().into_iter(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntoIter<A> {
    pub(crate) inner: std::option::IntoIter<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> std::option::Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, std::option::Option<usize>) {
        self.inner.size_hint()
    }
}

impl<A> DoubleEndedIterator for IntoIter<A> {
    fn next_back(&mut self) -> std::option::Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<A> FusedIterator for IntoIter<A> {}

impl<A> ExactSizeIterator for IntoIter<A> {}

impl<'a, A> IntoIterator for &'a Option<A> {
    type Item = &'a A;

    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.as_ref().get_or_null().into_iter(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a, A> {
    pub(crate) inner: std::option::IntoIter<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> std::option::Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, std::option::Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A> {
    fn next_back(&mut self) -> std::option::Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, A> FusedIterator for Iter<'a, A> {}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}
