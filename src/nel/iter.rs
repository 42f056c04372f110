use std::iter::FusedIterator;
use std::{slice, vec};

use super::NonEmptyList;

impl<A> IntoIterator for NonEmptyList<A> {
    type Item = A;

    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            head: Some(self.head),
            tail: self.tail.into_iter(),
        }
    }
}

#[derive(Debug)]
pub struct IntoIter<A> {
    // The head is yielded first from the front, or last from the back once the tail is exhausted.
    pub(crate) head: Option<A>,
    pub(crate) tail: vec::IntoIter<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().or_else(|| self.tail.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<A> DoubleEndedIterator for IntoIter<A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail.next_back().or_else(|| self.head.take())
    }
}

impl<A> FusedIterator for IntoIter<A> {}

impl<A> ExactSizeIterator for IntoIter<A> {
    fn len(&self) -> usize {
        usize::from(self.head.is_some()) + self.tail.len()
    }
}

impl<'a, A> IntoIterator for &'a NonEmptyList<A> {
    type Item = &'a A;

    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            head: Some(&self.head),
            tail: self.tail.iter(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a, A> {
    pub(crate) head: Option<&'a A>,
    pub(crate) tail: slice::Iter<'a, A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().or_else(|| self.tail.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail.next_back().or_else(|| self.head.take())
    }
}

impl<'a, A> FusedIterator for Iter<'a, A> {}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {
    fn len(&self) -> usize {
        usize::from(self.head.is_some()) + self.tail.len()
    }
}
