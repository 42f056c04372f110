use std::fmt::{self, Display, Formatter};
use std::ops::Index;

use super::Iter;
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// An ordered list that always contains at least one element. The first element is stored apart
/// from the rest, so the guarantee is upheld by the type itself rather than by a runtime check.
///
/// A NonEmptyList isn't modified after construction. Every transformation consumes the list and
/// produces a new one.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the NonEmptyList.
/// - `m`: The number of items in the second NonEmptyList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `head/last` | `O(1)` |
/// | `get` | `O(1)` |
/// | `from_vec` | `O(n)` |
/// | `plus` | `O(1)`*, `O(n)` |
/// | `concat` | `O(m)`*, `O(n+m)` |
/// | `contains` | `O(n)` |
///
/// \* Appending is amortised in the same way as [`Vec::push`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyList<A> {
    pub(crate) head: A,
    pub(crate) tail: Vec<A>,
}

impl<A> NonEmptyList<A> {
    /// Creates a new NonEmptyList from an explicit `head` and a possibly empty `tail`.
    ///
    /// # Examples
    /// ```
    /// # use fp_core::NonEmptyList;
    /// let list = NonEmptyList::new(1, vec![2, 3]);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub const fn new(head: A, tail: Vec<A>) -> NonEmptyList<A> {
        NonEmptyList { head, tail }
    }

    /// Creates a new NonEmptyList containing only `head`.
    pub const fn of(head: A) -> NonEmptyList<A> {
        NonEmptyList {
            head,
            tail: Vec::new(),
        }
    }

    /// Creates a NonEmptyList from the provided Vec, returning [`None`] if it is empty. This is the
    /// only way that building a NonEmptyList can fail.
    ///
    /// # Examples
    /// ```
    /// # use fp_core::NonEmptyList;
    /// assert_eq!(NonEmptyList::from_vec(vec![1, 2]), Some(NonEmptyList::new(1, vec![2])));
    /// assert_eq!(NonEmptyList::<u8>::from_vec(vec![]), None);
    /// ```
    pub fn from_vec(mut vec: Vec<A>) -> Option<NonEmptyList<A>> {
        if vec.is_empty() {
            None
        } else {
            let head = vec.remove(0);
            Some(NonEmptyList { head, tail: vec })
        }
    }

    /// Creates a NonEmptyList from any iterable source, returning [`None`] if it yields no
    /// elements.
    pub fn from_iter_opt<I: IntoIterator<Item = A>>(iter: I) -> Option<NonEmptyList<A>> {
        let mut iter = iter.into_iter();
        let head = iter.next()?;
        Some(NonEmptyList {
            head,
            tail: iter.collect(),
        })
    }

    /// Returns the length of the NonEmptyList, which is always at least 1.
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always returns false. Provided for parity with other collections.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns a reference to the first element.
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Returns all elements after the first, which may be an empty slice.
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// Returns a reference to the last element, which is the head if the tail is empty.
    pub fn last(&self) -> &A {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the NonEmptyList.
    pub fn get(&self, index: usize) -> &A {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&A, IndexOutOfBounds> {
        match index {
            0 => Ok(&self.head),
            _ => self.tail.get(index - 1).ok_or(IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    /// Returns a borrowed iterator over the elements, head first.
    pub fn iter(&self) -> Iter<'_, A> {
        self.into_iter()
    }

    /// Consumes the NonEmptyList, returning all elements as a Vec, head first.
    pub fn into_vec(self) -> Vec<A> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }

    /// Applies `f` to every element in order, producing a list of the same length.
    pub fn map<B, F: FnMut(A) -> B>(self, mut f: F) -> NonEmptyList<B> {
        NonEmptyList {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }

    /// Applies `f` to every element in order and flattens the produced lists into one. The result
    /// is non-empty because the head alone produces at least one element.
    pub fn flat_map<B, F: FnMut(A) -> NonEmptyList<B>>(self, mut f: F) -> NonEmptyList<B> {
        let mut result = f(self.head);
        for item in self.tail {
            result.tail.extend(f(item));
        }
        result
    }

    /// Returns a new list with `other` appended after the elements of `self`.
    pub fn concat(mut self, other: NonEmptyList<A>) -> NonEmptyList<A> {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    /// Returns a new list with `value` appended as the last element.
    pub fn plus(mut self, value: A) -> NonEmptyList<A> {
        self.tail.push(value);
        self
    }

    /// Pairs up elements of both lists by position, stopping at the end of the shorter list.
    pub fn zip<B>(self, other: NonEmptyList<B>) -> NonEmptyList<(A, B)> {
        NonEmptyList {
            head: (self.head, other.head),
            tail: self.tail.into_iter().zip(other.tail).collect(),
        }
    }
}

impl<A: Clone> NonEmptyList<A> {
    /// Returns all elements as a new Vec, head first.
    pub fn to_vec(&self) -> Vec<A> {
        self.clone().into_vec()
    }
}

impl<A: PartialEq> NonEmptyList<A> {
    pub fn index_of(&self, item: &A) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &A) -> bool {
        self.index_of(item).is_some()
    }
}

impl<A> Index<usize> for NonEmptyList<A> {
    type Output = A;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<A> TryFrom<Vec<A>> for NonEmptyList<A> {
    type Error = EmptyCollection;

    fn try_from(value: Vec<A>) -> Result<Self, Self::Error> {
        NonEmptyList::from_vec(value).ok_or(EmptyCollection)
    }
}

impl<A> From<NonEmptyList<A>> for Vec<A> {
    fn from(value: NonEmptyList<A>) -> Self {
        value.into_vec()
    }
}

impl<A: Display> Display for NonEmptyList<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NonEmptyList(")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ")")
    }
}
