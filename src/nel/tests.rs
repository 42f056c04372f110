#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::nel;
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let list = NonEmptyList::new(1, vec![2, 3]);
    assert_eq!(list.len(), 3);
    assert_eq!(*list.head(), 1);
    assert_eq!(list.tail(), &[2, 3]);
    assert_eq!(*list.last(), 3);
    assert!(!list.is_empty());

    assert_eq!(
        list,
        nel![1, 2, 3],
        "Macro construction should be equal to explicit head and tail."
    );

    let single = NonEmptyList::of("only");
    assert_eq!(single.len(), 1);
    assert_eq!(
        single.last(),
        single.head(),
        "A single element list should have the same head and last."
    );
}

#[test]
fn test_fallible_construction() {
    assert_eq!(
        NonEmptyList::<u8>::from_vec(Vec::new()),
        None,
        "An empty source should never produce a list."
    );
    assert_eq!(NonEmptyList::from_iter_opt(0..0), None);
    assert_eq!(NonEmptyList::from_iter_opt(0..3), Some(nel![0, 1, 2]));

    assert_eq!(
        NonEmptyList::<u8>::try_from(Vec::new()),
        Err(EmptyCollection)
    );
    assert_eq!(NonEmptyList::try_from(vec!['a']), Ok(NonEmptyList::of('a')));
}

#[test]
fn test_indexing() {
    let list = nel!["a", "b", "c"];
    assert_eq!(list[0], "a", "Index 0 should be the head.");
    assert_eq!(list[2], "c");
    assert_eq!(list.get(1), &"b");

    assert_eq!(
        list.try_get(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Indexing past the end should report the index and length."
    );

    assert_panics!({
        let list = nel![1, 2];
        list.get(2);
    });
    assert_panics!({
        let list = NonEmptyList::of(1);
        let _value = list[1];
    });
}

#[test]
fn test_iterators() {
    let list = nel![0, 1, 2, 3];
    assert_eq!(list.iter().len(), 4);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [0, 1, 2, 3],
        "Iteration should yield the head then the tail."
    );
    assert_eq!(
        list.iter().rev().copied().collect::<Vec<_>>(),
        [3, 2, 1, 0],
        "Reverse iteration should yield the head last."
    );
    assert_eq!(
        list.iter().collect::<Vec<_>>(),
        list.iter().collect::<Vec<_>>(),
        "Borrowed iteration should be restartable."
    );

    let mut iter = list.into_iter();
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(2));
    assert_eq!(iter.next_back(), Some(1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let mut iter = NonEmptyList::of('x').into_iter();
    assert_eq!(iter.next_back(), Some('x'), "The head is the back of a single element list.");
    assert_eq!(iter.next(), None);
}

#[test]
fn test_transformations() {
    assert_eq!(nel![1, 2, 3].map(|i| i * 10), nel![10, 20, 30]);
    assert_eq!(
        nel![1, 3].flat_map(|i| nel![i, i + 1]),
        nel![1, 2, 3, 4],
        "Flat map should preserve order across produced lists."
    );
    assert_eq!(nel![1].concat(nel![2, 3]), nel![1, 2, 3]);
    assert_eq!(nel![1, 2].plus(3), nel![1, 2, 3]);
    assert_eq!(
        nel![1, 2, 3].zip(nel!['a', 'b']),
        nel![(1, 'a'), (2, 'b')],
        "Zip should stop at the end of the shorter list."
    );

    let list = nel![5, 6, 7];
    assert!(list.contains(&6));
    assert!(!list.contains(&8));
    assert_eq!(list.index_of(&7), Some(2));
    assert_eq!(list.to_vec(), vec![5, 6, 7]);
    assert_eq!(Vec::from(list), vec![5, 6, 7]);
}

#[test]
fn test_display() {
    assert_eq!(nel![1, 2, 3].to_string(), "NonEmptyList(1, 2, 3)");
    assert_eq!(NonEmptyList::of("a").to_string(), "NonEmptyList(a)");
}

proptest! {
    #[test]
    fn vec_round_trip_preserves_order(source in prop::collection::vec(any::<i32>(), 1..64)) {
        let list = NonEmptyList::from_vec(source.clone());
        prop_assert!(list.is_some());
        let list = list.unwrap();
        prop_assert_eq!(list.len(), source.len());
        prop_assert_eq!(list.into_vec(), source);
    }

    #[test]
    fn indexing_matches_source(source in prop::collection::vec(any::<u8>(), 1..32)) {
        let list = NonEmptyList::from_iter_opt(source.iter().copied()).unwrap();
        for (index, item) in source.iter().enumerate() {
            prop_assert_eq!(list[index], *item);
        }
        prop_assert!(list.try_get(source.len()).is_err());
    }
}
