#![cfg(test)]

use super::*;
use crate::util::counter::CallCounter;

#[test]
fn test_variants() {
    let some = Option::Some(3);
    let none = Option::<i32>::None;

    assert!(some.is_some() && !some.is_none());
    assert!(none.is_none() && !none.is_some());
    assert_eq!(Option::<u8>::default(), Option::None, "The default Option should be empty.");
}

#[test]
fn test_transformations() {
    assert_eq!(Option::Some(2).map(|i| i + 1), Option::Some(3));
    assert_eq!(Option::<i32>::None.map(|i| i + 1), Option::None);
    assert_eq!(
        Option::Some(2).flat_map(|_| Option::<u8>::None),
        Option::None,
        "Flat map should return the Option produced by the function."
    );
    assert_eq!(Option::Some(4).filter(|i| i % 2 == 0), Option::Some(4));
    assert_eq!(Option::Some(5).filter(|i| i % 2 == 0), Option::None);

    let counter = CallCounter::new();
    let hits = counter.clone();
    let none = Option::<i32>::None.map(move |i| {
        hits.hit();
        i
    });
    assert_eq!(none, Option::None);
    assert_eq!(counter.count(), 0, "Map should never call f on None.");
}

#[test]
fn test_fold_and_defaults() {
    assert_eq!(Option::Some(1).fold(|| 0, |i| i * 10), 10);
    assert_eq!(Option::<i32>::None.fold(|| 0, |i| i * 10), 0);
    assert_eq!(Option::<i32>::None.get_or_else(|| 7), 7);
    assert_eq!(Option::Some(1).get_or_else(|| unreachable!()), 1);
}

#[test]
fn test_std_conversions() {
    assert_eq!(Option::from(Some(1)), Option::Some(1));
    assert_eq!(Option::<u8>::from(None), Option::None);
    assert_eq!(Option::Some('a').get_or_null(), Some('a'));
    assert_eq!(std::option::Option::<u8>::from(Option::None), None);
}

#[test]
fn test_iterators_and_display() {
    let some = Option::Some(9);
    assert_eq!(some.iter().collect::<Vec<_>>(), [&9]);
    assert_eq!(some.into_iter().len(), 1);
    assert_eq!(Option::<u8>::None.into_iter().next(), None);

    assert_eq!(Option::Some(9).to_string(), "Some(9)");
    assert_eq!(Option::<u8>::None.to_string(), "None");
}
