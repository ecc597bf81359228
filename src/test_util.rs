use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FromIterator;

pub fn assert_elements_eq<T: Clone + Debug + Eq + Hash>(v1: &Vec<T>, v2: &Vec<T>) {
    let set1: HashSet<T> = HashSet::from_iter(v1.iter().cloned());
    let set2: HashSet<T> = HashSet::from_iter(v2.iter().cloned());
    assert_eq!(set1, set2);
}

/// Asserts that every channel of `actual` is within `tolerance` of `expected`.
pub fn assert_color_near(actual: crate::Rgba, expected: crate::Rgba, tolerance: u8) {
    let a: [u8; 4] = actual.into();
    let e: [u8; 4] = expected.into();
    for (x, y) in a.iter().zip(e.iter()) {
        assert!(
            (*x as i16 - *y as i16).abs() <= tolerance as i16,
            "{} is not within {} of {}",
            actual,
            tolerance,
            expected
        );
    }
}
