//! Stateless selection functions.
//!
//! Every function takes its container and comparator as [`Option`]s and checks them before
//! reading any element: an absent container is reported first, then an absent comparator.
//! Only after both are present do emptiness, rank and bound checks run.
//!
//! A container is anything whose iteration yields `&T`: slices, arrays, `Vec`, `VecDeque`,
//! `LinkedList`, `BTreeSet`, `HashSet` (all by reference) or a borrowing iterator. No function
//! mutates or reorders it. Results borrow from the container.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{Comparator, Error, Result};

mod rank;

pub use rank::{kmax, kmin};

/// Unwraps the container and the comparator, reporting the first absent one.
fn require<'c, I, C: ?Sized>(
    container: Option<I>,
    comparator: Option<&'c C>,
    operation: &'static str,
) -> Result<(I, &'c C)> {
    let Some(container) = container else {
        return Err(Error::MissingContainer.logged(operation));
    };
    let Some(comparator) = comparator else {
        return Err(Error::MissingComparator.logged(operation));
    };
    Ok((container, comparator))
}

/// Scans `items` once, keeping the first element that no later element beats.
///
/// A later element replaces the running candidate only when it compares as `wins`, so the
/// first-encountered element is kept among equals.
fn extreme<'a, T, I, C>(items: I, comparator: &C, wins: Ordering) -> Option<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let mut items = items.into_iter();
    let mut best = items.next()?;
    for item in items {
        if comparator.compare(item, best) == wins {
            best = item;
        }
    }
    Some(best)
}

/// Returns the minimum element of `container` as defined by `comparator`.
///
/// Among elements the comparator considers equal, the first one encountered is returned.
///
/// # Errors
///
/// - [`Error::MissingContainer`] / [`Error::MissingComparator`] if an argument is `None`.
/// - [`Error::Empty`] if the container holds no elements.
///
/// # Examples
///
/// ```
/// use order_select::{min, Error, Natural};
///
/// assert_eq!(min(Some(&[5, 3, 8, 3, 1]), Some(&Natural)), Ok(&1));
/// assert_eq!(min(Some(&Vec::<i32>::new()), Some(&Natural)), Err(Error::Empty));
/// ```
///
/// # Complexity
///
/// O(n) comparisons, O(1) extra space.
pub fn min<'a, T, I, C>(container: Option<I>, comparator: Option<&C>) -> Result<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (container, comparator) = require(container, comparator, "min")?;
    extreme(container, comparator, Ordering::Less).ok_or_else(|| Error::Empty.logged("min"))
}

/// Returns the maximum element of `container` as defined by `comparator`.
///
/// Among elements the comparator considers equal, the first one encountered is returned.
///
/// # Errors
///
/// - [`Error::MissingContainer`] / [`Error::MissingComparator`] if an argument is `None`.
/// - [`Error::Empty`] if the container holds no elements.
///
/// # Examples
///
/// ```
/// use order_select::{max, Natural};
///
/// assert_eq!(max(Some(&[5, 3, 8, 3, 1]), Some(&Natural)), Ok(&8));
/// ```
///
/// # Complexity
///
/// O(n) comparisons, O(1) extra space.
pub fn max<'a, T, I, C>(container: Option<I>, comparator: Option<&C>) -> Result<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (container, comparator) = require(container, comparator, "max")?;
    extreme(container, comparator, Ordering::Greater).ok_or_else(|| Error::Empty.logged("max"))
}

/// Returns every element `e` of `container` with `low <= e <= high`, as defined by
/// `comparator`.
///
/// Both bounds are inclusive and need not be elements of the container. Duplicates are kept:
/// an in-bounds value occurring m times in the container occurs m times in the result. The
/// result is freshly allocated and lists elements in the container's iteration order.
///
/// # Errors
///
/// - [`Error::MissingContainer`] / [`Error::MissingComparator`] if an argument is `None`.
/// - [`Error::Empty`] if the container holds no elements.
/// - [`Error::InvertedRange`] if `low` compares greater than `high`.
/// - [`Error::NoneInRange`] if no element lies within the bounds. An empty result is never
///   returned.
///
/// # Examples
///
/// ```
/// use order_select::{range, Error, Natural};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(range(Some(&values), &3, &8, Some(&Natural)), Ok(vec![&5, &3, &8, &3]));
/// assert_eq!(range(Some(&values), &9, &10, Some(&Natural)), Err(Error::NoneInRange));
/// assert_eq!(range(Some(&values), &8, &3, Some(&Natural)), Err(Error::InvertedRange));
/// ```
///
/// # Complexity
///
/// O(n) comparisons in a single pass.
pub fn range<'a, T, I, C>(container: Option<I>, low: &T, high: &T, comparator: Option<&C>) -> Result<Vec<&'a T>>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (container, comparator) = require(container, comparator, "range")?;

    let mut items = container.into_iter().peekable();
    if items.peek().is_none() {
        return Err(Error::Empty.logged("range"));
    }
    if comparator.compare(low, high) == Ordering::Greater {
        return Err(Error::InvertedRange.logged("range"));
    }

    let within: Vec<&'a T> = items
        .filter(|item| {
            comparator.compare(item, low) != Ordering::Less && comparator.compare(item, high) != Ordering::Greater
        })
        .collect();

    if within.is_empty() {
        return Err(Error::NoneInRange.logged("range"));
    }
    Ok(within)
}

/// Returns the smallest element of `container` that is greater than or equal to `key`, as
/// defined by `comparator`.
///
/// `key` need not be an element of the container. The answer is the [`min`] of the [`range`]
/// from `key` up to the container's [`max`], so ties resolve exactly as they do there.
///
/// # Errors
///
/// - [`Error::MissingContainer`] / [`Error::MissingComparator`] if an argument is `None`.
/// - [`Error::Empty`] if the container holds no elements.
/// - [`Error::InvertedRange`] if every element is less than `key`.
///
/// # Examples
///
/// ```
/// use order_select::{ceiling, Error, Natural};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(ceiling(Some(&values), &4, Some(&Natural)), Ok(&5));
/// assert_eq!(ceiling(Some(&values), &5, Some(&Natural)), Ok(&5));
/// assert_eq!(ceiling(Some(&values), &9, Some(&Natural)), Err(Error::InvertedRange));
/// ```
///
/// # Complexity
///
/// O(n) comparisons over two passes, O(m) extra space for the m candidates.
pub fn ceiling<'a, T, I, C>(container: Option<I>, key: &T, comparator: Option<&C>) -> Result<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T> + Clone,
    C: Comparator<T> + ?Sized,
{
    let (container, comparator) = require(container, comparator, "ceiling")?;
    let upper = max(Some(container.clone()), Some(comparator))?;
    let candidates = range(Some(container), key, upper, Some(comparator))?;
    min(Some(candidates.iter().copied()), Some(comparator))
}

/// Returns the largest element of `container` that is less than or equal to `key`, as
/// defined by `comparator`.
///
/// `key` need not be an element of the container. The answer is the [`max`] of the [`range`]
/// from the container's [`min`] up to `key`, so ties resolve exactly as they do there.
///
/// # Errors
///
/// - [`Error::MissingContainer`] / [`Error::MissingComparator`] if an argument is `None`.
/// - [`Error::Empty`] if the container holds no elements.
/// - [`Error::InvertedRange`] if every element is greater than `key`.
///
/// # Examples
///
/// ```
/// use order_select::{floor, Error, Natural};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(floor(Some(&values), &4, Some(&Natural)), Ok(&3));
/// assert_eq!(floor(Some(&values), &0, Some(&Natural)), Err(Error::InvertedRange));
/// ```
///
/// # Complexity
///
/// O(n) comparisons over two passes, O(m) extra space for the m candidates.
pub fn floor<'a, T, I, C>(container: Option<I>, key: &T, comparator: Option<&C>) -> Result<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T> + Clone,
    C: Comparator<T> + ?Sized,
{
    let (container, comparator) = require(container, comparator, "floor")?;
    let lower = min(Some(container.clone()), Some(comparator))?;
    let candidates = range(Some(container), lower, key, Some(comparator))?;
    max(Some(candidates.iter().copied()), Some(comparator))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{Natural, Reversed};
    use alloc::collections::{BTreeSet, LinkedList, VecDeque};
    use alloc::vec;
    use proptest::prelude::*;

    const VALUES: [i32; 5] = [5, 3, 8, 3, 1];

    #[test]
    fn absent_container_is_reported_first() {
        let none = None::<&[i32]>;
        assert_eq!(min(none, None::<&Natural>), Err(Error::MissingContainer));
        assert_eq!(max(none, Some(&Natural)), Err(Error::MissingContainer));
        assert_eq!(range(none, &1, &2, Some(&Natural)), Err(Error::MissingContainer));
        assert_eq!(ceiling(none, &1, Some(&Natural)), Err(Error::MissingContainer));
        assert_eq!(floor(none, &1, None::<&Natural>), Err(Error::MissingContainer));
    }

    #[test]
    fn absent_comparator_beats_emptiness() {
        let empty: &[i32] = &[];
        let none = None::<&Natural>;
        assert_eq!(min(Some(empty), none), Err(Error::MissingComparator));
        assert_eq!(max(Some(empty), none), Err(Error::MissingComparator));
        assert_eq!(range(Some(empty), &1, &0, none), Err(Error::MissingComparator));
        assert_eq!(ceiling(Some(empty), &1, none), Err(Error::MissingComparator));
        assert_eq!(floor(Some(empty), &1, none), Err(Error::MissingComparator));
    }

    #[test]
    fn empty_container() {
        let empty: &[i32] = &[];
        let order = Some(&Natural);
        assert_eq!(min(Some(empty), order), Err(Error::Empty));
        assert_eq!(max(Some(empty), order), Err(Error::Empty));
        // Emptiness is checked before the bounds.
        assert_eq!(range(Some(empty), &2, &1, order), Err(Error::Empty));
        assert_eq!(ceiling(Some(empty), &1, order), Err(Error::Empty));
        assert_eq!(floor(Some(empty), &1, order), Err(Error::Empty));
    }

    #[test]
    fn ties_keep_the_first_encountered() {
        let pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let by_number = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);

        assert_eq!(min(Some(&pairs), Some(&by_number)), Ok(&(1, 'b')));
        assert_eq!(max(Some(&pairs), Some(&by_number)), Ok(&(2, 'a')));
        assert_eq!(ceiling(Some(&pairs), &(2, 'z'), Some(&by_number)), Ok(&(2, 'a')));
        assert_eq!(floor(Some(&pairs), &(1, 'z'), Some(&by_number)), Ok(&(1, 'b')));
    }

    #[test]
    fn results_borrow_from_the_container() {
        let values = VALUES;
        let result = min(Some(&values), Some(&Natural)).unwrap();
        let [_, first_three, _, second_three, one] = &values;
        assert!(core::ptr::eq(result, one));

        let within = range(Some(&values), &3, &3, Some(&Natural)).unwrap();
        assert!(core::ptr::eq(within[0], first_three));
        assert!(core::ptr::eq(within[1], second_three));
    }

    #[test]
    fn range_is_inclusive_and_keeps_duplicates() {
        assert_eq!(range(Some(&VALUES), &3, &8, Some(&Natural)), Ok(vec![&5, &3, &8, &3]));
        assert_eq!(range(Some(&VALUES), &3, &3, Some(&Natural)), Ok(vec![&3, &3]));
        assert_eq!(range(Some(&VALUES), &4, &4, Some(&Natural)), Err(Error::NoneInRange));
        assert_eq!(range(Some(&VALUES), &9, &10, Some(&Natural)), Err(Error::NoneInRange));
        assert_eq!(range(Some(&VALUES), &8, &3, Some(&Natural)), Err(Error::InvertedRange));
    }

    #[test]
    fn ceiling_and_floor_outside_the_container() {
        let order = Some(&Natural);
        assert_eq!(ceiling(Some(&VALUES), &-100, order), Ok(&1));
        assert_eq!(ceiling(Some(&VALUES), &8, order), Ok(&8));
        assert_eq!(ceiling(Some(&VALUES), &9, order), Err(Error::InvertedRange));
        assert_eq!(floor(Some(&VALUES), &100, order), Ok(&8));
        assert_eq!(floor(Some(&VALUES), &1, order), Ok(&1));
        assert_eq!(floor(Some(&VALUES), &0, order), Err(Error::InvertedRange));
    }

    #[test]
    fn reversed_order_swaps_roles() {
        let order = Some(&Reversed(Natural));
        assert_eq!(min(Some(&VALUES), order), Ok(&8));
        assert_eq!(max(Some(&VALUES), order), Ok(&1));
        assert_eq!(ceiling(Some(&VALUES), &4, order), Ok(&3));
        assert_eq!(floor(Some(&VALUES), &4, order), Ok(&5));
    }

    #[test]
    fn any_container() {
        let deque: VecDeque<i32> = VALUES.into_iter().collect();
        let list: LinkedList<i32> = VALUES.into_iter().collect();
        let set: BTreeSet<i32> = VALUES.into_iter().collect();
        let order = Some(&Natural);

        assert_eq!(min(Some(&deque), order), Ok(&1));
        assert_eq!(max(Some(&list), order), Ok(&8));
        assert_eq!(ceiling(Some(&set), &4, order), Ok(&5));
        let values = VALUES;
        assert_eq!(floor(Some(values.iter()), &4, order), Ok(&3));
        assert_eq!(range(Some(&set), &3, &8, order), Ok(vec![&3, &5, &8]));
    }

    #[test]
    fn unsized_elements() {
        let words = ["pear", "fig", "banana"];
        let order: &dyn Comparator<str> = &Natural;
        let unsized_words = words.iter().copied();
        assert_eq!(min(Some(unsized_words.clone()), Some(order)), Ok("banana"));
        assert_eq!(ceiling(Some(unsized_words), "c", Some(order)), Ok("fig"));
    }

    proptest! {
        #[test]
        fn min_and_max_bound_every_element(values in prop::collection::vec(-50i32..50, 1..64)) {
            let low = min(Some(&values), Some(&Natural)).unwrap();
            let high = max(Some(&values), Some(&Natural)).unwrap();
            for value in &values {
                prop_assert!(low <= value && value <= high);
            }
        }

        #[test]
        fn ceiling_and_floor_bracket_the_key(values in prop::collection::vec(-50i32..50, 1..64), key in -60i32..60) {
            match ceiling(Some(&values), &key, Some(&Natural)) {
                Ok(found) => {
                    prop_assert!(*found >= key);
                    prop_assert!(values.iter().all(|v| *v < key || v >= found));
                }
                Err(error) => {
                    prop_assert!(error.is_no_such_element());
                    prop_assert!(values.iter().all(|v| *v < key));
                }
            }
            match floor(Some(&values), &key, Some(&Natural)) {
                Ok(found) => {
                    prop_assert!(*found <= key);
                    prop_assert!(values.iter().all(|v| *v > key || v <= found));
                }
                Err(error) => {
                    prop_assert!(error.is_no_such_element());
                    prop_assert!(values.iter().all(|v| *v > key));
                }
            }
        }
    }
}
