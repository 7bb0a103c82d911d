use alloc::vec::Vec;
use core::cmp::Ordering;

use super::require;
use crate::{Comparator, Error, Result};

/// Collects `container` and returns its distinct values in ascending order.
///
/// Fails if the container is empty or if `k` cannot be a rank of it, before sorting.
fn distinct_ascending<'a, T, I, C>(
    container: I,
    k: usize,
    comparator: &C,
    operation: &'static str,
) -> Result<Vec<&'a T>>
where
    T: ?Sized + PartialEq + 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let mut sorted: Vec<&'a T> = container.into_iter().collect();
    if sorted.is_empty() {
        return Err(Error::Empty.logged(operation));
    }
    if k == 0 || k > sorted.len() {
        return Err(Error::RankOutOfRange { k, available: sorted.len() }.logged(operation));
    }

    // Stable, so the first occurrence of a value leads its run of equals.
    sorted.sort_by(|a, b| comparator.compare(a, b));

    let mut distinct: Vec<&'a T> = Vec::with_capacity(sorted.len());
    let mut run = 0;
    for item in sorted {
        match distinct.last() {
            Some(last) if comparator.compare(last, item) == Ordering::Equal => {
                if !distinct[run..].iter().any(|kept| **kept == *item) {
                    distinct.push(item);
                }
            }
            _ => {
                run = distinct.len();
                distinct.push(item);
            }
        }
    }

    if k > distinct.len() {
        return Err(Error::RankOutOfRange { k, available: distinct.len() }.logged(operation));
    }
    Ok(distinct)
}

/// Returns the `k`-th smallest distinct value of `container` as defined by `comparator`.
///
/// `k` is one-based: `kmin(c, 1, cmp)` is the minimum. Duplicate occurrences of a value share
/// a single rank.
///
/// Values are deduplicated with [`PartialEq`], not with the comparator. Two elements the
/// comparator ties but that are not `==` occupy separate ranks, in the order they are
/// encountered. Deduplication assumes `a == b` implies `compare(a, b) == Equal`.
///
/// # Errors
///
/// - [`Error::MissingContainer`] / [`Error::MissingComparator`] if an argument is `None`.
/// - [`Error::Empty`] if the container holds no elements.
/// - [`Error::RankOutOfRange`] if `k` is zero, exceeds the number of elements, or exceeds the
///   number of distinct values.
///
/// # Examples
///
/// ```
/// use order_select::{kmin, Error, Natural};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(kmin(Some(&values), 1, Some(&Natural)), Ok(&1));
/// assert_eq!(kmin(Some(&values), 2, Some(&Natural)), Ok(&3));
/// assert_eq!(kmin(Some(&values), 3, Some(&Natural)), Ok(&5));
/// assert_eq!(kmin(Some(&values), 5, Some(&Natural)), Err(Error::RankOutOfRange { k: 5, available: 4 }));
/// ```
///
/// # Complexity
///
/// O(n log n) comparisons, O(n) extra space.
pub fn kmin<'a, T, I, C>(container: Option<I>, k: usize, comparator: Option<&C>) -> Result<&'a T>
where
    T: ?Sized + PartialEq + 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (container, comparator) = require(container, comparator, "kmin")?;
    let distinct = distinct_ascending(container, k, comparator, "kmin")?;
    Ok(distinct[k - 1])
}

/// Returns the `k`-th largest distinct value of `container` as defined by `comparator`.
///
/// `k` is one-based: `kmax(c, 1, cmp)` is the maximum. Ranks are counted over the same
/// deduplicated values as [`kmin`], so `kmin(c, k, cmp) == kmax(c, d - k + 1, cmp)` where `d` is
/// the number of distinct values.
///
/// # Errors
///
/// - [`Error::MissingContainer`] / [`Error::MissingComparator`] if an argument is `None`.
/// - [`Error::Empty`] if the container holds no elements.
/// - [`Error::RankOutOfRange`] if `k` is zero, exceeds the number of elements, or exceeds the
///   number of distinct values.
///
/// # Examples
///
/// ```
/// use order_select::{kmax, Natural};
///
/// let values = [5, 3, 8, 3, 1];
/// assert_eq!(kmax(Some(&values), 1, Some(&Natural)), Ok(&8));
/// assert_eq!(kmax(Some(&values), 4, Some(&Natural)), Ok(&1));
/// ```
///
/// # Complexity
///
/// O(n log n) comparisons, O(n) extra space.
pub fn kmax<'a, T, I, C>(container: Option<I>, k: usize, comparator: Option<&C>) -> Result<&'a T>
where
    T: ?Sized + PartialEq + 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (container, comparator) = require(container, comparator, "kmax")?;
    let distinct = distinct_ascending(container, k, comparator, "kmax")?;
    Ok(distinct[distinct.len() - k])
}
