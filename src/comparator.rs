use core::cmp::Ordering;

/// A total order over `T`, supplied by the caller.
///
/// Implementations must behave as a strict total order for every pair of elements they are
/// asked to compare. The selection functions trust this contract and never check it.
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparator, so different orderings can be applied
/// to the same element type without wrapping it.
///
/// # Examples
///
/// ```
/// use order_select::{min, Natural, Reversed};
///
/// let words = ["pear", "fig", "banana"];
///
/// // By length, through a closure.
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(min(Some(&words), Some(&by_len)), Ok(&"fig"));
///
/// // Alphabetically, through `Natural`, then reversed.
/// assert_eq!(min(Some(&words), Some(&Natural)), Ok(&"banana"));
/// assert_eq!(min(Some(&words), Some(&Reversed(Natural))), Ok(&"pear"));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `this` with `that`.
    fn compare(&self, this: &T, that: &T) -> Ordering;

    /// Returns a comparator that orders elements the opposite way.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use order_select::{max, Comparator};
    ///
    /// struct ByLength;
    ///
    /// impl Comparator<str> for ByLength {
    ///     fn compare(&self, this: &str, that: &str) -> Ordering {
    ///         this.len().cmp(&that.len())
    ///     }
    /// }
    ///
    /// let words = ["pear", "fig", "banana"];
    /// let shortest_first = ByLength.reversed();
    /// assert_eq!(max(Some(words.iter().copied()), Some(&shortest_first)), Ok("fig"));
    /// ```
    #[must_use]
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, this: &T, that: &T) -> Ordering {
        self(this, that)
    }
}

/// A zero-sized comparator that delegates to the [`Ord`] implementation of the element type.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use order_select::{Comparator, Natural};
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl Natural {
    /// Returns the descending natural order.
    ///
    /// Unlike [`Comparator::reversed`], this needs no element type to be named.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_select::{min, Natural};
    ///
    /// assert_eq!(min(Some(&[4, 9, 2]), Some(&Natural.reversed())), Ok(&9));
    /// ```
    #[must_use]
    pub const fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<T: ?Sized + Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }
}

/// Flips the order of the wrapped comparator.
///
/// # Examples
///
/// ```
/// use order_select::{max, Natural, Reversed};
///
/// let values = [4, 9, 2];
/// assert_eq!(max(Some(&values), Some(&Reversed(Natural))), Ok(&2));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, this: &T, that: &T) -> Ordering {
        self.0.compare(that, this)
    }
}

/// Orders elements by a key extracted from each of them.
///
/// # Examples
///
/// ```
/// use order_select::{max, ByKey};
///
/// let scores = [(1, 36), (2, 85), (3, 41)];
/// assert_eq!(max(Some(&scores), Some(&ByKey(|s: &(u8, u32)| s.1))), Ok(&(2, 85)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, this: &T, that: &T) -> Ordering {
        (self.0)(this).cmp(&(self.0)(that))
    }
}
