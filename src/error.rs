use thiserror::Error;

/// A specialized [`Result`](core::result::Result) for selection operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The two broad categories of selection failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A required argument (the container or the comparator) was absent.
    InvalidArgument,
    /// The arguments were well formed but the requested element or elements do not exist.
    NoSuchElement,
}

/// Why a selection failed.
///
/// Absent arguments are always reported ahead of every other condition, so an empty container
/// passed without a comparator yields [`Error::MissingComparator`], never [`Error::Empty`].
///
/// # Examples
///
/// ```
/// use order_select::{kmin, Error, ErrorKind, Natural};
///
/// let values = [5, 3, 8, 3, 1];
///
/// let error = kmin(Some(&values), 5, Some(&Natural)).unwrap_err();
/// assert_eq!(error, Error::RankOutOfRange { k: 5, available: 4 });
/// assert_eq!(error.kind(), ErrorKind::NoSuchElement);
///
/// let error = kmin(Some(&values), 1, None::<&Natural>).unwrap_err();
/// assert!(error.is_invalid_argument());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum Error {
    /// No container was supplied.
    #[error("invalid argument: the container is absent")]
    MissingContainer,

    /// No comparator was supplied.
    #[error("invalid argument: the comparator is absent")]
    MissingComparator,

    /// The container holds no elements.
    #[error("no such element: the container is empty")]
    Empty,

    /// The requested rank is zero or exceeds the number of candidate values.
    ///
    /// `available` is the raw element count when `k` exceeds it, otherwise the number of
    /// distinct values left after deduplication.
    #[error("no such element: rank {k} is outside 1..={available}")]
    RankOutOfRange {
        /// The one-based rank that was requested.
        k: usize,
        /// How many ranks were available.
        available: usize,
    },

    /// The lower bound compares greater than the upper bound.
    #[error("no such element: the lower bound is greater than the upper bound")]
    InvertedRange,

    /// No element lies within the requested bounds.
    #[error("no such element: no element lies within the bounds")]
    NoneInRange,
}

impl Error {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingContainer | Self::MissingComparator => ErrorKind::InvalidArgument,
            Self::Empty | Self::RankOutOfRange { .. } | Self::InvertedRange | Self::NoneInRange => {
                ErrorKind::NoSuchElement
            }
        }
    }

    /// Returns whether a required argument was absent.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument)
    }

    /// Returns whether the requested element or elements do not exist.
    #[must_use]
    pub const fn is_no_such_element(&self) -> bool {
        matches!(self.kind(), ErrorKind::NoSuchElement)
    }

    /// Records this error as a failure of `operation` and returns it.
    #[inline]
    pub(crate) fn logged(self, operation: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, kind = ?self.kind(), error = %self, "selection failed");
        #[cfg(not(feature = "tracing"))]
        let _ = operation;
        self
    }
}
