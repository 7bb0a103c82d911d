//! Comparator-driven order-statistic selection for Rust.
//!
//! This crate provides stateless selection operations over any finite collection whose
//! shared references can be iterated, ordered by a caller-supplied [`Comparator`]:
//!
//! - [`min`] / [`max`] - The comparator-minimal / maximal element
//! - [`kmin`] / [`kmax`] - The k-th smallest / largest *distinct* value
//! - [`range`] - Every element within inclusive bounds, duplicates preserved
//! - [`ceiling`] / [`floor`] - The nearest element at or above / at or below a key
//!
//! # Example
//!
//! ```
//! use order_select::{ceiling, floor, kmin, max, min, range, Natural};
//!
//! let values = vec![5, 3, 8, 3, 1];
//! let order = Some(&Natural);
//!
//! assert_eq!(min(Some(&values), order), Ok(&1));
//! assert_eq!(max(Some(&values), order), Ok(&8));
//!
//! // Duplicates collapse to a single rank: the distinct values are [1, 3, 5, 8].
//! assert_eq!(kmin(Some(&values), 2, order), Ok(&3));
//!
//! // Duplicates are preserved by range queries.
//! let mut within = range(Some(&values), &3, &8, order).unwrap();
//! within.sort();
//! assert_eq!(within, [&3, &3, &5, &8]);
//!
//! assert_eq!(ceiling(Some(&values), &4, order), Ok(&5));
//! assert_eq!(floor(Some(&values), &4, order), Ok(&3));
//! ```
//!
//! # Arguments and errors
//!
//! Containers and comparators are passed as [`Option`]s. `None` stands for an argument the
//! caller could not supply and is always reported as [`ErrorKind::InvalidArgument`] before any
//! element is read. A well-formed query without an answer is reported as
//! [`ErrorKind::NoSuchElement`]. No operation returns a sentinel value or an empty success.
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Any container** - Anything implementing `IntoIterator<Item = &T>` works
//! - **Any ordering** - Closures, [`Natural`], [`Reversed`], [`ByKey`] or `dyn Comparator<T>`
//! - **`tracing`** (default) - Emits a `debug` event for every failed selection

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod comparator;
mod error;

pub mod selector;

pub use comparator::{ByKey, Comparator, Natural, Reversed};
pub use error::{Error, ErrorKind, Result};
pub use selector::{ceiling, floor, kmax, kmin, max, min, range};
