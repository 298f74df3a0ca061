//! This crate provides [`OrderedSet`], an ordered set of distinct elements
//! based off [`BTreeMap`], which along with the usual set operations
//! supports trimming from either end, inclusive range queries and
//! nearest-by-order lookups.
//!
//! ## Example
//!
//! ```rust
//! use nearset::OrderedSet;
//!
//! let mut set = OrderedSet::from_reader("1\n4\n6\n9\n".as_bytes()).unwrap();
//!
//! set.insert(12);
//!
//! // 5 is not in the set, so we get the (up to) 4 elements either side of
//! // it instead
//! assert_eq!(set.find_closest(&5, 4), [1, 4, 6, 9, 12]);
//! assert_eq!(set.find_closest(&8, 1), [6, 9]);
//! // 12 is in the set so we get just 12
//! assert_eq!(set.find_closest(&12, 3), [12]);
//!
//! assert_eq!(set.get_range(&4, &9), [4, 6, 9]);
//! assert_eq!(set.get_range(&11, &13), [12]);
//!
//! assert_eq!(set.remove_greater_or_equal(&7), true);
//! assert_eq!(set.to_string(), "1 4 6 ");
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Element Types
//!
//! Any type implementing [`Ord`] and [`Clone`] can be stored, see
//! [`ElementType`]. Bulk loading additionally requires [`FromStr`] and
//! printing a set requires [`Display`].
//!
//! ### Owned Results
//!
//! Every query returns a freshly allocated `Vec` of cloned elements, so
//! mutating the set never changes a result obtained earlier.
//!
//! ### Closest Elements
//!
//! When [`OrderedSet::find_closest()`] is asked about a value that is not
//! in the set it returns the "lower band" followed by the "upper band". The
//! lower band is made of the `k` greatest elements smaller than the value
//! and the upper band of the `k` smallest elements greater than it. Either
//! band holds fewer than `k` elements when the set does not have `k`
//! elements on that side, it is never padded.
//!
//! ### Bulk Loading
//!
//! [`OrderedSet::load_from_reader()`] and [`OrderedSet::load_from_file()`]
//! drop the current contents before reading anything. If loading fails
//! the set is left empty rather than partially filled and a [`LoadError`]
//! is returned.
//!
//! [`btreemap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
//! [`fromstr`]: core::str::FromStr
//! [`display`]: core::fmt::Display

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

pub(crate) mod utils;

pub mod load;
pub mod set;

pub use crate::load::LoadError;
pub use crate::set::{ElementType, OrderedSet};
