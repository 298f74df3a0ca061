//! A module containing [`OrderedSet`].

use core::fmt;

use btree_monstrousity::btree_map::{
	IntoIter as BTreeMapIntoIter, SearchBoundCustom,
};
use btree_monstrousity::BTreeMap;
use itertools::Itertools;

use crate::utils::{insert_comp, position_comp, Position};

/// An ordered set of distinct elements based on [`BTreeMap`].
///
/// `T` is the generic type parameter for the element type, it must be
/// totally ordered via [`Ord`] and cloneable since every query hands back
/// owned copies of the matching elements.
///
/// Besides the usual set operations the set can trim itself from either
/// end ([`OrderedSet::remove_greater_or_equal()`],
/// [`OrderedSet::remove_less_or_equal()`]), return every element inside an
/// inclusive range ([`OrderedSet::get_range()`]) and look up the nearest
/// elements either side of a missing value
/// ([`OrderedSet::find_closest()`]).
///
/// # Examples
/// ```
/// use nearset::OrderedSet;
///
/// let mut set = OrderedSet::from_iter([9, 1, 6, 4]);
///
/// assert_eq!(set.insert(12), true);
/// assert_eq!(set.insert(12), false);
///
/// // 5 is missing so we get up to two neighbours on either side
/// assert_eq!(set.find_closest(&5, 2), [1, 4, 6, 9]);
/// // 6 is present so we only get 6 back
/// assert_eq!(set.find_closest(&6, 2), [6]);
///
/// assert_eq!(set.get_range(&4, &9), [4, 6, 9]);
///
/// // Iterate over the elements in ascending order
/// for element in set.iter() {
/// 	println!("{element}");
/// }
/// ```
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSet<T> {
	inner: BTreeMap<T, ()>,
}

/// The marker trait for valid element types, a blanket implementation is
/// provided for all types which implement this traits' super-traits so you
/// shouldn't need to implement this yourself.
pub trait ElementType: Ord + Clone {}
impl<T> ElementType for T where T: Ord + Clone {}

impl<T> OrderedSet<T>
where
	T: ElementType,
{
	/// Returns `true` if the given value is an element of the set, and
	/// `false` if not.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let set = OrderedSet::from_iter([1, 4, 6]);
	///
	/// assert_eq!(set.contains(&4), true);
	/// assert_eq!(set.contains(&5), false);
	/// ```
	pub fn contains(&self, value: &T) -> bool {
		self.inner.contains_key(position_comp(Position::At(value)))
	}

	/// Adds `value` to the set.
	///
	/// Returns `true` if `value` was not already in the set. If an equal
	/// element is already present then the set is not modified and `false`
	/// is returned.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let mut set = OrderedSet::new();
	///
	/// assert_eq!(set.insert(5), true);
	/// assert_eq!(set.insert(5), false);
	/// assert_eq!(set.len(), 1);
	/// ```
	pub fn insert(&mut self, value: T) -> bool {
		if self.contains(&value) {
			return false;
		}

		self.inner.insert(value, (), insert_comp());

		true
	}

	/// Removes `value` from the set.
	///
	/// Returns `true` if `value` was in the set, otherwise the set is not
	/// modified and `false` is returned.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let mut set = OrderedSet::from_iter([1, 4, 6]);
	///
	/// assert_eq!(set.remove(&4), true);
	/// assert_eq!(set.remove(&4), false);
	/// assert_eq!(set.to_vec(), [1, 6]);
	/// ```
	pub fn remove(&mut self, value: &T) -> bool {
		self.inner.remove(position_comp(Position::At(value))).is_some()
	}

	/// Removes every element of the set that is greater than or equal to
	/// `value`.
	///
	/// `value` does not have to be in the set itself. Returns `true` if at
	/// least one element was removed.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let mut set = OrderedSet::from_iter([1, 4, 6, 9]);
	///
	/// assert_eq!(set.remove_greater_or_equal(&5), true);
	/// assert_eq!(set.to_vec(), [1, 4]);
	///
	/// assert_eq!(set.remove_greater_or_equal(&5), false);
	/// assert_eq!(set.to_vec(), [1, 4]);
	/// ```
	pub fn remove_greater_or_equal(&mut self, value: &T) -> bool {
		let mut removed = false;

		let mut cursor = self.inner.lower_bound_mut(
			position_comp(Position::At(value)),
			SearchBoundCustom::Included,
		);

		while cursor.remove_current().is_some() {
			removed = true;
		}

		return removed;
	}

	/// Removes every element of the set that is less than or equal to
	/// `value`.
	///
	/// `value` does not have to be in the set itself. Returns `true` if at
	/// least one element was removed.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let mut set = OrderedSet::from_iter([1, 4, 6, 9]);
	///
	/// assert_eq!(set.remove_less_or_equal(&4), true);
	/// assert_eq!(set.to_vec(), [6, 9]);
	///
	/// assert_eq!(set.remove_less_or_equal(&0), false);
	/// assert_eq!(set.to_vec(), [6, 9]);
	/// ```
	pub fn remove_less_or_equal(&mut self, value: &T) -> bool {
		let mut removed = false;

		let mut cursor = self.inner.lower_bound_mut(
			position_comp(Position::Lowest),
			SearchBoundCustom::Included,
		);

		while cursor.key().is_some_and(|inner| inner <= value) {
			cursor.remove_current();
			removed = true;
		}

		return removed;
	}

	/// Looks up `value` and the elements nearest to it.
	///
	/// If `value` is in the set then a `Vec` containing just `value` is
	/// returned.
	///
	/// Otherwise the returned `Vec` is made of the `k` greatest elements
	/// smaller than `value` followed by the `k` smallest elements greater
	/// than `value`, all in ascending order. If fewer than `k` elements exist
	/// on either side of `value` then every element on that side is
	/// returned instead, so the result holds anywhere between `0` and `2k`
	/// elements.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let set = OrderedSet::from_iter([1, 4, 6, 9, 12]);
	///
	/// assert_eq!(set.find_closest(&6, 3), [6]);
	/// assert_eq!(set.find_closest(&8, 3), [1, 4, 6, 9, 12]);
	/// assert_eq!(set.find_closest(&8, 1), [6, 9]);
	/// assert_eq!(set.find_closest(&0, 2), [1, 4]);
	/// assert!(set.find_closest(&8, 0).is_empty());
	/// ```
	pub fn find_closest(&self, value: &T, k: usize) -> Vec<T> {
		if self.contains(value) {
			return vec![value.clone()];
		}

		let mut result = self.lower_band(value, k);
		result.extend(self.upper_band(value, k));

		result
	}

	/// The `k` (or fewer) greatest elements smaller than `value`, ascending.
	fn lower_band(&self, value: &T, k: usize) -> Vec<T> {
		let mut band = self
			.inner
			.range(
				position_comp(Position::Lowest),
				SearchBoundCustom::Included,
				position_comp(Position::JustBelow(value)),
				SearchBoundCustom::Included,
			)
			.rev()
			.take(k)
			.map(|(element, _)| element.clone())
			.collect::<Vec<_>>();

		band.reverse();

		band
	}

	/// The `k` (or fewer) smallest elements greater than `value`, ascending.
	fn upper_band<'a>(
		&'a self,
		value: &'a T,
		k: usize,
	) -> impl Iterator<Item = T> + 'a {
		self.inner
			.range(
				position_comp(Position::JustAbove(value)),
				SearchBoundCustom::Included,
				position_comp(Position::Highest),
				SearchBoundCustom::Included,
			)
			.take(k)
			.map(|(element, _)| element.clone())
	}

	/// Returns every element of the set that is greater than or equal to
	/// `start` and less than or equal to `end`, in ascending order.
	///
	/// `start` and `end` do not have to be in the set. If `start` is greater
	/// than `end` then an empty `Vec` is returned.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let set = OrderedSet::from_iter([1, 4, 6, 9, 12]);
	///
	/// assert_eq!(set.get_range(&4, &9), [4, 6, 9]);
	/// assert_eq!(set.get_range(&4, &8), [4, 6]);
	/// assert_eq!(set.get_range(&11, &13), [12]);
	/// assert!(set.get_range(&7, &2).is_empty());
	/// ```
	pub fn get_range(&self, start: &T, end: &T) -> Vec<T> {
		if start > end {
			return Vec::new();
		}

		self.inner
			.range(
				position_comp(Position::At(start)),
				SearchBoundCustom::Included,
				position_comp(Position::At(end)),
				SearchBoundCustom::Included,
			)
			.map(|(element, _)| element.clone())
			.collect()
	}

	/// Removes every element from the set.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let mut set = OrderedSet::from_iter([1, 4, 6]);
	///
	/// set.clear();
	///
	/// assert_eq!(set.is_empty(), true);
	/// assert_eq!(set.len(), 0);
	/// ```
	pub fn clear(&mut self) {
		self.inner = BTreeMap::default();
	}

	/// Returns an owned `Vec` of every element in the set in ascending
	/// order.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let set = OrderedSet::from_iter([6, 1, 4]);
	///
	/// assert_eq!(set.to_vec(), [1, 4, 6]);
	/// ```
	pub fn to_vec(&self) -> Vec<T> {
		self.iter().cloned().collect()
	}

	/// An alias for [`OrderedSet::is_empty()`].
	pub fn empty(&self) -> bool {
		self.is_empty()
	}
	/// An alias for [`OrderedSet::len()`].
	pub fn size(&self) -> usize {
		self.len()
	}
}

impl<T> OrderedSet<T> {
	/// Makes a new, empty [`OrderedSet`].
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let set: OrderedSet<i8> = OrderedSet::new();
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of elements in the set.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let mut set = OrderedSet::new();
	///
	/// assert_eq!(set.len(), 0);
	/// set.insert(2);
	/// assert_eq!(set.len(), 1);
	/// ```
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the set contains no elements, and `false` if it
	/// does.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let mut set = OrderedSet::new();
	///
	/// assert_eq!(set.is_empty(), true);
	/// set.insert(2);
	/// assert_eq!(set.is_empty(), false);
	/// ```
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns an iterator over every element in the set in ascending
	/// order.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let set = OrderedSet::from_iter([4, 1, 6]);
	///
	/// let mut iter = set.iter();
	///
	/// assert_eq!(iter.next(), Some(&1));
	/// assert_eq!(iter.next(), Some(&4));
	/// assert_eq!(iter.next(), Some(&6));
	/// assert_eq!(iter.next(), None);
	/// ```
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
		self.inner.iter().map(first)
	}

	/// Returns the smallest element in the set, if any.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let set = OrderedSet::from_iter([4, 1, 6]);
	///
	/// assert_eq!(set.first(), Some(&1));
	/// ```
	pub fn first(&self) -> Option<&T> {
		self.inner.first_key_value().map(first)
	}

	/// Returns the greatest element in the set, if any.
	///
	/// # Examples
	/// ```
	/// use nearset::OrderedSet;
	///
	/// let set = OrderedSet::from_iter([4, 1, 6]);
	///
	/// assert_eq!(set.last(), Some(&6));
	/// ```
	pub fn last(&self) -> Option<&T> {
		self.inner.last_key_value().map(first)
	}
}

// Helper Functions ==========================

fn first<A, B>((a, _): (A, B)) -> A {
	a
}

// Trait Impls ==========================

impl<T> IntoIterator for OrderedSet<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;
	fn into_iter(self) -> Self::IntoIter {
		return IntoIter {
			inner: self.inner.into_iter(),
		};
	}
}
/// An owning iterator over the elements of an [`OrderedSet`] in ascending
/// order.
///
/// This `struct` is created by the [`into_iter`] method on
/// [`OrderedSet`] (provided by the [`IntoIterator`] trait). See
/// its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<T> {
	inner: BTreeMapIntoIter<T, ()>,
}
impl<T> Iterator for IntoIter<T> {
	type Item = T;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(first)
	}
}

impl<T> Default for OrderedSet<T> {
	fn default() -> Self {
		OrderedSet {
			inner: BTreeMap::default(),
		}
	}
}

impl<T> FromIterator<T> for OrderedSet<T>
where
	T: ElementType,
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut set = OrderedSet::new();
		set.extend(iter);
		set
	}
}

impl<T> Extend<T> for OrderedSet<T>
where
	T: ElementType,
{
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for element in iter {
			self.insert(element);
		}
	}
}

impl<T> fmt::Display for OrderedSet<T>
where
	T: fmt::Display,
{
	/// Writes every element in ascending order, each followed by a space.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return Ok(());
		}

		write!(f, "{} ", self.iter().join(" "))
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::fmt;
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{ElementType, OrderedSet};

	impl<T> Serialize for OrderedSet<T>
	where
		T: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for element in self.iter() {
				seq.serialize_element(element)?;
			}
			seq.end()
		}
	}

	impl<'de, T> Deserialize<'de> for OrderedSet<T>
	where
		T: ElementType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(OrderedSetVisitor {
				t: PhantomData,
			})
		}
	}

	struct OrderedSetVisitor<T> {
		t: PhantomData<T>,
	}

	impl<'de, T> Visitor<'de> for OrderedSetVisitor<T>
	where
		T: ElementType + Deserialize<'de>,
	{
		type Value = OrderedSet<T>;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter.write_str("an OrderedSet")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut set = OrderedSet::new();
			while let Some(element) = access.next_element()? {
				if !set.insert(element) {
					return Err(serde::de::Error::custom("duplicate element"));
				}
			}
			Ok(set)
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	//only every other number so the values in between can be queried as
	//non-members
	pub(crate) const NUMBERS: &[i8] = &[2, 4, 6, 8, 10];
	//go a bit around on either side to query outside the stored elements
	pub(crate) const NUMBERS_DOMAIN: &[i8] =
		&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

	fn basic() -> OrderedSet<i8> {
		OrderedSet::from_iter([1, 4, 6, 9, 12])
	}

	#[test]
	fn insert_tests() {
		assert_insert(basic(), 5, true, [1, 4, 5, 6, 9, 12]);
		assert_insert(basic(), 0, true, [0, 1, 4, 6, 9, 12]);
		assert_insert(basic(), 13, true, [1, 4, 6, 9, 12, 13]);
		assert_insert(basic(), 6, false, [1, 4, 6, 9, 12]);
		assert_insert(OrderedSet::new(), 6, true, [6]);
	}
	fn assert_insert<const N: usize>(
		mut before: OrderedSet<i8>,
		to_insert: i8,
		result: bool,
		after: [i8; N],
	) {
		assert_eq!(before.insert(to_insert), result);
		assert_eq!(before.to_vec(), after);
	}

	#[test]
	fn remove_tests() {
		assert_remove(basic(), 6, true, [1, 4, 9, 12]);
		assert_remove(basic(), 1, true, [4, 6, 9, 12]);
		assert_remove(basic(), 12, true, [1, 4, 6, 9]);
		assert_remove(basic(), 5, false, [1, 4, 6, 9, 12]);
		assert_remove(OrderedSet::new(), 5, false, []);
	}
	fn assert_remove<const N: usize>(
		mut before: OrderedSet<i8>,
		to_remove: i8,
		result: bool,
		after: [i8; N],
	) {
		assert_eq!(before.remove(&to_remove), result);
		assert_eq!(before.to_vec(), after);
	}

	#[test]
	fn remove_greater_or_equal_tests() {
		for stored in all_test_sets() {
			for value in NUMBERS_DOMAIN {
				let mut set = OrderedSet::from_iter(stored.iter().copied());

				let removed = set.remove_greater_or_equal(value);

				let expected_removed = stored.iter().any(|x| x >= value);
				let expected_after = stored
					.iter()
					.copied()
					.filter(|x| x < value)
					.collect::<Vec<_>>();

				if removed != expected_removed || set.to_vec() != expected_after
				{
					dbg!(&stored, value, removed, set.to_vec());
					panic!("Discrepancy in remove_greater_or_equal() detected!");
				}
			}
		}
	}

	#[test]
	fn remove_less_or_equal_tests() {
		for stored in all_test_sets() {
			for value in NUMBERS_DOMAIN {
				let mut set = OrderedSet::from_iter(stored.iter().copied());

				let removed = set.remove_less_or_equal(value);

				let expected_removed = stored.iter().any(|x| x <= value);
				let expected_after = stored
					.iter()
					.copied()
					.filter(|x| x > value)
					.collect::<Vec<_>>();

				if removed != expected_removed || set.to_vec() != expected_after
				{
					dbg!(&stored, value, removed, set.to_vec());
					panic!("Discrepancy in remove_less_or_equal() detected!");
				}
			}
		}
	}

	#[test]
	fn get_range_tests() {
		assert_eq!(basic().get_range(&4, &9), [4, 6, 9]);
		assert_eq!(basic().get_range(&4, &8), [4, 6]);
		assert_eq!(basic().get_range(&11, &13), [12]);
		assert!(basic().get_range(&7, &2).is_empty());
		assert_eq!(basic().get_range(&6, &6), [6]);
		assert!(basic().get_range(&7, &7).is_empty());
		assert!(OrderedSet::<i8>::new().get_range(&0, &100).is_empty());

		for stored in all_test_sets() {
			let set = OrderedSet::from_iter(stored.iter().copied());
			for start in NUMBERS_DOMAIN {
				for end in NUMBERS_DOMAIN {
					let our_answer = set.get_range(start, end);

					let mathematical_definition_of_range = stored
						.iter()
						.copied()
						.filter(|x| start <= x && x <= end)
						.collect::<Vec<_>>();

					if our_answer != mathematical_definition_of_range {
						dbg!(&stored, start, end);
						dbg!(mathematical_definition_of_range, our_answer);
						panic!("Discrepancy in get_range() detected!");
					}
				}
			}
		}
	}

	#[test]
	fn find_closest_tests() {
		assert_eq!(basic().find_closest(&5, 4), [1, 4, 6, 9, 12]);
		assert_eq!(basic().find_closest(&8, 3), [1, 4, 6, 9, 12]);
		assert_eq!(basic().find_closest(&12, 3), [12]);
		assert_eq!(basic().find_closest(&8, 1), [6, 9]);
		assert_eq!(basic().find_closest(&8, 2), [4, 6, 9, 12]);
		assert_eq!(basic().find_closest(&13, 2), [9, 12]);
		assert_eq!(basic().find_closest(&0, 2), [1, 4]);
		assert!(basic().find_closest(&5, 0).is_empty());
		assert_eq!(basic().find_closest(&6, 0), [6]);
		assert!(OrderedSet::<i8>::new().find_closest(&5, 3).is_empty());

		for stored in all_test_sets() {
			let set = OrderedSet::from_iter(stored.iter().copied());
			for value in NUMBERS_DOMAIN {
				for k in 0..=6 {
					let our_answer = set.find_closest(value, k);

					let expected = if stored.contains(value) {
						vec![*value]
					} else {
						let below =
							stored.iter().copied().filter(|x| x < value);
						let above =
							stored.iter().copied().filter(|x| x > value);
						let below_count = below.clone().count();

						below
							.skip(below_count.saturating_sub(k))
							.chain(above.take(k))
							.collect()
					};

					if our_answer != expected {
						dbg!(&stored, value, k);
						dbg!(expected, our_answer);
						panic!("Discrepancy in find_closest() detected!");
					}
				}
			}
		}
	}

	#[test]
	fn query_results_are_independent_of_later_mutation() {
		let mut set = basic();

		let closest = set.find_closest(&5, 4);
		let range = set.get_range(&1, &12);

		set.clear();
		set.insert(100);

		assert_eq!(closest, [1, 4, 6, 9, 12]);
		assert_eq!(range, [1, 4, 6, 9, 12]);
	}

	#[test]
	fn clear_tests() {
		let mut set = basic();

		set.clear();

		assert!(set.empty());
		assert_eq!(set.size(), 0);
		assert_eq!(set.first(), None);
		assert!(set.get_range(&0, &20).is_empty());
		assert!(set.find_closest(&5, 3).is_empty());
	}

	#[test]
	fn iteration_tests() {
		let set = basic();

		assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), [
			12, 9, 6, 4, 1
		]);
		assert_eq!(set.first(), Some(&1));
		assert_eq!(set.last(), Some(&12));
		assert_eq!(set.clone().into_iter().collect::<Vec<_>>(), [
			1, 4, 6, 9, 12
		]);
		assert_eq!(set, OrderedSet::from_iter([12, 9, 6, 4, 1, 1, 4]));
	}

	#[test]
	fn display_tests() {
		assert_eq!(basic().to_string(), "1 4 6 9 12 ");
		assert_eq!(OrderedSet::<i8>::new().to_string(), "");
		assert_eq!(
			OrderedSet::from_iter(["b", "a"]).to_string(),
			"a b "
		);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_tests() {
		let json = serde_json::to_string(&basic()).unwrap();
		assert_eq!(json, "[1,4,6,9,12]");

		let set: OrderedSet<i8> = serde_json::from_str("[9,1,4]").unwrap();
		assert_eq!(set.to_vec(), [1, 4, 9]);

		let duplicate = serde_json::from_str::<OrderedSet<i8>>("[1,1]");
		assert!(duplicate.is_err());
	}

	// Test Helper Functions
	//======================
	fn all_test_sets() -> Vec<Vec<i8>> {
		//every subset of NUMBERS, each in ascending order
		(0..1 << NUMBERS.len())
			.map(|mask: u32| {
				NUMBERS
					.iter()
					.enumerate()
					.filter(|(i, _)| mask & (1 << i) != 0)
					.map(|(_, x)| *x)
					.collect()
			})
			.collect()
	}
}
