//! Search positions for the inner [`BTreeMap`].
//!
//! [`BTreeMap`]: btree_monstrousity::BTreeMap

use core::cmp::Ordering;

/// A position in the ordering of the stored elements, used to search the
/// inner [`BTreeMap`] with a custom comparator.
///
/// The shifted variants never compare equal to a stored element, so an
/// `Included` search on them lands on the nearest element strictly on the
/// far side of the point.
///
/// [`BTreeMap`]: btree_monstrousity::BTreeMap
#[derive(Debug)]
pub(crate) enum Position<'a, T> {
	/// Below every element.
	Lowest,
	/// Between the given point and the greatest element smaller than it.
	JustBelow(&'a T),
	/// Exactly the given point.
	At(&'a T),
	/// Between the given point and the smallest element greater than it.
	JustAbove(&'a T),
	/// Above every element.
	Highest,
}

impl<'a, T> Position<'a, T>
where
	T: Ord,
{
	/// The ordering of this position relative to the stored element
	/// `inner`.
	pub(crate) fn cmp_with(&self, inner: &T) -> Ordering {
		match self {
			Position::Lowest => Ordering::Less,
			Position::JustBelow(point) => match (*point).cmp(inner) {
				Ordering::Equal => Ordering::Less,
				ordering => ordering,
			},
			Position::At(point) => (*point).cmp(inner),
			Position::JustAbove(point) => match (*point).cmp(inner) {
				Ordering::Equal => Ordering::Greater,
				ordering => ordering,
			},
			Position::Highest => Ordering::Greater,
		}
	}
}

pub(crate) fn position_comp<'a, T>(
	position: Position<'a, T>,
) -> impl FnMut(&T) -> Ordering + 'a
where
	T: Ord,
{
	move |inner: &T| position.cmp_with(inner)
}

pub(crate) fn insert_comp<T>() -> impl FnMut(&T, &T) -> Ordering
where
	T: Ord,
{
	|inner: &T, new: &T| new.cmp(inner)
}
