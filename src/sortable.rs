//! Index-based capability through which the sorters touch a sequence.

use ndarray::{ArrayBase, ArrayViewMut1, Axis, DataMut, Ix1};

/// Ordered, index-addressable, swappable sequence.
///
/// The sorters never read or write elements directly. They only ask for the length, compare two
/// positions, and exchange two positions. Implementing this trait is therefore all it takes to
/// make a collection sortable, whatever its element type or memory layout.
///
/// `is_less` must be a strict, irreflexive and transitive total order over the elements. If it
/// is not, the resulting permutation is unspecified.
pub trait Sortable {
	/// Number of elements.
	fn len(&self) -> usize;
	/// Returns `true` if there are no elements.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
	/// Returns `true` if the element at `i` is strictly less than the element at `j`.
	///
	/// # Panics
	///
	/// Implementations may panic if `i` or `j` is out of bounds.
	fn is_less(&self, i: usize, j: usize) -> bool;
	/// Exchanges the elements at `i` and `j`.
	///
	/// # Panics
	///
	/// Implementations may panic if `i` or `j` is out of bounds.
	fn swap(&mut self, i: usize, j: usize);
}

/// [`Sortable`] sequence which can be divided into two disjoint, independently owned halves.
///
/// This is what lets the fork-join sorter hand each task its own part of the sequence. Since the
/// halves are separate values, no two tasks can ever reach the same index.
pub trait SplitSortable: Sortable + Send + Sized {
	/// Divides into `[0, mid)` and `[mid, len)`.
	///
	/// # Panics
	///
	/// Implementations may panic if `mid > len`.
	fn split_at(self, mid: usize) -> (Self, Self);
}

impl<T: Ord> Sortable for [T] {
	#[inline]
	fn len(&self) -> usize {
		<[T]>::len(self)
	}
	#[inline]
	fn is_less(&self, i: usize, j: usize) -> bool {
		self[i] < self[j]
	}
	#[inline]
	fn swap(&mut self, i: usize, j: usize) {
		<[T]>::swap(self, i, j);
	}
}

#[cfg(feature = "std")]
impl<T: Ord> Sortable for Vec<T> {
	#[inline]
	fn len(&self) -> usize {
		Vec::len(self)
	}
	#[inline]
	fn is_less(&self, i: usize, j: usize) -> bool {
		self[i] < self[j]
	}
	#[inline]
	fn swap(&mut self, i: usize, j: usize) {
		<[T]>::swap(self, i, j);
	}
}

impl<A, S> Sortable for ArrayBase<S, Ix1>
where
	A: Ord,
	S: DataMut<Elem = A>,
{
	#[inline]
	fn len(&self) -> usize {
		ArrayBase::len(self)
	}
	#[inline]
	fn is_less(&self, i: usize, j: usize) -> bool {
		self[i] < self[j]
	}
	#[inline]
	fn swap(&mut self, i: usize, j: usize) {
		ArrayBase::swap(self, i, j);
	}
}

impl<V: Sortable + ?Sized> Sortable for &mut V {
	#[inline]
	fn len(&self) -> usize {
		(**self).len()
	}
	#[inline]
	fn is_less(&self, i: usize, j: usize) -> bool {
		(**self).is_less(i, j)
	}
	#[inline]
	fn swap(&mut self, i: usize, j: usize) {
		(**self).swap(i, j);
	}
}

impl<T: Ord + Send> SplitSortable for &mut [T] {
	#[inline]
	fn split_at(self, mid: usize) -> (Self, Self) {
		self.split_at_mut(mid)
	}
}

impl<T: Ord + Send> SplitSortable for ArrayViewMut1<'_, T> {
	#[inline]
	fn split_at(self, mid: usize) -> (Self, Self) {
		ArrayViewMut1::split_at(self, Axis(0), mid)
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Sortable, SplitSortable};
	use ndarray::{arr1, arr2};

	#[test]
	fn slice() {
		let mut v = [3, 1, 2];
		let v = &mut v[..];
		assert_eq!(<[i32] as Sortable>::len(v), 3);
		assert!(v.is_less(1, 0));
		assert!(!v.is_less(0, 0));
		<[i32] as Sortable>::swap(v, 0, 1);
		assert_eq!(v, [1, 3, 2]);
	}

	#[test]
	fn strings() {
		let v = vec!["Bob".to_string(), "Alice".to_string()];
		assert!(v.is_less(1, 0));
		assert!(!v.is_less(0, 1));
	}

	#[test]
	fn empty() {
		let v: Vec<u8> = Vec::new();
		assert!(Sortable::is_empty(&v));
	}

	#[test]
	fn split_slice() {
		let mut v = [1, 2, 3, 4, 5];
		let (left, right) = SplitSortable::split_at(&mut v[..], 2);
		assert_eq!(left, [1, 2]);
		assert_eq!(right, [3, 4, 5]);
	}

	#[test]
	fn non_contiguous_column() {
		let mut m = arr2(&[[5, 0], [3, 0], [4, 0]]);
		let mut column = m.column_mut(0);
		assert!(column.is_less(1, 0));
		Sortable::swap(&mut column, 0, 1);
		let (top, bottom) = SplitSortable::split_at(column, 1);
		assert_eq!(top, arr1(&[3]));
		assert_eq!(bottom, arr1(&[5, 4]));
	}
}
