//! In-place median-of-three quicksort with a fork-join parallel variant, generic over any ordered,
//! index-addressable, swappable sequence.
//!
//! The sorters only talk to a sequence through the [`Sortable`] trait: its length, a strict
//! comparison of two positions, and a swap of two positions. Slices, vectors, and 1-dimensional
//! [`ndarray`] arrays or (sub)views with arbitrary memory layout (e.g., non-contiguous) implement
//! it out of the box. Any other collection becomes sortable by implementing the trait.
//!
//! # Example
//!
//! ```
//! use forksort::{QuickSortExt, ndarray::arr2};
//!
//! let mut v = vec![4, 7, -4, 2, -8, 9, 6];
//! v.quick_sort();
//! assert_eq!(v, [-8, -4, 2, 4, 6, 7, 9]);
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let mut m = arr2(&[[-5, 4, 1, -3,  2],
//!                    [ 8, 3, 2,  4,  8],
//!                    [38, 9, 3,  0,  3],
//!                    [ 4, 9, 0,  8, -1]]);
//!
//! // Due to row-major memory layout, columns are non-contiguous but still sortable in place.
//! m.column_mut(4).par_quick_sort();
//!
//! assert!(m == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! ```
//!
//! # Custom Sequences
//!
//! ```
//! use forksort::{Sortable, quick_sort};
//!
//! /// Rows of a table, ordered by id only.
//! struct Table {
//! 	ids: Vec<u32>,
//! 	names: Vec<&'static str>,
//! }
//!
//! impl Sortable for Table {
//! 	fn len(&self) -> usize {
//! 		self.ids.len()
//! 	}
//! 	fn is_less(&self, i: usize, j: usize) -> bool {
//! 		self.ids[i] < self.ids[j]
//! 	}
//! 	fn swap(&mut self, i: usize, j: usize) {
//! 		self.ids.swap(i, j);
//! 		self.names.swap(i, j);
//! 	}
//! }
//!
//! let mut table = Table {
//! 	ids: vec![3, 1, 2],
//! 	names: vec!["Charlie", "Alice", "Bob"],
//! };
//! quick_sort(&mut table);
//! assert_eq!(table.names, ["Alice", "Bob", "Charlie"]);
//! ```
//!
//! # Current Implementation
//!
//! Each step moves the median of the first, middle, and last element to the front and partitions
//! the range around it with a two-pointer scan, putting elements equal to the pivot on its left.
//! The parallel sort forks both sides of a partition as [`rayon::join`] tasks as long as the range
//! is longer than [`THRESHOLD`], and sorts sequentially below. Since the partition steps are the
//! same, both sorts produce the same permutation, even of distinguishable equal elements.
//!
//! | Resource | Complexity | Sequential          | Parallel (work)     |
//! |----------|------------|---------------------|---------------------|
//! | Time     | Best       | *O*(*n* log *n*)    | *O*(*n* log *n*)    |
//! | Time     | Average    | *O*(*n* log *n*)    | *O*(*n* log *n*)    |
//! | Time     | Worst      | *O*(*n*^2)          | *O*(*n*^2)          |
//! | Space    | Average    | *O*(log *n*)        | *O*(log *n*)        |
//! | Space    | Worst      | *O*(*n*)            | *O*(*n*)            |
//!
//! Neither sort is stable.
//!
//! # Features
//!
//!   * `std` for [`Sortable`] on [`Vec`]. Enabled by `default`, `stacker`, or `rayon`.
//!   * `stacker` for growing the stack on the heap when the recursion gets deep (e.g., for many
//!     equal elements). Enabled by `default`.
//!   * `rayon` for the parallel `par_quick_sort*`. Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod partition;
mod pivot;
mod quick_sort;
mod sortable;

#[cfg(feature = "rayon")]
mod par;
#[cfg(feature = "rayon")]
pub use par::quick_sort::{ForkJoin, THRESHOLD, par_quick_sort, par_quick_sort_with};

pub use crate::{
	quick_sort::quick_sort,
	sortable::{Sortable, SplitSortable},
};
use ndarray::{ArrayBase, DataMut, Ix1};

pub use ndarray;

/// Extension trait for slices and 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) arrays or
/// (sub)views with arbitrary memory layout (e.g., non-contiguous) providing in-place quicksort.
pub trait QuickSortExt<A> {
	/// Sorts in place using median-of-three quicksort.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., only swaps
	/// elements), and *O*(*n*^2) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use forksort::{QuickSortExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[4, 7, 4, 2, 8, 9, 6]);
	///
	/// v.quick_sort();
	/// assert!(v == arr1(&[2, 4, 4, 6, 7, 8, 9]));
	/// ```
	fn quick_sort(&mut self)
	where
		A: Ord;
	/// Sorts in place and in parallel using fork-join median-of-three quicksort.
	///
	/// The result is identical to [`quick_sort`](QuickSortExt::quick_sort). Partitions longer than
	/// [`THRESHOLD`] are sorted as two [`rayon::join`] tasks.
	///
	/// # Examples
	///
	/// ```
	/// use forksort::QuickSortExt;
	///
	/// let mut v = ["Bob", "Alice", "Ernie", "Dick", "Charlie"];
	///
	/// v.par_quick_sort();
	/// assert_eq!(v, ["Alice", "Bob", "Charlie", "Dick", "Ernie"]);
	/// ```
	#[cfg(feature = "rayon")]
	fn par_quick_sort(&mut self)
	where
		A: Ord + Send;
	/// Sorts in place and in parallel like [`par_quick_sort`](QuickSortExt::par_quick_sort) but
	/// with custom [`ForkJoin`] tuning.
	#[cfg(feature = "rayon")]
	fn par_quick_sort_with(&mut self, config: ForkJoin)
	where
		A: Ord + Send;
}

impl<A> QuickSortExt<A> for [A] {
	#[inline]
	fn quick_sort(&mut self)
	where
		A: Ord,
	{
		quick_sort(self);
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_quick_sort(&mut self)
	where
		A: Ord + Send,
	{
		par_quick_sort(self);
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_quick_sort_with(&mut self, config: ForkJoin)
	where
		A: Ord + Send,
	{
		par_quick_sort_with(self, config);
	}
}

impl<A, S> QuickSortExt<A> for ArrayBase<S, Ix1>
where
	S: DataMut<Elem = A>,
{
	#[inline]
	fn quick_sort(&mut self)
	where
		A: Ord,
	{
		quick_sort(self);
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_quick_sort(&mut self)
	where
		A: Ord + Send,
	{
		par_quick_sort(self.view_mut());
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_quick_sort_with(&mut self, config: ForkJoin)
	where
		A: Ord + Send,
	{
		par_quick_sort_with(self.view_mut(), config);
	}
}

#[cfg(feature = "rayon")]
#[cfg(test)]
mod test {
	use super::QuickSortExt;
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn same_as_parallel(xs: Vec<i64>) {
		let mut sequential = xs.clone();
		sequential.quick_sort();
		let mut parallel = Array1::from_vec(xs);
		parallel.par_quick_sort();
		assert_eq!(parallel.to_vec(), sequential);
	}

	#[test]
	fn vec_and_array_views() {
		let mut v = vec![9, 3, 7, 1];
		v.par_quick_sort();
		assert_eq!(v, [1, 3, 7, 9]);

		let mut a = Array1::from_vec(vec![5, 5, 1, 0, 2, 8, 3]);
		a.slice_mut(ndarray::s![1..;2]).quick_sort();
		assert_eq!(a.to_vec(), [5, 0, 1, 5, 2, 8, 3]);
	}
}
