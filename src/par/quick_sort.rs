//! Fork-join median-of-three quicksort on top of [`rayon::join`].

use crate::{SplitSortable, partition::partition, pivot::select_pivot, quick_sort};

/// Length above which a partitioned range is sorted as two concurrent tasks.
pub const THRESHOLD: usize = 5000;

/// Tuning of [`par_quick_sort_with`].
///
/// Neither setting affects the resulting order, only how the work is scheduled.
///
/// # Examples
///
/// ```
/// use forksort::{ForkJoin, par_quick_sort_with};
///
/// let mut v = (0..20_000).rev().collect::<Vec<u32>>();
/// par_quick_sort_with(&mut v[..], ForkJoin::default().with_threshold(1000).with_max_depth(4));
/// assert!(v.windows(2).all(|w| w[0] <= w[1]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForkJoin {
	threshold: usize,
	max_depth: u32,
}

impl Default for ForkJoin {
	fn default() -> Self {
		Self {
			threshold: THRESHOLD,
			max_depth: usize::BITS,
		}
	}
}

impl ForkJoin {
	/// Forks only ranges longer than `threshold`. Defaults to [`THRESHOLD`].
	#[must_use]
	pub const fn with_threshold(mut self, threshold: usize) -> Self {
		self.threshold = threshold;
		self
	}
	/// Forks at most `max_depth` levels deep and sorts sequentially below. Defaults to
	/// [`usize::BITS`].
	///
	/// Without a cap, an input whose pivots keep peeling off single elements would fork at every
	/// level of its partition tree.
	#[must_use]
	pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
		self.max_depth = max_depth;
		self
	}
	/// Length above which ranges are forked.
	pub const fn threshold(&self) -> usize {
		self.threshold
	}
	/// Maximum fork depth.
	pub const fn max_depth(&self) -> u32 {
		self.max_depth
	}
}

/// Sorts `v` in parallel using median-of-three quicksort with the default [`ForkJoin`] tuning.
pub fn par_quick_sort<S>(v: S)
where
	S: SplitSortable,
{
	par_quick_sort_with(v, ForkJoin::default());
}

/// Sorts `v` in parallel using median-of-three quicksort, which is *O*(*n*^2) worst-case.
///
/// Partition steps are the same as in the sequential sort, so both produce the same permutation.
pub fn par_quick_sort_with<S>(v: S, config: ForkJoin)
where
	S: SplitSortable,
{
	recurse(v, config.threshold, config.max_depth);
}

/// Sorts `v` recursively.
///
/// `depth` is the number of fork levels left. If zero, the remainder is sorted sequentially.
fn recurse<S>(mut v: S, threshold: usize, depth: u32)
where
	S: SplitSortable,
{
	let len = v.len();
	if len < 2 {
		return;
	}

	select_pivot(&mut v, 0, len);
	let p = partition(&mut v, 0, len);

	if len > threshold && depth > 0 {
		// Split the range into `left`, `pivot`, and `right`.
		let (left, right) = v.split_at(p);
		let (_pivot, right) = right.split_at(1);

		// Sort the left and right half in parallel.
		rayon::join(
			|| recurse(left, threshold, depth - 1),
			|| recurse(right, threshold, depth - 1),
		);
	} else {
		quick_sort::recurse(&mut v, 0, p);
		quick_sort::recurse(&mut v, p + 1, len);
	}
}
