//! Sequential median-of-three quicksort.

use crate::{Sortable, partition::partition, pivot::select_pivot};

/// Sorts `v` using median-of-three quicksort, which is *O*(*n*^2) worst-case.
pub fn quick_sort<S>(v: &mut S)
where
	S: Sortable + ?Sized,
{
	let len = v.len();
	recurse(v, 0, len);
}

/// Sorts `v[lo..hi]` recursively.
///
/// The recursion depth equals the depth of the partition tree, which degenerates to the length of
/// the range if every partition peels off a single element (e.g., all elements equal).
pub(crate) fn recurse<S>(v: &mut S, lo: usize, hi: usize)
where
	S: Sortable + ?Sized,
{
	if hi - lo < 2 {
		return;
	}

	select_pivot(v, lo, hi);
	let p = partition(v, lo, hi);

	maybe_grow(|| recurse(v, lo, p));
	maybe_grow(|| recurse(v, p + 1, hi));
}

/// Runs `f` on a freshly allocated stack segment if the remaining stack is running low.
#[cfg(feature = "stacker")]
#[inline]
fn maybe_grow<R>(f: impl FnOnce() -> R) -> R {
	// Remaining stack below which a new segment is allocated.
	const RED_ZONE: usize = 64 * 1024;
	// Size of each newly allocated segment.
	const STACK_SIZE: usize = 1024 * 1024;

	stacker::maybe_grow(RED_ZONE, STACK_SIZE, f)
}

#[cfg(not(feature = "stacker"))]
#[inline(always)]
fn maybe_grow<R>(f: impl FnOnce() -> R) -> R {
	f()
}
