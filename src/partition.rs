use crate::Sortable;

/// Partitions `v[lo..hi]` around the pivot at `lo` and returns the pivot's final index `p`.
///
/// Afterwards, elements in `v[lo..p]` are less than or equal to the pivot and elements in
/// `v[p + 1..hi]` are greater than it. Equal elements always end up left of the pivot, which keeps
/// duplicate-heavy ranges shrinking by at least one element per step.
///
/// Ranges of fewer than two elements are returned untouched with `p == lo`.
pub fn partition<S>(v: &mut S, lo: usize, hi: usize) -> usize
where
	S: Sortable + ?Sized,
{
	if hi < lo + 2 {
		return lo;
	}

	let (mut left, mut right) = (lo + 1, hi - 1);
	while left < right {
		if v.is_less(lo, left) {
			v.swap(left, right);
			right -= 1;
		} else {
			left += 1;
		}
	}
	debug_assert_eq!(left, right);

	// `left` is the only element not yet classified.
	let p = if v.is_less(lo, left) { left - 1 } else { left };
	v.swap(lo, p);
	p
}
