use crate::Sortable;

/// Moves the median of the first, middle, and last element of `v[lo..hi]` to `lo`.
///
/// Ranges of fewer than three elements are never touched since the middle then coincides with the
/// first element.
pub fn select_pivot<S>(v: &mut S, lo: usize, hi: usize)
where
	S: Sortable + ?Sized,
{
	if hi <= lo {
		return;
	}
	let last = hi - 1;
	let mid = lo + (last - lo) / 2;

	if v.is_less(lo, mid) && v.is_less(mid, last) {
		v.swap(lo, mid);
	} else if v.is_less(mid, last) && v.is_less(last, lo) {
		v.swap(lo, last);
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::select_pivot;

	fn check(mut v: Vec<i32>, lo: usize, hi: usize, want: &[i32]) {
		select_pivot(&mut v, lo, hi);
		assert_eq!(v, want);
	}

	#[test]
	fn three_sorted() {
		check(vec![1, 2, 3], 0, 3, &[2, 1, 3]);
	}

	#[test]
	fn three_not_sorted() {
		check(vec![3, 1, 2], 0, 3, &[2, 1, 3]);
	}

	#[test]
	fn median_already_first() {
		check(vec![2, 1, 3], 0, 3, &[2, 1, 3]);
	}

	#[test]
	fn odd_length() {
		check(vec![1, 2, 3, 4, 5, 6, 7], 0, 7, &[4, 2, 3, 1, 5, 6, 7]);
		check(vec![-3, -2, -1, 0, 1, 2, 3], 0, 7, &[0, -2, -1, -3, 1, 2, 3]);
	}

	#[test]
	fn even_length() {
		check(vec![1, 2, 3, 4, 5, 6, 7, 8], 0, 8, &[4, 2, 3, 1, 5, 6, 7, 8]);
		check(vec![2, 6, 3, 8, 7, 1, 4, 9], 0, 8, &[8, 6, 3, 2, 7, 1, 4, 9]);
	}

	#[test]
	fn sub_range() {
		check(
			vec![7, 2, 2, 6, 3, 8, 7, 1, 4, 9, 5],
			2,
			10,
			&[7, 2, 8, 6, 3, 2, 7, 1, 4, 9, 5],
		);
		check(
			vec![2, 6, 3, 8, 7, 1, 4, 9, 5, 1, 2, 3, 4, 5],
			0,
			8,
			&[8, 6, 3, 2, 7, 1, 4, 9, 5, 1, 2, 3, 4, 5],
		);
	}

	#[test]
	fn degenerate() {
		check(vec![], 0, 0, &[]);
		check(vec![5], 0, 1, &[5]);
		check(vec![2, 1], 0, 2, &[2, 1]);
		check(vec![1, 2], 0, 2, &[1, 2]);
	}
}
