//! Introspective sort: a quicksort driver with an insertion-sort cutoff for
//! short partitions and a heapsort fallback once the depth budget runs out.

use crate::heap_sort::heap_sort;
use crate::insertion_sort::{insertion_sort, sort2, sort3};
use crate::partition::partition;
use core::mem;

/// Partitions at or below this length are finished with the small sorters.
///
/// Any value in `8..=32` is sound; larger values favor insertion sort,
/// smaller values favor partitioning.
pub(crate) const SIZE_THRESHOLD: usize = 16;

/// Sorts `v` in place, unstable, *O*(*n* \* log(*n*)) worst-case.
pub(crate) fn intro_sort<T, F>(v: &mut [T], is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	let len = v.len();
	if len < 2 {
		return;
	}

	// Limit the number of partitions to `2 * (floor(log2(len)) + 1)` before
	// falling back to heapsort.
	let limit = 2 * (len.ilog2() + 1);

	recurse(v, is_less, limit);
}

/// Sorts `v` recursively, iterating on the longer partition.
fn recurse<T, F>(mut v: &mut [T], is_less: &mut F, mut limit: u32)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		let len = v.len();

		// Short partitions are finished by the sorting networks and
		// insertion sort.
		if len <= SIZE_THRESHOLD {
			match len {
				0 | 1 => {}
				2 => sort2(v, 0, 1, is_less),
				3 => sort3(v, is_less),
				_ => insertion_sort(v, is_less),
			}
			return;
		}

		// If too many imbalanced partitions were produced, simply fall back
		// to heapsort in order to guarantee `O(n * log(n))` worst-case.
		if limit == 0 {
			heap_sort(v, is_less);
			return;
		}
		limit -= 1;

		let mid = partition(v, is_less);

		// Split the slice into `left`, `pivot`, and `right`. The pivot is
		// already in its final position.
		let (left, right) = v.split_at_mut(mid);
		let right = &mut right[1..];

		// Recurse into the shorter side only in order to bound the stack to
		// `O(log n)`, then continue with the longer side (akin to tail
		// recursion).
		if left.len() < right.len() {
			recurse(left, is_less, limit);
			v = right;
		} else {
			recurse(right, is_less, limit);
			v = left;
		}
	}
}
