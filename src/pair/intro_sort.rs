//! Keys+values flavor of the introspective sort driver.

use crate::intro_sort::SIZE_THRESHOLD;
use crate::pair::heap_sort::pair_heap_sort;
use crate::pair::insertion_sort::{pair_insertion_sort, pair_sort2, pair_sort3};
use crate::pair::partition::pair_partition;
use core::mem;

/// Sorts the pairs by key in place, unstable, *O*(*n* \* log(*n*))
/// worst-case.
pub(crate) fn pair_intro_sort<K, V, F>(keys: &mut [K], values: &mut [V], is_less: &mut F)
where
	F: FnMut(&K, &K) -> bool,
{
	debug_assert_eq!(keys.len(), values.len());

	// All keys compare equal, so any permutation is sorted and the values
	// can stay put.
	if mem::size_of::<K>() == 0 {
		return;
	}

	let len = keys.len();
	if len < 2 {
		return;
	}

	// Limit the number of partitions to `2 * (floor(log2(len)) + 1)` before
	// falling back to heapsort.
	let limit = 2 * (len.ilog2() + 1);

	recurse(keys, values, is_less, limit);
}

/// Sorts the pairs recursively, iterating on the longer partition.
fn recurse<K, V, F>(mut keys: &mut [K], mut values: &mut [V], is_less: &mut F, mut limit: u32)
where
	F: FnMut(&K, &K) -> bool,
{
	loop {
		let len = keys.len();

		// Short partitions are finished by the sorting networks and
		// insertion sort.
		if len <= SIZE_THRESHOLD {
			match len {
				0 | 1 => {}
				2 => pair_sort2(keys, values, 0, 1, is_less),
				3 => pair_sort3(keys, values, is_less),
				_ => pair_insertion_sort(keys, values, is_less),
			}
			return;
		}

		// If too many imbalanced partitions were produced, simply fall back
		// to heapsort in order to guarantee `O(n * log(n))` worst-case.
		if limit == 0 {
			pair_heap_sort(keys, values, is_less);
			return;
		}
		limit -= 1;

		let mid = pair_partition(keys, values, is_less);

		// Split both slices into `left`, `pivot`, and `right`. The pivot
		// pair is already in its final position.
		let (keys_left, keys_right) = keys.split_at_mut(mid);
		let keys_right = &mut keys_right[1..];
		let (values_left, values_right) = values.split_at_mut(mid);
		let values_right = &mut values_right[1..];

		// Recurse into the shorter side only in order to bound the stack to
		// `O(log n)`, then continue with the longer side (akin to tail
		// recursion).
		if keys_left.len() < keys_right.len() {
			recurse(keys_left, values_left, is_less, limit);
			keys = keys_right;
			values = values_right;
		} else {
			recurse(keys_right, values_right, is_less, limit);
			keys = keys_left;
			values = values_left;
		}
	}
}

#[cfg(test)]
mod test {
	use super::pair_intro_sort;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted_in_lockstep(xs: Vec<i32>) {
		let mut keys = xs.clone();
		let mut values: Vec<usize> = (0..xs.len()).collect();
		pair_intro_sort(&mut keys, &mut values, &mut i32::lt);

		let mut expected = xs.clone();
		expected.sort_unstable();
		assert_eq!(keys, expected);

		for (k, &i) in keys.iter().zip(&values) {
			assert_eq!(*k, xs[i]);
		}
		let mut seen = values;
		seen.sort_unstable();
		assert_eq!(seen, (0..xs.len()).collect::<Vec<_>>());
	}

	#[test]
	fn distinct_keys_carry_their_values() {
		let mut keys: Vec<i32> = (0..1000).rev().collect();
		let mut values: Vec<String> = keys.iter().map(|k| format!("v{k}")).collect();
		pair_intro_sort(&mut keys, &mut values, &mut i32::lt);
		for (k, v) in keys.iter().zip(&values) {
			assert_eq!(v, &format!("v{k}"));
		}
	}
}
