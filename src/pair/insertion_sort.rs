//! Keys+values flavor of the small-partition sorters.

use crate::pair::partition::PairHole;
use core::mem::ManuallyDrop;
use core::ptr;

/// Swaps the pairs at `a` and `b` if the key at `b` is less than the key at
/// `a`.
#[inline]
pub(crate) fn pair_sort2<K, V, F>(
	keys: &mut [K],
	values: &mut [V],
	a: usize,
	b: usize,
	is_less: &mut F,
) where
	F: FnMut(&K, &K) -> bool,
{
	if is_less(&keys[b], &keys[a]) {
		keys.swap(a, b);
		values.swap(a, b);
	}
}

/// Sorting network for three pairs: compare-exchange (0,1), (0,2), (1,2).
#[inline]
pub(crate) fn pair_sort3<K, V, F>(keys: &mut [K], values: &mut [V], is_less: &mut F)
where
	F: FnMut(&K, &K) -> bool,
{
	pair_sort2(keys, values, 0, 1, is_less);
	pair_sort2(keys, values, 0, 2, is_less);
	pair_sort2(keys, values, 1, 2, is_less);
}

/// Sorts the pairs by key using insertion sort, *O*(*n*^2) worst-case.
pub(crate) fn pair_insertion_sort<K, V, F>(keys: &mut [K], values: &mut [V], is_less: &mut F)
where
	F: FnMut(&K, &K) -> bool,
{
	debug_assert_eq!(keys.len(), values.len());
	for i in 1..keys.len() {
		pair_shift_tail(&mut keys[..=i], &mut values[..=i], is_less);
	}
}

/// Shifts the last pair to the left until its key encounters a smaller or
/// equal key.
fn pair_shift_tail<K, V, F>(keys: &mut [K], values: &mut [V], is_less: &mut F)
where
	F: FnMut(&K, &K) -> bool,
{
	let len = keys.len();
	// SAFETY: as in the keys-only flavor, the branch guards `len >= 2`,
	// every offset stays in `0..len`, and copies are between the distinct
	// indices `i` and `i + 1` of each slice. If a comparison panics, `hole`
	// gets dropped and refills the vacated pair of slots, keeping the
	// pairing intact.
	unsafe {
		if len >= 2 && is_less(keys.get_unchecked(len - 1), keys.get_unchecked(len - 2)) {
			let kp = keys.as_mut_ptr();
			let vp = values.as_mut_ptr();
			// Read the last pair into stack-allocated variables.
			let mut hole = PairHole {
				key: ManuallyDrop::new(ptr::read(kp.add(len - 1))),
				value: ManuallyDrop::new(ptr::read(vp.add(len - 1))),
				key_dest: kp.add(len - 2),
				value_dest: vp.add(len - 2),
			};
			ptr::copy_nonoverlapping(kp.add(len - 2), kp.add(len - 1), 1);
			ptr::copy_nonoverlapping(vp.add(len - 2), vp.add(len - 1), 1);

			for i in (0..len - 2).rev() {
				if !is_less(&*hole.key, &*kp.add(i)) {
					break;
				}

				// Move the `i`-th pair one place to the right, thus shifting
				// the hole to the left.
				ptr::copy_nonoverlapping(kp.add(i), kp.add(i + 1), 1);
				ptr::copy_nonoverlapping(vp.add(i), vp.add(i + 1), 1);
				hole.key_dest = kp.add(i);
				hole.value_dest = vp.add(i);
			}
			// `hole` gets dropped and thus copies the pair into the
			// remaining hole.
		}
	}
}

#[cfg(test)]
mod test {
	use super::{pair_insertion_sort, pair_sort3};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted_in_lockstep(xs: Vec<u8>) {
		let mut keys = xs.clone();
		let mut values: Vec<usize> = (0..xs.len()).collect();
		pair_insertion_sort(&mut keys, &mut values, &mut u8::lt);

		for i in 1..keys.len() {
			assert!(keys[i - 1] <= keys[i]);
		}
		for (k, &i) in keys.iter().zip(&values) {
			assert_eq!(*k, xs[i]);
		}
	}

	#[test]
	fn network_of_three() {
		let mut keys = [3, 1, 2];
		let mut values = ["c", "a", "b"];
		pair_sort3(&mut keys, &mut values, &mut i32::lt);
		assert_eq!(keys, [1, 2, 3]);
		assert_eq!(values, ["a", "b", "c"]);
	}
}
