//! Keys+values flavor of the hole-threading partition.

use crate::partition::median3;
use core::mem::ManuallyDrop;
use core::ptr;

/// When dropped, copies the lifted key and value into their destinations.
///
/// The two destinations always address the same index of the keys and values
/// slices, so refilling the hole on drop restores the pairing even when a
/// comparison panics mid-partition.
pub(crate) struct PairHole<K, V> {
	pub(crate) key: ManuallyDrop<K>,
	pub(crate) value: ManuallyDrop<V>,
	pub(crate) key_dest: *mut K,
	pub(crate) value_dest: *mut V,
}

impl<K, V> Drop for PairHole<K, V> {
	fn drop(&mut self) {
		// SAFETY: the destinations point at the single pair of slots whose
		// elements were lifted into `key` and `value`.
		unsafe {
			ptr::copy_nonoverlapping(&*self.key, self.key_dest, 1);
			ptr::copy_nonoverlapping(&*self.value, self.value_dest, 1);
		}
	}
}

/// Partitions `keys` around the median of its first, middle, and last
/// elements, moving `values` in lockstep. Returns the final pivot index.
///
/// Same hole walk as the keys-only flavor, with a (key, value) couple riding
/// in the hole guard instead of a single element.
pub(crate) fn pair_partition<K, V, F>(keys: &mut [K], values: &mut [V], is_less: &mut F) -> usize
where
	F: FnMut(&K, &K) -> bool,
{
	let len = keys.len();
	debug_assert!(len >= 2);
	debug_assert_eq!(len, values.len());

	let pivot_pos = median3(keys, 0, (len - 1) / 2, len - 1, is_less);

	// SAFETY: `pivot_pos`, `lo`, and `hi` stay within the slices: `lo` only
	// advances while `lo < hi` and `hi` only retreats while `lo < hi`. The
	// hole guard writes the pivot pair back into whichever pair of slots is
	// the hole, also when a comparison panics.
	unsafe {
		let kp = keys.as_mut_ptr();
		let vp = values.as_mut_ptr();
		let mut hole = PairHole {
			key: ManuallyDrop::new(ptr::read(kp.add(pivot_pos))),
			value: ManuallyDrop::new(ptr::read(vp.add(pivot_pos))),
			key_dest: kp.add(pivot_pos),
			value_dest: vp.add(pivot_pos),
		};
		let pivot = &*hole.key;

		// Move the hole to the last slots. The copies may be self-copies
		// when the pivot already sits there.
		ptr::copy(kp.add(len - 1), kp.add(pivot_pos), 1);
		ptr::copy(vp.add(len - 1), vp.add(pivot_pos), 1);
		hole.key_dest = kp.add(len - 1);
		hole.value_dest = vp.add(len - 1);

		let mut lo = 0;
		let mut hi = len - 1;
		loop {
			// The hole is at `hi`. Scan right for a key greater than the
			// pivot and drop its pair into the hole.
			while lo < hi && !is_less(pivot, &*kp.add(lo)) {
				lo += 1;
			}
			if lo == hi {
				break;
			}
			ptr::copy_nonoverlapping(kp.add(lo), kp.add(hi), 1);
			ptr::copy_nonoverlapping(vp.add(lo), vp.add(hi), 1);
			hole.key_dest = kp.add(lo);
			hole.value_dest = vp.add(lo);
			hi -= 1;

			// The hole is at `lo`. Scan left for a key less than the pivot
			// and drop its pair into the hole.
			while lo < hi && !is_less(&*kp.add(hi), pivot) {
				hi -= 1;
			}
			if lo == hi {
				break;
			}
			ptr::copy_nonoverlapping(kp.add(hi), kp.add(lo), 1);
			ptr::copy_nonoverlapping(vp.add(hi), vp.add(lo), 1);
			hole.key_dest = kp.add(hi);
			hole.value_dest = vp.add(hi);
			lo += 1;
		}

		// `lo == hi` is the hole; dropping the guard writes the pivot pair
		// there.
		debug_assert_eq!(hole.key_dest, kp.add(lo));
		lo
	}
}
