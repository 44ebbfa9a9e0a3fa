//! Keys+values flavor of the heapsort fallback.

/// Sorts the pairs by key using heapsort, which guarantees
/// *O*(*n* \* log(*n*)) worst-case.
#[cold]
pub(crate) fn pair_heap_sort<K, V, F>(keys: &mut [K], values: &mut [V], is_less: &mut F)
where
	F: FnMut(&K, &K) -> bool,
{
	debug_assert_eq!(keys.len(), values.len());
	let len = keys.len();

	// This binary heap respects the invariant `parent >= child` on the keys;
	// the values follow every exchange.
	let mut sift_down = |keys: &mut [K], values: &mut [V], mut node: usize| {
		loop {
			// Children of `node`.
			let mut child = 2 * node + 1;
			if child >= keys.len() {
				break;
			}

			// Choose the greater child.
			if child + 1 < keys.len() && is_less(&keys[child], &keys[child + 1]) {
				child += 1;
			}

			// Stop if the invariant holds at `node`.
			if !is_less(&keys[node], &keys[child]) {
				break;
			}

			// Swap `node` with the greater child, move one step down, and
			// continue sifting.
			keys.swap(node, child);
			values.swap(node, child);
			node = child;
		}
	};

	// Build the heap in linear time.
	for i in (0..len / 2).rev() {
		sift_down(keys, values, i);
	}

	// Pop maximal elements from the heap.
	for i in (1..len).rev() {
		keys.swap(0, i);
		values.swap(0, i);
		sift_down(&mut keys[..i], &mut values[..i], 0);
	}
}

#[cfg(test)]
mod test {
	use super::pair_heap_sort;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted_in_lockstep(xs: Vec<u32>) {
		let mut keys = xs.clone();
		let mut values: Vec<usize> = (0..xs.len()).collect();
		pair_heap_sort(&mut keys, &mut values, &mut u32::lt);

		for i in 1..keys.len() {
			assert!(keys[i - 1] <= keys[i]);
		}
		for (k, &i) in keys.iter().zip(&values) {
			assert_eq!(*k, xs[i]);
		}
	}
}
