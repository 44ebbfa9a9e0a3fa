//! Intrinsic key orderings and the floating-point NaN pre-pass.

use core::cmp::Ordering;

/// Ordering a key type carries on its own, without a caller-supplied
/// comparator.
///
/// Implemented for all primitive integers, `bool`, `char`, the floating-point
/// types, and `Option<K>` of any of these. User types implement
/// [`three_way`]; [`less`] and [`greater`] are derived from it, while the
/// primitive implementations override them with raw machine comparisons.
///
/// For floating-point keys, [`less`] and [`greater`] are the raw partial
/// comparisons and are only meaningful once NaNs have been segregated (the
/// sorting entry points do this via the NaN pre-pass). [`three_way`] is total:
/// NaN compares less than every number and equal to itself, matching the
/// order in which sorted float data is laid out.
///
/// For `Option<K>`, `None` compares strictly less than every `Some` and equal
/// only to itself. `Option` derives [`less`] and [`greater`] from
/// [`three_way`] and opts out of the NaN pre-pass, so NaN-carrying float keys
/// still form one total order (`None`, then `Some(NaN)`, then the numbers)
/// that sorting and searching agree on.
///
/// [`three_way`]: IntrinsicOrd::three_way
/// [`less`]: IntrinsicOrd::less
/// [`greater`]: IntrinsicOrd::greater
pub trait IntrinsicOrd {
	/// Whether the type has NaN values that must be moved aside before raw
	/// comparisons form a total order. When `false`, the NaN pre-pass
	/// compiles out of the sorting entry points.
	const HAS_NAN: bool = false;

	/// Three-way comparison of `self` with `other`.
	fn three_way(&self, other: &Self) -> Ordering;

	/// Whether `self` orders strictly before `other`.
	#[inline]
	fn less(&self, other: &Self) -> bool {
		self.three_way(other) == Ordering::Less
	}

	/// Whether `self` orders strictly after `other`.
	#[inline]
	fn greater(&self, other: &Self) -> bool {
		self.three_way(other) == Ordering::Greater
	}

	/// Whether `self` is a floating-point NaN.
	#[inline]
	fn is_nan(&self) -> bool {
		false
	}
}

macro_rules! impl_ord_key {
	($($t:ty)*) => ($(
		impl IntrinsicOrd for $t {
			#[inline]
			fn three_way(&self, other: &Self) -> Ordering {
				Ord::cmp(self, other)
			}
			#[inline]
			fn less(&self, other: &Self) -> bool {
				*self < *other
			}
			#[inline]
			fn greater(&self, other: &Self) -> bool {
				*self > *other
			}
		}
	)*)
}

impl_ord_key! {
	bool char
	u8 u16 u32 u64 u128 usize
	i8 i16 i32 i64 i128 isize
}

macro_rules! impl_float_key {
	($($t:ty)*) => ($(
		impl IntrinsicOrd for $t {
			const HAS_NAN: bool = true;

			#[inline]
			fn three_way(&self, other: &Self) -> Ordering {
				if *self < *other {
					Ordering::Less
				} else if *self > *other {
					Ordering::Greater
				} else if *self == *other {
					Ordering::Equal
				} else if <$t>::is_nan(*self) {
					if <$t>::is_nan(*other) {
						Ordering::Equal
					} else {
						Ordering::Less
					}
				} else {
					Ordering::Greater
				}
			}
			#[inline]
			fn less(&self, other: &Self) -> bool {
				*self < *other
			}
			#[inline]
			fn greater(&self, other: &Self) -> bool {
				*self > *other
			}
			#[inline]
			fn is_nan(&self) -> bool {
				<$t>::is_nan(*self)
			}
		}
	)*)
}

impl_float_key! { f32 f64 }

// `less` and `greater` stay the `three_way` defaults: delegating to the
// inner raw comparisons would make `Some(NaN)` incomparable to every
// `Some(number)`, and the pre-pass cannot help because it would sweep
// `Some(NaN)` ahead of `None`. Deriving everything from `three_way` keeps one
// total order with no pre-pass, which is why `HAS_NAN` stays `false`.
impl<K: IntrinsicOrd> IntrinsicOrd for Option<K> {
	#[inline]
	fn three_way(&self, other: &Self) -> Ordering {
		match (self, other) {
			(None, None) => Ordering::Equal,
			(None, Some(_)) => Ordering::Less,
			(Some(_), None) => Ordering::Greater,
			(Some(a), Some(b)) => a.three_way(b),
		}
	}
}

/// Partitions all NaN keys into a prefix of `keys` and returns their count.
///
/// Single left-to-right scan with a write cursor; the relative order of the
/// remaining keys is not preserved. After return, `keys[count..]` contains no
/// NaNs, so raw comparisons on the suffix form a total order.
pub fn move_nans_to_front<K: IntrinsicOrd>(keys: &mut [K]) -> usize {
	let mut count = 0;
	for i in 0..keys.len() {
		if keys[i].is_nan() {
			keys.swap(count, i);
			count += 1;
		}
	}
	count
}

/// Paired flavor of [`move_nans_to_front`]: moves `values` in lockstep with
/// `keys`.
pub fn move_nans_to_front_pairs<K: IntrinsicOrd, V>(keys: &mut [K], values: &mut [V]) -> usize {
	let mut count = 0;
	for i in 0..keys.len() {
		if keys[i].is_nan() {
			keys.swap(count, i);
			values.swap(count, i);
			count += 1;
		}
	}
	count
}

#[cfg(test)]
mod test {
	use super::{move_nans_to_front, move_nans_to_front_pairs, IntrinsicOrd};
	use core::cmp::Ordering;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn nan_prefix(xs: Vec<f64>) {
		let mut v: Vec<f64> = xs
			.iter()
			.enumerate()
			.map(|(i, &x)| if i % 3 == 0 { f64::NAN } else { x })
			.collect();
		let nans = v.iter().filter(|x| x.is_nan()).count();
		let count = move_nans_to_front(&mut v);
		assert_eq!(count, nans);
		assert!(v[..count].iter().all(|x| x.is_nan()));
		assert!(v[count..].iter().all(|x| !x.is_nan()));
	}

	#[test]
	fn nan_prefix_pairs_stays_in_lockstep() {
		let mut keys = [1.0, f32::NAN, 2.0, f32::NAN, 3.0];
		let mut values = ['a', 'b', 'c', 'd', 'e'];
		let count = move_nans_to_front_pairs(&mut keys, &mut values);
		assert_eq!(count, 2);
		let mut pairs: Vec<(u32, char)> = keys
			.iter()
			.zip(&values)
			.map(|(k, &v)| (k.to_bits(), v))
			.collect();
		pairs.sort_unstable();
		let mut expected = vec![
			(1.0f32.to_bits(), 'a'),
			(f32::NAN.to_bits(), 'b'),
			(2.0f32.to_bits(), 'c'),
			(f32::NAN.to_bits(), 'd'),
			(3.0f32.to_bits(), 'e'),
		];
		expected.sort_unstable();
		assert_eq!(pairs, expected);
	}

	#[test]
	fn float_three_way_is_total() {
		assert_eq!(1.0f64.three_way(&2.0), Ordering::Less);
		assert_eq!(2.0f64.three_way(&1.0), Ordering::Greater);
		assert_eq!(1.0f64.three_way(&1.0), Ordering::Equal);
		assert_eq!(f64::NAN.three_way(&f64::NAN), Ordering::Equal);
		assert_eq!(f64::NAN.three_way(&f64::NEG_INFINITY), Ordering::Less);
		assert_eq!(f64::NEG_INFINITY.three_way(&f64::NAN), Ordering::Greater);
	}

	#[test]
	fn none_orders_first() {
		assert!(None::<i32>.less(&Some(i32::MIN)));
		assert!(Some(i32::MIN).greater(&None));
		assert_eq!(None::<i32>.three_way(&None), Ordering::Equal);
		assert!(!None::<i32>.less(&None));
		assert!(Some(1).less(&Some(2)));
	}

	#[test]
	fn optional_floats_share_one_total_order() {
		// No pre-pass runs for `Option` keys, so the comparisons themselves
		// must place `Some(NaN)` between `None` and the numbers.
		assert!(!<Option<f64> as IntrinsicOrd>::HAS_NAN);
		assert!(None::<f64>.less(&Some(f64::NAN)));
		assert!(Some(f64::NAN).less(&Some(f64::NEG_INFINITY)));
		assert!(Some(1.0).greater(&Some(f64::NAN)));
		assert!(!Some(f64::NAN).less(&Some(f64::NAN)));
		assert_eq!(Some(f64::NAN).three_way(&Some(f64::NAN)), Ordering::Equal);
	}

	#[test]
	fn integer_raw_comparisons_agree_with_ord() {
		for a in [i64::MIN, -1, 0, 1, i64::MAX] {
			for b in [i64::MIN, -1, 0, 1, i64::MAX] {
				assert_eq!(a.less(&b), a < b);
				assert_eq!(a.greater(&b), a > b);
				assert_eq!(a.three_way(&b), a.cmp(&b));
			}
		}
	}
}
