//! Keys+values flavor of the sorting algorithms.
//!
//! Every key movement carries the element at the same index of a parallel
//! values slice, so the (key, value) pairing established on entry is an
//! invariant of every intermediate state.

pub mod heap_sort;
pub mod insertion_sort;
pub mod intro_sort;
pub mod partition;
