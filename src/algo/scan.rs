/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Work-efficient parallel exclusive prefix sums.
//!
//! The computation has two divide-and-conquer phases, each of which splits
//! the slice at its midpoint and processes the two halves in parallel with
//! [`rayon::join`]. The [up-sweep](up_sweep) accumulates the total of each
//! half in its last cell; the [down-sweep](down_sweep) pushes the sum of
//! everything preceding each half back down, ending with the exclusive prefix
//! sums. The phases run inside the current rayon thread pool.

use std::ops::Add;

/// Slices shorter than this are split without forking.
const SEQ_THRESHOLD: usize = 1 << 10;

/// Replaces `a` with its exclusive prefix sum and returns the sum of all the
/// original elements.
///
/// After the call, `a[i]` contains the sum of the original `a[0..i]`; the
/// default value of `T` is used as zero.
///
/// # Examples
///
/// ```
/// use frontier_bfs::algo::scan::scan;
///
/// let mut a = [3, 1, 4, 1, 5];
/// assert_eq!(scan(&mut a), 14);
/// assert_eq!(a, [0, 3, 4, 8, 9]);
///
/// let mut single = [7];
/// assert_eq!(scan(&mut single), 7);
/// assert_eq!(single, [0]);
/// ```
pub fn scan<T: Copy + Default + Add<Output = T> + Send>(a: &mut [T]) -> T {
    let Some(last) = a.len().checked_sub(1) else {
        return T::default();
    };
    up_sweep(a);
    // The join at the end of the up-sweep makes the total available
    let total = std::mem::take(&mut a[last]);
    down_sweep(a);
    total
}

/// First phase of [`scan`]: on return, the last cell of `a` contains the
/// sum of all elements of `a`, and recursively the last cell of each half
/// contains the sum of that half.
pub fn up_sweep<T: Copy + Add<Output = T> + Send>(a: &mut [T]) {
    let n = a.len();
    if n <= 1 {
        return;
    }
    let m = n / 2;
    let (left, right) = a.split_at_mut(m);
    if n > SEQ_THRESHOLD {
        rayon::join(|| up_sweep(left), || up_sweep(right));
    } else {
        up_sweep(left);
        up_sweep(right);
    }
    a[n - 1] = a[m - 1] + a[n - 1];
}

/// Second phase of [`scan`].
///
/// `a` must be in the state left by [`up_sweep`], except for its last cell,
/// which must contain the sum of the elements preceding `a`. On return, `a`
/// contains the exclusive prefix sums offset by that value.
pub fn down_sweep<T: Copy + Add<Output = T> + Send>(a: &mut [T]) {
    let n = a.len();
    if n <= 1 {
        return;
    }
    let m = n / 2;
    let left_sum = a[m - 1];
    let offset = a[n - 1];
    a[n - 1] = offset + left_sum;
    a[m - 1] = offset;
    let (left, right) = a.split_at_mut(m);
    if n > SEQ_THRESHOLD {
        rayon::join(|| down_sweep(left), || down_sweep(right));
    } else {
        down_sweep(left);
        down_sweep(right);
    }
}
