/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Parallel stream compaction.

use super::scan::scan;
use rayon::prelude::*;
use std::mem::MaybeUninit;
use sync_cell_slice::SyncSlice;

/// Compacts the valid elements of `a[..size]` at the start of `a`, keeping
/// their relative order, and returns their number.
///
/// An element `x` is valid if `is_valid(&x)` is true. The prefix is split in
/// blocks of `block_size` elements: valid elements are counted in parallel
/// block by block, the counts are turned into write offsets by a parallel
/// [exclusive prefix sum](scan), and each block then copies its valid
/// elements into its own range of an output buffer, which is finally copied
/// back over `a`.
///
/// If `len` is the returned value, `a[..len]` contains the valid elements,
/// the content of `a[len..size]` is unspecified and `a[size..]` is left
/// untouched. Parallel work runs in the current rayon thread pool.
///
/// # Panics
///
/// If `size` is larger than `a.len()` or `block_size` is zero.
///
/// # Examples
///
/// ```
/// use frontier_bfs::algo::filter::filter;
///
/// let mut a = [3, -1, 5, -1, -1, 7];
/// let len = filter(&mut a, 6, 2, |&x| x >= 0);
/// assert_eq!(len, 3);
/// assert_eq!(a[..len], [3, 5, 7]);
/// ```
pub fn filter<T, F>(a: &mut [T], size: usize, block_size: usize, is_valid: F) -> usize
where
    T: Copy + Send + Sync,
    F: Fn(&T) -> bool + Sync,
{
    assert!(block_size > 0, "The block size must be positive");
    let a = &mut a[..size];

    let mut offsets = a
        .par_chunks(block_size)
        .map(|block| block.iter().filter(|&x| is_valid(x)).count())
        .collect::<Vec<_>>();
    let len = scan(&mut offsets);

    let mut out = vec![MaybeUninit::<T>::uninit(); len];
    let cells = out.as_sync_slice();
    a.par_chunks(block_size)
        .zip(offsets.par_iter())
        .for_each(|(block, &offset)| {
            for (cell, &x) in cells[offset..]
                .iter()
                .zip(block.iter().filter(|&x| is_valid(x)))
            {
                // Safety: block ranges in the output are disjoint
                unsafe { cell.set(MaybeUninit::new(x)) };
            }
        });

    a[..len]
        .par_chunks_mut(block_size)
        .zip(out.par_chunks(block_size))
        .for_each(|(dst, src)| {
            for (d, s) in dst.iter_mut().zip(src) {
                // Safety: the output ranges of the blocks cover [0..len)
                *d = unsafe { s.assume_init_read() };
            }
        });

    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_invalid() {
        let mut a = [-1; 10];
        assert_eq!(filter(&mut a, 10, 3, |&x| x >= 0), 0);
    }

    #[test]
    fn test_prefix_only() {
        let mut a = [-1, 2, -1, 4, 5, -1];
        assert_eq!(filter(&mut a, 3, 2, |&x| x >= 0), 1);
        assert_eq!(a[0], 2);
        assert_eq!(a[3..], [4, 5, -1]);
    }

    #[test]
    fn test_empty() {
        let mut a: [i32; 0] = [];
        assert_eq!(filter(&mut a, 0, 4, |&x| x >= 0), 0);
    }
}
