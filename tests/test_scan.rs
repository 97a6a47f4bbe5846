/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use frontier_bfs::algo::scan::{down_sweep, scan, up_sweep};
use frontier_bfs::thread_pool;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn exclusive_prefix_sums(a: &[i64]) -> Vec<i64> {
    a.iter()
        .scan(0, |sum, &x| {
            let prev = *sum;
            *sum += x;
            Some(prev)
        })
        .collect()
}

#[test]
fn test_single_element() {
    let mut a = [42];
    assert_eq!(scan(&mut a), 42);
    assert_eq!(a, [0]);
}

#[test]
fn test_small() {
    let mut a = [3, 1, 7, 0, 4, 1, 6, 3];
    assert_eq!(scan(&mut a), 25);
    assert_eq!(a, [0, 3, 4, 11, 11, 15, 16, 22]);
}

#[test]
fn test_phases() {
    let mut a = [3, 1, 7, 0, 4, 1, 6, 3];
    up_sweep(&mut a);
    assert_eq!(a, [3, 4, 7, 11, 4, 5, 6, 25]);
    a[7] = 0;
    down_sweep(&mut a);
    assert_eq!(a, [0, 3, 4, 11, 11, 15, 16, 22]);
}

#[test]
fn test_random() {
    let mut rng = SmallRng::seed_from_u64(0);
    let thread_pool = thread_pool![4];
    let lengths = (0..40).chain([64, 127, 128, 1000, 1023, 1024, 1025, 5000, 100_000]);
    for len in lengths {
        let a = (0..len)
            .map(|_| rng.random_range(-1000..1000))
            .collect::<Vec<i64>>();
        let expected = exclusive_prefix_sums(&a);
        let mut b = a.clone();
        let total = thread_pool.install(|| scan(&mut b));
        assert_eq!(total, a.iter().sum::<i64>(), "length {}", len);
        assert_eq!(b, expected, "length {}", len);
    }
}

#[test]
fn test_unsigned_counts() {
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..100 {
        let len = rng.random_range(1..3000);
        let a = (0..len)
            .map(|_| rng.random_range(0..=250))
            .collect::<Vec<usize>>();
        let mut b = a.clone();
        assert_eq!(scan(&mut b), a.iter().sum::<usize>());
        let mut sum = 0;
        for i in 0..len {
            assert_eq!(b[i], sum);
            sum += a[i];
        }
    }
}
