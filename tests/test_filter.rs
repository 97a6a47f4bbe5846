/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use frontier_bfs::algo::filter::filter;
use frontier_bfs::thread_pool;
use nonmax::NonMaxUsize;
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[test]
fn test_example() {
    for block_size in [1, 2, 3, 250] {
        let mut a = [3, -1, 5, -1, -1, 7];
        let len = filter(&mut a, 6, block_size, |&x| x >= 0);
        assert_eq!(len, 3);
        assert_eq!(a[..len], [3, 5, 7]);
    }
}

#[test]
fn test_all_valid() {
    let mut a = (0..1000).collect::<Vec<i32>>();
    let len = filter(&mut a, 1000, 7, |&x| x >= 0);
    assert_eq!(len, 1000);
    assert_eq!(a, (0..1000).collect::<Vec<_>>());
}

#[test]
fn test_random() {
    let mut rng = SmallRng::seed_from_u64(0);
    let thread_pool = thread_pool![4];
    for _ in 0..200 {
        let len = rng.random_range(0..5000);
        let invalid_prob = rng.random_range(0.0..1.0);
        let block_size = rng.random_range(1..600);
        let a = (0..len)
            .map(|_| {
                if rng.random_bool(invalid_prob) {
                    -1
                } else {
                    rng.random_range(0..1_000_000)
                }
            })
            .collect::<Vec<i64>>();
        let expected = a.iter().copied().filter(|&x| x >= 0).collect::<Vec<_>>();

        let mut b = a.clone();
        let new_len = thread_pool.install(|| filter(&mut b, len, block_size, |&x| x >= 0));
        assert_eq!(new_len, expected.len());
        assert_eq!(b[..new_len], expected[..]);
    }
}

#[test]
fn test_frontier_slots() {
    let mut slots = (0..100)
        .map(|i| NonMaxUsize::new(i).filter(|_| i % 3 == 0))
        .collect::<Vec<_>>();
    let len = filter(&mut slots, 100, 8, Option::is_some);
    assert_eq!(len, 34);
    assert!(slots[..len]
        .iter()
        .enumerate()
        .all(|(i, slot)| slot.map(|node| node.get()) == Some(3 * i)));
}
