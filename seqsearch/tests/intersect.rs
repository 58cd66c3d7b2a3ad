// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::collections::BTreeSet;

use seqsearch::intersect::{intersect, intersect_count, has_common_at_least, par_intersect};
use seqsearch::random::Random;


fn naive(a: &[u64], b: &[u64]) -> Vec<u64> {
    let b: BTreeSet<_> = b.iter().collect();
    a.iter().filter(|x| b.contains(x)).copied().collect()
}

#[test]
fn empty_inputs() {
    let a: Vec<u64> = (0..10).collect();
    assert!(intersect(&a, &[]).is_empty());
    assert!(intersect(&[], &a).is_empty());
    assert_eq!(intersect_count::<u64>(&[], &[]), 0);
    assert!(par_intersect(&a, &[]).is_empty());
}

#[test]
fn disjoint() {
    let evens: Vec<u64> = (0..100).map(|i| 2 * i).collect();
    let odds: Vec<u64> = (0..100).map(|i| 2 * i + 1).collect();
    assert!(intersect(&evens, &odds).is_empty());
    assert_eq!(intersect_count(&odds, &evens), 0);
    assert!(!has_common_at_least(&evens, &odds, 1));
}

#[test]
fn match_right_after_a_miss() {
    let (a, b) = ([0u64, 1, 2, 3, 5], [4u64, 5]);
    assert_eq!(intersect(&a, &b), vec![5]);
    assert_eq!(intersect(&b, &a), vec![5]);
    assert_eq!(par_intersect(&a, &b), vec![5]);
    assert_eq!(intersect_count(&a, &b), 1);
    assert!(has_common_at_least(&a, &b, 1));
    assert!(!has_common_at_least(&a, &b, 2));
}

#[test]
fn skewed() {
    let large: Vec<u64> = (0..100_000).collect();
    let small = vec![3, 500, 501, 77_777, 99_999, 100_000, 200_000];
    assert_eq!(intersect(&small, &large), vec![3, 500, 501, 77_777, 99_999]);
    assert_eq!(intersect(&large, &small), vec![3, 500, 501, 77_777, 99_999]);
    assert_eq!(intersect_count(&large, &small), 5);
}

#[test]
fn random_sets() {
    let r = Random::new(1);
    for round in 0..60 {
        let (n, m) = (round * 37 % 500, round * 91 % 300);
        let a = r.fork(2 * round).sorted_set(n as usize, 600);
        let b = r.fork(2 * round + 1).sorted_set(m as usize, 600);
        let expected = naive(&a, &b);
        assert_eq!(intersect(&a, &b), expected);
        assert_eq!(intersect(&b, &a), expected);
        assert_eq!(intersect_count(&a, &b), expected.len());
        assert_eq!(par_intersect(&a, &b), expected);
    }
}

#[test]
fn parallel_matches_sequential() {
    let r = Random::new(2);
    for (n, m) in [(100_000, 100_000), (300_000, 1_000), (5_000, 200_000), (2_000, 2_000)] {
        let a = r.fork(n).sorted_set(n as usize, 400_000);
        let b = r.fork(m + 1).sorted_set(m as usize, 400_000);
        assert_eq!(par_intersect(&a, &b), intersect(&a, &b));
        assert_eq!(par_intersect(&b, &a), intersect(&a, &b));
    }
}

#[test]
fn threshold() {
    let r = Random::new(3);
    for round in 0..40 {
        let a = r.fork(2 * round).sorted_set(200, 400);
        let b = r.fork(2 * round + 1).sorted_set(50 + round as usize, 400);
        let cn = intersect_count(&a, &b);
        for t in 0..cn + 3 {
            assert_eq!(has_common_at_least(&a, &b, t), cn >= t, "cn = {cn}, t = {t}");
            assert_eq!(has_common_at_least(&b, &a, t), cn >= t, "cn = {cn}, t = {t}");
        }
    }
}

#[test]
fn threshold_zero() {
    assert!(has_common_at_least::<u64>(&[], &[], 0));
    assert!(!has_common_at_least::<u64>(&[], &[1], 1));
}
