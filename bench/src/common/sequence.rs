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

use seqsearch::random::Random;


/// A sorted set of `n` values drawn from `0..2n` and `queries` sorted
/// probes drawn from the same universe, roughly half of them hits.
pub fn search_input(n: usize, queries: usize, seed: u64) -> (Vec<u64>, Vec<u64>) {
    let r = Random::new(seed);
    let universe = 2 * n.max(1) as u64;
    (
        r.fork(0).sorted_set(n, universe),
        r.fork(1).sorted_seq(queries, universe),
    )
}

/// Two sorted sets of at most `n` and `m` values.
/// Both are drawn from `0..2 * max(n, m)`, so the denser the smaller set
/// is, the more the two overlap.
pub fn intersect_input(n: usize, m: usize, seed: u64) -> (Vec<u64>, Vec<u64>) {
    let r = Random::new(seed);
    let universe = 2 * n.max(m).max(1) as u64;
    (
        r.fork(0).sorted_set(n, universe),
        r.fork(1).sorted_set(m, universe),
    )
}
