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

use rayon::prelude::*;

use crate::utilities::hash64;

/// A counter based random number generator.
///
/// The i-th number only depends on the seed and on i, so sequences can be
/// generated in parallel and regenerated exactly.
#[derive(Clone, Copy, Debug)]
pub struct Random {
    state: u64,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn fork(&self, i: u64) -> Self {
        Self::new(hash64(hash64(i.wrapping_add(self.state))))
    }

    pub fn ith_rand(&self, i: u64) -> u64 {
        hash64(i.wrapping_add(self.state))
    }

    /// the i-th random number reduced to `0..bound`.
    ///
    /// # Panics
    /// if `bound` is zero.
    pub fn ith_rand_below(&self, i: u64, bound: u64) -> u64 {
        assert!(bound > 0, "ith_rand_below: empty range");
        self.ith_rand(i) % bound
    }

    /// `n` draws from `0..universe`, sorted ascending. may hold duplicates.
    ///
    /// # Panics
    /// if `n > 0` and `universe` is zero.
    pub fn sorted_seq(&self, n: usize, universe: u64) -> Vec<u64> {
        let mut v: Vec<u64> = (0..n as u64)
            .into_par_iter()
            .map(|i| self.ith_rand_below(i, universe))
            .collect();
        v.par_sort_unstable();
        v
    }

    /// at most `n` distinct values from `0..universe`, strictly increasing.
    pub fn sorted_set(&self, n: usize, universe: u64) -> Vec<u64> {
        let mut v = self.sorted_seq(n, universe);
        v.dedup();
        v
    }
}
