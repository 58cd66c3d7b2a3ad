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

use std::cmp::{min, Ordering};

use crate::internal::binary_search::predecessor_search;


/// Galloping (exponential) search for `val` starting at `arr[beg]`.
///
/// Probes `arr[beg + 1]`, `arr[beg + 2]`, `arr[beg + 4]`, ... until a probe
/// is not smaller than `val` or the range `[beg, end)` runs out, then
/// narrows the last bracket down with `predecessor_search`. The cost is
/// logarithmic in the distance between `beg` and the answer rather than in
/// `end - beg`.
///
/// Returns `(consumed, next)`:
/// - `(1, i + 1)` if `arr[i] == val` for the `i` that was found,
/// - `(0, p)` otherwise, with `p` the position where `val` would be
///   inserted into `arr[beg..end]`.
///
/// `next` is the position a lockstep walk over `arr` continues from.
///
/// # Panics
/// if the range is empty or does not fit in `arr`.
pub fn galloping_search<T: Ord>(
    arr: &[T],
    beg: usize,
    end: usize,
    val: &T
) -> (usize, usize) {
    assert!(
        beg < end && end <= arr.len(),
        "galloping_search: invalid range [{beg}, {end}) over {} elements",
        arr.len()
    );

    match arr[beg].cmp(val) {
        Ordering::Greater   => return (0, beg),
        Ordering::Equal     => return (1, beg + 1),
        Ordering::Less      => {}
    }

    // arr[beg + prev_offset] < val holds throughout.
    let mut prev_offset = 0;
    let mut jump_step = 1;
    while beg + jump_step < end && arr[beg + jump_step] < *val {
        prev_offset = jump_step;
        jump_step <<= 1;
    }

    // the probe that stopped the loop is part of the bracket.
    let bracket_end = min(beg + jump_step + 1, end);
    match predecessor_search(arr, beg + prev_offset, bracket_end, val) {
        (true, i)   => (1, i + 1),
        (false, i)  => (0, i + 1),
    }
}
