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

use std::cmp::Ordering;

const BIN_SEARCH_BASE: usize = 16;


fn linear_search<T, F>(inp: &[T], p: T, less: F) -> usize
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    inp
        .iter()
        .position(|&x| !less(x, p))
        .unwrap_or(inp.len())
}

/// returns the first index `i` of `inp` such that `!less(inp[i], p)`,
/// or `inp.len()` if there is none.
pub fn lower_bound<T, F>(inp: &[T], p: T, less: F) -> usize
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    let (mut start, mut end) = (0, inp.len());

    while end - start > BIN_SEARCH_BASE {
        let mid = (start + end) / 2;
        if !less(inp[mid], p) { end = mid; }
        else { start = mid + 1; }
    }

    start + linear_search(&inp[start..end], p, less)
}

/// Looks for `val` in `arr[beg..end]`.
///
/// Returns the index of an element equal to `val`, or `None` if the range
/// holds no such element. When `val` occurs more than once in the range,
/// the returned index is an arbitrary one of the matches.
///
/// # Panics
/// if `beg > end` or `end > arr.len()`.
pub fn exact_search<T: Ord>(
    arr: &[T],
    beg: usize,
    end: usize,
    val: &T
) -> Option<usize> {
    assert!(
        beg <= end && end <= arr.len(),
        "exact_search: invalid range [{beg}, {end}) over {} elements",
        arr.len()
    );
    let (mut beg, mut end) = (beg, end);

    while beg < end {
        let mid = (beg + end) / 2;
        match val.cmp(&arr[mid]) {
            Ordering::Equal     => return Some(mid),
            Ordering::Less      => end = mid,
            Ordering::Greater   => beg = mid + 1,
        }
    }
    None
}

/// Predecessor search over the non-empty range `arr[beg..end]`.
///
/// Returns `(true, i)` when `arr[i] == val` (an arbitrary match when
/// duplicates exist). Otherwise returns `(false, i)` where `i` is the last
/// index of the range holding an element smaller than `val`, or `beg` when
/// every element of the range is greater than `val`.
///
/// # Panics
/// if the range is empty or does not fit in `arr`.
pub fn predecessor_search<T: Ord>(
    arr: &[T],
    beg: usize,
    end: usize,
    val: &T
) -> (bool, usize) {
    assert!(
        beg < end && end <= arr.len(),
        "predecessor_search: invalid range [{beg}, {end}) over {} elements",
        arr.len()
    );
    let start = beg;
    let (mut beg, mut end) = (beg, end);

    loop {
        // beg <= mid < end, and arr[beg - 1] < val once beg moved past start.
        let mid = (beg + end) / 2;
        match arr[mid].cmp(val) {
            Ordering::Equal => return (true, mid),
            Ordering::Less => {
                if mid + 1 == end { return (false, mid); }
                beg = mid + 1;
            }
            Ordering::Greater => {
                if mid == beg {
                    return (false, if mid == start { start } else { mid - 1 });
                }
                end = mid;
            }
        }
    }
}
