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

use crate::internal::binary_search::exact_search;
use crate::internal::galloping::galloping_search;


/// Looks up every target in `arr` with `exact_search`, in parallel.
/// The i-th result belongs to the i-th target.
pub fn par_exact_search<T>(arr: &[T], targets: &[T]) -> Vec<Option<usize>>
where
    T: Ord + Sync,
{
    targets
        .par_iter()
        .map(|t| exact_search(arr, 0, arr.len(), t))
        .collect()
}

/// Seeks a batch of ascending targets through `arr` with a single cursor.
///
/// For every target yields `(true, i)` with `arr[i]` equal to it, or
/// `(false, p)` with `p` the position it would be inserted at. The cursor
/// never moves backwards, so the whole batch costs about
/// `targets.len() * log(arr.len() / targets.len())` comparisons.
pub fn seek_sorted<T: Ord>(arr: &[T], targets: &[T]) -> Vec<(bool, usize)> {
    debug_assert!(targets.windows(2).all(|w| w[0] <= w[1]));
    let n = arr.len();
    let mut cursor = 0;

    targets
        .iter()
        .map(|t| {
            if cursor == n { return (false, n); }
            let (c, next) = galloping_search(arr, cursor, n, t);
            cursor = next - c;
            (c == 1, cursor)
        })
        .collect()
}
