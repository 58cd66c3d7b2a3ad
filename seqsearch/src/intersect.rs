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

use crate::verbose_println;
use crate::internal::binary_search::lower_bound;
use crate::internal::galloping::galloping_search;

const INTERSECT_BASE: usize = 2000;


/// Walks `a` and `b` in lockstep, galloping in whichever side is behind,
/// and calls `on_match` for every common element in increasing order.
fn lockstep<T, F>(a: &[T], b: &[T], mut on_match: F)
where
    T: Ord,
    F: FnMut(&T),
{
    let (n1, n2) = (a.len(), b.len());
    let (mut i, mut j) = (0, 0);

    while i < n1 && j < n2 {
        let (c, ni) = galloping_search(a, i, n1, &b[j]);
        i = ni;
        if c == 1 {
            on_match(&b[j]);
            j += 1;
            continue;
        }
        if i == n1 { break; }

        let (c, nj) = galloping_search(b, j, n2, &a[i]);
        j = nj;
        if c == 1 {
            on_match(&a[i]);
            i += 1;
        }
    }
}

/// Intersects two strictly increasing sequences.
/// The output is strictly increasing.
pub fn intersect<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Copy,
{
    let mut out = Vec::new();
    lockstep(a, b, |&x| out.push(x));
    out
}

/// Counts the common elements of two strictly increasing sequences.
pub fn intersect_count<T: Ord>(a: &[T], b: &[T]) -> usize {
    let mut cn = 0;
    lockstep(a, b, |_| cn += 1);
    cn
}

/// Checks whether `a` and `b` share at least `threshold` elements.
///
/// Every element of the shorter input is galloped for in the longer one.
/// Gives up as soon as the elements left on either side can no longer
/// make up for the missing matches.
pub fn has_common_at_least<T: Ord>(a: &[T], b: &[T], threshold: usize) -> bool {
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let (n1, n2) = (a.len(), b.len());
    let (mut i, mut j, mut cn) = (0, 0, 0);

    // cn + min(n1 - i, n2 - j) bounds the final count from above.
    while cn < threshold && cn + (n1 - i).min(n2 - j) >= threshold {
        let (c, ni) = galloping_search(a, i, n1, &b[j]);
        i = ni;
        cn += c;
        // b[j] is either matched or absent from a.
        j += 1;
    }
    cn >= threshold
}

/// Intersects two strictly increasing sequences in parallel.
///
/// The longer input is split at the first occurrence of its middle value
/// and the other one at the same value, so no common element straddles
/// the split. Both halves are intersected recursively with `rayon::join`.
pub fn par_intersect<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Copy + Send + Sync,
{
    let mut out = Vec::new();
    intersect_into(a, b, &mut out);
    out
}

fn intersect_into<T>(a: &[T], b: &[T], out: &mut Vec<T>)
where
    T: Ord + Copy + Send + Sync,
{
    // splitting on the longer side keeps the recursion balanced.
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let (n1, n2) = (a.len(), b.len());
    if n2 == 0 { return; }

    let less = |x: T, y: T| x < y;
    let m1 = if n1 + n2 < INTERSECT_BASE { 0 }
        else { lower_bound(a, a[n1 / 2], less) };

    // small inputs, or a run of equal values covering the whole left half.
    if m1 == 0 {
        out.extend(intersect(a, b));
        return;
    }

    let m2 = lower_bound(b, a[m1], less);
    verbose_println!("par_intersect: split ({n1}, {n2}) at ({m1}, {m2})");

    let (mut l_out, mut r_out) = (Vec::new(), Vec::new());
    rayon::join(
        || intersect_into(&a[..m1], &b[..m2], &mut l_out),
        || intersect_into(&a[m1..], &b[m2..], &mut r_out),
    );
    out.reserve(l_out.len() + r_out.len());
    out.par_extend(l_out.into_par_iter().chain(r_out.into_par_iter()));
}
