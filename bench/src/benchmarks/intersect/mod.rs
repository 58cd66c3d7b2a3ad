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

/// Plain two-finger merge, the baseline the galloping versions are
/// measured and checked against.
pub fn merge_intersect(a: &[u64], b: &[u64]) -> Vec<u64> {
    let (n1, n2) = (a.len(), b.len());
    let (mut i, mut j) = (0, 0);
    let mut out = vec![];

    while i < n1 && j < n2 {
        if a[i] < b[j] { i += 1; }
        else if b[j] < a[i] { j += 1; }
        else {
            out.push(a[i]);
            i += 1;
            j += 1;
        }
    }
    out
}

pub fn check(r: &[u64], a: &[u64], b: &[u64]) -> Result<(), String> {
    let expected = merge_intersect(a, b);
    if r.len() != expected.len() {
        return Err(format!(
            "expected {} common elements, got {}.", expected.len(), r.len()
        ));
    }
    let diff_count = r.iter().zip(&expected).filter(|(x, y)| x != y).count();
    if diff_count != 0 { Err(format!("result has {diff_count} differences.")) }
    else { Ok(()) }
}
