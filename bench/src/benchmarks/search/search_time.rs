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

use std::time::Duration;

use seqsearch::{exact_search, predecessor_search};
use seqsearch::batch::{par_exact_search, seek_sorted};
use seqsearch::verbose_println;
use seqsearch_bench::common::sequence::search_input;
use seqsearch_bench::{define_algs, define_args, init, finalize};

define_args!(
    Algs::GALLOP,
    (n, usize, 1_000_000),
    (queries, usize, 100_000),
    (seed, u64, 0)
);

define_algs!(
    (EXACT,         "exact"),
    (PAREXACT,      "parexact"),
    (PREDECESSOR,   "predecessor"),
    (GALLOP,        "gallop"),
    (STD,           "std")
);


fn exact(arr: &[u64], q: &[u64]) -> Vec<Option<usize>> {
    q.iter().map(|v| exact_search(arr, 0, arr.len(), v)).collect()
}

fn predecessor(arr: &[u64], q: &[u64]) -> Vec<Option<usize>> {
    if arr.is_empty() { return vec![None; q.len()]; }
    q
        .iter()
        .map(|v| match predecessor_search(arr, 0, arr.len(), v) {
            (true, i) => Some(i),
            (false, _) => None,
        })
        .collect()
}

fn gallop(arr: &[u64], q: &[u64]) -> Vec<Option<usize>> {
    seek_sorted(arr, q)
        .into_iter()
        .map(|(found, i)| found.then_some(i))
        .collect()
}

fn std_search(arr: &[u64], q: &[u64]) -> Vec<Option<usize>> {
    q.iter().map(|v| arr.binary_search(v).ok()).collect()
}

pub fn run(alg: Algs, rounds: usize, arr: &[u64], q: &[u64]) -> (Vec<Option<usize>>, Duration) {
    let f = match alg {
        Algs::EXACT         => exact,
        Algs::PAREXACT      => par_exact_search::<u64>,
        Algs::PREDECESSOR   => predecessor,
        Algs::GALLOP        => gallop,
        Algs::STD           => std_search,
    };

    let mut r = vec![];
    let mean = time_loop(
        "search",
        rounds,
        Duration::new(1, 0),
        || {},
        || { r = f(arr, q); },
        || {}
    );
    (r, mean)
}

fn main() {
    init!();
    let args = Args::parse();
    let (arr, q) = search_input(args.n, args.queries, args.seed);
    verbose_println!("search: {} elements, {} queries", arr.len(), q.len());

    let (r, d) = run(args.algorithm, args.rounds, &arr, &q);
    println!("found: {} of {}", r.iter().filter(|i| i.is_some()).count(), q.len());

    finalize!(r, d);
}
