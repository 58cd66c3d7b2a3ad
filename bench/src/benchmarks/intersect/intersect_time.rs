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

#[path ="mod.rs"] mod intersect;

use seqsearch::intersect::{intersect as gallop, par_intersect};
use seqsearch_bench::common::sequence::intersect_input;
use seqsearch_bench::{define_algs, define_args, init, finalize};
use intersect::{merge_intersect, check};

define_args!(
    Algs::PARALLEL,
    (n, usize, 10_000_000),
    (m, usize, 100_000),
    (seed, u64, 0),
    (check, bool, false)
);

define_algs!(
    (MERGE,     "merge"),
    (GALLOP,    "gallop"),
    (PARALLEL,  "parallel")
);

pub fn run(alg: Algs, rounds: usize, a: &[u64], b: &[u64]) -> (Vec<u64>, Duration) {
    let f = match alg {
        Algs::MERGE     => merge_intersect,
        Algs::GALLOP    => gallop::<u64>,
        Algs::PARALLEL  => par_intersect::<u64>,
    };

    let mut r = vec![];
    let mean = time_loop(
        "intersect",
        rounds,
        Duration::new(1, 0),
        || {},
        || { r = f(a, b); },
        || {}
    );
    (r, mean)
}

fn main() {
    init!();
    let args = Args::parse();
    let (a, b) = intersect_input(args.n, args.m, args.seed);

    let (r, d) = run(args.algorithm, args.rounds, &a, &b);
    println!("common: {}", r.len());

    if args.check {
        match check(&r, &a, &b) {
            Ok(()) => println!("OK"),
            Err(e) => { eprintln!("ERR: {e}"); std::process::exit(1); }
        }
    }

    finalize!(r, d);
}
