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

use clap::Parser;

use seqsearch::{exact_search, predecessor_search, galloping_search};

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the sorted sequence to search in
    #[clap(long, value_parser, num_args = 1.., default_values_t = [18, 20, 40])]
    seq: Vec<i64>,

    /// the values to look for
    #[clap(
        long,
        value_parser,
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = [20, 18, 40, 19, 41, -1, 7, 70]
    )]
    probes: Vec<i64>,

    /// do not run the galloping search
    #[clap(long)]
    no_galloping: bool,
}

fn main() {
    let args = Args::parse();
    let (seq, probes) = (&args.seq, &args.probes);
    if seq.is_empty() || seq.windows(2).any(|w| w[0] > w[1]) {
        eprintln!("ERR: the sequence must be non-empty and sorted.");
        std::process::exit(1);
    }
    let n = seq.len();

    let exact: Vec<_> = probes.iter().map(|v| exact_search(seq, 0, n, v)).collect();
    println!("exact:        {:?}", exact);

    let pred: Vec<_> = probes.iter().map(|v| predecessor_search(seq, 0, n, v)).collect();
    println!("predecessor:  {:?}", pred);

    if !args.no_galloping {
        let gallop: Vec<_> = probes.iter().map(|v| galloping_search(seq, 0, n, v)).collect();
        println!("galloping:    {:?}", gallop);
    }
}
