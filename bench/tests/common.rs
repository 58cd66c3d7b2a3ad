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

use seqsearch_bench::common::time_loop::time_loop;
use seqsearch_bench::common::timer::Timer;
use seqsearch_bench::common::sequence::{search_input, intersect_input};


mod timing {
    use super::*;

    #[test]
    fn timer_sums_stopped_rounds() {
        let mut t = Timer::new("test");
        t.start();
        let d1 = t.stop();
        t.start();
        std::thread::sleep(Duration::from_millis(2));
        let d2 = t.stop();
        assert!(d2 >= Duration::from_millis(2));
        assert_eq!(t.total_time(), d1 + d2);
    }

    #[test]
    fn runs_every_round() {
        let (mut inits, mut runs, mut ends) = (0, 0, 0);
        time_loop(
            "test",
            5,
            Duration::ZERO,
            || inits += 1,
            || runs += 1,
            || ends += 1,
        );
        // one warm-up round plus five timed ones.
        assert_eq!((inits, runs, ends), (6, 6, 6));
    }

    #[test]
    #[should_panic]
    fn no_rounds() {
        time_loop("test", 0, Duration::ZERO, || {}, || {}, || {});
    }
}


mod inputs {
    use super::*;

    #[test]
    fn search_input_is_sorted() {
        let (arr, q) = search_input(10_000, 1_000, 1);
        assert!(arr.windows(2).all(|w| w[0] < w[1]));
        assert!(q.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(q.len(), 1_000);
        assert!(arr.iter().chain(&q).all(|&x| x < 20_000));
    }

    #[test]
    fn inputs_are_reproducible() {
        assert_eq!(search_input(1_000, 100, 7), search_input(1_000, 100, 7));
        assert_eq!(intersect_input(1_000, 100, 7), intersect_input(1_000, 100, 7));
        assert_ne!(intersect_input(1_000, 100, 7), intersect_input(1_000, 100, 8));
    }

    #[test]
    fn intersect_input_is_sets() {
        let (a, b) = intersect_input(5_000, 300, 2);
        assert!(a.windows(2).all(|w| w[0] < w[1]));
        assert!(b.windows(2).all(|w| w[0] < w[1]));
        assert!(!a.is_empty() && b.len() <= 300);
    }

    #[test]
    fn empty_inputs() {
        let (arr, q) = search_input(0, 0, 0);
        assert!(arr.is_empty() && q.is_empty());
    }
}
