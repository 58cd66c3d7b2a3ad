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

use std::time::{Duration, Instant};

use super::timer::Timer;


/// Times `f` over `rounds` rounds and returns the mean round time.
///
/// `f` is first run untimed until `warmup` has elapsed (at least once).
/// `init` runs before and `end` after every round, both untimed.
/// Each timed round is reported as `name:round:<seconds>`.
pub fn time_loop<I, F, E>(
    name: &str,
    rounds: usize,
    warmup: Duration,
    mut init: I,
    mut f: F,
    mut end: E,
) -> Duration where
    I: FnMut(),
    F: FnMut(),
    E: FnMut(),
{
    assert!(rounds > 0, "time_loop: at least one round is needed");

    let start = Instant::now();
    loop {
        init();
        f();
        end();
        if start.elapsed() >= warmup { break; }
    }

    let mut t = Timer::new(name);
    for _ in 0..rounds {
        init();
        t.start();
        f();
        let d = t.stop();
        t.report(d, "round");
        end();
    }
    t.total_time() / rounds as u32
}
