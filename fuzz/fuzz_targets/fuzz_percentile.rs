//! Fuzz target for the nearest-rank percentile and speedup arithmetic.
//!
//! Any integer `p` and any list of finite values must either produce an
//! element of the list or a typed error; never a panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    p: u32,
    values: Vec<f64>,
    sort: bool,
    baseline: Option<f64>,
    comparison: Option<f64>,
}

fuzz_target!(|input: Input| {
    let mut values: Vec<f64> = input.values.into_iter().filter(|v| v.is_finite()).collect();
    if input.sort {
        values.sort_by(f64::total_cmp);
    }

    match labnote_stats::percentile(input.p, &values) {
        Ok(v) => {
            assert!(input.p <= 100);
            assert!(values.contains(&v));
        }
        Err(e) => assert!(e.is_caller_bug()),
    }

    let factor = labnote_stats::compute_factor(input.baseline, input.comparison);
    if let (Some(b), Some(c)) = (input.baseline, input.comparison) {
        if b == 0.0 || c == 0.0 {
            assert_eq!(factor, None);
        } else if b.is_finite() && c.is_finite() && b > 0.0 && c > 0.0 {
            let f = factor.unwrap_or(f64::NAN);
            // never strictly between -1 and 1 except exactly zero
            assert!(f == 0.0 || f.abs() >= 1.0);
        }
    }
});
