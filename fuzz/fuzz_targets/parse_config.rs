#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(config) = labnote_config::parse_config(text) {
            assert!(config.report.bar_scale > 0);
            assert!((1..=100).contains(&config.report.percentile_step));
        }
    }
});
