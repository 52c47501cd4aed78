//! Checks that ranged consumers stay inside input-chosen bounds.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_provider_ranges
#![no_main]
use fuzzed_data_provider::{FuzzedDataProvider, temporal};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut fdp = FuzzedDataProvider::from_slice(data);

    let (a, b) = (fdp.consume_i64(), fdp.consume_i64());
    let (min, max) = (a.min(b), a.max(b));
    let value = fdp.consume_i64_in_range(min, max);
    assert!((min..=max).contains(&value), "{value} outside [{min}, {max}]");

    let (a, b) = (fdp.consume_u32(), fdp.consume_u32());
    let (min, max) = (a.min(b), a.max(b));
    let value = fdp.consume_u32_in_range(min, max);
    assert!((min..=max).contains(&value), "{value} outside [{min}, {max}]");

    let lo = temporal::from_ticks(fdp.consume_i64_in_range(0, temporal::MAX_TICKS));
    let hi = temporal::from_ticks(fdp.consume_i64_in_range(0, temporal::MAX_TICKS));
    let (lo, hi) = (lo.min(hi), lo.max(hi));
    let ts = fdp.consume_date_time_in_range(lo, hi);
    assert!(lo <= ts && ts <= hi, "{ts} outside [{lo}, {hi}]");

    // Inverted bounds must not panic.
    std::hint::black_box(fdp.consume_i32_in_range(1, -1));
});
