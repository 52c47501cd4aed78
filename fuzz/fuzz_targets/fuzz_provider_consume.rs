//! Drives every consumer from an input-chosen script.
//!
//! The first byte of each step selects the consumer, so libFuzzer explores
//! call orders as well as payloads. No consumer may panic, whatever the
//! input and however far past its end the script reads.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_provider_consume
#![no_main]
use fuzzed_data_provider::{CharBag, FuzzedDataProvider};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut fdp = FuzzedDataProvider::from_slice(data);
    let bag = CharBag::from("0123456789abcdef");
    let choices = [1u8, 2, 3, 5, 8];

    for _ in 0..64 {
        if fdp.is_exhausted() {
            break;
        }
        match fdp.consume_byte_in_range(0, 15) {
            0 => {
                std::hint::black_box(fdp.consume_i64());
            }
            1 => {
                std::hint::black_box(fdp.consume_u16_in_range(10, 20));
            }
            2 => {
                std::hint::black_box(fdp.consume_bool());
            }
            3 => {
                std::hint::black_box(fdp.consume_double());
            }
            4 => {
                std::hint::black_box(fdp.consume_f32());
            }
            5 => {
                let len = usize::from(fdp.consume_byte());
                std::hint::black_box(fdp.consume_string(len, None));
            }
            6 => {
                let len = usize::from(fdp.consume_byte());
                std::hint::black_box(fdp.consume_string(len, Some(&bag)));
            }
            7 => {
                std::hint::black_box(fdp.consume_char_from(&bag));
            }
            8 => {
                let len = usize::from(fdp.consume_byte());
                std::hint::black_box(fdp.consume_bytes_in_range(len, b'a', b'z'));
            }
            9 => {
                std::hint::black_box(fdp.consume_date_time());
            }
            10 => {
                std::hint::black_box(fdp.pick(&choices).ok());
            }
            11 => {
                std::hint::black_box(fdp.consume_code_units(4));
            }
            12 => {
                std::hint::black_box(fdp.consume_remaining_string(None));
            }
            13 => {
                std::hint::black_box(fdp.consume_remaining_bytes());
            }
            _ => {
                std::hint::black_box(fdp.consume_u32());
            }
        }
    }
});
