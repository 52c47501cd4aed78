//! QuickCheck properties for remapping and slice consumers.

use fuzzed_data_provider::{CharBag, FuzzedDataProvider, remap};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn remap_u8_is_contained(raw: u8, a: u8, b: u8) -> bool {
    let (min, max) = (a.min(b), a.max(b));
    let value = remap(raw, min, max);
    min <= value && value <= max
}

#[quickcheck]
fn remap_i64_is_contained(raw: i64, a: i64, b: i64) -> bool {
    let (min, max) = (a.min(b), a.max(b));
    let value = remap(raw, min, max);
    min <= value && value <= max
}

#[quickcheck]
fn remap_is_identity_inside_zero_based_range(raw: u16, extra: u16) -> bool {
    let max = raw.saturating_add(extra);
    remap(raw, 0, max) == raw
}

#[quickcheck]
fn remaining_bytes_returns_the_tail(data: Vec<u8>, skip: u8) -> bool {
    let mut fdp = FuzzedDataProvider::from_slice(&data);
    let skip = usize::from(skip).min(data.len());
    let head = fdp.consume_bytes(skip);
    let tail = fdp.consume_remaining_bytes();
    if data.is_empty() {
        return tail.is_empty() && fdp.is_exhausted();
    }
    [head, tail].concat() == data && !fdp.is_exhausted()
}

#[quickcheck]
fn consume_bytes_has_requested_length(data: Vec<u8>, length: u8) -> bool {
    let mut fdp = FuzzedDataProvider::from_slice(&data);
    let bytes = fdp.consume_bytes(usize::from(length));
    bytes.len() == usize::from(length) && fdp.offset() == usize::from(length)
}

#[quickcheck]
fn remaining_string_consumes_everything(data: Vec<u8>) -> bool {
    let mut fdp = FuzzedDataProvider::from_slice(&data);
    let s = fdp.consume_remaining_string(None);
    let units = data.len().div_ceil(2);
    fdp.offset() == units * 2 && s.chars().count() <= units
}

#[quickcheck]
fn char_from_bag_is_member(data: Vec<u8>, alphabet: String) -> bool {
    let bag = CharBag::from(alphabet.as_str());
    let mut fdp = FuzzedDataProvider::from_slice(&data);
    let c = fdp.consume_char_from(&bag);
    bag.is_empty() || bag.contains(c)
}
