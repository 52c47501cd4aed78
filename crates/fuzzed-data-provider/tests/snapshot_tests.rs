//! Snapshot tests for the fuzzed data provider.
//!
//! These lock in decoded values for fixed inputs so that any change to byte
//! order, widths or remapping shows up as a corpus-breaking diff.

use fuzzed_data_provider::{
    FuzzedDataProvider, ProviderConfig, ProviderError, ProviderResult, temporal,
};
use insta::assert_snapshot;

#[test]
#[cfg(target_endian = "little")]
fn test_snapshot_mixed_script() {
    let data: Vec<u8> = (0u8..32).collect();
    let mut fdp = FuzzedDataProvider::new(data);
    let summary = format!(
        "u32={} i16={} ranged={} bool={} bytes={:?} letter={} u64={} offset={} remaining={} exhausted={}",
        fdp.consume_u32(),
        fdp.consume_i16(),
        fdp.consume_i32_in_range(-10, 10),
        fdp.consume_bool(),
        fdp.consume_bytes(3),
        fdp.consume_u32_in_range(0, 25),
        fdp.consume_u64(),
        fdp.offset(),
        fdp.remaining_bytes(),
        fdp.is_exhausted(),
    );
    assert_snapshot!(summary, @"u32=66051 i16=1029 ranged=2 bool=false bytes=[11, 12, 13] letter=25 u64=1302406798037686297 offset=26 remaining=6 exhausted=false");
}

#[test]
fn test_snapshot_timestamp_domain() {
    let summary = format!(
        "min={} max={}",
        temporal::min_timestamp().to_rfc3339(),
        temporal::max_timestamp().to_rfc3339()
    );
    assert_snapshot!(summary, @"min=0001-01-01T00:00:00+00:00 max=9999-12-31T23:59:59.999999900+00:00");
}

#[test]
fn test_snapshot_provider_debug() {
    let fdp = FuzzedDataProvider::new(vec![1, 2, 3, 4]);
    assert_snapshot!(format!("{fdp:?}"), @"FuzzedDataProvider { cursor: Cursor { len: 4, offset: 0, state: Sufficient, policy: Continue, hook: false, hook_fired: false }, max_request_len: None }");
}

#[test]
fn test_snapshot_default_config_json() -> ProviderResult<()> {
    let json = serde_json::to_string(&ProviderConfig::default())?;
    assert_snapshot!(json, @r#"{"exhaustion_policy":"continue","max_request_len":null}"#);
    Ok(())
}

#[test]
fn test_snapshot_error_messages() {
    let messages = [
        ProviderError::EmptyChoices.to_string(),
        ProviderError::invalid_configuration("max_request_len must be at least 2, got 0").to_string(),
    ]
    .join("\n");
    assert_snapshot!(messages, @r"
    Cannot choose from an empty set of values
    Invalid configuration: max_request_len must be at least 2, got 0
    ");
}
