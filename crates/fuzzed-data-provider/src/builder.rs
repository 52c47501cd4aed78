//! Encoder for hand-written fuzz inputs.
//!
//! [`InputBuilder`] writes values in exactly the layout the provider decodes
//! them from, which makes it the easy way to craft seed corpora and
//! regression inputs.

use chrono::{DateTime, Utc};

use crate::scalar::FuzzInteger;
use crate::temporal;

/// Byte buffer builder mirroring the provider's decoding rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuilder {
    buffer: Vec<u8>,
}

impl InputBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Append any supported integer in the provider's integer byte order.
    pub fn write_int<T: FuzzInteger>(&mut self, value: T) -> &mut Self {
        self.buffer
            .extend_from_slice(value.to_foreign_bytes().as_ref());
        self
    }

    /// Append one byte.
    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buffer.push(value);
        self
    }

    /// Append an `i8`.
    pub fn write_i8(&mut self, value: i8) -> &mut Self {
        self.write_int(value)
    }

    /// Append an `i16` in integer byte order.
    pub fn write_i16(&mut self, value: i16) -> &mut Self {
        self.write_int(value)
    }

    /// Append a `u16` in integer byte order.
    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        self.write_int(value)
    }

    /// Append an `i32` in integer byte order.
    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        self.write_int(value)
    }

    /// Append a `u32` in integer byte order.
    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.write_int(value)
    }

    /// Append an `i64` in integer byte order.
    pub fn write_i64(&mut self, value: i64) -> &mut Self {
        self.write_int(value)
    }

    /// Append a `u64` in integer byte order.
    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.write_int(value)
    }

    /// Append a byte whose low bit carries `value`.
    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_u8(u8::from(value))
    }

    /// Append one UTF-16 code unit.
    pub fn write_char(&mut self, unit: u16) -> &mut Self {
        self.write_int(unit)
    }

    /// Append `s` as UTF-16 code units. Read it back with
    /// `consume_string(s.encode_utf16().count(), None)`.
    pub fn write_str(&mut self, s: &str) -> &mut Self {
        for unit in s.encode_utf16() {
            self.write_char(unit);
        }
        self
    }

    /// Append an `f64` in native byte order.
    pub fn write_f64(&mut self, value: f64) -> &mut Self {
        self.write_bytes(&value.to_ne_bytes())
    }

    /// Append an `f32` in native byte order.
    pub fn write_f32(&mut self, value: f32) -> &mut Self {
        self.write_bytes(&value.to_ne_bytes())
    }

    /// Append raw bytes as-is.
    pub fn write_bytes(&mut self, data: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(data);
        self
    }

    /// Append the 16-byte timestamp layout: a raw `i64` followed by eight
    /// skipped bytes.
    pub fn write_date_time_raw(&mut self, raw: i64) -> &mut Self {
        self.write_i64(raw).write_bytes(&[0; 8])
    }

    /// Append a timestamp that `consume_date_time` decodes back unchanged,
    /// after clamping to the representable domain and truncating to ticks.
    pub fn write_date_time(&mut self, timestamp: DateTime<Utc>) -> &mut Self {
        self.write_date_time_raw(temporal::to_ticks(timestamp))
    }

    /// Consume the builder and return the encoded input.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Encoded bytes so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of encoded bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
