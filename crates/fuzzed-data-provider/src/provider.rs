//! Typed consumers over a fuzz input.
//!
//! Every `consume_*` call reads from the current offset, advances by the
//! call's declared width and returns a value immediately. Missing bytes read
//! as zero, so each call returns a value of the right shape whether or not
//! the input covered it; [`FuzzedDataProvider::is_exhausted`] reports whether
//! any call so far ran short.
//!
//! # Widths
//!
//! | Call                          | Advance                             |
//! |-------------------------------|-------------------------------------|
//! | `consume_byte`, `consume_bool`| 1                                   |
//! | `consume_char`                | 2                                   |
//! | `consume_int::<T>`            | `size_of::<T>()`                    |
//! | `consume_enum`, `pick`        | 4                                   |
//! | `consume_f32`                 | 4                                   |
//! | `consume_double`              | 8                                   |
//! | `consume_date_time`           | 16 (8 decoded, 8 skipped)           |
//! | `consume_bytes(n)`            | `n`                                 |
//! | `consume_string(n, _)`        | `2 * n`                             |
//! | `consume_remaining_*`         | remaining (strings round up to even)|

use chrono::{DateTime, Utc};

use crate::config::{ExhaustionPolicy, ProviderConfig};
use crate::cursor::{Cursor, DataState};
use crate::error::{ProviderError, ProviderResult};
use crate::hook::ExhaustionHook;
use crate::scalar::{self, FuzzInteger};
use crate::temporal;
use crate::text::{self, CharBag};

/// An enumeration whose legal values the provider can choose from.
///
/// `VALUES` must list the variants in declaration order; the decoded index
/// selects into it.
///
/// ```
/// use fuzzed_data_provider::{FuzzEnum, FuzzedDataProvider};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Op {
///     Read,
///     Write,
///     Seek,
/// }
///
/// impl FuzzEnum for Op {
///     const VALUES: &'static [Self] = &[Op::Read, Op::Write, Op::Seek];
/// }
///
/// let mut fdp = FuzzedDataProvider::new(vec![0, 0, 0, 0]);
/// assert_eq!(fdp.consume_enum_of::<Op>().ok(), Some(Op::Read));
/// ```
pub trait FuzzEnum: Sized + Clone + 'static {
    /// Legal values in declaration order.
    const VALUES: &'static [Self];
}

/// Splits a fuzzer-supplied buffer into typed values, reproducibly.
#[derive(Debug)]
pub struct FuzzedDataProvider {
    cursor: Cursor,
    max_request_len: Option<usize>,
}

macro_rules! named_consumers {
    ($($t:ty => $plain:ident, $ranged:ident;)*) => {
        $(
            #[doc = concat!("Consume a full-range `", stringify!($t), "`.")]
            pub fn $plain(&mut self) -> $t {
                self.consume_int::<$t>()
            }

            #[doc = concat!("Consume a `", stringify!($t), "` remapped into `[min, max]`.")]
            pub fn $ranged(&mut self, min: $t, max: $t) -> $t {
                self.consume_int_in_range::<$t>(min, max)
            }
        )*
    };
}

impl FuzzedDataProvider {
    /// Create a provider with the default configuration.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            cursor: Cursor::new(data, ExhaustionPolicy::Continue),
            max_request_len: None,
        }
    }

    /// Create a provider over a copy of `data`.
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }

    /// Create a provider with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn with_config(data: impl Into<Vec<u8>>, config: &ProviderConfig) -> ProviderResult<Self> {
        config.validate()?;
        Ok(Self {
            cursor: Cursor::new(data, config.exhaustion_policy),
            max_request_len: config.max_request_len,
        })
    }

    /// Install the hook run on first exhaustion under
    /// [`ExhaustionPolicy::Stop`].
    ///
    /// If the input is already exhausted (always the case for an empty input)
    /// the hook runs during this call. At most one hook ever runs.
    #[must_use]
    pub fn on_exhaustion(mut self, hook: ExhaustionHook) -> Self {
        self.cursor.set_hook(hook);
        self
    }

    // ---------------------------------------------------------------------
    // State
    // ---------------------------------------------------------------------

    /// Whether any read so far needed bytes past the end of the input.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.state().is_exhausted()
    }

    /// Whether the harness should end this iteration: the input is exhausted
    /// and the policy is [`ExhaustionPolicy::Stop`].
    #[must_use]
    pub fn should_stop(&self) -> bool {
        self.cursor.policy() == ExhaustionPolicy::Stop && self.is_exhausted()
    }

    /// Current exhaustion state.
    #[must_use]
    pub fn state(&self) -> DataState {
        self.cursor.state()
    }

    /// Bytes consumed so far, including zero-padded ones.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Total input length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Whether the input is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Input bytes not yet consumed.
    #[must_use]
    pub fn remaining_bytes(&self) -> usize {
        self.cursor.remaining()
    }

    /// The input buffer.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.cursor.data()
    }

    // ---------------------------------------------------------------------
    // Integers
    // ---------------------------------------------------------------------

    /// Consume a full-range integer of type `T`.
    pub fn consume_int<T: FuzzInteger>(&mut self) -> T {
        let mut bytes = T::Bytes::default();
        self.cursor.read_padded(bytes.as_mut());
        self.cursor.consume_width(T::WIDTH);
        T::from_foreign_bytes(bytes)
    }

    /// Consume an integer of type `T` remapped into `[min, max]`.
    ///
    /// The full natural range returns the raw value. `min > max` is a caller
    /// error: the result is unspecified, but the call never panics.
    pub fn consume_int_in_range<T: FuzzInteger>(&mut self, min: T, max: T) -> T {
        let raw = self.consume_int::<T>();
        scalar::remap(raw, min, max)
    }

    named_consumers! {
        i8 => consume_i8, consume_i8_in_range;
        i16 => consume_i16, consume_i16_in_range;
        u16 => consume_u16, consume_u16_in_range;
        i32 => consume_i32, consume_i32_in_range;
        u32 => consume_u32, consume_u32_in_range;
        i64 => consume_i64, consume_i64_in_range;
        u64 => consume_u64, consume_u64_in_range;
    }

    /// Consume one byte.
    pub fn consume_byte(&mut self) -> u8 {
        self.consume_int::<u8>()
    }

    /// Consume one byte remapped into `[min, max]`.
    pub fn consume_byte_in_range(&mut self, min: u8, max: u8) -> u8 {
        self.consume_int_in_range::<u8>(min, max)
    }

    /// Consume one byte and return its low bit.
    pub fn consume_bool(&mut self) -> bool {
        self.consume_byte() & 1 == 1
    }

    // ---------------------------------------------------------------------
    // Characters and strings
    // ---------------------------------------------------------------------

    /// Consume one UTF-16 code unit.
    pub fn consume_char(&mut self) -> u16 {
        self.consume_int::<u16>()
    }

    /// Consume one code unit and map it through `bag`.
    ///
    /// With an empty bag the unit itself is returned as a `char`, surrogates
    /// becoming U+FFFD.
    pub fn consume_char_from(&mut self, bag: &CharBag) -> char {
        let unit = self.consume_char();
        bag.select(unit)
            .unwrap_or_else(|| text::unit_to_char(unit))
    }

    /// Consume `length` code units as a string, optionally remapped through
    /// `bag`.
    ///
    /// # Panics
    ///
    /// Panics with a capacity overflow if `2 * length` bytes cannot be
    /// allocated. Bound lengths taken from fuzz data with
    /// [`ProviderConfig::max_request_len`].
    pub fn consume_string(&mut self, length: usize, bag: Option<&CharBag>) -> String {
        let units = self.consume_code_units(length);
        text::units_to_string(&units, bag)
    }

    /// Consume the rest of the input as a string, optionally remapped
    /// through `bag`. An odd trailing byte is padded with a zero byte.
    pub fn consume_remaining_string(&mut self, bag: Option<&CharBag>) -> String {
        let remaining = self.cursor.remaining();
        let byte_count = remaining.saturating_add(remaining % 2);
        let units = self.take_code_units(byte_count);
        text::units_to_string(&units, bag)
    }

    /// Consume `length` raw UTF-16 code units.
    ///
    /// # Panics
    ///
    /// Panics with a capacity overflow if `2 * length` bytes cannot be
    /// allocated. Bound lengths taken from fuzz data with
    /// [`ProviderConfig::max_request_len`].
    pub fn consume_code_units(&mut self, length: usize) -> Vec<u16> {
        self.take_code_units(length.saturating_mul(2))
    }

    fn take_code_units(&mut self, byte_count: usize) -> Vec<u16> {
        let byte_count = match self.max_request_len {
            Some(cap) => byte_count.min(cap & !1),
            None => byte_count,
        };
        let bytes = self.take_bytes(byte_count);
        text::code_units(&bytes)
    }

    // ---------------------------------------------------------------------
    // Byte slices
    // ---------------------------------------------------------------------

    /// Consume `length` bytes, zero-filled past the end of the input.
    ///
    /// # Panics
    ///
    /// Panics with a capacity overflow if `length` bytes cannot be
    /// allocated. Bound lengths taken from fuzz data with
    /// [`ProviderConfig::max_request_len`].
    pub fn consume_bytes(&mut self, length: usize) -> Vec<u8> {
        let length = self.clamp_request(length);
        self.take_bytes(length)
    }

    /// Consume `length` bytes, each remapped into `[min, max]`.
    ///
    /// Bytes already inside the range are kept; others become
    /// `b mod (max - min + 1) + min`.
    ///
    /// # Panics
    ///
    /// Panics with a capacity overflow if `length` bytes cannot be
    /// allocated. Bound lengths taken from fuzz data with
    /// [`ProviderConfig::max_request_len`].
    pub fn consume_bytes_in_range(&mut self, length: usize, min: u8, max: u8) -> Vec<u8> {
        let mut bytes = self.consume_bytes(length);
        remap_bytes(&mut bytes, min, max);
        bytes
    }

    /// Consume every byte left in the input.
    pub fn consume_remaining_bytes(&mut self) -> Vec<u8> {
        let remaining = self.cursor.remaining();
        self.consume_bytes(remaining)
    }

    /// Consume every byte left in the input, each remapped into `[min, max]`
    /// as in [`consume_bytes_in_range`](Self::consume_bytes_in_range).
    pub fn consume_remaining_bytes_in_range(&mut self, min: u8, max: u8) -> Vec<u8> {
        let mut bytes = self.consume_remaining_bytes();
        remap_bytes(&mut bytes, min, max);
        bytes
    }

    fn clamp_request(&self, length: usize) -> usize {
        self.max_request_len.map_or(length, |cap| length.min(cap))
    }

    fn take_bytes(&mut self, length: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; length];
        self.cursor.read_padded(&mut bytes);
        self.cursor.consume_width(length);
        bytes
    }

    // ---------------------------------------------------------------------
    // Choices
    // ---------------------------------------------------------------------

    /// Choose an element of `values` using one full-range `i32`.
    ///
    /// The index is `|raw mod values.len()|`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptyChoices`] if `values` is empty. The four
    /// bytes are consumed either way.
    pub fn pick<'a, T>(&mut self, values: &'a [T]) -> ProviderResult<&'a T> {
        let raw = self.consume_i32();
        let index = usize::try_from(raw.unsigned_abs())
            .ok()
            .and_then(|magnitude| magnitude.checked_rem(values.len()))
            .ok_or(ProviderError::EmptyChoices)?;
        values.get(index).ok_or(ProviderError::EmptyChoices)
    }

    /// Choose one of `values`, given in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptyChoices`] if `values` is empty.
    pub fn consume_enum<T: Clone>(&mut self, values: &[T]) -> ProviderResult<T> {
        self.pick(values).cloned()
    }

    /// Choose a value of a [`FuzzEnum`].
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptyChoices`] if `T::VALUES` is empty.
    pub fn consume_enum_of<T: FuzzEnum>(&mut self) -> ProviderResult<T> {
        self.consume_enum(T::VALUES)
    }

    // ---------------------------------------------------------------------
    // Floating point and timestamps
    // ---------------------------------------------------------------------

    /// Consume an `f64` decoded in the host's native byte order.
    pub fn consume_double(&mut self) -> f64 {
        let mut bytes = [0u8; 8];
        self.cursor.read_padded(&mut bytes);
        self.cursor.consume_width(bytes.len());
        f64::from_ne_bytes(bytes)
    }

    /// Consume an `f32` decoded in the host's native byte order.
    pub fn consume_f32(&mut self) -> f32 {
        let mut bytes = [0u8; 4];
        self.cursor.read_padded(&mut bytes);
        self.cursor.consume_width(bytes.len());
        f32::from_ne_bytes(bytes)
    }

    /// Consume a timestamp anywhere in the representable domain.
    ///
    /// Advances 16 bytes: 8 decoded plus 8 skipped.
    pub fn consume_date_time(&mut self) -> DateTime<Utc> {
        self.consume_date_time_in_range(temporal::min_timestamp(), temporal::max_timestamp())
    }

    /// Consume a timestamp in `[min, max]`, both clamped to the representable
    /// domain.
    ///
    /// Advances 16 bytes: the second 8 are skipped without an exhaustion
    /// check, matching existing corpora.
    pub fn consume_date_time_in_range(
        &mut self,
        min: DateTime<Utc>,
        max: DateTime<Utc>,
    ) -> DateTime<Utc> {
        let raw = self.consume_i64();
        self.cursor.advance(<i64 as FuzzInteger>::WIDTH);

        let min_ticks = i128::from(temporal::to_ticks(min));
        let max_ticks = i128::from(temporal::to_ticks(max));
        let span = scalar::remap_span(min_ticks, max_ticks);
        let ticks = scalar::remap_wide(i128::from(raw), min_ticks, span);
        temporal::from_ticks(i64::try_from(ticks).unwrap_or(temporal::MAX_TICKS))
    }
}

fn remap_bytes(bytes: &mut [u8], min: u8, max: u8) {
    for byte in bytes {
        if !(min..=max).contains(&*byte) {
            *byte = scalar::remap(*byte, min, max);
        }
    }
}
