//! Fixed-width integer decoding and range remapping.
//!
//! # Byte order
//!
//! Integers (and UTF-16 code units) are decoded with the byte order
//! *opposite* to the host's native one: big-endian on little-endian hosts,
//! little-endian on big-endian hosts. Floating-point values use the native
//! order instead. Both rules are load-bearing for replaying existing corpora,
//! so a given input decodes differently on hosts of different endianness.

/// Integer types the provider can decode.
///
/// Sealed: implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64` and
/// `u64`.
pub trait FuzzInteger: Copy + PartialEq + sealed::Sealed {
    /// Raw byte representation.
    type Bytes: Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Width in bytes.
    const WIDTH: usize;
    /// Smallest value of the type.
    const MIN: Self;
    /// Largest value of the type.
    const MAX: Self;

    /// Decode with the byte order opposite to the host's.
    fn from_foreign_bytes(bytes: Self::Bytes) -> Self;

    /// Encode with the byte order opposite to the host's.
    fn to_foreign_bytes(self) -> Self::Bytes;

    /// Lossless widening.
    fn to_i128(self) -> i128;

    /// Narrowing; `None` if `value` does not fit.
    fn from_i128(value: i128) -> Option<Self>;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_fuzz_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl FuzzInteger for $t {
                type Bytes = [u8; core::mem::size_of::<$t>()];

                const WIDTH: usize = core::mem::size_of::<$t>();
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn from_foreign_bytes(bytes: Self::Bytes) -> Self {
                    if cfg!(target_endian = "little") {
                        <$t>::from_be_bytes(bytes)
                    } else {
                        <$t>::from_le_bytes(bytes)
                    }
                }

                #[inline]
                fn to_foreign_bytes(self) -> Self::Bytes {
                    if cfg!(target_endian = "little") {
                        self.to_be_bytes()
                    } else {
                        self.to_le_bytes()
                    }
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    i128::from(self)
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_fuzz_integer!(i8, u8, i16, u16, i32, u32, i64, u64);

/// Map `raw` into `[min, max]`.
///
/// Returns `raw` untouched when the range is the type's full domain.
/// Otherwise computes `|raw mod (max - min + 1)| + min`, which lies in
/// `[min, max]` whenever `min <= max`. An inverted range never panics but
/// yields an unspecified value.
#[must_use]
pub fn remap<T: FuzzInteger>(raw: T, min: T, max: T) -> T {
    if min == T::MIN && max == T::MAX {
        return raw;
    }
    let span = remap_span(min.to_i128(), max.to_i128());
    T::from_i128(remap_wide(raw.to_i128(), min.to_i128(), span)).unwrap_or(raw)
}

/// `max - min + 1`, exact for any pair of 64-bit values.
#[inline]
pub(crate) fn remap_span(min: i128, max: i128) -> i128 {
    let span = max.saturating_sub(min).saturating_add(1);
    if span <= 0 {
        tracing::debug!(min, max, "Inverted range passed to remap");
    }
    span
}

/// `|raw mod span| + min` on widened values.
#[inline]
pub(crate) fn remap_wide(raw: i128, min: i128, span: i128) -> i128 {
    raw.checked_rem(span)
        .map_or(min, |rem| rem.saturating_abs().saturating_add(min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(<i8 as FuzzInteger>::WIDTH, 1);
        assert_eq!(<u16 as FuzzInteger>::WIDTH, 2);
        assert_eq!(<i32 as FuzzInteger>::WIDTH, 4);
        assert_eq!(<u64 as FuzzInteger>::WIDTH, 8);
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_foreign_order_is_big_endian_on_little_endian_hosts() {
        assert_eq!(i32::from_foreign_bytes([0xDE, 0xAD, 0xBE, 0xEF]), -559_038_737);
        assert_eq!(u32::from_foreign_bytes([0xDE, 0xAD, 0xBE, 0xEF]), 3_735_928_559);
        assert_eq!(u16::from_foreign_bytes([0x12, 0x34]), 0x1234);
    }

    #[test]
    fn test_foreign_bytes_invert() {
        assert_eq!(i64::from_foreign_bytes((-42_i64).to_foreign_bytes()), -42);
        assert_eq!(u16::from_foreign_bytes(0xBEEF_u16.to_foreign_bytes()), 0xBEEF);
    }

    #[test]
    fn test_full_range_is_identity() {
        assert_eq!(remap(-7_i32, i32::MIN, i32::MAX), -7);
        assert_eq!(remap(u64::MAX, u64::MIN, u64::MAX), u64::MAX);
        assert_eq!(remap(i8::MIN, i8::MIN, i8::MAX), i8::MIN);
    }

    #[test]
    fn test_remap_unsigned() {
        assert_eq!(remap(3_u32, 888, 900), 891);
        assert_eq!(remap(13_u32, 888, 900), 888);
        assert_eq!(remap(255_u8, 2, 4), 2);
        assert_eq!(remap(4_u8, 2, 4), 3);
    }

    #[test]
    fn test_remap_signed_uses_absolute_remainder() {
        // -7 mod 5 = -2 → |−2| + 10
        assert_eq!(remap(-7_i32, 10, 14), 12);
        assert_eq!(remap(7_i32, 10, 14), 12);
        // 9223372036854775808 mod 3 = 2
        assert_eq!(remap(i64::MIN, -1, 1), 1);
    }

    #[test]
    fn test_remap_wide_ranges_do_not_overflow() {
        assert_eq!(remap(-1_i32, i32::MIN, 0), i32::MIN + 1);
        assert_eq!(remap(5_i64, i64::MIN, i64::MAX - 1), i64::MIN + 5);
        assert_eq!(remap(u64::MAX, 1, u64::MAX), 1);
    }

    #[test]
    fn test_single_value_range() {
        assert_eq!(remap(12_345_i32, 7, 7), 7);
        assert_eq!(remap(0_u8, 200, 200), 200);
    }

    #[test]
    fn test_inverted_range_does_not_panic() {
        std::hint::black_box(remap(100_i32, 10, 0));
        std::hint::black_box(remap(5_u8, 4, 3));
        std::hint::black_box(remap(i64::MIN, i64::MAX, i64::MIN));
    }
}
