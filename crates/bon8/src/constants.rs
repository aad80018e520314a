//! BON8 byte codes and byte classification.
//!
//! The byte space above ASCII is partitioned so that encoded integers can
//! share a stream with raw UTF-8 string bytes. Codes `0xc2..=0xf7` overlap
//! the UTF-8 lead-byte range on purpose: the byte *after* a lead decides
//! whether the lead starts a multi-byte character or a multi-byte integer.

/// Float −1.0 sentinel.
pub const CODE_FLOAT_MIN_ONE: u8 = 0xba;
/// Float 0.0 sentinel (also produced for −0.0).
pub const CODE_FLOAT_ZERO: u8 = 0xbb;
/// Float 1.0 sentinel.
pub const CODE_FLOAT_ONE: u8 = 0xbc;
/// Empty array sentinel.
pub const CODE_ARRAY_EMPTY: u8 = 0xbd;
/// Empty object sentinel.
pub const CODE_OBJECT_EMPTY: u8 = 0xbe;
/// Null.
pub const CODE_NULL: u8 = 0xbf;
/// Boolean false.
pub const CODE_FALSE: u8 = 0xc0;
/// Boolean true.
pub const CODE_TRUE: u8 = 0xc1;
/// Escape: signed 32-bit big-endian integer payload follows.
pub const CODE_INT32: u8 = 0xf8;
/// Escape: signed 64-bit big-endian integer payload follows.
pub const CODE_INT64: u8 = 0xf9;
/// Escape: IEEE754 binary32 big-endian payload follows.
pub const CODE_FLOAT32: u8 = 0xfa;
/// Escape: IEEE754 binary64 big-endian payload follows.
pub const CODE_FLOAT64: u8 = 0xfb;
/// Non-empty array begin.
pub const CODE_ARRAY: u8 = 0xfc;
/// Non-empty object begin.
pub const CODE_OBJECT: u8 = 0xfd;
/// End of container, shared by arrays and objects.
pub const CODE_EOC: u8 = 0xfe;
/// End of text; terminates a string explicitly.
pub const CODE_EOT: u8 = 0xff;

/// Largest integer of the 1-byte positive tier (`0x80 + v`).
pub const INT_POS1_MAX: i64 = 47;
/// Largest integer of the 2-byte positive tier.
pub const INT_POS2_MAX: i64 = 3839;
/// Largest integer of the 3-byte positive tier.
pub const INT_POS3_MAX: i64 = 524_287;
/// Largest integer of the 4-byte positive tier.
pub const INT_POS4_MAX: i64 = 67_108_863;

/// Smallest integer of the 1-byte negative tier (`0xb0 + (−v − 1)`).
pub const INT_NEG1_MIN: i64 = -10;
/// Smallest integer of the 2-byte negative tier.
pub const INT_NEG2_MIN: i64 = -1920;
/// Smallest integer of the 3-byte negative tier.
pub const INT_NEG3_MIN: i64 = -262_144;
/// Smallest integer of the 4-byte negative tier.
pub const INT_NEG4_MIN: i64 = -33_554_432;

/// Default container nesting limit enforced by the decoder.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Whether `byte` is a UTF-8 continuation byte.
#[inline]
pub fn is_continuation(byte: u8) -> bool {
    (0x80..=0xbf).contains(&byte)
}

/// Whether `byte` can lead a multi-byte UTF-8 character or integer.
#[inline]
pub fn is_lead(byte: u8) -> bool {
    (0xc2..=0xf7).contains(&byte)
}

/// Sequence length implied by a lead byte: 2 for `0xc2..=0xdf`, 3 for
/// `0xe0..=0xef`, 4 for `0xf0..=0xf7`.
#[inline]
pub fn multibyte_len(lead: u8) -> usize {
    debug_assert!(is_lead(lead));
    if lead <= 0xdf {
        2
    } else if lead <= 0xef {
        3
    } else {
        4
    }
}

/// Whether `value` survives a round trip through IEEE754 binary32.
#[inline]
pub fn is_f32_roundtrip(value: f64) -> bool {
    (value as f32) as f64 == value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_classification() {
        assert!(!is_lead(0x7f));
        assert!(!is_lead(0xc1));
        assert!(is_lead(0xc2));
        assert!(is_lead(0xf7));
        assert!(!is_lead(0xf8));
    }

    #[test]
    fn multibyte_lengths() {
        assert_eq!(multibyte_len(0xc2), 2);
        assert_eq!(multibyte_len(0xdf), 2);
        assert_eq!(multibyte_len(0xe0), 3);
        assert_eq!(multibyte_len(0xef), 3);
        assert_eq!(multibyte_len(0xf0), 4);
        assert_eq!(multibyte_len(0xf7), 4);
    }

    #[test]
    fn f32_roundtrip_probe() {
        assert!(is_f32_roundtrip(1.5));
        assert!(is_f32_roundtrip(f64::INFINITY));
        assert!(!is_f32_roundtrip(0.1));
        assert!(!is_f32_roundtrip(f64::NAN));
    }
}
