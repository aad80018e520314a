//! `Bon8Encoder` — serializes value trees into BON8 byte spans.

use crate::constants::*;
use crate::value::Bon8Value;
use crate::writer::Writer;

/// BON8 encoder. Encoding is infallible; any value tree has an encoding.
///
/// The encoder tracks whether the previous value left a string open. BON8
/// strings carry no length prefix and no mandatory terminator, so a string
/// followed by another string needs an explicit end-of-text byte between
/// them; any other following value terminates the string by its own code.
pub struct Bon8Encoder {
    pub writer: Writer,
    open_string: bool,
}

impl Default for Bon8Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Bon8Encoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
            open_string: false,
        }
    }

    pub fn with_writer(writer: Writer) -> Self {
        Self {
            writer,
            open_string: false,
        }
    }

    /// Encodes one value into a fresh byte span.
    pub fn encode(&mut self, value: &Bon8Value) -> Vec<u8> {
        self.writer.reset();
        self.open_string = false;
        self.write_any(value);
        self.writer.flush()
    }

    /// Encodes a `serde_json::Value` into a fresh byte span.
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Vec<u8> {
        self.writer.reset();
        self.open_string = false;
        self.write_json(value);
        self.writer.flush()
    }

    pub fn write_any(&mut self, value: &Bon8Value) {
        match value {
            Bon8Value::Null => self.write_null(),
            Bon8Value::Bool(b) => self.write_boolean(*b),
            Bon8Value::Int(i) => self.write_integer(*i),
            Bon8Value::Float(f) => self.write_float(*f),
            Bon8Value::Str(s) => self.write_str(s),
            Bon8Value::Array(arr) => self.write_arr(arr),
            Bon8Value::Object(pairs) => self.write_obj(pairs),
        }
    }

    pub fn write_json(&mut self, value: &serde_json::Value) {
        use serde_json::Value::*;
        match value {
            Null => self.write_null(),
            Bool(b) => self.write_boolean(*b),
            Number(n) => {
                if let Some(i) = n.as_i64() {
                    self.write_integer(i);
                } else {
                    self.write_float(n.as_f64().unwrap_or(0.0));
                }
            }
            String(s) => self.write_str(s),
            Array(arr) => {
                self.open_string = false;
                if arr.is_empty() {
                    self.writer.u8(CODE_ARRAY_EMPTY);
                    return;
                }
                self.writer.u8(CODE_ARRAY);
                for item in arr {
                    self.write_json(item);
                }
                self.writer.u8(CODE_EOC);
            }
            Object(obj) => {
                self.open_string = false;
                if obj.is_empty() {
                    self.writer.u8(CODE_OBJECT_EMPTY);
                    return;
                }
                self.writer.u8(CODE_OBJECT);
                for (key, val) in obj {
                    self.write_str(key);
                    self.write_json(val);
                }
                self.writer.u8(CODE_EOC);
            }
        }
    }

    pub fn write_null(&mut self) {
        self.open_string = false;
        self.writer.u8(CODE_NULL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.open_string = false;
        self.writer.u8(if b { CODE_TRUE } else { CODE_FALSE });
    }

    /// Writes an integer in the shortest tier that holds it.
    pub fn write_integer(&mut self, int: i64) {
        self.open_string = false;
        let w = &mut self.writer;
        if int < i32::MIN as i64 {
            w.u8u64(CODE_INT64, int as u64);
        } else if int < INT_NEG4_MIN {
            w.u8u32(CODE_INT32, int as i32 as u32);
        } else if int < INT_NEG3_MIN {
            let u = (-int - 1) as u32;
            w.buf(&[
                0xf0 + ((u >> 22) & 0x07) as u8,
                0xc0 + ((u >> 16) & 0x3f) as u8,
                (u >> 8) as u8,
                u as u8,
            ]);
        } else if int < INT_NEG2_MIN {
            let u = (-int - 1) as u32;
            w.buf(&[
                0xe0 + ((u >> 14) & 0x0f) as u8,
                0xc0 + ((u >> 8) & 0x3f) as u8,
                u as u8,
            ]);
        } else if int < INT_NEG1_MIN {
            let u = (-int - 1) as u32;
            w.buf(&[0xc2 + ((u >> 6) & 0x1f) as u8, 0xc0 + (u & 0x3f) as u8]);
        } else if int < 0 {
            w.u8(0xb0 + (-int - 1) as u8);
        } else if int <= INT_POS1_MAX {
            w.u8(0x80 + int as u8);
        } else if int <= INT_POS2_MAX {
            let v = int as u32;
            w.buf(&[0xc2 + ((v >> 7) & 0x1f) as u8, (v & 0x7f) as u8]);
        } else if int <= INT_POS3_MAX {
            let v = int as u32;
            w.buf(&[
                0xe0 + ((v >> 15) & 0x0f) as u8,
                ((v >> 8) & 0x7f) as u8,
                v as u8,
            ]);
        } else if int <= INT_POS4_MAX {
            let v = int as u32;
            w.buf(&[
                0xf0 + ((v >> 23) & 0x07) as u8,
                ((v >> 16) & 0x7f) as u8,
                (v >> 8) as u8,
                v as u8,
            ]);
        } else if int <= i32::MAX as i64 {
            w.u8u32(CODE_INT32, int as u32);
        } else {
            w.u8u64(CODE_INT64, int as u64);
        }
    }

    /// Writes a float. The sentinel values −1.0, 0.0 and 1.0 take one byte;
    /// other values take the float32 escape when lossless, else float64.
    pub fn write_float(&mut self, float: f64) {
        self.open_string = false;
        if float == -1.0 {
            self.writer.u8(CODE_FLOAT_MIN_ONE);
        } else if float == 0.0 {
            // == also catches -0.0, which normalizes to the zero sentinel.
            self.writer.u8(CODE_FLOAT_ZERO);
        } else if float == 1.0 {
            self.writer.u8(CODE_FLOAT_ONE);
        } else if is_f32_roundtrip(float) {
            self.writer.u8f32(CODE_FLOAT32, float as f32);
        } else {
            // NaN compares unequal to everything, including its f32 round
            // trip, so it lands here and keeps its payload bits.
            self.writer.u8f64(CODE_FLOAT64, float);
        }
    }

    /// Writes a string as raw UTF-8, closing a previously open string first.
    /// The empty string is a bare end-of-text byte.
    pub fn write_str(&mut self, s: &str) {
        if self.open_string {
            self.writer.u8(CODE_EOT);
        }
        if s.is_empty() {
            self.writer.u8(CODE_EOT);
            self.open_string = false;
        } else {
            self.writer.utf8(s);
            self.open_string = true;
        }
    }

    pub fn write_arr(&mut self, arr: &[Bon8Value]) {
        self.open_string = false;
        if arr.is_empty() {
            self.writer.u8(CODE_ARRAY_EMPTY);
            return;
        }
        self.writer.u8(CODE_ARRAY);
        for item in arr {
            self.write_any(item);
        }
        self.writer.u8(CODE_EOC);
        self.open_string = false;
    }

    pub fn write_obj(&mut self, pairs: &[(String, Bon8Value)]) {
        self.open_string = false;
        if pairs.is_empty() {
            self.writer.u8(CODE_OBJECT_EMPTY);
            return;
        }
        self.writer.u8(CODE_OBJECT);
        for (key, val) in pairs {
            self.write_str(key);
            self.write_any(val);
        }
        self.writer.u8(CODE_EOC);
        self.open_string = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(value: &Bon8Value) -> Vec<u8> {
        Bon8Encoder::new().encode(value)
    }

    #[test]
    fn single_byte_codes() {
        assert_eq!(enc(&Bon8Value::Null), [0xbf]);
        assert_eq!(enc(&Bon8Value::Bool(false)), [0xc0]);
        assert_eq!(enc(&Bon8Value::Bool(true)), [0xc1]);
        assert_eq!(enc(&Bon8Value::Int(0)), [0x80]);
        assert_eq!(enc(&Bon8Value::Int(5)), [0x85]);
        assert_eq!(enc(&Bon8Value::Int(47)), [0xaf]);
        assert_eq!(enc(&Bon8Value::Int(-1)), [0xb0]);
        assert_eq!(enc(&Bon8Value::Int(-10)), [0xb9]);
    }

    #[test]
    fn integer_tier_edges_positive() {
        assert_eq!(enc(&Bon8Value::Int(48)), [0xc2, 0x30]);
        assert_eq!(enc(&Bon8Value::Int(3839)), [0xdf, 0x7f]);
        assert_eq!(enc(&Bon8Value::Int(3840)), [0xe0, 0x0f, 0x00]);
        assert_eq!(enc(&Bon8Value::Int(524_287)), [0xef, 0x7f, 0xff]);
        assert_eq!(enc(&Bon8Value::Int(524_288)), [0xf0, 0x08, 0x00, 0x00]);
        assert_eq!(enc(&Bon8Value::Int(67_108_863)), [0xf7, 0x7f, 0xff, 0xff]);
        assert_eq!(
            enc(&Bon8Value::Int(67_108_864)),
            [0xf8, 0x04, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            enc(&Bon8Value::Int(i32::MAX as i64)),
            [0xf8, 0x7f, 0xff, 0xff, 0xff]
        );
        assert_eq!(
            enc(&Bon8Value::Int(i32::MAX as i64 + 1)),
            [0xf9, 0x00, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn integer_tier_edges_negative() {
        assert_eq!(enc(&Bon8Value::Int(-11)), [0xc2, 0xca]);
        assert_eq!(enc(&Bon8Value::Int(-1920)), [0xdf, 0xff]);
        assert_eq!(enc(&Bon8Value::Int(-1921)), [0xe0, 0xc7, 0x80]);
        assert_eq!(enc(&Bon8Value::Int(-262_144)), [0xef, 0xff, 0xff]);
        assert_eq!(enc(&Bon8Value::Int(-262_145)), [0xf0, 0xc4, 0x00, 0x00]);
        assert_eq!(enc(&Bon8Value::Int(-33_554_432)), [0xf7, 0xff, 0xff, 0xff]);
        assert_eq!(
            enc(&Bon8Value::Int(-33_554_433)),
            [0xf8, 0xfe, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            enc(&Bon8Value::Int(i32::MIN as i64)),
            [0xf8, 0x80, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            enc(&Bon8Value::Int(i32::MIN as i64 - 1)),
            [0xf9, 0xff, 0xff, 0xff, 0xff, 0x7f, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn float_sentinels_and_escapes() {
        assert_eq!(enc(&Bon8Value::Float(-1.0)), [0xba]);
        assert_eq!(enc(&Bon8Value::Float(0.0)), [0xbb]);
        assert_eq!(enc(&Bon8Value::Float(-0.0)), [0xbb]);
        assert_eq!(enc(&Bon8Value::Float(1.0)), [0xbc]);
        assert_eq!(enc(&Bon8Value::Float(1.5)), [0xfa, 0x3f, 0xc0, 0x00, 0x00]);
        let bytes = enc(&Bon8Value::Float(0.1));
        assert_eq!(bytes[0], 0xfb);
        assert_eq!(bytes.len(), 9);
    }

    #[test]
    fn strings() {
        assert_eq!(enc(&Bon8Value::Str("".into())), [0xff]);
        assert_eq!(enc(&Bon8Value::Str("ab".into())), b"ab");
        assert_eq!(enc(&Bon8Value::Str("é".into())), [0xc3, 0xa9]);
    }

    #[test]
    fn consecutive_strings_get_separators() {
        let v = Bon8Value::Array(vec!["a".into(), "b".into()]);
        assert_eq!(enc(&v), [0xfc, 0x61, 0xff, 0x62, 0xfe]);
    }

    #[test]
    fn string_then_non_string_needs_no_separator() {
        let v = Bon8Value::Array(vec!["a".into(), Bon8Value::Int(5)]);
        assert_eq!(enc(&v), [0xfc, 0x61, 0x85, 0xfe]);
    }

    #[test]
    fn containers() {
        assert_eq!(enc(&Bon8Value::Array(vec![])), [0xbd]);
        assert_eq!(enc(&Bon8Value::Object(vec![])), [0xbe]);
        let v = Bon8Value::Object(vec![("a".into(), Bon8Value::Int(1))]);
        assert_eq!(enc(&v), [0xfd, 0x61, 0x81, 0xfe]);
    }

    #[test]
    fn object_with_string_value_separates_key_and_value() {
        let v = Bon8Value::Object(vec![("k".into(), "v".into())]);
        assert_eq!(enc(&v), [0xfd, 0x6b, 0xff, 0x76, 0xfe]);
    }

    #[test]
    fn encode_json_matches_encode() {
        let json = serde_json::json!({"a": [1, "x", null], "b": 2.5});
        let via_json = Bon8Encoder::new().encode_json(&json);
        let via_value = Bon8Encoder::new().encode(&Bon8Value::from(json));
        assert_eq!(via_json, via_value);
    }
}
