//! `Bon8Decoder` — deserializes BON8 byte spans into value trees.

use crate::constants::*;
use crate::error::Bon8Error;
use crate::value::Bon8Value;

/// BON8 decoder.
///
/// A string has no length prefix, so the decoder accumulates bytes until it
/// meets either the end-of-text code, a byte that starts some other value,
/// or the end of the input. A lead byte in `0xc2..=0xf7` is classified by
/// the byte after it: a continuation byte continues the string, anything
/// else makes the lead the start of a multi-byte integer.
pub struct Bon8Decoder {
    pub data: Vec<u8>,
    pub x: usize,
    max_depth: usize,
}

impl Default for Bon8Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Bon8Decoder {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            x: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Overrides the container nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Decodes one value from the start of `input`.
    pub fn decode(&mut self, input: &[u8]) -> Result<Bon8Value, Bon8Error> {
        self.data = input.to_vec();
        self.x = 0;
        self.read_any()
    }

    /// Decodes one value at the current cursor position. Call repeatedly to
    /// recover a sequence of top-level values from one span.
    pub fn read_any(&mut self) -> Result<Bon8Value, Bon8Error> {
        self.read_value(0)
    }

    fn read_value(&mut self, depth: usize) -> Result<Bon8Value, Bon8Error> {
        let mut str_buf: Vec<u8> = Vec::new();
        loop {
            if self.x >= self.data.len() {
                // A trailing string needs no terminator, so reaching the end
                // with accumulated bytes is a complete value.
                if !str_buf.is_empty() {
                    return finish_str(str_buf);
                }
                return Err(Bon8Error::UnexpectedEof);
            }
            let byte = self.data[self.x];
            match byte {
                CODE_EOT => {
                    self.x += 1;
                    return finish_str(str_buf);
                }
                0x00..=0x7f => {
                    str_buf.push(byte);
                    self.x += 1;
                }
                0xc2..=0xf7 => {
                    if self.x + 1 >= self.data.len() {
                        return Err(Bon8Error::IncompleteMultibyte);
                    }
                    let next = self.data[self.x + 1];
                    if is_continuation(next) {
                        let len = multibyte_len(byte);
                        if self.x + len > self.data.len() {
                            return Err(Bon8Error::IncompleteMultibyte);
                        }
                        let seq = &self.data[self.x + 1..self.x + len];
                        if !seq.iter().all(|b| is_continuation(*b)) {
                            return Err(Bon8Error::InvalidUtf8);
                        }
                        str_buf.extend_from_slice(&self.data[self.x..self.x + len]);
                        self.x += len;
                    } else {
                        if !str_buf.is_empty() {
                            return finish_str(str_buf);
                        }
                        return Ok(Bon8Value::Int(self.read_multibyte_int(byte, next)?));
                    }
                }
                // Any other code terminates an open string and is left for
                // the next read.
                _ if !str_buf.is_empty() => return finish_str(str_buf),
                0x80..=0xaf => {
                    self.x += 1;
                    return Ok(Bon8Value::Int((byte - 0x80) as i64));
                }
                0xb0..=0xb9 => {
                    self.x += 1;
                    return Ok(Bon8Value::Int(-((byte - 0xb0) as i64) - 1));
                }
                CODE_FLOAT_MIN_ONE => {
                    self.x += 1;
                    return Ok(Bon8Value::Float(-1.0));
                }
                CODE_FLOAT_ZERO => {
                    self.x += 1;
                    return Ok(Bon8Value::Float(0.0));
                }
                CODE_FLOAT_ONE => {
                    self.x += 1;
                    return Ok(Bon8Value::Float(1.0));
                }
                CODE_ARRAY_EMPTY => {
                    self.x += 1;
                    return Ok(Bon8Value::Array(Vec::new()));
                }
                CODE_OBJECT_EMPTY => {
                    self.x += 1;
                    return Ok(Bon8Value::Object(Vec::new()));
                }
                CODE_NULL => {
                    self.x += 1;
                    return Ok(Bon8Value::Null);
                }
                CODE_FALSE => {
                    self.x += 1;
                    return Ok(Bon8Value::Bool(false));
                }
                CODE_TRUE => {
                    self.x += 1;
                    return Ok(Bon8Value::Bool(true));
                }
                CODE_INT32 => {
                    self.x += 1;
                    let v = self.read_u32().ok_or(Bon8Error::IncompleteInt)?;
                    return Ok(Bon8Value::Int(v as i32 as i64));
                }
                CODE_INT64 => {
                    self.x += 1;
                    let v = self.read_u64().ok_or(Bon8Error::IncompleteInt)?;
                    return Ok(Bon8Value::Int(v as i64));
                }
                CODE_FLOAT32 => {
                    self.x += 1;
                    let v = self.read_u32().ok_or(Bon8Error::IncompleteFloat)?;
                    return Ok(Bon8Value::Float(f32::from_bits(v) as f64));
                }
                CODE_FLOAT64 => {
                    self.x += 1;
                    let v = self.read_u64().ok_or(Bon8Error::IncompleteFloat)?;
                    return Ok(Bon8Value::Float(f64::from_bits(v)));
                }
                CODE_ARRAY => {
                    self.x += 1;
                    return self.read_arr(depth + 1);
                }
                CODE_OBJECT => {
                    self.x += 1;
                    return self.read_obj(depth + 1);
                }
                CODE_EOC => return Err(Bon8Error::UnexpectedEndOfContainer),
            }
        }
    }

    /// Decodes a multi-byte integer whose lead sits at the cursor. `next`
    /// decides the sign: trailing bytes of a negative integer start at
    /// `0xc0`, trailing bytes of a positive integer stay below `0x80`.
    fn read_multibyte_int(&mut self, lead: u8, next: u8) -> Result<i64, Bon8Error> {
        let len = multibyte_len(lead);
        if self.x + len > self.data.len() {
            return Err(Bon8Error::IncompleteMultibyte);
        }
        let b = &self.data[self.x..self.x + len];
        self.x += len;
        if next >= 0xc0 {
            let u: u32 = match len {
                2 => (((lead - 0xc2) as u32) << 6) | (b[1] & 0x3f) as u32,
                3 => {
                    (((lead & 0x0f) as u32) << 14)
                        | (((b[1] & 0x3f) as u32) << 8)
                        | b[2] as u32
                }
                _ => {
                    (((lead & 0x07) as u32) << 22)
                        | (((b[1] & 0x3f) as u32) << 16)
                        | ((b[2] as u32) << 8)
                        | b[3] as u32
                }
            };
            Ok(-(u as i64) - 1)
        } else {
            let v: u32 = match len {
                2 => (((lead - 0xc2) as u32) << 7) | b[1] as u32,
                3 => (((lead & 0x0f) as u32) << 15) | ((b[1] as u32) << 8) | b[2] as u32,
                _ => {
                    (((lead & 0x07) as u32) << 23)
                        | ((b[1] as u32) << 16)
                        | ((b[2] as u32) << 8)
                        | b[3] as u32
                }
            };
            Ok(v as i64)
        }
    }

    fn read_arr(&mut self, depth: usize) -> Result<Bon8Value, Bon8Error> {
        if depth > self.max_depth {
            return Err(Bon8Error::NestingTooDeep);
        }
        let mut values = Vec::new();
        loop {
            if self.x >= self.data.len() {
                return Err(Bon8Error::IncompleteContainer);
            }
            if self.data[self.x] == CODE_EOC {
                self.x += 1;
                return Ok(Bon8Value::Array(values));
            }
            values.push(self.read_value(depth)?);
        }
    }

    fn read_obj(&mut self, depth: usize) -> Result<Bon8Value, Bon8Error> {
        if depth > self.max_depth {
            return Err(Bon8Error::NestingTooDeep);
        }
        let mut pairs: Vec<(String, Bon8Value)> = Vec::new();
        loop {
            if self.x >= self.data.len() {
                return Err(Bon8Error::IncompleteContainer);
            }
            if self.data[self.x] == CODE_EOC {
                self.x += 1;
                return Ok(Bon8Value::Object(pairs));
            }
            let key = match self.read_value(depth)? {
                Bon8Value::Str(s) => s,
                _ => return Err(Bon8Error::NonStringKey),
            };
            if self.x >= self.data.len() {
                return Err(Bon8Error::IncompleteContainer);
            }
            let value = self.read_value(depth)?;
            // First occurrence of a key wins; the duplicate's value still
            // had to be consumed.
            if pairs.iter().any(|(k, _)| k == &key) {
                continue;
            }
            pairs.push((key, value));
        }
    }

    #[inline]
    fn read_u32(&mut self) -> Option<u32> {
        if self.x + 4 > self.data.len() {
            return None;
        }
        let v = u32::from_be_bytes([
            self.data[self.x],
            self.data[self.x + 1],
            self.data[self.x + 2],
            self.data[self.x + 3],
        ]);
        self.x += 4;
        Some(v)
    }

    #[inline]
    fn read_u64(&mut self) -> Option<u64> {
        if self.x + 8 > self.data.len() {
            return None;
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.data[self.x..self.x + 8]);
        self.x += 8;
        Some(u64::from_be_bytes(bytes))
    }
}

fn finish_str(buf: Vec<u8>) -> Result<Bon8Value, Bon8Error> {
    match String::from_utf8(buf) {
        Ok(s) => Ok(Bon8Value::Str(s)),
        Err(_) => Err(Bon8Error::InvalidUtf8),
    }
}
