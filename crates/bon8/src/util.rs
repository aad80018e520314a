//! Convenience BON8 helpers.

use crate::decoder::Bon8Decoder;
use crate::encoder::Bon8Encoder;
use crate::error::Bon8Error;
use crate::value::Bon8Value;

/// Encode a single value into a fresh byte span.
pub fn encode(value: &Bon8Value) -> Vec<u8> {
    let mut encoder = Bon8Encoder::new();
    encoder.encode(value)
}

/// Decode a single value from the start of `blob`.
pub fn decode(blob: &[u8]) -> Result<Bon8Value, Bon8Error> {
    let mut decoder = Bon8Decoder::new();
    decoder.decode(blob)
}

/// Decode a single value and report how many bytes it consumed, so callers
/// can walk a span holding several concatenated top-level values.
pub fn decode_with_consumed(blob: &[u8]) -> Result<(Bon8Value, usize), Bon8Error> {
    let mut decoder = Bon8Decoder::new();
    let value = decoder.decode(blob)?;
    Ok((value, decoder.x))
}
