//! `Bon8JsonValueCodec` — combined encoder/decoder pair over `serde_json::Value`.

use serde_json::Value;

use crate::decoder::Bon8Decoder;
use crate::encoder::Bon8Encoder;
use crate::error::Bon8Error;

#[derive(Default)]
pub struct Bon8JsonValueCodec {
    encoder: Bon8Encoder,
    decoder: Bon8Decoder,
}

impl Bon8JsonValueCodec {
    pub fn new() -> Self {
        Self {
            encoder: Bon8Encoder::new(),
            decoder: Bon8Decoder::new(),
        }
    }

    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.encoder.encode_json(value)
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<Value, Bon8Error> {
        Ok(self.decoder.decode(bytes)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_roundtrip() {
        let mut codec = Bon8JsonValueCodec::new();
        let value = json!({"name": "less", "tags": ["a", "b"], "n": 47, "ok": true});
        let bytes = codec.encode(&value);
        assert_eq!(codec.decode(&bytes), Ok(value));
    }

    #[test]
    fn decode_error_propagates() {
        let mut codec = Bon8JsonValueCodec::new();
        assert_eq!(codec.decode(&[0xfe]), Err(Bon8Error::UnexpectedEndOfContainer));
    }
}
