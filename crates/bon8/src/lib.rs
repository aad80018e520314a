//! BON8 — a compact binary object notation that interleaves with UTF-8 text.
//!
//! BON8 reserves the byte values above ASCII for structure: small integers,
//! float sentinels, container framing and escapes all live in `0x80..=0xff`,
//! while strings are stored as raw UTF-8 with no length prefix. A lead byte
//! in `0xc2..=0xf7` is ambiguous on its own; the byte after it decides
//! whether it starts a multi-byte character or a multi-byte integer.
//!
//! # Example
//!
//! ```
//! use bon8::{decode, encode, Bon8Value};
//!
//! let value = Bon8Value::Array(vec![Bon8Value::Int(5), "hi".into()]);
//! let bytes = encode(&value);
//! assert_eq!(bytes, [0xfc, 0x85, 0x68, 0x69, 0xfe]);
//! assert_eq!(decode(&bytes), Ok(value));
//! ```

mod codec;
mod constants;
mod decoder;
mod encoder;
mod error;
mod util;
mod value;
mod writer;

pub use codec::Bon8JsonValueCodec;
pub use constants::DEFAULT_MAX_DEPTH;
pub use decoder::Bon8Decoder;
pub use encoder::Bon8Encoder;
pub use error::Bon8Error;
pub use util::{decode, decode_with_consumed, encode};
pub use value::Bon8Value;
pub use writer::Writer;
