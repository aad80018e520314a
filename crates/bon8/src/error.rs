//! BON8 decoder error type.

use thiserror::Error;

/// Error type for BON8 decoding operations. Encoding is infallible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Bon8Error {
    /// The input ended where a value was required.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// A multi-byte integer lead byte was not followed by its full sequence.
    #[error("truncated multi-byte integer")]
    IncompleteMultibyte,
    /// An int32/int64 escape was not followed by its full payload.
    #[error("truncated integer payload")]
    IncompleteInt,
    /// A float32/float64 escape was not followed by its full payload.
    #[error("truncated float payload")]
    IncompleteFloat,
    /// The input ended inside an array or object.
    #[error("unterminated container")]
    IncompleteContainer,
    /// An end-of-container code appeared outside any container, or where an
    /// object value was required.
    #[error("unexpected end of container")]
    UnexpectedEndOfContainer,
    /// An object key decoded to something other than a string.
    #[error("object key is not a string")]
    NonStringKey,
    /// Container nesting exceeded the decoder's depth limit.
    #[error("container nesting too deep")]
    NestingTooDeep,
    /// A string payload was not valid UTF-8.
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,
}
