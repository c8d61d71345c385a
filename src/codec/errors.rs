use std::fmt;

/// Codec-level errors: bad input value on encode, bad bytes on decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The `Message` handed to `encode` violates a structural limit
    /// (header count, header field size, ASCII-only, payload size).
    /// Carries a description of every violation found.
    InvalidMessage(String),
    /// The buffer handed to `decode` is too short for the structure its
    /// own length prefixes declare. Names the truncated region.
    MalformedData(&'static str),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CodecError::*;
        match self {
            InvalidMessage(desc) => write!(f, "invalid message: {desc}"),
            MalformedData(region) => write!(f, "malformed data: {region}"),
        }
    }
}

impl std::error::Error for CodecError {}
