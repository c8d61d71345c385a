//! Binary peer-message codec.
//!
//! ----------- Layout (big-endian) ----------
//! Header count (1B)
//! Per header: name len (2B) - value len (2B) - name - value
//! Payload length (4B) - payload (up to 256 KiB)
//! -------------------------------------------
//!
//! `encode` and `decode` are pure and stateless; each call operates only on
//! its own input and allocates its own output.

pub mod constants;
pub mod decode;
pub mod encode;
pub mod errors;

pub use constants::{MAX_HEADER_FIELD_LEN, MAX_HEADERS, MAX_PAYLOAD_LEN};
pub use decode::decode;
pub use encode::encode;
pub use errors::CodecError;
