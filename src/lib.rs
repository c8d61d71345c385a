//! peermsg is a compact binary codec for peer signaling messages: a set of
//! ASCII name/value headers plus an optional opaque payload.
//!
//! The crate exposes exactly one value type and two pure functions:
//! [`message::Message`], [`codec::encode`], and [`codec::decode`]. There is
//! no transport, framing, or session state; callers deliver exactly one
//! complete encoded buffer per message.

/// Wire layout constants, validation limits, and the encode/decode pair.
pub mod codec;
/// Logging utilities (sink trait plus feature-gated level macros).
pub mod log;
/// The in-memory message value type.
pub mod message;

pub use codec::{CodecError, decode, encode};
pub use message::Message;
