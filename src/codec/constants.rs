/// Wire layout constants.
///
/// Layout (big-endian, back-to-back, no padding):
///   [header count: u8]
///   per header: [name len: u16][value len: u16][name bytes][value bytes]
///   [payload len: u32][payload bytes]
/// Maximum number of headers a message may carry.
pub const MAX_HEADERS: usize = 63;

/// Maximum byte length of a single header name or value.
pub const MAX_HEADER_FIELD_LEN: usize = 1023;

/// Maximum payload size (to avoid OOM on the receiving side).
pub const MAX_PAYLOAD_LEN: usize = 256 * 1024; // 256 KiB

/// Size of the header-count field.
pub const HEADER_COUNT_SIZE: usize = 1;

/// Size of each name-length / value-length field.
pub const FIELD_LEN_SIZE: usize = 2;

/// Size of the payload-length field.
pub const PAYLOAD_LEN_SIZE: usize = 4;
