use byteorder::{BigEndian, ByteOrder};

use super::constants::{
    FIELD_LEN_SIZE, HEADER_COUNT_SIZE, MAX_HEADER_FIELD_LEN, MAX_HEADERS, MAX_PAYLOAD_LEN,
    PAYLOAD_LEN_SIZE,
};
use super::errors::CodecError;
use crate::message::Message;

/// Serializes a message into a single exactly-sized buffer.
///
/// Per-header violations are collected so one bad message reports every
/// problem at once; the header-count check fails immediately on its own.
/// Nothing is written until validation has fully passed.
pub fn encode(msg: &Message) -> Result<Vec<u8>, CodecError> {
    if msg.headers.len() > MAX_HEADERS {
        return Err(CodecError::InvalidMessage(format!(
            "too many headers: {} (maximum is {MAX_HEADERS})",
            msg.headers.len()
        )));
    }

    // Validate headers and accumulate the total size in one pass.
    let mut total = HEADER_COUNT_SIZE;
    let mut violations: Vec<String> = Vec::new();

    for (name, value) in &msg.headers {
        if name.len() > MAX_HEADER_FIELD_LEN || value.len() > MAX_HEADER_FIELD_LEN {
            violations.push(format!(
                "header name or value exceeds {MAX_HEADER_FIELD_LEN} bytes"
            ));
        }
        if !name.is_ascii() || !value.is_ascii() {
            violations.push("header name or value contains non-ASCII characters".to_owned());
        }

        total += 2 * FIELD_LEN_SIZE + name.len() + value.len();
    }

    if !violations.is_empty() {
        return Err(CodecError::InvalidMessage(violations.join("; ")));
    }

    let payload = msg.payload.as_deref().unwrap_or(&[]);
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(CodecError::InvalidMessage(format!(
            "payload exceeds {MAX_PAYLOAD_LEN} bytes"
        )));
    }
    total += PAYLOAD_LEN_SIZE + payload.len();

    // All checks passed: allocate exactly and write by offset.
    let mut buf = vec![0u8; total];
    let mut offset = 0;

    buf[offset] = msg.headers.len() as u8;
    offset += HEADER_COUNT_SIZE;

    for (name, value) in &msg.headers {
        BigEndian::write_u16(&mut buf[offset..offset + 2], name.len() as u16);
        offset += FIELD_LEN_SIZE;
        BigEndian::write_u16(&mut buf[offset..offset + 2], value.len() as u16);
        offset += FIELD_LEN_SIZE;

        buf[offset..offset + name.len()].copy_from_slice(name.as_bytes());
        offset += name.len();
        buf[offset..offset + value.len()].copy_from_slice(value.as_bytes());
        offset += value.len();
    }

    BigEndian::write_u32(&mut buf[offset..offset + 4], payload.len() as u32);
    offset += PAYLOAD_LEN_SIZE;
    buf[offset..].copy_from_slice(payload);

    Ok(buf)
}
