use super::errors::CodecError;
use crate::message::Message;

/// Reconstructs a message from its wire bytes.
///
/// Decoding is bounds-driven, not rule-driven: length prefixes are trusted as
/// far as the buffer can satisfy them. The encode-side maximums (header
/// count, field length, payload size) are deliberately not re-checked here,
/// keeping decode byte-for-byte compatible with buffers whose prefixes exceed
/// those limits but whose bytes are all present. An oversized header count
/// still fails once a read runs past the end of the buffer.
///
/// Header text is recovered lossily: decode never rejects on content, so
/// bytes that do not form valid UTF-8 surface as U+FFFD.
///
/// Trailing bytes beyond the declared payload are ignored.
pub fn decode(data: &[u8]) -> Result<Message, CodecError> {
    if data.is_empty() {
        return Err(CodecError::MalformedData("empty buffer"));
    }

    let mut cursor = Cursor::new(data);
    let mut message = Message::new();

    // Cannot fail: the buffer is non-empty.
    let header_count = cursor
        .get_u8()
        .ok_or(CodecError::MalformedData("header count"))?;

    for _ in 0..header_count {
        let name_len = cursor
            .get_u16()
            .ok_or(CodecError::MalformedData("truncated header name length"))?
            as usize;
        let value_len = cursor
            .get_u16()
            .ok_or(CodecError::MalformedData("truncated header value length"))?
            as usize;

        let name = cursor
            .get_bytes(name_len)
            .ok_or(CodecError::MalformedData("truncated header name"))?;
        let value = cursor
            .get_bytes(value_len)
            .ok_or(CodecError::MalformedData("truncated header value"))?;

        // Map semantics: a repeated name overwrites the earlier value.
        message.headers.insert(
            String::from_utf8_lossy(name).into_owned(),
            String::from_utf8_lossy(value).into_owned(),
        );
    }

    let payload_len = cursor
        .get_u32()
        .ok_or(CodecError::MalformedData("truncated payload length"))?
        as usize;

    if payload_len > 0 {
        let payload = cursor
            .get_bytes(payload_len)
            .ok_or(CodecError::MalformedData("truncated payload"))?;
        message.payload = Some(payload.to_vec());
    }
    // payload_len == 0 leaves payload absent; the wire format cannot
    // distinguish an explicit empty payload from no payload at all.

    Ok(message)
}

// ---- Cursor over the input slice ------------------------------------------

#[derive(Debug)]
struct Cursor<'a> {
    buf: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    fn get_u8(&mut self) -> Option<u8> {
        let (head, rest) = self.buf.split_first()?;
        self.buf = rest;
        Some(*head)
    }

    fn get_u16(&mut self) -> Option<u16> {
        if self.buf.len() < 2 {
            return None;
        }
        let (head, rest) = self.buf.split_at(2);
        self.buf = rest;
        Some(u16::from_be_bytes([head[0], head[1]]))
    }

    fn get_u32(&mut self) -> Option<u32> {
        if self.buf.len() < 4 {
            return None;
        }
        let (head, rest) = self.buf.split_at(4);
        self.buf = rest;
        Some(u32::from_be_bytes([head[0], head[1], head[2], head[3]]))
    }

    fn get_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        if self.buf.len() < len {
            return None;
        }
        let (head, rest) = self.buf.split_at(len);
        self.buf = rest;
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::decode;
    use crate::codec::CodecError;

    #[test]
    fn empty_buffer_rejected() {
        assert!(matches!(
            decode(&[]),
            Err(CodecError::MalformedData("empty buffer"))
        ));
    }

    #[test]
    fn count_byte_alone_rejected() {
        // Declares one header but carries no length fields.
        assert!(matches!(
            decode(&[1]),
            Err(CodecError::MalformedData("truncated header name length"))
        ));
    }

    #[test]
    fn oversized_header_count_fails_via_bounds() {
        // 64 exceeds the encode-side limit, but decode only notices the
        // missing bytes for the first declared header.
        assert!(matches!(decode(&[64]), Err(CodecError::MalformedData(_))));
    }

    #[test]
    fn truncated_header_name_rejected() {
        let data = [1, 0x00, 0x05, 0x00, 0x01, b'a', b'b'];
        assert!(matches!(
            decode(&data),
            Err(CodecError::MalformedData("truncated header name"))
        ));
    }

    #[test]
    fn truncated_header_value_rejected() {
        let data = [1, 0x00, 0x01, 0x00, 0x05, b'k', b'v'];
        assert!(matches!(
            decode(&data),
            Err(CodecError::MalformedData("truncated header value"))
        ));
    }

    #[test]
    fn missing_payload_length_rejected() {
        let data = [1, 0x00, 0x01, 0x00, 0x01, b'k', b'v'];
        assert!(matches!(
            decode(&data),
            Err(CodecError::MalformedData("truncated payload length"))
        ));
    }

    #[test]
    fn declared_payload_longer_than_buffer_rejected() {
        let data = [0, 0x00, 0x40, 0x00, 0x00]; // 4 MiB declared, 0 present
        assert!(matches!(
            decode(&data),
            Err(CodecError::MalformedData("truncated payload"))
        ));
    }

    #[test]
    fn zero_payload_length_decodes_as_absent() {
        let m = decode(&[0, 0, 0, 0, 0]).unwrap();
        assert!(m.headers.is_empty());
        assert!(m.payload.is_none());
    }

    #[test]
    fn trailing_bytes_ignored() {
        let data = [0, 0x00, 0x00, 0x00, 0x01, 0xFF, 0xAA, 0xBB];
        let m = decode(&data).unwrap();
        assert_eq!(m.payload.as_deref(), Some([0xFF].as_slice()));
    }

    #[test]
    fn repeated_header_name_keeps_last_value() {
        let mut data = vec![2];
        for value in [b'1', b'2'] {
            data.extend_from_slice(&[0x00, 0x01, 0x00, 0x01, b'k', value]);
        }
        data.extend_from_slice(&[0, 0, 0, 0]);

        let m = decode(&data).unwrap();
        assert_eq!(m.headers.len(), 1);
        assert_eq!(m.header("k"), Some("2"));
    }

    #[test]
    fn over_limit_name_length_still_decodes_when_bytes_present() {
        // 1024-byte name exceeds the encode-side field limit, but decode is
        // bounds-driven and accepts it when the bytes are actually there.
        let mut data = vec![1, 0x04, 0x00, 0x00, 0x01];
        data.extend_from_slice(&[b'n'; 1024]);
        data.push(b'v');
        data.extend_from_slice(&[0, 0, 0, 0]);

        let m = decode(&data).unwrap();
        assert_eq!(m.header("n".repeat(1024).as_str()), Some("v"));
    }

    #[test]
    fn non_utf8_header_bytes_decode_lossily() {
        let data = [1, 0x00, 0x01, 0x00, 0x01, 0xFF, b'v', 0, 0, 0, 0];
        let m = decode(&data).unwrap();
        assert_eq!(m.header("\u{FFFD}"), Some("v"));
    }
}
