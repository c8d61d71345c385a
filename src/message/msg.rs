use std::collections::HashMap;

/// A peer message: ASCII name/value headers plus an optional opaque payload.
///
/// This is a transient value with no identity beyond its contents. The codec
/// never mutates it; build it, hand it to `encode`, or receive a fresh one
/// from `decode`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Header name -> value. Keys unique; iteration order carries no meaning
    /// on the wire (decode recovers the same pairs regardless of order).
    pub headers: HashMap<String, String>,
    /// Opaque body. `None` and `Some(vec![])` both encode as payload length 0;
    /// decode always surfaces length 0 as `None`.
    pub payload: Option<Vec<u8>>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Looks up a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::Message;

    #[test]
    fn builder_sets_headers_and_payload() {
        let m = Message::new()
            .with_header("sdp-type", "offer")
            .with_payload(b"v=0".to_vec());

        assert_eq!(m.header("sdp-type"), Some("offer"));
        assert_eq!(m.payload.as_deref(), Some(b"v=0".as_slice()));
    }

    #[test]
    fn repeated_header_name_overwrites() {
        let m = Message::new()
            .with_header("k", "first")
            .with_header("k", "second");

        assert_eq!(m.headers.len(), 1);
        assert_eq!(m.header("k"), Some("second"));
    }

    #[test]
    fn new_message_has_no_payload() {
        let m = Message::new();
        assert!(m.headers.is_empty());
        assert!(m.payload.is_none());
    }
}
