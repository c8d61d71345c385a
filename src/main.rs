//! Demo binary: builds a sample signaling message, encodes it, prints the
//! wire bytes as hex, decodes them back, and prints the recovered contents.

use peermsg::log::{ConsoleLogSink, LogLevel, LogSink};
use peermsg::{CodecError, Message, decode, encode, sink_info};

fn main() -> Result<(), CodecError> {
    let sink = ConsoleLogSink::new(LogLevel::Info);

    let message = Message::new()
        .with_header("sdp-type", "offer")
        .with_header("sdp-version", "1")
        .with_payload(br#"{"sdp":"v=0...","type":"offer"}"#.to_vec());

    sink_info!(
        sink,
        "encoding message with {} headers",
        message.headers.len()
    );
    let encoded = encode(&message)?;

    let hex: Vec<String> = encoded.iter().map(|b| format!("{b:02x}")).collect();
    println!("Encoded message ({} bytes): {}", encoded.len(), hex.join(" "));

    let decoded = decode(&encoded)?;
    sink_info!(sink, "decoded message round-tripped");

    println!("Decoded headers:");
    for (name, value) in &decoded.headers {
        println!("  {name}: {value}");
    }
    match decoded.payload {
        Some(payload) => println!("Decoded payload: {}", String::from_utf8_lossy(&payload)),
        None => println!("Decoded payload: (none)"),
    }

    Ok(())
}
