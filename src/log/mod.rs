pub mod console_sink;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;

pub use console_sink::ConsoleLogSink;
pub use log_level::LogLevel;
pub use log_sink::{LogSink, NoopLogSink};
