use crate::log::log_level::LogLevel;

/// Destination for log messages. Implementations must be shareable across
/// threads; the codec itself never logs, so sinks only see demo/tooling
/// traffic.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str, target: &'static str);
}

/// Sink that discards everything. Useful as a default in tests.
#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log(&self, _level: LogLevel, _msg: &str, _target: &'static str) {}
}
