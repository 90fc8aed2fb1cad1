use crate::types::level::LogLevel;
use crate::types::timestamp::Timestamp;

/// A single log event as seen by the layout engine.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// Dotted logger name, e.g. `app.net.client`.
    pub logger: String,

    /// Severity of the event.
    pub level: LogLevel,

    /// Rendered message text.
    pub message: String,

    /// Milliseconds elapsed since logging started.
    pub relative: u64,

    /// Instant the event was recorded.
    pub timestamp: Timestamp,
}

impl LogEvent {
    /// Builds an event stamped with the current time.
    pub fn new(logger: &str, level: LogLevel, message: &str) -> Self {
        Self {
            logger: logger.to_string(),
            level,
            message: message.to_string(),
            relative: 0,
            timestamp: Timestamp::now(),
        }
    }
}
