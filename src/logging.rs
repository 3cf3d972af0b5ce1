//! Logging facility used by the smoke-test command.

use chrono::Local;
use log::Level;
use std::io::{self, Write};

/// A logging capability: accepts a severity and a message, never fails.
/// Components take this trait instead of a process-wide logger so they
/// stay testable without a real logging backend.
pub trait LogSink {
    fn log(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }
}

/// Streams records at or above a minimum severity to standard output,
/// one line per record, flushed immediately.
pub struct StreamLogger {
    channel: String,
    min_level: Level,
}

impl StreamLogger {
    pub fn new<S: Into<String>>(channel: S, min_level: Level) -> Self {
        Self {
            channel: channel.into(),
            min_level,
        }
    }

    /// log::Level orders Error lowest, so "at or above the threshold"
    /// means numerically less than or equal to it.
    fn passes(&self, level: Level) -> bool {
        level <= self.min_level
    }

    fn format_record(&self, level: Level, message: &str) -> String {
        format!(
            "[{}] {}.{}: {}",
            Local::now().format("%Y-%m-%dT%H:%M:%S%:z"),
            self.channel,
            level,
            message
        )
    }
}

impl LogSink for StreamLogger {
    fn log(&self, level: Level, message: &str) {
        if !self.passes(level) {
            return;
        }
        // A diagnostic logger must never take the process down, so write
        // errors are ignored.
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out, "{}", self.format_record(level, message));
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_filters_lower_severities() {
        let chatty = StreamLogger::new("test", Level::Debug);
        assert!(chatty.passes(Level::Info));
        assert!(chatty.passes(Level::Debug));

        let quiet = StreamLogger::new("test", Level::Error);
        assert!(!quiet.passes(Level::Info));
        assert!(quiet.passes(Level::Error));
    }

    #[test]
    fn record_carries_channel_severity_and_message() {
        let logger = StreamLogger::new("test", Level::Debug);
        let line = logger.format_record(Level::Info, "hello");
        assert!(line.contains("test.INFO: hello"));
        assert!(line.starts_with('['));
    }
}
