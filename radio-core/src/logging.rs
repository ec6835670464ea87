//! Structured logging for the signal path and protocol decoders.
//!
//! This is deliberately not built on `log`/`tracing`: the pipeline runs on
//! unattended decode jobs (batch-processing a WAV file) as easily as
//! interactively, so entries are collected in-process and can be queried by
//! subsystem or level after the fact, rather than only streamed to a sink.

use std::fmt;

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level to record.
    pub level: LogLevel,

    /// Enable logging for specific subsystem groups.
    pub enable_dsp: bool,
    pub enable_signal_path: bool,
    pub enable_protocol: bool,
    pub enable_picture: bool,

    /// Maximum number of log entries to keep (for memory management).
    pub max_entries: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            enable_dsp: true,
            enable_signal_path: true,
            enable_protocol: true,
            enable_picture: true,
            max_entries: 1000,
        }
    }
}

impl LogConfig {
    /// Verbose logging for debugging.
    pub fn verbose() -> Self {
        Self {
            level: LogLevel::Debug,
            enable_dsp: true,
            enable_signal_path: true,
            enable_protocol: true,
            enable_picture: true,
            max_entries: 5000,
        }
    }

    /// Quiet logging for production use.
    pub fn quiet() -> Self {
        Self {
            level: LogLevel::Warn,
            enable_dsp: false,
            enable_signal_path: false,
            enable_protocol: false,
            enable_picture: false,
            max_entries: 100,
        }
    }

    /// Disable all logging.
    pub fn disabled() -> Self {
        Self {
            level: LogLevel::Error,
            enable_dsp: false,
            enable_signal_path: false,
            enable_protocol: false,
            enable_picture: false,
            max_entries: 0,
        }
    }
}

/// A single log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub subsystem: &'static str,
    pub message: String,
}

/// Logger that collects structured log entries.
#[derive(Debug, Clone)]
pub struct Logger {
    config: LogConfig,
    entries: Vec<LogEntry>,
}

impl Logger {
    pub fn new(config: LogConfig) -> Self {
        let capacity = config.max_entries.min(1000);
        Self {
            config,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Log a message at the specified level.
    pub fn log(&mut self, level: LogLevel, subsystem: &'static str, message: impl fmt::Display) {
        if level < self.config.level {
            return;
        }

        let enabled = match subsystem {
            "FIR" | "DECIMATOR" | "INTERPOLATOR" | "AGC" | "PLL" | "OSCILLATOR" => {
                self.config.enable_dsp
            }
            "SIGNAL_PATH" | "RECEIVE_FILTER" | "DEMODULATOR" => self.config.enable_signal_path,
            "HDLC" | "AX25" | "FSK" => self.config.enable_protocol,
            "SSTV" | "APT" | "VIS" => self.config.enable_picture,
            _ => true,
        };

        if !enabled {
            return;
        }

        let entry = LogEntry {
            level,
            subsystem,
            message: message.to_string(),
        };

        if self.config.max_entries > 0 {
            if self.entries.len() >= self.config.max_entries {
                self.entries.remove(0);
            }
            self.entries.push(entry);
        }

        #[cfg(any(test, debug_assertions))]
        {
            eprintln!("[{}] {}: {}", level, subsystem, message);
        }
    }

    pub fn trace(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Trace, subsystem, message);
    }

    pub fn debug(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Debug, subsystem, message);
    }

    pub fn info(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Info, subsystem, message);
    }

    pub fn warn(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Warn, subsystem, message);
    }

    pub fn error(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Error, subsystem, message);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn entries_for_subsystem(&self, subsystem: &str) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .filter(|e| e.subsystem == subsystem)
            .collect()
    }

    pub fn entries_at_level(&self, level: LogLevel) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.level >= level).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "[{}] {}: {}", entry.level, entry.subsystem, entry.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filtering_by_level() {
        let config = LogConfig {
            level: LogLevel::Info,
            ..Default::default()
        };
        let mut logger = Logger::new(config);

        logger.trace("FIR", "trace message");
        logger.debug("FIR", "debug message");
        logger.info("FIR", "info message");
        logger.warn("FIR", "warn message");

        assert_eq!(logger.entries().len(), 2);
    }

    #[test]
    fn subsystem_filtering() {
        let config = LogConfig {
            level: LogLevel::Debug,
            enable_dsp: false,
            enable_signal_path: true,
            ..Default::default()
        };
        let mut logger = Logger::new(config);

        logger.info("AGC", "agc message");
        logger.info("SIGNAL_PATH", "path message");

        assert_eq!(logger.entries().len(), 1);
        assert_eq!(logger.entries()[0].subsystem, "SIGNAL_PATH");
    }

    #[test]
    fn max_entries_limit() {
        let config = LogConfig {
            level: LogLevel::Debug,
            max_entries: 3,
            ..Default::default()
        };
        let mut logger = Logger::new(config);

        logger.info("FIR", "message 1");
        logger.info("FIR", "message 2");
        logger.info("FIR", "message 3");
        logger.info("FIR", "message 4");

        assert_eq!(logger.entries().len(), 3);
        assert!(logger.entries()[0].message.contains("message 2"));
    }
}
