//! Centralized logger for game events
//!
//! Owned by the `Game` controller. Messages below the configured verbosity
//! are dropped; the rest go to stdout, an in-memory buffer (useful in tests),
//! or both.

use serde::{Deserialize, Serialize};

/// Verbosity level for game output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during the match
    Silent = 0,
    /// Minimal - only trial outcomes
    Minimal = 1,
    /// Normal - phase transitions and economy (default)
    #[default]
    Normal = 2,
    /// Verbose - per-tick combat events
    Verbose = 3,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to the in-memory buffer
    Memory,
    /// Both stdout and the in-memory buffer
    Both,
}

/// A single logged game event
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
    /// Optional category (e.g., "phase", "economy", "trial")
    pub category: Option<String>,
}

/// Verbosity-filtered event log
#[derive(Debug, Clone, Default)]
pub struct GameLogger {
    verbosity: VerbosityLevel,
    mode: OutputMode,
    entries: Vec<LogEntry>,
}

impl GameLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            ..Self::default()
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.mode
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    pub fn minimal(&mut self, message: &str) {
        self.log(VerbosityLevel::Minimal, message, None);
    }

    pub fn normal(&mut self, message: &str) {
        self.log(VerbosityLevel::Normal, message, None);
    }

    pub fn verbose(&mut self, message: &str) {
        self.log(VerbosityLevel::Verbose, message, None);
    }

    pub fn log_with_category(&mut self, level: VerbosityLevel, message: &str, category: &str) {
        self.log(level, message, Some(category));
    }

    fn log(&mut self, level: VerbosityLevel, message: &str, category: Option<&str>) {
        if level > self.verbosity {
            return;
        }
        if matches!(self.mode, OutputMode::Stdout | OutputMode::Both) {
            println!("{message}");
        }
        if matches!(self.mode, OutputMode::Memory | OutputMode::Both) {
            self.entries.push(LogEntry {
                level,
                message: message.to_string(),
                category: category.map(str::to_string),
            });
        }
    }

    /// Captured entries (Memory or Both mode only)
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filtering() {
        let mut logger = GameLogger::with_verbosity(VerbosityLevel::Minimal);
        logger.set_output_mode(OutputMode::Memory);

        logger.minimal("outcome");
        logger.normal("phase change");
        logger.verbose("tick detail");

        assert_eq!(logger.entries().len(), 1);
        assert_eq!(logger.entries()[0].message, "outcome");
    }

    #[test]
    fn test_capture_with_category() {
        let mut logger = GameLogger::with_verbosity(VerbosityLevel::Verbose);
        logger.set_output_mode(OutputMode::Memory);

        logger.log_with_category(VerbosityLevel::Normal, "drafted 2 cards", "economy");

        assert_eq!(logger.entries().len(), 1);
        assert_eq!(logger.entries()[0].category.as_deref(), Some("economy"));
    }

    #[test]
    fn test_stdout_mode_captures_nothing() {
        let mut logger = GameLogger::new();
        logger.normal("not captured");

        assert!(logger.entries().is_empty());
    }
}
