//! Per-run diagnostic log.
//!
//! Every message goes to `tracing`; messages at or below the configured
//! [`DebugLevel`] are also kept and returned with the result.

use crate::options::DebugLevel;

/// Accumulates diagnostic lines for one distillation run.
#[derive(Debug, Default)]
pub struct DebugLog {
    level: DebugLevel,
    lines: Vec<String>,
}

impl DebugLog {
    #[must_use]
    pub fn new(level: DebugLevel) -> Self {
        Self {
            level,
            lines: Vec::new(),
        }
    }

    /// Whether messages at `level` are being kept.
    #[must_use]
    pub fn enabled(&self, level: DebugLevel) -> bool {
        level != DebugLevel::None && self.level >= level
    }

    pub fn log(&mut self, level: DebugLevel, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(?level, "{message}");
        if self.enabled(level) {
            self.lines.push(message);
        }
    }

    /// Accumulated text, one message per line.
    #[must_use]
    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }
}
