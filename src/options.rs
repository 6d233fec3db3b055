//! Configuration options for distillation.
//!
//! `DistillerOptions` controls diagnostic verbosity, the output format and
//! the thresholds of the default content classifier.

use crate::error::{Error, Result};

/// Diagnostic log verbosity, lowest to highest.
///
/// Each level includes the messages of every level below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    /// No log text is accumulated.
    #[default]
    None,
    /// One line per pipeline phase.
    Phases,
    /// Adds visibility and table classification counts.
    Visibility,
    /// Adds per-phase timings.
    Timing,
}

/// Configuration options for distillation.
///
/// # Example
///
/// ```rust
/// use dom_distiller::{DebugLevel, DistillerOptions};
///
/// let options = DistillerOptions {
///     extract_text_only: true,
///     debug_level: DebugLevel::Phases,
///     ..DistillerOptions::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DistillerOptions {
    /// How much diagnostic text to collect into `DistillerResult::debug_info`.
    ///
    /// Default: `DebugLevel::None`
    pub debug_level: DebugLevel,

    /// Emit plain text instead of HTML markup.
    ///
    /// Default: `false`
    pub extract_text_only: bool,

    /// Minimum word count for a text block to be classified as content.
    ///
    /// Default: `10`
    pub min_block_words: usize,

    /// Maximum proportion of link words in a content block (0.0 - 1.0).
    ///
    /// Default: `0.33`
    pub max_link_density: f64,
}

impl Default for DistillerOptions {
    fn default() -> Self {
        Self {
            debug_level: DebugLevel::None,
            extract_text_only: false,
            min_block_words: 10,
            max_link_density: 0.33,
        }
    }
}

impl DistillerOptions {
    /// Reject out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] when `max_link_density` is not a
    /// ratio in `0.0..=1.0`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.max_link_density) {
            return Err(Error::InvalidOption(format!(
                "max_link_density must be within 0.0..=1.0, got {}",
                self.max_link_density
            )));
        }
        Ok(())
    }
}
