//! Error types for dom-distiller.
//!
//! The relevant-element finder is total over well-formed trees, so the only
//! errors are caller bugs surfaced loudly and rejected configuration.

/// Error type for distillation operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node passed as content does not lie within the traversal root.
    #[error("content node lies outside the traversal root")]
    ContentOutsideRoot,

    /// An option value is outside its accepted range.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

/// Result type alias for distillation operations.
pub type Result<T> = std::result::Result<T, Error>;
