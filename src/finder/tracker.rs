//! Content-run state machine gating image attachment.
//!
//! An image belongs to the content only while no unrelated text has been
//! crossed since the last content node or data table.

/// Whether the walk is still inside an unbroken run of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// No disqualifying text since the last content node or table.
    #[default]
    InRun,
    /// Non-content text was crossed.
    Broken,
}

/// Two-state tracker threaded through the document-order walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentRunTracker {
    state: RunState,
}

impl ContentRunTracker {
    /// Starts in [`RunState::InRun`], so a leading image is eligible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// A content node was emitted.
    pub fn on_content(&mut self) {
        self.state = RunState::InRun;
    }

    /// A data table was expanded into the output.
    pub fn on_table(&mut self) {
        self.state = RunState::InRun;
    }

    /// A text node that is not content was visited.
    ///
    /// Whitespace-only text leaves the state unchanged.
    pub fn on_text(&mut self, text: &str) {
        if !text.trim().is_empty() {
            self.state = RunState::Broken;
        }
    }

    /// Whether an image visited now should be emitted.
    #[must_use]
    pub fn allows_image(&self) -> bool {
        self.state == RunState::InRun
    }
}
