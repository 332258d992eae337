//! Local UI chrome state.
//!
//! Keeps transient presentation concerns out of domain state so navigation
//! controls can evolve independently of protocol data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the responsive navigation chrome.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    /// Mobile sidebar drawer visibility (hamburger toggle).
    pub sidebar_open: bool,
}
