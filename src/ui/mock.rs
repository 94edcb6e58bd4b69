//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use tiapp::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Installed \"ti.map\" module");
//!
//! assert!(ui.has_success("ti.map"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    data: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Result lines printed via `data` and `key_value`.
    pub fn data_lines(&self) -> &[String] {
        &self.data
    }

    /// Get all messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if any success message contains `text`.
    pub fn has_success(&self, text: &str) -> bool {
        self.successes.iter().any(|m| m.contains(text))
    }

    /// Check if any warning contains `text`.
    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(text))
    }

    /// Check if any error contains `text`.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn data(&mut self, msg: &str) {
        self.data.push(msg.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.data.push(format!("{}: {}", key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel() {
        let mut ui = MockUI::new();
        ui.data("3.1.0.GA");
        ui.message("hello");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");
        ui.key_value("SDK", "3.1.0");

        assert_eq!(ui.data_lines(), ["3.1.0.GA", "SDK: 3.1.0"]);
        assert_eq!(ui.messages(), ["hello"]);
        assert!(ui.has_success("done"));
        assert!(ui.has_warning("care"));
        assert!(ui.has_error("broken"));
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
