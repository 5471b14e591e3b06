//! Frame handed to the renderer after every processed input.

use serde::Serialize;

/// What a rendering surface needs to show the calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// The full expression text, e.g. `5 + (-3)`.
    pub display: String,
    /// Whether the next operand will be negated. Used to highlight the sign
    /// control.
    pub negation_armed: bool,
    /// Whether the display holds the error sentinel.
    pub is_error: bool,
}

impl Frame {
    /// Get the text to copy to clipboard.
    /// The error sentinel is copied as-is so the user still gets what they see.
    pub fn text_for_clipboard(&self) -> &str {
        &self.display
    }
}
