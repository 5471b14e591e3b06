//! Calculator core.
//!
//! This module provides:
//! - The expression state machine and its display projection
//! - An input processor that folds digit, operator and editing events into it
//! - Arithmetic evaluation with width-capped result formatting
//! - Copying the display to the clipboard

mod clipboard;
mod evaluation;
mod operand;
mod operator;
mod processor;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use evaluation::{ArithmeticError, DEFAULT_MAX_CHARS, format_result, number_text, operate};
pub use operand::Operand;
pub use operator::Operator;
pub use processor::{Calculator, DEFAULT_ERROR_TEXT, DisplaySettings, Input};
pub use state::ExpressionState;
