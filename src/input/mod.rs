//! Input mapping for the calculator.
//!
//! Turns key names and key sequences into calculator inputs and
//! front-end actions.

mod keymap;
mod sequence;

pub use keymap::{Action, Keymap, KeymapError, input_for_key};
pub use sequence::parse_keys;
