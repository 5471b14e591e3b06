pub mod session;
pub mod terminal;

pub use session::{Feed, Session};
pub use terminal::{OutputFormat, render_frame, run_interactive, run_sequence};
