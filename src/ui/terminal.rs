//! Terminal rendering and the stdin loop.

use super::Session;
use crate::frame::Frame;
use crate::input::parse_keys;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// How frames are written to the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The display text, with a ` [-]` marker while a negation is armed.
    #[default]
    Plain,
    /// One JSON object per frame.
    Json,
}

/// Render a frame as a single line.
pub fn render_frame(frame: &Frame, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => {
            if frame.negation_armed {
                Ok(format!("{} [-]", frame.display))
            } else {
                Ok(frame.display.clone())
            }
        }
        OutputFormat::Json => serde_json::to_string(frame).context("failed to serialize frame"),
    }
}

/// Process one key sequence and print the final frame, or every frame when
/// `trace` is set.
pub fn run_sequence<W: Write>(
    session: &mut Session,
    sequence: &str,
    trace: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let feed = session.feed(&parse_keys(sequence));

    if trace {
        for frame in &feed.frames {
            writeln!(out, "{}", render_frame(frame, format)?)?;
        }
    } else {
        writeln!(out, "{}", render_frame(&session.frame(), format)?)?;
    }

    Ok(())
}

/// Read key sequences line by line and print a frame after each line.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", render_frame(&session.frame(), format)?)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let feed = session.feed(&parse_keys(&line));
        if feed.quit {
            debug!("quit requested");
            break;
        }
        writeln!(out, "{}", render_frame(&session.frame(), format)?)?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;
    use crate::input::Keymap;

    fn session() -> Session {
        Session::new(Calculator::new(), Keymap::default())
    }

    fn output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_plain_marks_armed_negation() {
        let frame = Frame {
            display: "5 + ".to_string(),
            negation_armed: true,
            is_error: false,
        };
        assert_eq!(render_frame(&frame, OutputFormat::Plain).unwrap(), "5 +  [-]");
    }

    #[test]
    fn test_sequence_prints_final_frame() {
        let mut out = Vec::new();
        run_sequence(&mut session(), "12×3=", false, OutputFormat::Plain, &mut out).unwrap();
        assert_eq!(output(out), "36\n");
    }

    #[test]
    fn test_sequence_trace() {
        let mut out = Vec::new();
        run_sequence(&mut session(), "1÷0=", true, OutputFormat::Plain, &mut out).unwrap();
        assert_eq!(output(out), "1\n1 ÷ \n1 ÷ 0\nerror\n");
    }

    #[test]
    fn test_sequence_json() {
        let mut out = Vec::new();
        run_sequence(&mut session(), "~", false, OutputFormat::Json, &mut out).unwrap();
        assert_eq!(
            output(out),
            "{\"display\":\"0\",\"negation_armed\":true,\"is_error\":false}\n"
        );
    }

    #[test]
    fn test_interactive_lines() {
        let input = "5+\n3=\nq\n9\n";
        let mut out = Vec::new();
        run_interactive(&mut session(), input.as_bytes(), OutputFormat::Plain, &mut out).unwrap();
        assert_eq!(output(out), "0\n5 + \n8\n");
    }
}
