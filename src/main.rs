use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zcalc::Calculator;
use zcalc::config::Config;
use zcalc::ui::{OutputFormat, Session, run_interactive, run_sequence};

/// A keystroke-driven calculator for the terminal.
///
/// Without --keys, each line read from stdin is a key sequence, e.g.
/// `12+3<Enter>`. Named keys go in angle brackets.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Process this key sequence and print the result.
    #[arg(short, long)]
    keys: Option<String>,

    /// Print a frame after every key instead of only the last one.
    #[arg(long, requires = "keys")]
    trace: bool,

    /// Print frames as JSON.
    #[arg(long)]
    json: bool,

    /// Path to the config file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let keymap = config.keymap().context("invalid key bindings")?;
    debug!(?config, "configuration loaded");

    let mut session = Session::new(Calculator::with_settings(config.display_settings()), keymap);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.keys {
        Some(keys) => run_sequence(&mut session, &keys, cli.trace, format, &mut out),
        None => run_interactive(&mut session, io::stdin().lock(), format, &mut out),
    }
}
