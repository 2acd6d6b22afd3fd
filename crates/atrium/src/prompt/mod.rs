//! # Shininess Prompt — Console Input for the Query Cube
//!
//! A background thread reads shininess values from a line-oriented reader
//! (stdin in the demo) and hands each one to the render loop through a
//! [`latest`] channel. The render side polls once per frame and only ever
//! sees the most recent value.
//!
//! ```text
//!  stdin ──▶ run_prompt ──parse_shininess──▶ LatestSender ─┐
//!                                                         │ (one slot)
//!  render loop ◀── LatestReceiver::latest() ◀─────────────┘
//! ```

pub mod latest;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::thread::JoinHandle;

pub use latest::{channel, LatestReceiver, LatestSender};

pub const MIN_SHININESS: f32 = 1.0;
pub const MAX_SHININESS: f32 = 1000.0;

const PROMPT: &str = "Enter shininess value (1-1000, 0 to quit): ";

/// What one line of input asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptOutcome {
    /// A shininess, already clamped to `[MIN_SHININESS, MAX_SHININESS]`.
    Value(f32),
    /// Zero or negative input: stop reading.
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    Invalid(String),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Invalid(s) => write!(f, "not a number: {s:?}"),
        }
    }
}

impl std::error::Error for PromptError {}

/// Parse one input line.
pub fn parse_shininess(line: &str) -> Result<PromptOutcome, PromptError> {
    let trimmed = line.trim();
    let value: f32 = trimmed
        .parse()
        .map_err(|_| PromptError::Invalid(trimmed.to_string()))?;
    if value.is_nan() {
        return Err(PromptError::Invalid(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Ok(PromptOutcome::Stop);
    }
    Ok(PromptOutcome::Value(value.clamp(MIN_SHININESS, MAX_SHININESS)))
}

/// Prompt, read and forward values until stop, EOF, or the receiver goes away.
pub fn run_prompt<R: BufRead, W: Write>(mut reader: R, mut writer: W, sender: &LatestSender<f32>) -> io::Result<()> {
    let mut line = String::new();
    loop {
        if sender.is_closed() {
            log::debug!("prompt: receiver dropped, stopping");
            return Ok(());
        }
        write!(writer, "{PROMPT}")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            log::debug!("prompt: end of input");
            return Ok(());
        }

        match parse_shininess(&line) {
            Err(e) => {
                log::debug!("prompt: {e}");
                writeln!(writer, "  Invalid input, please enter a number.")?;
            }
            Ok(PromptOutcome::Stop) => {
                writeln!(writer, "  Query input ended. Press ESC in the window to quit.")?;
                return Ok(());
            }
            Ok(PromptOutcome::Value(v)) => {
                if sender.send(v).is_err() {
                    return Ok(());
                }
                log::info!("query shininess set to {v:.1}");
                writeln!(writer, "  Query cube updated: shininess = {v:.1}")?;
            }
        }
    }
}

/// Run [`run_prompt`] over stdin/stdout on a background thread.
pub fn spawn_stdin_prompt(sender: LatestSender<f32>) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("shininess-prompt".into())
        .spawn(move || {
            let stdin = io::stdin();
            let stdout = io::stdout();
            if let Err(e) = run_prompt(stdin.lock(), stdout.lock(), &sender) {
                log::warn!("shininess prompt stopped: {e}");
            }
        })
}
