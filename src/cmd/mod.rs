//! Command handlers for the sundry CLI.
//!
//! Each handler calls one library function and writes the result through
//! [`OutputOpts`]: plain text by default, a JSON envelope with `--json`.

use anyhow::Result;
use serde::Serialize;

pub mod convert;
pub mod format;
pub mod select;
pub mod util;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOpts {
    /// Emit a JSON envelope instead of plain text.
    pub json: bool,
}

/// Envelope for `--json` output: `{"command": ..., "result": ...}`.
#[derive(Serialize)]
struct Envelope<'a> {
    command: &'a str,
    result: serde_json::Value,
}

impl OutputOpts {
    /// Write a command result in the selected mode.
    pub fn emit(&self, command: &str, result: serde_json::Value, plain: &str) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(&Envelope { command, result })?);
        } else {
            println!("{}", plain);
        }
        Ok(())
    }
}
