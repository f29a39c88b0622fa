//! Unit and currency conversion commands (seconds, kelvin, hst).

use anyhow::Result;
use serde_json::json;

use sundry::{duration, tax, temperature};

use crate::cmd::OutputOpts;

/// Convert days to seconds; an omitted count means one day.
pub fn cmd_seconds(days: Option<f64>, out: OutputOpts) -> Result<()> {
    let seconds = duration::to_seconds(days);
    out.emit("seconds", json!(seconds), &seconds.to_string())
}

/// Convert a temperature reading to a Kelvin display string.
pub fn cmd_kelvin(value: f64, unit: Option<&str>, out: OutputOpts) -> Result<()> {
    let kelvin = temperature::temp_to_kelvin(value, unit)?;
    out.emit("kelvin", json!(&kelvin), &kelvin)
}

/// Add HST to an amount in cents.
pub fn cmd_hst(cents: i64, out: OutputOpts) -> Result<()> {
    let total = tax::add_hst(cents);
    out.emit("hst", json!(total), &total.to_string())
}
