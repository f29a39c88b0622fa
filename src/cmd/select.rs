//! Numeric selection commands over classified argument tokens.
//!
//! Everything reaches the CLI as a string, so tokens are classified into
//! [`Value`]s first (`true` → boolean, `null` → null, `3.5` → number) and
//! the library's own policies do the rest.

use anyhow::Result;
use serde_json::json;

use sundry::minimum::find_smallest;
use sundry::odd::odd_numbers;
use sundry::value::Value;

use crate::cmd::OutputOpts;
use crate::ui;

fn classify(tokens: &[String]) -> Vec<Value> {
    tokens.iter().map(|token| Value::from_token(token)).collect()
}

/// Find the smallest numeric value among the arguments.
pub fn cmd_smallest(tokens: &[String], out: OutputOpts) -> Result<()> {
    let values = classify(tokens);
    let smallest = find_smallest(&values)?;
    out.emit("smallest", json!(smallest), &smallest.to_string())
}

/// List the odd numbers among the arguments.
pub fn cmd_odds(tokens: &[String], out: OutputOpts) -> Result<()> {
    let values = classify(tokens);
    match odd_numbers(&values) {
        Some(odds) => out.emit("odds", json!(&odds), &odds),
        None => out.emit("odds", serde_json::Value::Null, &ui::none_placeholder()),
    }
}
