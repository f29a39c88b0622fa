//! String formatting commands (email, path, query).

use anyhow::Result;
use serde_json::json;

use sundry::{email, path, query};

use crate::cmd::OutputOpts;

/// Format a display name and address as a mailbox string.
pub fn cmd_email(name: &str, address: &str, out: OutputOpts) -> Result<()> {
    let mailbox = email::format_mailbox(name, address);
    out.emit("email", json!(&mailbox), &mailbox)
}

/// Build a platform-styled path from its parts.
pub fn cmd_path(
    dir: &str,
    filename: &str,
    extension: &str,
    drive: Option<&str>,
    out: OutputOpts,
) -> Result<()> {
    let formatted = path::format_path(dir, filename, extension, drive);
    out.emit("path", json!(&formatted), &formatted)
}

/// Build a product query string.
pub fn cmd_query(product: &str, quantity: i64, gift: bool, out: OutputOpts) -> Result<()> {
    let query_string = query::build_query_string(product, quantity, gift);
    out.emit("query", json!(&query_string), &query_string)
}
