//! Mailbox display formatting.

/// Combine a display name and an address into a mailbox string:
/// `Kim <kim@example.com>`.
///
/// The address is not validated; this is display formatting only.
pub fn format_mailbox(name: &str, email: &str) -> String {
    format!("{} <{}>", name, email)
}
