//! Odd-number filtering over mixed argument lists.

use crate::value::Value;

/// Collect the odd numbers from a mixed argument list into a comma-joined
/// string, preserving order: `1, 3, 5`.
///
/// Only genuine numbers participate. Numeric text is excluded rather than
/// coerced, the opposite of [`crate::minimum::find_smallest`]'s policy.
/// Returns `None` when the list is empty or nothing qualifies; an empty
/// string is never produced.
pub fn odd_numbers(values: &[Value]) -> Option<String> {
    let odds: Vec<String> = values
        .iter()
        .filter_map(Value::as_number)
        .filter(|n| (n % 2.0).abs() == 1.0)
        .map(|n| n.to_string())
        .collect();

    if odds.is_empty() {
        None
    } else {
        Some(odds.join(", "))
    }
}
