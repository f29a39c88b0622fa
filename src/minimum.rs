//! Minimum selection over mixed argument lists.

use crate::error::{Error, Result};
use crate::value::Value;

/// Find the smallest numeric value in a mixed argument list.
///
/// Numbers compare directly and numeric text is coerced, so
/// `["1", "2", "3"]` yields `1.0`. Booleans, nulls, and non-numeric text
/// are rejected with [`Error::InvalidArgument`] rather than skipped;
/// rejection reports the position and kind of the offending value.
///
/// An empty list yields `f64::MIN_POSITIVE`, the smallest-above-zero
/// sentinel for "no data".
pub fn find_smallest(values: &[Value]) -> Result<f64> {
    let mut smallest: Option<f64> = None;

    for (position, value) in values.iter().enumerate() {
        let number = value.coerce_number().ok_or(Error::InvalidArgument {
            position,
            found: value.kind(),
        })?;
        smallest = Some(match smallest {
            Some(current) if current <= number => current,
            _ => number,
        });
    }

    Ok(smallest.unwrap_or(f64::MIN_POSITIVE))
}
