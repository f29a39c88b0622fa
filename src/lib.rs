//! # Sundry - everyday formatting and conversion helpers
//!
//! A grab bag of small, independent, pure functions: mailbox formatting,
//! day-to-second conversion, platform-styled path building, Kelvin
//! conversion, numeric selection over mixed argument lists, flat-tax
//! arithmetic, and query-string construction. Each function is a stateless
//! transformation with no I/O; the `sundry` binary is a thin wrapper that
//! exposes them as subcommands.
//!
//! ## Modules
//!
//! - [`email`] - mailbox display formatting
//! - [`duration`] - days to seconds
//! - [`path`] - Unix/Windows path assembly
//! - [`temperature`] - Celsius/Fahrenheit to Kelvin
//! - [`minimum`] - smallest value in a mixed argument list
//! - [`odd`] - odd-number filtering
//! - [`tax`] - HST on integer cents
//! - [`query`] - query-string construction with component encoding
//! - [`value`] - the tagged union behind the mixed argument lists
//! - [`error`] - the two library error kinds
//!
//! ## Example
//!
//! ```
//! use sundry::temperature::temp_to_kelvin;
//! use sundry::value::Value;
//! use sundry::minimum::find_smallest;
//!
//! assert_eq!(temp_to_kelvin(80.0, Some("c")).unwrap(), "353.15 K");
//!
//! let values = vec![Value::from(3), Value::from("1"), Value::from(2)];
//! assert_eq!(find_smallest(&values).unwrap(), 1.0);
//! ```

pub mod duration;
pub mod email;
pub mod error;
pub mod minimum;
pub mod odd;
pub mod path;
pub mod query;
pub mod tax;
pub mod temperature;
pub mod value;

pub use error::{Error, Result};
pub use value::Value;
