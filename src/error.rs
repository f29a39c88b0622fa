//! Library error types.
//!
//! The library has exactly two failure modes: an unrecognized temperature
//! unit, and a non-numeric value in an argument list that requires numbers.
//! Every other function is total and encodes its policy as a default or
//! sentinel value instead of an error.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Temperature unit outside the accepted `c`/`f` vocabulary.
    #[error("invalid temperature unit '{0}': expected 'c' or 'f'")]
    InvalidUnit(String),

    /// A value that cannot participate in numeric selection.
    #[error("invalid argument at position {position}: expected a number, found {found}")]
    InvalidArgument {
        /// Zero-based position in the argument list.
        position: usize,
        /// Kind of the offending value ("boolean", "null", "string").
        found: &'static str,
    },
}
