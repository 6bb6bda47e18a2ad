//! Error types for incremental encoding.
//!
//! Encoding can fail in exactly two data-dependent ways, both recoverable and
//! both carrying the [`Path`] of the offending slot:
//!
//! - **Empty value**: a value's [`Encode`] implementation returned without
//!   writing anything into its encoder. A value that encodes nothing is not
//!   representable in the output tree.
//! - **Integer overflow**: an unsigned integer exceeded the signed 64-bit
//!   range of the integer leaf.
//!
//! Contract violations by an [`Encode`] implementation itself (requesting a
//! container kind that contradicts content already present at a slot, or
//! writing twice through a single-value slot) are bugs in that
//! implementation, not data errors, and panic instead of returning an error.
//!
//! [`Encode`]: crate::Encode
//!
//! ## Examples
//!
//! ```rust
//! use graft::{to_value, Error};
//!
//! // u64::MAX does not fit the signed 64-bit integer leaf.
//! let result = to_value(&u64::MAX);
//! assert!(matches!(result, Err(Error::IntegerOverflow { .. })));
//! ```

use crate::path::Path;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding a value tree
/// or writing its rendered form.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A (possibly nested) encoder completed without a value being written
    /// into it.
    #[error("no value was encoded at {path}")]
    EmptyValue {
        /// Where in the tree the missing value was expected.
        path: Path,
    },

    /// An unsigned integer does not fit the signed 64-bit integer leaf.
    #[error("unsigned integer {value} overflows the signed 64-bit range at {path}")]
    IntegerOverflow {
        /// The offending value.
        value: u64,
        /// Where in the tree the value was being written.
        path: Path,
    },

    /// IO error while writing rendered output.
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised by an [`Encode`](crate::Encode) implementation.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an empty-value error for the slot at `path`.
    pub fn empty_value(path: Path) -> Self {
        Error::EmptyValue { path }
    }

    /// Creates an integer-overflow error for `value` at `path`.
    pub fn integer_overflow(value: u64, path: Path) -> Self {
        Error::IntegerOverflow { value, path }
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graft::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// The tree position attached to this error, if it has one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::EmptyValue { path } | Error::IntegerOverflow { path, .. } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSegment;

    #[test]
    fn test_error_messages_carry_path() {
        let path = Path::root().child(PathSegment::Key("count".to_string()));
        let err = Error::integer_overflow(u64::MAX, path.clone());
        assert!(err.to_string().contains("$.count"));
        assert_eq!(err.path(), Some(&path));

        let err = Error::empty_value(Path::root().child(PathSegment::Index(4)));
        assert!(err.to_string().contains("$[4]"));
    }

    #[test]
    fn test_custom_has_no_path() {
        assert_eq!(Error::custom("boom").path(), None);
    }
}
