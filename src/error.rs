// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of this crate.
//!
//! Formatting itself never originates errors: every [`Writer`] operation
//! only reports failures of the underlying output, which are propagated
//! as-is.
//!
//! [`Writer`]: crate::Writer

use std::io;

use derive_more::with_trait::Display;

/// Top-level error of this crate.
#[derive(Debug, Display, derive_more::with_trait::Error)]
pub enum Error {
    /// Writing into an output failed.
    #[display("I/O operation failed: {_0}")]
    Io(io::Error),

    /// Input line couldn't be decoded into an [`Event`].
    ///
    /// [`Event`]: crate::Event
    #[cfg(feature = "json")]
    #[display("Failed to decode event on line {line}: {source}")]
    Decode {
        /// 1-based number of the offending input line.
        line: usize,

        /// Underlying decoding error.
        source: serde_json::Error,
    },
}

/// Result type alias with the [`Error`] of this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new [`Error::Decode`] for the given input `line`.
    #[cfg(feature = "json")]
    #[must_use]
    pub const fn decode(line: usize, source: serde_json::Error) -> Self {
        Self::Decode { line, source }
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn io_error_is_displayed_with_context() {
        let err = Error::from(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));

        assert!(err.is_io_error());
        assert_eq!(err.to_string(), "I/O operation failed: pipe closed");
        assert!(err.source().is_some());
    }

    #[test]
    fn boxes_into_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> =
            Error::from(io::Error::other("disk full")).into();

        assert_eq!(err.to_string(), "I/O operation failed: disk full");
    }

    #[cfg(feature = "json")]
    #[test]
    fn decode_error_names_line() {
        let source = serde_json::from_str::<serde_json::Value>("{")
            .expect_err("invalid JSON");
        let err = Error::decode(3, source);

        assert!(!err.is_io_error());
        assert!(err.to_string().starts_with("Failed to decode event on line 3: "));
        assert!(err.source().is_some());
    }
}
