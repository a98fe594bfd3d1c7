// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for writing output.

use std::{borrow::Cow, io, str};

use console::Style;
use derive_more::with_trait::{Display, From};

use super::Coloring;

/// Status an output line is styled with.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    /// Auxiliary details, like group boundaries.
    Detail,

    /// Passed example.
    Success,

    /// Failed example.
    Failure,

    /// Pending or skipped example.
    Pending,
}

impl Status {
    /// Returns a single-character progress mark of this [`Status`].
    #[must_use]
    pub const fn progress_mark(self) -> &'static str {
        match self {
            Self::Detail => "",
            Self::Success => ".",
            Self::Failure => "F",
            Self::Pending => "*",
        }
    }
}

/// [`Style`]s for terminal output.
#[derive(Clone, Debug)]
pub struct Styles {
    /// [`Style`] for rendering [`Status::Detail`].
    pub detail: Style,

    /// [`Style`] for rendering [`Status::Success`].
    pub success: Style,

    /// [`Style`] for rendering [`Status::Failure`].
    pub failure: Style,

    /// [`Style`] for rendering [`Status::Pending`].
    pub pending: Style,

    /// Indicates whether coloring is enabled.
    pub is_present: bool,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            detail: Style::new().cyan().force_styling(true),
            success: Style::new().green().force_styling(true),
            failure: Style::new().red().force_styling(true),
            pending: Style::new().yellow().force_styling(true),
            is_present: console::colors_enabled(),
        }
    }
}

impl Styles {
    /// Creates new [`Styles`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the given [`Coloring`] to these [`Styles`].
    pub fn apply_coloring(&mut self, color: Coloring) {
        match color {
            Coloring::Auto => {}
            Coloring::Always => self.is_present = true,
            Coloring::Never => self.is_present = false,
        }
    }

    /// If coloring is enabled, colors `input` with the [`Style`] of the
    /// given [`Status`], or leaves it "as is" otherwise.
    #[must_use]
    pub fn paint<'a>(
        &self,
        input: impl Into<Cow<'a, str>>,
        status: Status,
    ) -> Cow<'a, str> {
        let input = input.into();
        if self.is_present {
            self.style(status).apply_to(input).to_string().into()
        } else {
            input
        }
    }

    /// Returns the [`Style`] of the given [`Status`].
    #[must_use]
    pub const fn style(&self, status: Status) -> &Style {
        match status {
            Status::Detail => &self.detail,
            Status::Success => &self.success,
            Status::Failure => &self.failure,
            Status::Pending => &self.pending,
        }
    }
}

/// [`io::Write`] extension for easier manipulation with strings.
pub trait WriteStrExt: io::Write {
    /// Writes the given `string` into this writer.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_str(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        self.write_all(string.as_ref().as_bytes())
    }

    /// Writes the given `string` into this writer followed by a newline.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_line(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        self.write_str(string.as_ref())
            .and_then(|()| self.write_str("\n"))
    }

    /// Writes the given `string` into this writer, followed by a newline only
    /// if the `string` doesn't end with one already.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_terminated(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        let string = string.as_ref();
        if string.ends_with('\n') {
            self.write_str(string)
        } else {
            self.write_line(string)
        }
    }
}

impl<T: io::Write + ?Sized> WriteStrExt for T {}

/// [`String`] wrapper implementing [`io::Write`].
#[derive(
    Clone, Debug, Default, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd,
)]
pub struct WritableString(pub String);

impl WritableString {
    /// Returns the written content as a [`str`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl io::Write for WritableString {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.push_str(
            str::from_utf8(buf)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        );
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
