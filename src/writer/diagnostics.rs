// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! YAML diagnostics of failed examples.
//!
//! TAP allows a `not ok` line to be followed by an indented YAML document
//! (`---` ... `...`) describing the failure. This module builds such
//! documents out of a [`Failure`].

use std::fmt::Write as _;

use itertools::Itertools as _;
use lazy_regex::regex;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    event::{Failure, FailureKind},
    util,
};

use super::format::{indent, uncolorize_lines};

/// Maximum number of backtrace lines included into a [`DiagnosticRecord`].
pub const MAX_BACKTRACE_LINES: usize = 10;

/// Diagnostics of a single failed example.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticRecord {
    /// Source location of the failed example.
    pub location: String,

    /// Uncolored failure message.
    pub error: Option<String>,

    /// Uncolored backtrace of the failure.
    pub backtrace: Option<String>,
}

impl DiagnosticRecord {
    /// Builds a [`DiagnosticRecord`] out of the given [`Failure`] of an
    /// example at the given `location`.
    ///
    /// Returns [`None`] if the [`Failure`] has neither a message nor a
    /// backtrace to report.
    #[must_use]
    pub fn from_failure(
        location: impl Into<String>,
        failure: &Failure,
    ) -> Option<Self> {
        let (error, backtrace) = match &failure.kind {
            // Backtrace of an aggregated error points to the aggregation
            // itself, not to any of the failed expectations.
            FailureKind::Aggregate { message } => {
                (uncolorize_lines(message.split('\n')).join("\n"), None)
            }
            FailureKind::Single => (
                uncolorize_lines(&failure.message_lines).join("\n"),
                util::present(
                    uncolorize_lines(&failure.backtrace)
                        .take(MAX_BACKTRACE_LINES)
                        .join("\n"),
                ),
            ),
        };
        let error = util::present(error);

        (error.is_some() || backtrace.is_some()).then(|| Self {
            location: location.into(),
            error,
            backtrace,
        })
    }

    /// Encodes this [`DiagnosticRecord`] as a YAML document, with every line
    /// indented to the given nesting `level`.
    ///
    /// Absent fields are omitted. Multi-line values are emitted as literal
    /// block scalars, so they're preserved verbatim.
    #[must_use]
    pub fn encode(&self, level: usize) -> String {
        let fields = [
            ("location", Some(&self.location)),
            ("error", self.error.as_ref()),
            ("backtrace", self.backtrace.as_ref()),
        ];

        let mut doc = String::from("---\n");
        for (key, value) in fields {
            if let Some(value) = value {
                push_entry(&mut doc, key, value);
            }
        }
        doc.push_str("...\n");

        let prefix = indent(level);
        doc.lines().fold(String::with_capacity(doc.len()), |mut out, l| {
            _ = writeln!(out, "{prefix}{l}");
            out
        })
    }
}

/// Appends a `key: value` mapping entry to the given YAML `doc`.
fn push_entry(doc: &mut String, key: &str, value: &str) {
    if value.contains('\n') && is_block_safe(value) {
        let (body, chomping) = match value.strip_suffix('\n') {
            None => (value, "-"),
            Some(v) if v.ends_with('\n') => (v, "+"),
            Some(v) => (v, ""),
        };
        let leading_space = body
            .split('\n')
            .find(|l| !l.is_empty())
            .is_some_and(|l| l.starts_with([' ', '\t']));
        let indicator = if leading_space { "2" } else { "" };

        _ = writeln!(doc, "{key}: |{indicator}{chomping}");
        for line in body.split('\n') {
            if line.is_empty() {
                doc.push('\n');
            } else {
                _ = writeln!(doc, "  {line}");
            }
        }
    } else {
        _ = writeln!(doc, "{key}: {}", scalar(value));
    }
}

/// Checks whether the given multi-line `value` may be represented as a
/// literal block scalar.
fn is_block_safe(value: &str) -> bool {
    !value.chars().any(|c| c.is_control() && c != '\n' && c != '\t')
}

/// Renders a single-line `value` as a plain YAML scalar, or as a
/// double-quoted one if a plain scalar would be ambiguous.
fn scalar(value: &str) -> String {
    if needs_quotes(value) {
        quoted(value)
    } else {
        value.to_owned()
    }
}

/// Checks whether the given `value` cannot be emitted as a plain scalar.
fn needs_quotes(value: &str) -> bool {
    /// Characters a plain scalar cannot start with.
    const INDICATORS: &[char] = &[
        '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>',
        '\'', '"', '%', '@', '`',
    ];
    /// Plain scalars resolved to something other than a string.
    const RESERVED: &[&str] = &[
        "~", "null", "true", "false", "yes", "no", "on", "off", "y", "n",
    ];

    value.is_empty()
        || value.starts_with(INDICATORS)
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
        || value.contains(':')
        || value.contains(" #")
        || value.chars().any(char::is_control)
        || RESERVED.iter().any(|r| value.eq_ignore_ascii_case(r))
        || looks_numeric(value)
}

/// Checks whether the given `value` would be resolved as a number or a
/// timestamp by a YAML 1.1 reader.
fn looks_numeric(value: &str) -> bool {
    /// [`Regex`] matching YAML 1.1 integers and floats, including the
    /// digit-grouped and prefixed forms.
    static NUMBER_RE: &Lazy<Regex> = regex!(
        r"(?i)^[-+]?(0b[01_]+|0o?[0-7_]+|0x[0-9a-f_]+|[0-9][0-9_,]*(\.[0-9_]*)?(e[-+]?[0-9]+)?|\.[0-9_]+(e[-+]?[0-9]+)?|\.inf|\.nan)$"
    );
    /// [`Regex`] matching the date part of YAML 1.1 timestamps.
    static TIMESTAMP_RE: &Lazy<Regex> =
        regex!(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}([Tt ]|$)");

    value.parse::<f64>().is_ok()
        || NUMBER_RE.is_match(value)
        || TIMESTAMP_RE.is_match(value)
}

/// Renders the given `value` as a double-quoted YAML scalar.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => {
                _ = write!(out, "\\u{:04X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
