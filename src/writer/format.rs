// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Formatting utilities for TAP lines.

use std::borrow::Cow;

use itertools::Itertools as _;
use lazy_regex::regex;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::util;

use super::stats::Rollup;

/// Width of a single indentation level.
const INDENT: &str = "  ";

/// Returns indentation of the given nesting `level`.
#[must_use]
pub fn indent(level: usize) -> String {
    INDENT.repeat(level)
}

/// Strips ANSI color sequences (`ESC[<n>(;<n>)*m`) from the given `line`.
///
/// Blank lines are returned "as is".
#[must_use]
pub fn strip_color(line: &str) -> Cow<'_, str> {
    /// [`Regex`] matching ANSI SGR color sequences.
    static ANSI_COLOR_RE: &Lazy<Regex> = regex!("\x1b\\[(\\d+)(;\\d+)*m");

    if util::is_blank(line) {
        return line.into();
    }
    ANSI_COLOR_RE.replace_all(line, "")
}

/// Strips colors from every of the given `lines`, dropping [blank] ones.
///
/// [blank]: util::is_blank
pub fn uncolorize_lines<I>(lines: I) -> impl Iterator<Item = String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .map(|l| strip_color(l.as_ref()).into_owned())
        .filter(|l| util::is_present(l))
}

/// Formats the given [`Rollup`] as a `# tests: N, passed: N, ...` comment
/// line at the given nesting `level`.
///
/// Zero counters are omitted.
#[must_use]
pub fn stats_line(rollup: Rollup, level: usize) -> String {
    let stats = [
        ("tests", rollup.total),
        ("passed", rollup.passed),
        ("failed", rollup.failed),
        ("pending", rollup.pending),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(key, count)| format!("{key}: {count}"))
    .join(", ");

    format!("{}# {stats}", indent(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_is_two_spaces_per_level() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "  ");
        assert_eq!(indent(3), "      ");
    }

    #[test]
    fn strips_colors() {
        assert_eq!(
            strip_color("\x1b[0;31mcolored line\x1b[0m"),
            "colored line",
        );
        assert_eq!(strip_color("\x1b[1;32;40mbold\x1b[0m tail"), "bold tail");
    }

    #[test]
    fn strip_color_is_idempotent() {
        for s in ["plain", "", "  ", "\x1b[31mred\x1b[0m", "\x1b[ not a code"] {
            let once = strip_color(s).into_owned();
            assert_eq!(strip_color(&once), once);
        }
    }

    #[test]
    fn strip_color_leaves_plain_text() {
        assert!(matches!(strip_color("no codes here"), Cow::Borrowed(_)));
        assert_eq!(strip_color("   "), "   ");
    }

    #[test]
    fn uncolorize_lines_drops_blank() {
        let lines = ["\x1b[31mfirst\x1b[0m", "", "  ", "\x1b[0m", "second"];

        assert_eq!(
            uncolorize_lines(lines).collect::<Vec<_>>(),
            ["first", "second"],
        );
    }

    #[test]
    fn stats_line_omits_zeroes() {
        let rollup = Rollup { total: 5, passed: 5, failed: 0, pending: 0 };

        assert_eq!(stats_line(rollup, 0), "# tests: 5, passed: 5");
    }

    #[test]
    fn stats_line_is_indented() {
        let rollup = Rollup { total: 4, passed: 1, failed: 2, pending: 1 };

        assert_eq!(
            stats_line(rollup, 2),
            "    # tests: 4, passed: 1, failed: 2, pending: 1",
        );
    }
}
