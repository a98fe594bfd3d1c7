// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Stateful renderer of a TAP report.

use std::{borrow::Cow, io};

use crate::{
    event::{Dump, Failure, GroupId, Message, Pending, Seed, Summary},
    util,
    writer::{
        diagnostics::DiagnosticRecord,
        format::{indent, stats_line, uncolorize_lines},
        out::{Status, Styles, WriteStrExt as _},
        stats::{Outcome, Rollup, TestStats},
    },
};

use super::Coloring;

/// Renderer of TAP lines, keeping the state of a single run.
///
/// Owns the nesting level, the ordinal of the current example, the run's
/// seed, per-group [`TestStats`] and the end-of-run summaries.
///
/// # Sinks
///
/// The primary `output` receives the TAP stream. When it's a file (see
/// [`Printer::to_file()`]), TAP lines are never colored, while progress
/// marks (`.`, `F`, `*`) and the end-of-run summaries go to the secondary
/// `progress` output instead, so a terminal still shows what's going on.
///
/// # Bailing out
///
/// Once a failure outside of any example is reported via
/// [`Printer::message_output()`], the [`Printer`] announces `Bail out!` and
/// stops producing any output.
pub struct Printer<Out: io::Write, Progress: io::Write = io::Stdout> {
    /// Primary output of the TAP stream.
    output: Out,

    /// Secondary output for progress marks and summaries in file mode.
    progress: Progress,

    /// [`Styles`] for colored output.
    styles: Styles,

    /// Indicator whether the [`Printer::output`] is a file.
    to_file: bool,

    /// Indicator whether `pragma +strict` should be emitted.
    strict: bool,

    /// Current nesting level.
    level: usize,

    /// Ordinal of the current example inside the innermost group.
    example_number: usize,

    /// Seed of the run, if it was used for ordering examples.
    seed: Option<u64>,

    /// Statistics of the current top-level group.
    stats: TestStats,

    /// Indicator whether the run has bailed out.
    bailed_out: bool,

    /// Human-readable listing of failed examples.
    failed_examples: Option<String>,

    /// Human-readable listing of pending examples.
    pending_examples: Option<String>,
}

impl<Out: io::Write> Printer<Out> {
    /// Creates a new [`Printer`] writing into a live terminal `output`.
    ///
    /// TAP lines are colored if enabled by the given [`Coloring`].
    #[must_use]
    pub fn new(output: Out, strict: bool, coloring: Coloring) -> Self {
        Self::with_sinks(output, io::stdout(), false, strict, coloring)
    }
}

impl<Out: io::Write, Progress: io::Write> Printer<Out, Progress> {
    /// Creates a new [`Printer`] writing into a file `output`, and reporting
    /// progress into the `progress` one.
    ///
    /// Only progress marks are colored, if enabled by the given
    /// [`Coloring`].
    #[must_use]
    pub fn to_file(
        output: Out,
        progress: Progress,
        strict: bool,
        coloring: Coloring,
    ) -> Self {
        Self::with_sinks(output, progress, true, strict, coloring)
    }

    /// Creates a new [`Printer`] out of the provided sinks.
    fn with_sinks(
        output: Out,
        progress: Progress,
        to_file: bool,
        strict: bool,
        coloring: Coloring,
    ) -> Self {
        let mut styles = Styles::new();
        styles.apply_coloring(coloring);
        Self {
            output,
            progress,
            styles,
            to_file,
            strict,
            level: 0,
            example_number: 0,
            seed: None,
            stats: TestStats::new(),
            bailed_out: false,
            failed_examples: None,
            pending_examples: None,
        }
    }

    /// Returns the primary output of this [`Printer`].
    #[must_use]
    pub const fn output(&self) -> &Out {
        &self.output
    }

    /// Returns the progress output of this [`Printer`].
    #[must_use]
    pub const fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Returns the current nesting level.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Returns the ordinal of the current example.
    #[must_use]
    pub const fn example_number(&self) -> usize {
        self.example_number
    }

    /// Returns the stored seed of the run, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Indicates whether the run has bailed out.
    #[must_use]
    pub const fn is_bailed_out(&self) -> bool {
        self.bailed_out
    }

    /// Returns statistics of the current top-level group.
    #[must_use]
    pub const fn stats(&self) -> &TestStats {
        &self.stats
    }

    /// Stores the given [`Seed`], if it was used and none is stored yet.
    pub fn store_seed(&mut self, seed: Seed) {
        if seed.used && self.seed.is_none() {
            self.seed = Some(seed.seed);
        }
    }

    /// Outputs the TAP header, followed by a plan if the `count` of examples
    /// is known upfront.
    ///
    /// # Errors
    ///
    /// If writing into the output fails.
    pub fn start_output(&mut self, count: Option<usize>) -> io::Result<()> {
        tracing::debug!(?count, strict = self.strict, "TAP report started");

        self.puts("TAP version 13")?;
        if self.strict {
            self.puts("pragma +strict")?;
        }
        if let Some(count) = count {
            self.puts(format!("1..{count}"))?;
        }
        Ok(())
    }

    /// Terminates the line of progress marks, if writing into a file.
    ///
    /// # Errors
    ///
    /// If writing into the progress output fails.
    pub fn example_progress_dump(&mut self) -> io::Result<()> {
        if !self.to_file || self.bailed_out {
            return Ok(());
        }
        self.progress.write_line("")?;
        self.progress.flush()
    }

    /// Opens a group with the given `description` and enters it.
    ///
    /// # Errors
    ///
    /// If writing into the output fails.
    pub fn group_start_output(&mut self, description: &str) -> io::Result<()> {
        let level = self.level;
        self.level += 1;
        self.example_number = 0;
        tracing::trace!(level, description, "group entered");

        let kind = if level == 0 { "test" } else { "group" };
        let line = self.colored_line(
            format!("{}# {kind}: {} {{", indent(level), description.trim()),
            Status::Detail,
        );
        self.puts(line)
    }

    /// Closes the group with the given [`GroupId`], outputting its plan and
    /// statistics, and leaves it.
    ///
    /// Statistics are discarded once the top-level group is left.
    ///
    /// # Errors
    ///
    /// If writing into the output fails.
    pub fn group_finished_output(&mut self, id: GroupId) -> io::Result<()> {
        let level = self.level;
        let rollup = self.stats.rollup(id);
        self.level = level.saturating_sub(1);
        tracing::trace!(level, %id, ?rollup, "group left");
        if self.level == 0 {
            tracing::debug!("top-level group finished, resetting statistics");
            self.stats = TestStats::new();
        }

        self.puts(format!("{}1..{}", indent(level), rollup.total))?;
        self.puts(stats_line(rollup, level))?;
        let close = self.colored_line(
            format!("{}}}", indent(level.saturating_sub(1))),
            Status::Detail,
        );
        self.puts(close)
    }

    /// Advances the ordinal of the current example.
    pub fn example_started(&mut self) {
        self.example_number += 1;
    }

    /// Counts an example with the given [`Outcome`] in all its `groups`.
    pub fn record(&mut self, groups: &[GroupId], outcome: Outcome) {
        self.stats.populate(groups, outcome);
    }

    /// Outputs a progress mark of the given [`Status`], if writing into a
    /// file.
    ///
    /// # Errors
    ///
    /// If writing into the progress output fails.
    pub fn example_progress_output(&mut self, status: Status) -> io::Result<()> {
        if !self.to_file || self.bailed_out {
            return Ok(());
        }
        let mark = self.styles.paint(status.progress_mark(), status);
        self.progress.write_str(mark)?;
        self.progress.flush()
    }

    /// Outputs an `ok` line of a passed example.
    ///
    /// # Errors
    ///
    /// If writing into the output fails.
    pub fn success_output(&mut self, description: &str) -> io::Result<()> {
        let line = self.colored_line(
            format!(
                "{}ok {} - {}",
                indent(self.level),
                self.example_number,
                description.trim(),
            ),
            Status::Success,
        );
        self.puts(line)
    }

    /// Outputs a `not ok` line of a failed example.
    ///
    /// # Errors
    ///
    /// If writing into the output fails.
    pub fn failure_output(&mut self, description: &str) -> io::Result<()> {
        let line = self.colored_line(
            format!(
                "{}not ok {} - {}",
                indent(self.level),
                self.example_number,
                description.trim(),
            ),
            Status::Failure,
        );
        self.puts(line)
    }

    /// Outputs YAML diagnostics of the given [`Failure`] at the given nesting
    /// `level`.
    ///
    /// Nothing is output if the [`Failure`] has nothing to report.
    ///
    /// # Errors
    ///
    /// If writing into the output fails.
    pub fn failure_reason_output(
        &mut self,
        location: &str,
        failure: &Failure,
        level: usize,
    ) -> io::Result<()> {
        match DiagnosticRecord::from_failure(location, failure) {
            Some(record) if !self.bailed_out => {
                self.output.write_str(record.encode(level))
            }
            _ => Ok(()),
        }
    }

    /// Outputs an `ok` line of a pending example with a `SKIP`/`TODO`
    /// directive.
    ///
    /// # Errors
    ///
    /// If writing into the output fails.
    pub fn pending_output(
        &mut self,
        description: &str,
        pending: &Pending,
    ) -> io::Result<()> {
        let line = self.colored_line(
            format!(
                "{}ok {} - {} # {}",
                indent(self.level),
                self.example_number,
                description.trim(),
                pending_directive(pending),
            ),
            Status::Pending,
        );
        self.puts(line)
    }

    /// Bails out the run, if the given [`Message`] reports a failure outside
    /// of any example.
    ///
    /// Message lines are passed through as TAP comments.
    ///
    /// # Errors
    ///
    /// If writing into the output fails.
    pub fn message_output(&mut self, message: &Message) -> io::Result<()> {
        if self.bailed_out || !message.non_example_failure {
            return Ok(());
        }
        self.bailed_out = true;
        tracing::debug!("non-example failure reported, bailing out");

        self.output.write_line("TAP version 13")?;
        if self.strict {
            self.output.write_line("pragma +strict")?;
        }
        self.output.write_line("1..0")?;
        self.output.write_line("Bail out!")?;
        for line in uncolorize_lines(message.text.split('\n')) {
            match line.strip_prefix('#') {
                Some(rest) => {
                    self.output.write_line(format!("# {}", rest.trim()))
                }
                None => self.output.write_line(format!("# {line}")),
            }?;
        }
        self.output.flush()
    }

    /// Stores the listing of failed examples to be output with the summary.
    pub fn store_failed_examples_summary(&mut self, dump: &Dump) {
        if let Some(listing) = Self::listing(dump) {
            tracing::trace!(count = dump.count, "failed examples stored");
            self.failed_examples = Some(listing);
        }
    }

    /// Stores the listing of pending examples to be output with the summary.
    pub fn store_pending_examples_summary(&mut self, dump: &Dump) {
        if let Some(listing) = Self::listing(dump) {
            tracing::trace!(count = dump.count, "pending examples stored");
            self.pending_examples = Some(listing);
        }
    }

    /// Outputs the plan and totals of the whole run, followed by the stored
    /// listings of failed and pending examples.
    ///
    /// Only the plan is output if no examples were run.
    ///
    /// # Errors
    ///
    /// If writing into any of the outputs fails.
    pub fn summary_output(&mut self, summary: &Summary) -> io::Result<()> {
        if self.bailed_out {
            return Ok(());
        }

        self.puts(format!("1..{}", summary.example_count))?;
        if summary.example_count == 0 {
            return self.output.flush();
        }

        let rollup = Rollup {
            total: summary.example_count,
            passed: summary.passed_count(),
            failed: summary.failed_count,
            pending: summary.pending_count,
        };
        self.puts(stats_line(rollup, 0))?;
        self.puts(format!(
            "# duration: {} seconds",
            summary.duration.as_secs_f64(),
        ))?;
        if let Some(seed) = self.seed {
            self.puts(format!("# seed: {seed}"))?;
        }

        let listings = [self.failed_examples.take(), self.pending_examples.take()];
        for listing in listings.into_iter().flatten() {
            if self.to_file {
                self.progress.write_terminated(listing)?;
            } else {
                self.output.write_terminated(listing)?;
            }
        }
        if self.to_file {
            self.progress.flush()?;
        }
        self.output.flush()
    }

    /// Flushes both the output and the progress channel.
    ///
    /// # Errors
    ///
    /// If flushing any of the outputs fails.
    pub fn flush(&mut self) -> io::Result<()> {
        self.progress.flush()?;
        self.output.flush()
    }

    /// Returns the listing of the given [`Dump`], if there is any.
    fn listing(dump: &Dump) -> Option<String> {
        (dump.count > 0)
            .then(|| util::present(dump.formatted.clone()))
            .flatten()
    }

    /// Colors the given TAP `line` with the given [`Status`], unless writing
    /// into a file.
    fn colored_line<'a>(
        &self,
        line: impl Into<Cow<'a, str>>,
        status: Status,
    ) -> Cow<'a, str> {
        if self.to_file {
            line.into()
        } else {
            self.styles.paint(line, status)
        }
    }

    /// Writes the given TAP `line` into the output, unless bailed out.
    fn puts(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        if self.bailed_out {
            return Ok(());
        }
        self.output.write_line(line)
    }
}

/// Returns a TAP directive of the given [`Pending`] example.
#[must_use]
pub fn pending_directive(pending: &Pending) -> String {
    if pending.skipped {
        format!("SKIP: {}", pending.message)
    } else {
        format!("TODO: {}", pending.message)
    }
}
