// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Writer`] rendering [`Event`]s as a TAP report.

use std::io;

use crate::{
    event::Example,
    writer::{out::Status, stats::Outcome},
    Event, Writer,
};

use super::{Cli, Printer, Variant};

/// [TAP version 13][1] [`Writer`].
///
/// Renders [`Event`]s in one of the [`Variant`] layouts via a [`Printer`].
///
/// [1]: https://testanything.org/tap-version-13-specification.html
pub struct Tap<Out: io::Write = io::Stdout, Progress: io::Write = io::Stdout> {
    /// [`Printer`] keeping the state of the run.
    printer: Printer<Out, Progress>,

    /// Layout of the report.
    variant: Variant,
}

impl Tap {
    /// Creates a new [`Tap`] [`Writer`] outputting into the [`io::Stdout`].
    #[must_use]
    pub fn stdout(cli: Cli) -> Self {
        Self::new(io::stdout(), cli)
    }
}

impl<Out: io::Write> Tap<Out> {
    /// Creates a new [`Tap`] [`Writer`] outputting into the provided live
    /// terminal `output`.
    #[must_use]
    pub fn new(output: Out, cli: Cli) -> Self {
        Self {
            printer: Printer::new(output, cli.format.is_strict(), cli.color),
            variant: cli.format,
        }
    }
}

impl<Out: io::Write, Progress: io::Write> Tap<Out, Progress> {
    /// Creates a new [`Tap`] [`Writer`] outputting into the provided file
    /// `output`, and reporting progress into the `progress` one.
    #[must_use]
    pub fn to_file(output: Out, progress: Progress, cli: Cli) -> Self {
        Self {
            printer: Printer::to_file(
                output,
                progress,
                cli.format.is_strict(),
                cli.color,
            ),
            variant: cli.format,
        }
    }

    /// Returns the [`Variant`] of this [`Tap`] [`Writer`].
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the underlying [`Printer`].
    #[must_use]
    pub const fn printer(&self) -> &Printer<Out, Progress> {
        &self.printer
    }
}

impl<Out: io::Write, Progress: io::Write> Writer for Tap<Out, Progress> {
    fn handle_event(&mut self, event: &Event) -> io::Result<()> {
        tracing::trace!(event = event.name(), variant = %self.variant);

        let nested = self.variant.is_nested();
        let p = &mut self.printer;
        match event {
            Event::Seed(seed) => p.store_seed(*seed),
            Event::Start(start) => {
                tracing::debug!(
                    count = start.count,
                    variant = %self.variant,
                    "run started",
                );
                p.start_output(None)?;
            }
            Event::StartDump => p.example_progress_dump()?,
            Event::GroupStarted(group) if nested => {
                p.group_start_output(&group.description)?;
            }
            Event::GroupFinished(group) if nested => {
                p.group_finished_output(group.id)?;
            }
            Event::GroupStarted(_) | Event::GroupFinished(_) => {}
            Event::ExampleStarted => p.example_started(),
            Event::ExamplePassed(example) => {
                if nested {
                    p.record(&example.groups, Outcome::Passed);
                }
                p.example_progress_output(Status::Success)?;
                p.success_output(description(self.variant, example))?;
            }
            Event::ExampleFailed { example, failure } => {
                if nested {
                    p.record(&example.groups, Outcome::Failed);
                }
                p.example_progress_output(Status::Failure)?;
                p.failure_output(description(self.variant, example))?;
                if !self.variant.is_compact() {
                    let level = p.level() + 1;
                    p.failure_reason_output(
                        &example.location,
                        failure,
                        level,
                    )?;
                }
            }
            Event::ExamplePending { example, pending } => {
                if nested {
                    p.record(&example.groups, Outcome::Pending);
                }
                p.example_progress_output(Status::Pending)?;
                p.pending_output(
                    description(self.variant, example),
                    pending,
                )?;
            }
            Event::Message(msg) => p.message_output(msg)?,
            Event::DumpFailures(dump) => p.store_failed_examples_summary(dump),
            Event::DumpPending(dump) => p.store_pending_examples_summary(dump),
            Event::DumpSummary(summary) => p.summary_output(summary)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.printer.flush()
    }
}

/// Returns the description of the given [`Example`] to be rendered in the
/// given [`Variant`].
fn description(variant: Variant, example: &Example) -> &str {
    if variant.is_nested() {
        example.description.trim()
    } else {
        example.full_description.trim()
    }
}
