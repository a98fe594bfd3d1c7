// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Key occurrences in a lifecycle of a test run.
//!
//! The top-level enum here is [`Event`]. Every variant carries only the data
//! its handler needs, so a host test runner is free to build these from
//! whatever object graph it keeps internally.

mod example;
mod group;
mod run;

pub use self::{
    example::{Example, Failure, FailureKind, Pending},
    group::{Group, GroupId},
    run::{Dump, Message, Seed, Start, Summary},
};

/// Lifecycle event of a test run, emitted by a host test runner.
///
/// Events are expected to arrive strictly sequentially, in the order the
/// host observes them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Deserialize),
    serde(tag = "event", rename_all = "snake_case")
)]
pub enum Event {
    /// Random seed of the run is known.
    Seed(Seed),

    /// Run is started.
    Start(Start),

    /// All examples have been executed and summaries are about to be dumped.
    StartDump,

    /// [`Group`] of examples is entered.
    GroupStarted(Group),

    /// [`Group`] of examples is left.
    GroupFinished(Group),

    /// [`Example`] execution is started.
    ExampleStarted,

    /// [`Example`] has passed.
    ExamplePassed(Example),

    /// [`Example`] has failed.
    ExampleFailed {
        /// Failed [`Example`].
        example: Example,

        /// Details of the [`Failure`].
        failure: Failure,
    },

    /// [`Example`] is pending or explicitly skipped.
    ExamplePending {
        /// Pending [`Example`].
        example: Example,

        /// Details of the [`Pending`] state.
        pending: Pending,
    },

    /// Arbitrary [`Message`] is reported by the host.
    Message(Message),

    /// Human-readable listing of the failed examples.
    DumpFailures(Dump),

    /// Human-readable listing of the pending examples.
    DumpPending(Dump),

    /// Totals of the whole run.
    DumpSummary(Summary),
}

impl Event {
    /// Constructs an event of a failed [`Example`].
    #[must_use]
    pub const fn failed(example: Example, failure: Failure) -> Self {
        Self::ExampleFailed { example, failure }
    }

    /// Constructs an event of a pending [`Example`].
    #[must_use]
    pub const fn pending(example: Example, pending: Pending) -> Self {
        Self::ExamplePending { example, pending }
    }

    /// Returns a snake-cased name of this [`Event`]'s kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Seed(_) => "seed",
            Self::Start(_) => "start",
            Self::StartDump => "start_dump",
            Self::GroupStarted(_) => "group_started",
            Self::GroupFinished(_) => "group_finished",
            Self::ExampleStarted => "example_started",
            Self::ExamplePassed(_) => "example_passed",
            Self::ExampleFailed { .. } => "example_failed",
            Self::ExamplePending { .. } => "example_pending",
            Self::Message(_) => "message",
            Self::DumpFailures(_) => "dump_failures",
            Self::DumpPending(_) => "dump_pending",
            Self::DumpSummary(_) => "dump_summary",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_snake_cased() {
        assert_eq!(Event::StartDump.name(), "start_dump");
        assert_eq!(
            Event::failed(Example::new("a", "a"), Failure::default()).name(),
            "example_failed",
        );
        assert_eq!(
            Event::DumpSummary(Summary::default()).name(),
            "dump_summary",
        );
    }
}
