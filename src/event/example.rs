// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Single examples and their outcomes.

use super::GroupId;

/// Single example of a test run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize), serde(default))]
pub struct Example {
    /// Own description of this [`Example`].
    pub description: String,

    /// Description of this [`Example`] prefixed with descriptions of all its
    /// enclosing groups.
    pub full_description: String,

    /// Source location of this [`Example`] (like `./spec/foo_spec.rb:12`).
    pub location: String,

    /// Enclosing groups of this [`Example`], nearest first.
    ///
    /// Empty for an example outside of any group.
    pub groups: Vec<GroupId>,
}

impl Example {
    /// Creates a new [`Example`] outside of any group.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        full_description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            full_description: full_description.into(),
            location: String::new(),
            groups: Vec::new(),
        }
    }

    /// Sets the source `location` of this [`Example`].
    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the enclosing `groups` of this [`Example`], nearest first.
    #[must_use]
    pub fn within<I>(mut self, groups: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GroupId>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }
}

/// Kind of a [`Failure`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum FailureKind {
    /// Single failed expectation or an unexpected error.
    #[default]
    Single,

    /// Several expectations failed at once and were aggregated into a single
    /// error.
    Aggregate {
        /// Own (usually multi-line) message of the aggregated error.
        message: String,
    },
}

/// Details of a failed [`Example`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize), serde(default))]
pub struct Failure {
    /// [`FailureKind`] of this [`Failure`].
    pub kind: FailureKind,

    /// Lines of the failure message, possibly colored.
    pub message_lines: Vec<String>,

    /// Formatted backtrace lines, possibly colored.
    pub backtrace: Vec<String>,
}

impl Failure {
    /// Creates a new [`FailureKind::Single`] [`Failure`].
    #[must_use]
    pub fn new<M, B>(message_lines: M, backtrace: B) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            kind: FailureKind::Single,
            message_lines: message_lines.into_iter().map(Into::into).collect(),
            backtrace: backtrace.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a new [`FailureKind::Aggregate`] [`Failure`] with the given
    /// `message`.
    #[must_use]
    pub fn aggregate(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Aggregate { message: message.into() },
            message_lines: Vec::new(),
            backtrace: Vec::new(),
        }
    }
}

/// Details of a pending [`Example`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize), serde(default))]
pub struct Pending {
    /// Reason of the [`Example`] being pending.
    pub message: String,

    /// Indicator whether the [`Example`] was explicitly skipped, rather than
    /// marked as not implemented yet.
    pub skipped: bool,
}

impl Pending {
    /// Creates a new [`Pending`] not implemented yet.
    #[must_use]
    pub fn todo(message: impl Into<String>) -> Self {
        Self { message: message.into(), skipped: false }
    }

    /// Creates a new explicitly skipped [`Pending`].
    #[must_use]
    pub fn skip(message: impl Into<String>) -> Self {
        Self { message: message.into(), skipped: true }
    }
}
