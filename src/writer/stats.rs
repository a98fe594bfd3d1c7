// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-group statistics of examples.

use std::collections::HashMap;

use crate::event::GroupId;

/// Outcome of a finished example.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    /// Example has passed.
    Passed,

    /// Example has failed.
    Failed,

    /// Example is pending or skipped.
    Pending,
}

/// Aggregated counters of examples in a group, including its descendant
/// groups.
///
/// `total` always equals `passed + failed + pending`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rollup {
    /// Number of all examples.
    pub total: usize,

    /// Number of passed examples.
    pub passed: usize,

    /// Number of failed examples.
    pub failed: usize,

    /// Number of pending examples.
    pub pending: usize,
}

impl Rollup {
    /// Counts a single example with the given [`Outcome`].
    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Pending => self.pending += 1,
        }
    }

    /// Returns `true` if no examples were counted yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Statistics of examples, grouped by [`GroupId`].
///
/// Lives no longer than a single top-level group: once it's closed, a fresh
/// [`TestStats`] should be used for the next one.
#[derive(Clone, Debug, Default)]
pub struct TestStats {
    /// [`Rollup`]s of every group seen so far.
    data: HashMap<GroupId, Rollup>,
}

impl TestStats {
    /// Creates new empty [`TestStats`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts an example with the given [`Outcome`] in every group of its
    /// `groups` chain (the example's own group and all its ancestors).
    pub fn populate<'a>(
        &mut self,
        groups: impl IntoIterator<Item = &'a GroupId>,
        outcome: Outcome,
    ) {
        for id in groups {
            self.data.entry(*id).or_default().record(outcome);
        }
    }

    /// Returns the [`Rollup`] of the given group, or an empty one if nothing
    /// was counted for it.
    #[must_use]
    pub fn rollup(&self, id: GroupId) -> Rollup {
        self.data.get(&id).copied().unwrap_or_default()
    }

    /// Returns `true` if no examples were counted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
