// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Run-wide events.

use std::time::Duration;

/// Random seed of a run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
pub struct Seed {
    /// Seed value.
    pub seed: u64,

    /// Indicator whether the seed was actually used to order examples.
    #[cfg_attr(feature = "json", serde(default))]
    pub used: bool,
}

/// Start of a run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize), serde(default))]
pub struct Start {
    /// Number of examples the host is going to run.
    pub count: usize,
}

/// Arbitrary message reported by the host.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize), serde(default))]
pub struct Message {
    /// Text of the message, possibly multi-line and colored.
    pub text: String,

    /// Indicator whether the message reports a failure that happened outside
    /// of any example (like a load error), so the run cannot go on.
    pub non_example_failure: bool,
}

/// Human-readable listing of examples, rendered by the host.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize), serde(default))]
pub struct Dump {
    /// Number of listed examples.
    pub count: usize,

    /// Fully formatted listing.
    pub formatted: String,
}

/// Totals of a finished run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize), serde(default))]
pub struct Summary {
    /// Total number of run examples.
    pub example_count: usize,

    /// Number of failed examples.
    pub failed_count: usize,

    /// Number of pending examples.
    pub pending_count: usize,

    /// Wall-clock duration of the run.
    #[cfg_attr(feature = "json", serde(with = "secs"))]
    pub duration: Duration,
}

impl Summary {
    /// Returns number of passed examples.
    #[must_use]
    pub const fn passed_count(&self) -> usize {
        self.example_count
            .saturating_sub(self.failed_count)
            .saturating_sub(self.pending_count)
    }
}

/// [`Duration`] encoded as fractional seconds.
#[cfg(feature = "json")]
mod secs {
    use std::time::Duration;

    use serde::{de::Error as _, Deserialize as _, Deserializer};

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        de: D,
    ) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(de)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}
