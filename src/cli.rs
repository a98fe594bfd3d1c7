// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI (command line interface) of the `tap-formatters` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::writer::tap;

/// Root CLI of the `tap-formatters` binary.
///
/// Replays lifecycle [`Event`]s encoded as JSON lines into a TAP report.
///
/// [`Event`]: crate::Event
#[derive(Clone, Debug, Parser)]
#[command(
    name = "tap-formatters",
    about = "Render a stream of test lifecycle events as a TAP report",
    long_about = None,
)]
pub struct Opts {
    /// File with JSON-encoded events, one per line. Reads the standard
    /// input if omitted.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// File to write the TAP report into. Progress and summaries of failed
    /// and pending examples are printed to the standard output then.
    #[arg(short, long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increases verbosity of the diagnostic logs printed to the standard
    /// error (may be repeated).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// TAP writer CLI options.
    #[command(flatten)]
    pub tap: tap::Cli,
}

impl Opts {
    /// Returns the most verbose [`tracing::Level`] to log at.
    #[must_use]
    pub const fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
