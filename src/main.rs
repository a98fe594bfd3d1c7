// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    fs,
    io::{self, BufRead, BufReader, BufWriter},
    process::ExitCode,
};

use clap::Parser as _;
use tap_formatters::{cli::Opts, replay::replay, Tap};

fn main() -> ExitCode {
    let opts = Opts::parse();
    tracing_subscriber::fmt()
        .with_max_level(opts.log_level())
        .with_writer(io::stderr)
        .init();

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            eprintln!("tap-formatters: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Replays the input of the given [`Opts`] into a TAP report.
fn run(opts: &Opts) -> tap_formatters::Result<()> {
    let input: Box<dyn BufRead> = match &opts.input {
        Some(path) => Box::new(BufReader::new(fs::File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let count = match &opts.output {
        Some(path) => {
            let file = BufWriter::new(fs::File::create(path)?);
            replay(input, Tap::to_file(file, io::stdout(), opts.tap))?
        }
        None => replay(input, Tap::new(io::stdout(), opts.tap))?,
    };
    tracing::info!(count, "TAP report rendered");

    Ok(())
}
