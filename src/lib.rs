// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! [TAP version 13][1] report formatters for test runners.
//!
//! A host test runner drives a [`Writer`] with lifecycle [`Event`]s (group
//! and example start, pass, fail, pending, run summary), and the
//! [`writer::Tap`] formatter renders them as a TAP stream:
//!
//! ```text
//! TAP version 13
//! pragma +strict
//! # test: Calc {
//!   ok 1 - adds
//!   not ok 2 - subtracts
//!     ---
//!     location: "./spec/calc_spec.rb:7"
//!     error: expected 2 got 1
//!     ...
//!   1..2
//!   # tests: 2, passed: 1, failed: 1
//! }
//! 1..2
//! # tests: 2, passed: 1, failed: 1
//! # duration: 0.0042 seconds
//! ```
//!
//! Four layouts are available through [`writer::tap::Variant`]: nested or
//! flat group structure, each with or without inline YAML failure
//! diagnostics.
//!
//! [1]: https://testanything.org/tap-version-13-specification.html

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod event;
#[cfg(feature = "json")]
pub mod replay;
pub mod util;
pub mod writer;

#[doc(inline)]
pub use self::{
    error::{Error, Result},
    event::Event,
    writer::{Tap, Writer},
};
