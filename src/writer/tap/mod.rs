// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [TAP version 13][1] formatters.
//!
//! [`Tap`] is a [`Writer`] driving a [`Printer`] in one of the four
//! [`Variant`] layouts:
//!
//! | [`Variant`]     | Groups      | Description | Failure diagnostics |
//! |-----------------|-------------|-------------|---------------------|
//! | `nested`        | subtests    | own         | at `level + 1`      |
//! | `nested-compact`| subtests    | own         | none                |
//! | `flat`          | not shown   | full        | at level 1          |
//! | `flat-compact`  | not shown   | full        | none                |
//!
//! [`Writer`]: crate::Writer
//! [1]: https://testanything.org/tap-version-13-specification.html

pub mod cli;
pub mod formatter;
pub mod printer;

#[doc(inline)]
pub use self::{
    cli::{Cli, Coloring, Variant},
    formatter::Tap,
    printer::{pending_directive, Printer},
};
