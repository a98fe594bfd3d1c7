// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for outputting [`Event`]s.

pub mod diagnostics;
pub mod format;
pub mod out;
pub mod stats;
pub mod tap;

use std::io;

use crate::Event;

#[doc(inline)]
pub use self::{
    out::{Status, Styles, WritableString, WriteStrExt},
    tap::{Cli, Coloring, Tap, Variant},
};

/// Writer of [`Event`]s to some output.
///
/// Events are expected in the order a host test runner emits them, one at a
/// time.
pub trait Writer {
    /// Handles the given [`Event`].
    ///
    /// # Errors
    ///
    /// If writing into the underlying output fails.
    fn handle_event(&mut self, event: &Event) -> io::Result<()>;

    /// Handles all the given [`Event`]s in order, stopping at the first
    /// error.
    ///
    /// # Errors
    ///
    /// If writing into the underlying output fails.
    fn handle_all<'e, I>(&mut self, events: I) -> io::Result<()>
    where
        I: IntoIterator<Item = &'e Event>,
        Self: Sized,
    {
        events.into_iter().try_for_each(|ev| self.handle_event(ev))
    }

    /// Flushes all the buffered output.
    ///
    /// # Errors
    ///
    /// If flushing the underlying output fails.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<W: Writer + ?Sized> Writer for &mut W {
    fn handle_event(&mut self, event: &Event) -> io::Result<()> {
        (**self).handle_event(event)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
