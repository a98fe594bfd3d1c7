// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Example groups.

use derive_more::with_trait::{Display, From};

/// Identifier of a [`Group`], unique within a single run.
///
/// The host may use anything stable for this: a scoped id, a definition line
/// number, etc. The only requirement is that a [`Group`] and the ancestor
/// chain of any of its [`Example`]s agree on it.
///
/// [`Example`]: super::Example
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, Hash, Ord, PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "json", derive(serde::Deserialize), serde(transparent))]
pub struct GroupId(pub u64);

/// Group of examples (and, possibly, nested groups).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
pub struct Group {
    /// [`GroupId`] of this [`Group`].
    pub id: GroupId,

    /// Own description of this [`Group`].
    pub description: String,
}

impl Group {
    /// Creates a new [`Group`].
    #[must_use]
    pub fn new(id: impl Into<GroupId>, description: impl Into<String>) -> Self {
        Self { id: id.into(), description: description.into() }
    }
}
