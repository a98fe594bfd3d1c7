// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options of the [`Tap`] writer.
//!
//! [`Tap`]: super::Tap

use std::{fmt, str::FromStr};

use smart_default::SmartDefault;

/// CLI options of a [`Tap`] [`Writer`].
///
/// [`Tap`]: super::Tap
/// [`Writer`]: crate::Writer
#[derive(Clone, Copy, Debug, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Layout of the TAP report.
    ///
    /// `nested` outputs groups as TAP subtests with YAML diagnostics of
    /// failures, `flat` outputs a single plan of fully described examples.
    /// `-compact` flavors omit the diagnostics.
    #[arg(
        long = "tap-format",
        value_name = "nested|nested-compact|flat|flat-compact",
        default_value = "nested",
        global = true
    )]
    #[default(Variant::Nested)]
    pub format: Variant,

    /// Coloring policy for a console output.
    #[arg(
        long,
        value_name = "auto|always|never",
        default_value = "auto",
        global = true
    )]
    #[default(Coloring::Auto)]
    pub color: Coloring,
}

/// Layout of a TAP report.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Variant {
    /// Groups are nested TAP subtests, failures are followed by YAML
    /// diagnostics.
    #[default]
    Nested,

    /// Groups are nested TAP subtests, failures are reported without
    /// diagnostics.
    NestedCompact,

    /// Examples are listed in a single plan under their full descriptions,
    /// failures are followed by YAML diagnostics.
    Flat,

    /// Examples are listed in a single plan under their full descriptions,
    /// failures are reported without diagnostics.
    FlatCompact,
}

impl Variant {
    /// Indicates whether groups are rendered as nested subtests.
    #[must_use]
    pub const fn is_nested(self) -> bool {
        matches!(self, Self::Nested | Self::NestedCompact)
    }

    /// Indicates whether YAML diagnostics of failures are omitted.
    #[must_use]
    pub const fn is_compact(self) -> bool {
        matches!(self, Self::NestedCompact | Self::FlatCompact)
    }

    /// Indicates whether the `pragma +strict` line is emitted.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        self.is_nested()
    }
}

impl FromStr for Variant {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nested" => Ok(Self::Nested),
            "nested-compact" | "compact" => Ok(Self::NestedCompact),
            "flat" => Ok(Self::Flat),
            "flat-compact" => Ok(Self::FlatCompact),
            _ => Err(
                "possible options: nested, nested-compact, flat, flat-compact",
            ),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nested => "nested",
            Self::NestedCompact => "nested-compact",
            Self::Flat => "flat",
            Self::FlatCompact => "flat-compact",
        })
    }
}

/// Possible policies of a [`console`] output coloring.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Coloring {
    /// Letting [`console::colors_enabled()`] to decide, whether output should
    /// be colored.
    #[default]
    Auto,

    /// Forcing of a colored output.
    Always,

    /// Forcing of a non-colored output.
    Never,
}

impl FromStr for Coloring {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("possible options: auto, always, never"),
        }
    }
}
