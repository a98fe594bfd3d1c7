// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Small string helpers shared across writers.

/// Checks whether the given `s`tring is blank, i.e. is empty or consists of
/// whitespaces only.
#[must_use]
pub fn is_blank(s: impl AsRef<str>) -> bool {
    s.as_ref().trim().is_empty()
}

/// Checks whether the given `s`tring is present, i.e. is not [blank].
///
/// [blank]: is_blank
#[must_use]
pub fn is_present(s: impl AsRef<str>) -> bool {
    !is_blank(s)
}

/// Returns [`Some`] `s`tring if it's [present], or [`None`] otherwise.
///
/// [present]: is_present
#[must_use]
pub fn present(s: String) -> Option<String> {
    is_present(&s).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("  abc  "));
    }

    #[test]
    fn present_is_inverse_of_blank() {
        assert!(is_present("abc"));
        assert!(!is_present(" "));
    }

    #[test]
    fn present_drops_blank_values() {
        assert_eq!(present("  ".into()), None);
        assert_eq!(present(String::new()), None);
        assert_eq!(present(" a ".into()), Some(" a ".into()));
    }
}
