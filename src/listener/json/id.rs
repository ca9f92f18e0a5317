// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Identifiers of report nodes.

use lazy_regex::regex_replace_all;

/// Separator between [`Feature`] and [`Element`] parts of an [`Element::id`].
///
/// [`Element`]: super::Element
/// [`Element::id`]: super::Element::id
/// [`Feature`]: super::Feature
pub const SEPARATOR: char = ';';

/// Derives a stable identifier out of a human-readable `name`.
///
/// Lowercases `name`, replaces every run of characters other than ASCII
/// letters and digits with a single `-`, and trims `-` from both ends.
#[must_use]
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    regex_replace_all!(r"[^a-z0-9]+", &lower, "-")
        .trim_matches('-')
        .to_owned()
}
