// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [Tag] of a [`Feature`] or a [`Scenario`].
//!
//! [`Feature`]: super::Feature
//! [`Scenario`]: super::Scenario
//! [Tag]: https://cucumber.io/docs/cucumber/api#tags

use derive_more::with_trait::Display;

use super::raw::TagData;

/// Immutable [tag][1] with its source line.
///
/// [1]: https://cucumber.io/docs/cucumber/api#tags
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
#[display("{name}")]
pub struct Tag {
    name: String,
    line: usize,
}

impl Tag {
    /// Creates a new [`Tag`] out of its raw data.
    #[must_use]
    pub fn new(data: TagData) -> Self {
        Self { name: data.name, line: data.line }
    }

    /// Name of this [`Tag`], including its leading `@`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line this [`Tag`] is declared on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}
