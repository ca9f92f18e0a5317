// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-memory representation of parsed [Gherkin] documents.
//!
//! Nodes are built once out of [raw data bags](raw) and never mutated
//! afterwards. A [`Scenario`] is executed by handing it a [`Visitor`].
//!
//! [Gherkin]: https://cucumber.io/docs/gherkin/reference

pub mod feature;
pub mod parsed;
pub mod raw;
pub mod scenario;
pub mod step;
pub mod tag;
pub mod visitor;

use derive_more::with_trait::{Display, Error};

pub use self::{
    feature::Feature,
    scenario::Scenario,
    step::{DataTable, DocString, Step, StepArgument},
    tag::Tag,
    visitor::{Abandoned, Done, Visitor},
};

/// Error of building [`ast`](self) nodes out of raw data.
#[derive(Debug, Display, Error)]
pub enum BuildError {
    /// Raw data isn't valid JSON of the expected shape.
    #[display("Invalid raw data: {_0}")]
    Json(serde_json::Error),

    /// [`Scenario`] has no location to take its line from.
    #[display("Scenario `{name}` has no locations")]
    NoLocations {
        /// Name of the [`Scenario`].
        #[error(not(source))]
        name: String,
    },
}

impl From<serde_json::Error> for BuildError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
