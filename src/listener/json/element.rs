// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Scenario element of the [Cucumber JSON format][1] report.
//!
//! [1]: https://github.com/cucumber/cucumber-json-schema

use serde::Serialize;

use crate::{
    ast::Scenario,
    listener::json::{
        id::{slugify, SEPARATOR},
        types::{Step, Tag},
    },
};

/// [`Serialize`]able [`Scenario`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Element {
    /// Owning [`Feature::id`] joined with a slug of [`Element::name`].
    ///
    /// [`Feature::id`]: super::Feature::id
    pub id: String,

    /// [`Scenario::keyword()`].
    pub keyword: String,

    /// [`Scenario::name()`].
    pub name: String,

    /// [`Scenario::description()`], omitted if empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// [`Scenario::line()`].
    pub line: usize,

    /// [`Scenario::tags()`].
    pub tags: Vec<Tag>,

    /// Type of this [`Element`], always `scenario`.
    pub r#type: &'static str,

    /// [`Step`]s reported so far, in arrival order.
    pub steps: Vec<Step>,
}

impl Element {
    /// Creates a new [`Element`] out of the given [`Scenario`] owned by the
    /// [`Feature`] with the given `feature_id`.
    ///
    /// [`Feature`]: super::Feature
    #[must_use]
    pub fn new(feature_id: &str, scenario: &Scenario) -> Self {
        Self {
            id: format!("{feature_id}{SEPARATOR}{}", slugify(scenario.name())),
            keyword: scenario.keyword().to_owned(),
            name: scenario.name().to_owned(),
            description: Some(scenario.description())
                .filter(|d| !d.is_empty())
                .map(str::to_owned),
            line: scenario.line(),
            tags: scenario.tags().iter().map(Into::into).collect(),
            r#type: "scenario",
            steps: vec![],
        }
    }
}
