// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Feature node of the [Cucumber JSON format][1] report.
//!
//! [1]: https://github.com/cucumber/cucumber-json-schema

use serde::Serialize;

use crate::{
    ast,
    listener::json::{element::Element, id::slugify, types::Tag},
};

/// [`Serialize`]able [`ast::Feature`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Feature {
    /// Slug of [`Feature::name`].
    pub id: String,

    /// [`ast::Feature::keyword()`].
    pub keyword: String,

    /// [`ast::Feature::name()`].
    pub name: String,

    /// [`ast::Feature::description()`], omitted if empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// [`ast::Feature::line()`].
    pub line: usize,

    /// [`ast::Feature::tags()`].
    pub tags: Vec<Tag>,

    /// [`ast::Feature::uri()`].
    pub uri: String,

    /// [`Element`]s reported so far, in arrival order.
    pub elements: Vec<Element>,
}

impl Feature {
    /// Creates a new [`Feature`] without [`Element`]s out of the given
    /// [`ast::Feature`].
    #[must_use]
    pub fn new(feature: &ast::Feature) -> Self {
        Self {
            id: slugify(feature.name()),
            keyword: feature.keyword().to_owned(),
            name: feature.name().to_owned(),
            description: Some(feature.description())
                .filter(|d| !d.is_empty())
                .map(str::to_owned),
            line: feature.line(),
            tags: feature.tags().iter().map(Into::into).collect(),
            uri: feature.uri().to_owned(),
            elements: vec![],
        }
    }
}
