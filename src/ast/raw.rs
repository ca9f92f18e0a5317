// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Raw data bags handed over by a parser, before they become [`ast`] nodes.
//!
//! All of them are [`Deserialize`]able, so a parser living in another process
//! may pass them as JSON.
//!
//! [`ast`]: crate::ast

use serde::Deserialize;

/// Position of a node inside a `.feature` file.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Location {
    /// Line number, starting from `1`.
    pub line: usize,
}

/// Raw data of a [`Tag`](super::Tag).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct TagData {
    /// Name of the tag, including its leading `@`.
    pub name: String,

    /// Line the tag is declared on.
    pub line: usize,
}

/// Raw data of a [`StepArgument`](super::StepArgument).
///
/// The variant is picked by the `type` field of the raw object.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(tag = "type")]
pub enum ArgumentData {
    /// Multi-line text block.
    DocString {
        /// Text of the doc string, without delimiters.
        content: String,

        /// Line the opening delimiter is on.
        line: usize,

        /// Content type annotated right after the opening delimiter.
        #[serde(default, rename = "contentType")]
        content_type: Option<String>,
    },

    /// Table of cells.
    DataTable {
        /// Rows of cells, in source order.
        rows: Vec<Vec<String>>,
    },
}

/// Raw data of a [`Step`](super::Step).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct StepData {
    /// Keyword of the step (`Given `, `When `, `And `, ...).
    pub keyword: String,

    /// Text of the step following its keyword.
    pub name: String,

    /// Line the step is declared on.
    #[serde(default)]
    pub line: usize,

    /// Doc strings and data tables attached to the step.
    #[serde(default)]
    pub arguments: Vec<ArgumentData>,

    /// Whether the step is synthetic and isn't present in feature text.
    #[serde(default)]
    pub hidden: bool,
}

/// Raw data of a [`Scenario`](super::Scenario).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct ScenarioData {
    /// Free-form text following the scenario name.
    #[serde(default)]
    pub description: String,

    /// Keyword of the scenario (`Scenario`, `Example`, ...).
    pub keyword: String,

    /// Locations of the scenario, the first one being its declaration.
    pub locations: Vec<Location>,

    /// Name of the scenario.
    pub name: String,

    /// Path of the `.feature` file. Inherited from the owning feature when
    /// absent.
    #[serde(default)]
    pub path: Option<String>,

    /// Steps of the scenario, in declaration order.
    #[serde(default)]
    pub steps: Vec<StepData>,

    /// Tags of the scenario, in declaration order.
    #[serde(default)]
    pub tags: Vec<TagData>,
}

/// Raw data of a [`Feature`](super::Feature).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct FeatureData {
    /// Free-form text following the feature name.
    #[serde(default)]
    pub description: String,

    /// Keyword of the feature (`Feature`, `Business Need`, ...).
    pub keyword: String,

    /// Location of the feature declaration.
    pub location: Location,

    /// Name of the feature.
    pub name: String,

    /// Path of the `.feature` file.
    #[serde(default)]
    pub path: String,

    /// Tags of the feature, in declaration order.
    #[serde(default)]
    pub tags: Vec<TagData>,

    /// Scenarios of the feature, in declaration order.
    #[serde(default)]
    pub scenarios: Vec<ScenarioData>,
}
