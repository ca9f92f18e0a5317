// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [Step] of a [`Scenario`] and its arguments.
//!
//! [`Scenario`]: super::Scenario
//! [Step]: https://cucumber.io/docs/gherkin/reference#steps

use super::raw::{ArgumentData, StepData};

/// Immutable [step][1] of a [`Scenario`].
///
/// [`Scenario`]: super::Scenario
/// [1]: https://cucumber.io/docs/gherkin/reference#steps
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Step {
    keyword: String,
    name: String,
    line: usize,
    arguments: Vec<StepArgument>,
    uri: String,

    /// Position of this [`Step`] inside its [`Scenario`].
    ///
    /// [`Scenario`]: super::Scenario
    index: usize,

    /// Position of the preceding [`Step`] inside the same [`Scenario`].
    ///
    /// Index rather than reference, so the [`Scenario`] stays the only owner.
    ///
    /// [`Scenario`]: super::Scenario
    previous_step: Option<usize>,

    hidden: bool,
}

impl Step {
    /// Creates a new [`Step`] out of its raw data.
    ///
    /// `index` is the position of this [`Step`] in its [`Scenario`], the
    /// preceding one (if any) becoming its [`Step::previous_step()`].
    ///
    /// [`Scenario`]: super::Scenario
    #[must_use]
    pub fn new(data: StepData, uri: impl Into<String>, index: usize) -> Self {
        Self {
            keyword: data.keyword,
            name: data.name,
            line: data.line,
            arguments: data.arguments.into_iter().map(Into::into).collect(),
            uri: uri.into(),
            index,
            previous_step: index.checked_sub(1),
            hidden: data.hidden,
        }
    }

    /// Creates a synthetic hidden [`Step`] standing for a hook (`Before`,
    /// `After`, ...) rather than for feature text.
    #[must_use]
    pub fn hook(keyword: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            name: String::new(),
            line: 0,
            arguments: vec![],
            uri: uri.into(),
            index: 0,
            previous_step: None,
            hidden: true,
        }
    }

    /// Keyword of this [`Step`], including trailing whitespace.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Text of this [`Step`] following its keyword.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line this [`Step`] is declared on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// [`StepArgument`]s of this [`Step`], in source order.
    #[must_use]
    pub fn arguments(&self) -> &[StepArgument] {
        &self.arguments
    }

    /// Path of the `.feature` file this [`Step`] comes from.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Position of this [`Step`] inside its [`Scenario`].
    ///
    /// [`Scenario`]: super::Scenario
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Position of the [`Step`] declared right before this one, if any.
    ///
    /// Use [`Scenario::previous_step()`] to resolve it.
    ///
    /// [`Scenario::previous_step()`]: super::Scenario::previous_step
    #[must_use]
    pub const fn previous_step(&self) -> Option<usize> {
        self.previous_step
    }

    /// Indicates whether this [`Step`] isn't the first one in its
    /// [`Scenario`].
    ///
    /// [`Scenario`]: super::Scenario
    #[must_use]
    pub const fn has_previous_step(&self) -> bool {
        self.previous_step.is_some()
    }

    /// Indicates whether this [`Step`] is synthetic, so isn't present in
    /// feature text.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Argument attached to a [`Step`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StepArgument {
    /// [Doc string][1] argument.
    ///
    /// [1]: https://cucumber.io/docs/gherkin/reference#doc-strings
    DocString(DocString),

    /// [Data table][1] argument.
    ///
    /// [1]: https://cucumber.io/docs/gherkin/reference#data-tables
    DataTable(DataTable),
}

impl From<ArgumentData> for StepArgument {
    fn from(data: ArgumentData) -> Self {
        match data {
            ArgumentData::DocString { content, line, content_type } => {
                Self::DocString(DocString { content, line, content_type })
            }
            ArgumentData::DataTable { rows } => {
                Self::DataTable(DataTable { rows })
            }
        }
    }
}

/// Multi-line text block attached to a [`Step`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocString {
    content: String,
    line: usize,
    content_type: Option<String>,
}

impl DocString {
    /// Text of this [`DocString`].
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Line the opening delimiter of this [`DocString`] is on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Content type this [`DocString`] is annotated with, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// Table of cells attached to a [`Step`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataTable {
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Rows of cells of this [`DataTable`], in source order.
    #[must_use]
    pub fn raw(&self) -> &[Vec<String>] {
        &self.rows
    }
}
