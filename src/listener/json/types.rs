// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Basic serializable types of the [Cucumber JSON format][1] report.
//!
//! [1]: https://github.com/cucumber/cucumber-json-schema

use base64::Engine as _;
use derive_more::with_trait::Display;
use serde::Serialize;

use crate::{
    ast::{self, StepArgument},
    event::{Attachment, Status, StepResult},
};

/// [`base64`] encoded data.
#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Base64(String);

impl Base64 {
    /// Used [`base64::engine`].
    const ENGINE: base64::engine::GeneralPurpose =
        base64::engine::general_purpose::STANDARD;

    /// Encodes `bytes` as [`base64`].
    #[must_use]
    pub fn encode(bytes: impl AsRef<[u8]>) -> Self {
        Self(Self::ENGINE.encode(bytes))
    }
}

/// [`Attachment`] embedded into a [`Step`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Embedding {
    /// MIME type of [`Embedding::data`], verbatim.
    pub mime_type: String,

    /// [`base64`] encoded data.
    pub data: Base64,
}

impl From<&Attachment> for Embedding {
    fn from(attachment: &Attachment) -> Self {
        Self {
            mime_type: attachment.mime_type().to_owned(),
            data: Base64::encode(attachment.data()),
        }
    }
}

/// [`Serialize`]able [`ast::Tag`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Tag {
    /// [`ast::Tag::name()`].
    pub name: String,

    /// [`ast::Tag::line()`].
    pub line: usize,
}

impl From<&ast::Tag> for Tag {
    fn from(tag: &ast::Tag) -> Self {
        Self { name: tag.name().to_owned(), line: tag.line() }
    }
}

/// [`Serialize`]able result of running a [`Step`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RunResult {
    /// [`Status`] of this running result.
    pub status: Status,

    /// Execution time in nanoseconds.
    pub duration: u128,

    /// Stack text of a [`Status::Failed`] result (if any).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<&StepResult> for RunResult {
    fn from(res: &StepResult) -> Self {
        Self {
            status: res.status(),
            duration: res.duration().as_nanos(),
            error_message: res
                .status()
                .is_failing()
                .then(|| res.failure().map(|f| f.stack.clone()))
                .flatten(),
        }
    }
}

/// [`Serialize`]able [`StepArgument`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Argument {
    /// [`ast::DocString`].
    DocString {
        /// [`ast::DocString::line()`].
        line: usize,

        /// [`ast::DocString::content()`].
        content: String,

        /// [`ast::DocString::content_type()`], `null` if absent.
        #[serde(rename = "contentType")]
        content_type: Option<String>,
    },

    /// [`ast::DataTable`].
    DataTable {
        /// [`ast::DataTable::raw()`] rows.
        rows: Vec<Row>,
    },
}

impl From<&StepArgument> for Argument {
    fn from(arg: &StepArgument) -> Self {
        match arg {
            StepArgument::DocString(doc) => Self::DocString {
                line: doc.line(),
                content: doc.content().to_owned(),
                content_type: doc.content_type().map(str::to_owned),
            },
            StepArgument::DataTable(table) => Self::DataTable {
                rows: table
                    .raw()
                    .iter()
                    .map(|cells| Row { cells: cells.clone() })
                    .collect(),
            },
        }
    }
}

/// Row of an [`Argument::DataTable`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Row {
    /// Cells of this [`Row`], in source order.
    pub cells: Vec<String>,
}

/// [`Serialize`]able [`ast::Step`] along with its [`RunResult`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Step {
    /// [`ast::Step::arguments()`].
    pub arguments: Vec<Argument>,

    /// [`ast::Step::keyword()`].
    pub keyword: String,

    /// [`ast::Step::name()`].
    pub name: String,

    /// [`ast::Step::line()`], omitted for hidden steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// [`ast::Step::is_hidden()`], omitted unless [`true`].
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,

    /// [`RunResult`] of this [`Step`].
    pub result: RunResult,

    /// [`Embedding`]s of this [`Step`], omitted if there are none.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeddings: Vec<Embedding>,
}

impl From<&StepResult> for Step {
    fn from(res: &StepResult) -> Self {
        let step = res.step();
        Self {
            arguments: step.arguments().iter().map(Into::into).collect(),
            keyword: step.keyword().to_owned(),
            name: step.name().to_owned(),
            line: (!step.is_hidden()).then(|| step.line()),
            hidden: step.is_hidden(),
            result: res.into(),
            embeddings: res.attachments().iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::ast::raw::{ArgumentData, StepData};

    fn step(hidden: bool, arguments: Vec<ArgumentData>) -> ast::Step {
        let data = StepData {
            keyword: "Step".into(),
            name: "A Step Name".into(),
            line: 1,
            arguments,
            hidden,
        };
        ast::Step::new(data, "uri", 0)
    }

    fn passed(step: ast::Step) -> StepResult {
        StepResult::new(step, Status::Passed)
            .with_duration(Duration::from_nanos(1))
    }

    #[test]
    fn base64_matches_standard_alphabet() {
        assert_eq!(Base64::encode("first data").to_string(), "Zmlyc3QgZGF0YQ==");
        assert_eq!(Base64::encode("second data").to_string(), "c2Vjb25kIGRhdGE=");
    }

    #[test]
    fn passed_step() {
        let s = Step::from(&passed(step(false, vec![])));

        assert_eq!(
            serde_json::to_value(&s).unwrap(),
            json!({
                "arguments": [],
                "line": 1,
                "keyword": "Step",
                "name": "A Step Name",
                "result": {"status": "passed", "duration": 1},
            }),
        );
    }

    #[test]
    fn failed_step_carries_error_message() {
        let res = StepResult::new(step(false, vec![]), Status::Failed)
            .with_duration(Duration::from_nanos(1))
            .with_failure("failure stack");

        assert_eq!(
            serde_json::to_value(RunResult::from(&res)).unwrap(),
            json!({
                "status": "failed",
                "error_message": "failure stack",
                "duration": 1,
            }),
        );
    }

    #[test]
    fn non_failed_step_omits_error_message() {
        let res = StepResult::new(step(false, vec![]), Status::Ambiguous)
            .with_failure("matches two definitions");

        assert_eq!(RunResult::from(&res).error_message, None);
    }

    #[test]
    fn hidden_step_omits_line() {
        let value =
            serde_json::to_value(Step::from(&passed(step(true, vec![]))))
                .unwrap();

        assert!(value.get("line").is_none());
        assert_eq!(value["hidden"], json!(true));
    }

    #[test]
    fn doc_string_argument() {
        let s = Step::from(&passed(step(
            false,
            vec![ArgumentData::DocString {
                content: "This is a DocString".into(),
                line: 2,
                content_type: None,
            }],
        )));

        assert_eq!(
            serde_json::to_value(&s.arguments).unwrap(),
            json!([{
                "line": 2,
                "content": "This is a DocString",
                "contentType": null,
            }]),
        );
    }

    #[test]
    fn data_table_argument() {
        let rows = ["a", "b", "c"]
            .into_iter()
            .map(|r| (1..=3).map(|c| format!("{r}:{c}")).collect::<Vec<_>>())
            .collect();
        let s = Step::from(&passed(step(
            false,
            vec![ArgumentData::DataTable { rows }],
        )));

        assert_eq!(
            serde_json::to_value(&s.arguments).unwrap(),
            json!([{
                "rows": [
                    {"cells": ["a:1", "a:2", "a:3"]},
                    {"cells": ["b:1", "b:2", "b:3"]},
                    {"cells": ["c:1", "c:2", "c:3"]},
                ],
            }]),
        );
    }

    #[test]
    fn attachments_are_embedded_in_order() {
        let res = passed(step(false, vec![]))
            .with_attachment(Attachment::new("first mime type", "first data"))
            .with_attachment(Attachment::new("second mime type", "second data"));

        assert_eq!(
            serde_json::to_value(Step::from(&res).embeddings).unwrap(),
            json!([
                {"data": "Zmlyc3QgZGF0YQ==", "mime_type": "first mime type"},
                {"data": "c2Vjb25kIGRhdGE=", "mime_type": "second mime type"},
            ]),
        );
    }
}
