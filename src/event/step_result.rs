// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Outcome of running a single [`Step`].

use std::time::Duration;

use derive_more::with_trait::{Display, From};
use mime::Mime;
use serde::Serialize;

use crate::ast::Step;

/// Possible statuses of a run [`Step`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// [`Step`] succeeded.
    #[display("passed")]
    Passed,

    /// [`Step`] failed.
    #[display("failed")]
    Failed,

    /// [`Step`] wasn't run, for example because a previous one failed.
    #[display("skipped")]
    Skipped,

    /// [`Step`] is matched, but isn't implemented yet.
    #[display("pending")]
    Pending,

    /// [`Step`] doesn't match any definition.
    #[display("undefined")]
    Undefined,

    /// [`Step`] matches multiple definitions.
    #[display("ambiguous")]
    Ambiguous,
}

impl Status {
    /// Indicates whether this [`Status`] carries a failure.
    #[must_use]
    pub const fn is_failing(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Failure of a [`Step`] run.
#[derive(Clone, Debug, Display, Eq, From, PartialEq)]
#[display("{stack}")]
pub struct Failure {
    /// Stack text of the failure, as it should be reported.
    pub stack: String,
}

impl Failure {
    /// Creates a new [`Failure`] with the given stack text.
    #[must_use]
    pub fn new(stack: impl Into<String>) -> Self {
        Self { stack: stack.into() }
    }
}

impl From<&str> for Failure {
    fn from(stack: &str) -> Self {
        Self::new(stack)
    }
}

/// Data attached to a [`Step`] during its run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attachment {
    mime_type: String,
    data: Vec<u8>,
}

impl Attachment {
    /// Creates a new [`Attachment`] of the given MIME type.
    ///
    /// The MIME type isn't validated and is reported verbatim.
    #[must_use]
    pub fn new(mime_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self { mime_type: mime_type.into(), data: data.into() }
    }

    /// Creates a new [`Attachment`] of the given [`Mime`].
    #[must_use]
    pub fn with_mime(mime: &Mime, data: impl Into<Vec<u8>>) -> Self {
        Self::new(mime.as_ref(), data)
    }

    /// Creates a new plain text [`Attachment`].
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_mime(&mime::TEXT_PLAIN_UTF_8, text.into())
    }

    /// MIME type of this [`Attachment`].
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Raw data of this [`Attachment`].
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Result of running a [`Step`].
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    step: Step,
    status: Status,
    duration: Duration,
    failure: Option<Failure>,
    attachments: Vec<Attachment>,
}

impl StepResult {
    /// Creates a new [`StepResult`] of the given [`Step`] with zero duration,
    /// no failure and no [`Attachment`]s.
    #[must_use]
    pub const fn new(step: Step, status: Status) -> Self {
        Self {
            step,
            status,
            duration: Duration::ZERO,
            failure: None,
            attachments: Vec::new(),
        }
    }

    /// Sets the time the [`Step`] took to run.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the [`Failure`] of the [`Step`].
    #[must_use]
    pub fn with_failure(mut self, failure: impl Into<Failure>) -> Self {
        self.failure = Some(failure.into());
        self
    }

    /// Appends an [`Attachment`].
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// [`Step`] this result belongs to.
    #[must_use]
    pub const fn step(&self) -> &Step {
        &self.step
    }

    /// [`Status`] of the run.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Time the [`Step`] took to run.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// [`Failure`] of the run, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Indicates whether any [`Attachment`]s were captured.
    #[must_use]
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Captured [`Attachment`]s, in capture order.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_displays_lowercase() {
        assert_eq!(Status::Passed.to_string(), "passed");
        assert_eq!(Status::Ambiguous.to_string(), "ambiguous");
        assert_eq!(
            serde_json::to_string(&Status::Undefined).unwrap(),
            "\"undefined\"",
        );
    }

    #[test]
    fn only_failed_is_failing() {
        assert!(Status::Failed.is_failing());
        assert!(!Status::Ambiguous.is_failing());
        assert!(!Status::Skipped.is_failing());
    }

    #[test]
    fn text_attachment_mime() {
        let a = Attachment::text("hi");

        assert_eq!(a.mime_type(), "text/plain; charset=utf-8");
        assert_eq!(a.data(), b"hi");
    }
}
