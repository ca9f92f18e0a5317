// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Output sink shared by all formatters.

use std::io;

use derive_more::with_trait::{Display, Error};

/// Error of writing formatter output.
#[derive(Debug, Display, Error)]
pub enum FormatterError {
    /// I/O error of the underlying sink.
    #[display("I/O error: {_0}")]
    Io(io::Error),

    /// Report failed to serialize.
    #[display("Serialization failed: {_0}")]
    Serialization(serde_json::Error),

    /// [`Formatter`] was already finished, so its sink is released.
    #[display("Formatter is already finished")]
    AlreadyFinished,
}

impl From<io::Error> for FormatterError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for FormatterError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

/// Base of a formatter owning its [`io::Write`] sink.
///
/// Concrete formatters compose it rather than deal with the sink directly.
#[derive(Clone, Debug)]
pub struct Formatter<Out: io::Write> {
    output: Out,
    finished: bool,
}

impl<Out: io::Write> Formatter<Out> {
    /// Creates a new [`Formatter`] writing into the given `output`.
    #[must_use]
    pub const fn new(output: Out) -> Self {
        Self { output, finished: false }
    }

    /// Appends `text` verbatim to the sink.
    ///
    /// # Errors
    ///
    /// - If this [`Formatter`] is already finished.
    /// - If the sink fails to be written.
    pub fn log(
        &mut self,
        text: impl AsRef<str>,
    ) -> Result<(), FormatterError> {
        if self.finished {
            return Err(FormatterError::AlreadyFinished);
        }
        self.output.write_all(text.as_ref().as_bytes())?;
        Ok(())
    }

    /// Flushes the sink and releases it, so nothing can be
    /// [`log`](Formatter::log)ged afterwards.
    ///
    /// Everything logged before is flushed once this returns.
    ///
    /// # Errors
    ///
    /// - If this [`Formatter`] is already finished.
    /// - If the sink fails to be flushed.
    pub fn finish(&mut self) -> Result<(), FormatterError> {
        if self.finished {
            return Err(FormatterError::AlreadyFinished);
        }
        self.finished = true;
        self.output.flush()?;
        Ok(())
    }

    /// Indicates whether [`Formatter::finish()`] was called.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the sink.
    #[must_use]
    pub const fn output(&self) -> &Out {
        &self.output
    }

    /// Unwraps this [`Formatter`] into its sink.
    #[must_use]
    pub fn into_inner(self) -> Out {
        self.output
    }
}
