// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Continuation-passing protocol of walking [`Scenario`] [`Step`]s.
//!
//! [`Scenario::accept_visitor()`] hands every [`Step`] to a [`Visitor`] along
//! with a [`Done`] token, and doesn't advance until that token is completed.
//!
//! [`Scenario`]: super::Scenario
//! [`Scenario::accept_visitor()`]: super::Scenario::accept_visitor

use async_trait::async_trait;
use derive_more::with_trait::{Display, Error};
use futures::channel::oneshot;

use super::Step;

/// Driver walking [`Step`]s of a [`Scenario`].
///
/// [`Scenario`]: super::Scenario
#[async_trait(?Send)]
pub trait Visitor {
    /// Visits the given [`Step`].
    ///
    /// The walk advances to the next [`Step`] only once `done` is completed.
    /// It may be completed before returning, or stashed and completed later.
    /// Keeping it uncompleted forever stalls the walk.
    async fn visit_step(&mut self, step: &Step, done: Done);
}

/// One-shot completion token of a single [`Visitor::visit_step()`].
///
/// Consuming [`Done::complete()`] makes completing it twice impossible.
#[derive(Debug)]
#[must_use = "the walk doesn't advance until `Done::complete()` is called"]
pub struct Done(oneshot::Sender<()>);

impl Done {
    /// Creates a new [`Done`] token along with a future resolving once it's
    /// completed.
    pub(crate) fn new() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self(tx), rx)
    }

    /// Signals that the visited [`Step`] is over.
    pub fn complete(self) {
        // Receiver is gone only when the walk itself was dropped.
        _ = self.0.send(());
    }
}

/// Error of a [`Visitor`] dropping a [`Done`] token without completing it.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("`Done` token of step #{index} was dropped without completion")]
pub struct Abandoned {
    /// Position of the abandoned [`Step`] in its [`Scenario`].
    ///
    /// [`Scenario`]: super::Scenario
    pub index: usize,
}
