// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Key occurrences in a lifecycle of a run.
//!
//! The top-level enum here is [`Event`], each variant carrying the single
//! payload relevant to it.

pub mod step_result;

use std::sync::Arc;

use derive_more::with_trait::Display;

use crate::ast::{Feature, Scenario};

pub use self::step_result::{Attachment, Failure, Status, StepResult};

/// Lifecycle event of a run.
///
/// Events are delivered in a total order, see [`EventBus`].
///
/// [`EventBus`]: crate::listener::EventBus
#[derive(Clone, Debug)]
pub enum Event {
    /// Run has started, no [`Feature`]s entered yet.
    RunStarted,

    /// [`Feature`] is entered.
    FeatureEntered(Arc<Feature>),

    /// [`Scenario`] of the last entered [`Feature`] is entered.
    ScenarioEntered(Arc<Scenario>),

    /// Step of the last entered [`Scenario`] produced its result.
    StepResultProduced(Arc<StepResult>),

    /// Last entered [`Scenario`] is over.
    ScenarioFinished(Arc<Scenario>),

    /// Last entered [`Feature`] is over.
    FeatureFinished(Arc<Feature>),

    /// Run is over, no more events follow.
    RunFinished,
}

impl Event {
    /// Returns the [`EventKind`] of this [`Event`].
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::RunStarted => EventKind::RunStarted,
            Self::FeatureEntered(_) => EventKind::FeatureEntered,
            Self::ScenarioEntered(_) => EventKind::ScenarioEntered,
            Self::StepResultProduced(_) => EventKind::StepResultProduced,
            Self::ScenarioFinished(_) => EventKind::ScenarioFinished,
            Self::FeatureFinished(_) => EventKind::FeatureFinished,
            Self::RunFinished => EventKind::RunFinished,
        }
    }
}

/// Payload-less discriminant of an [`Event`], used for subscriptions.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum EventKind {
    /// [`Event::RunStarted`].
    RunStarted,

    /// [`Event::FeatureEntered`].
    FeatureEntered,

    /// [`Event::ScenarioEntered`].
    ScenarioEntered,

    /// [`Event::StepResultProduced`].
    StepResultProduced,

    /// [`Event::ScenarioFinished`].
    ScenarioFinished,

    /// [`Event::FeatureFinished`].
    FeatureFinished,

    /// [`Event::RunFinished`].
    RunFinished,
}

impl EventKind {
    /// All the [`EventKind`]s, in lifecycle order.
    pub const ALL: &'static [Self] = &[
        Self::RunStarted,
        Self::FeatureEntered,
        Self::ScenarioEntered,
        Self::StepResultProduced,
        Self::ScenarioFinished,
        Self::FeatureFinished,
        Self::RunFinished,
    ];
}
