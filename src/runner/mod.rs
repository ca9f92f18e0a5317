// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for executing [`Step`]s and emitting lifecycle [`Event`]s.
//!
//! [`Runner`] walks [`Feature`]s one by one, and their [`Scenario`]s one by
//! one, driving each [`Scenario`] with [`Scenario::accept_visitor()`]. Every
//! [`Step`] is handed to a [`StepExecutor`], and the [`Outcome`] it returns is
//! turned into an [`Event::StepResultProduced`].

pub mod summary;

use std::{fmt, sync::Arc, time::Instant};

use async_trait::async_trait;

use crate::{
    ast::{Abandoned, Done, Feature, Scenario, Step, Visitor},
    event::{Attachment, Event, Failure, Status, StepResult},
    listener::{EventBus, Listener},
};

#[doc(inline)]
pub use self::summary::Summary;

/// Executor of a single [`Step`].
#[async_trait(?Send)]
pub trait StepExecutor {
    /// Executes the given [`Step`], returning its [`Outcome`].
    async fn execute(&mut self, step: &Step) -> Outcome;
}

#[async_trait(?Send)]
impl<E: StepExecutor + ?Sized> StepExecutor for &mut E {
    async fn execute(&mut self, step: &Step) -> Outcome {
        (**self).execute(step).await
    }
}

/// What a [`StepExecutor`] reports about an executed [`Step`].
///
/// Its duration is measured by the [`Runner`].
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// [`Status`] the [`Step`] finished with.
    pub status: Status,

    /// [`Failure`] of the [`Step`], reported for [`Status::Failed`] only.
    pub failure: Option<Failure>,

    /// [`Attachment`]s produced by the [`Step`].
    pub attachments: Vec<Attachment>,
}

impl Outcome {
    /// Creates a new [`Outcome`] with the given [`Status`].
    #[must_use]
    pub const fn new(status: Status) -> Self {
        Self { status, failure: None, attachments: vec![] }
    }

    /// Creates a new [`Status::Passed`] [`Outcome`].
    #[must_use]
    pub const fn passed() -> Self {
        Self::new(Status::Passed)
    }

    /// Creates a new [`Status::Failed`] [`Outcome`] with the given [`Failure`].
    #[must_use]
    pub fn failed(failure: impl Into<Failure>) -> Self {
        Self { failure: Some(failure.into()), ..Self::new(Status::Failed) }
    }

    /// Adds the given [`Attachment`] to this [`Outcome`].
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    fn into_result(self, step: &Step, started: Instant) -> StepResult {
        let res = StepResult::new(step.clone(), self.status)
            .with_duration(started.elapsed());
        let res = match self.failure {
            Some(f) => res.with_failure(f),
            None => res,
        };
        self.attachments.into_iter().fold(res, StepResult::with_attachment)
    }
}

/// Sequential executor of [`Feature`]s emitting lifecycle [`Event`]s to the
/// registered [`Listener`]s.
pub struct Runner<'l, E> {
    executor: E,
    bus: EventBus<'l>,

    /// Whether the [`Step`]s following a failed one in the same [`Scenario`]
    /// are [`Status::Skipped`] instead of being executed.
    fail_fast: bool,
}

impl<'l, E: StepExecutor> Runner<'l, E> {
    /// Creates a new [`Runner`] executing [`Step`]s with the given
    /// [`StepExecutor`].
    ///
    /// Fails fast by default.
    #[must_use]
    pub fn new(executor: E) -> Self {
        Self { executor, bus: EventBus::new(), fail_fast: true }
    }

    /// Registers the given [`Listener`] to receive [`Event`]s of this
    /// [`Runner`], after the already registered ones.
    #[must_use]
    pub fn listener(mut self, listener: impl Listener + 'l) -> Self {
        _ = self.bus.register(listener);
        self
    }

    /// Sets whether the [`Step`]s following a failed one in the same
    /// [`Scenario`] are skipped.
    #[must_use]
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Executes all the given [`Feature`]s in order, returning a [`Summary`]
    /// of the run.
    ///
    /// [`Event::RunFinished`] is emitted even if the run is interrupted.
    ///
    /// # Errors
    ///
    /// If a [`Scenario`] walk is [`Abandoned`].
    pub async fn run<I>(&mut self, features: I) -> Result<Summary, Abandoned>
    where
        I: IntoIterator<Item = Feature>,
    {
        let mut summary = Summary::default();

        self.bus.emit(Event::RunStarted).await;
        let res = self.run_features(features, &mut summary).await;
        self.bus.emit(Event::RunFinished).await;

        tracing::debug!(?summary, "run finished");
        res.map(|()| summary)
    }

    async fn run_features<I>(
        &mut self,
        features: I,
        summary: &mut Summary,
    ) -> Result<(), Abandoned>
    where
        I: IntoIterator<Item = Feature>,
    {
        for feature in features {
            let feature = Arc::new(feature);
            summary.features += 1;

            self.bus.emit(Event::FeatureEntered(Arc::clone(&feature))).await;
            for sc in feature.scenarios() {
                let sc = Arc::new(sc.clone());
                self.bus.emit(Event::ScenarioEntered(Arc::clone(&sc))).await;

                let res = self.run_scenario(&sc, summary).await;
                self.bus.emit(Event::ScenarioFinished(sc)).await;
                if let Err(e) = res {
                    self.bus.emit(Event::FeatureFinished(feature)).await;
                    return Err(e);
                }
            }
            self.bus.emit(Event::FeatureFinished(feature)).await;
        }
        Ok(())
    }

    async fn run_scenario(
        &mut self,
        scenario: &Scenario,
        summary: &mut Summary,
    ) -> Result<(), Abandoned> {
        let mut visitor = Executing {
            executor: &mut self.executor,
            bus: &mut self.bus,
            summary: &mut *summary,
            fail_fast: self.fail_fast,
            failed: false,
        };
        let res = scenario.accept_visitor(&mut visitor).await;

        let failed = visitor.failed;
        if let Err(e) = &res {
            tracing::error!(scenario = %scenario.name(), "{e}");
        }
        summary.record_scenario(failed || res.is_err());
        res
    }
}

impl<E> fmt::Debug for Runner<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
            .field("bus", &self.bus)
            .field("fail_fast", &self.fail_fast)
            .finish_non_exhaustive()
    }
}

/// [`Visitor`] executing the [`Step`]s of a single [`Scenario`].
struct Executing<'r, 'l, E> {
    executor: &'r mut E,
    bus: &'r mut EventBus<'l>,
    summary: &'r mut Summary,
    fail_fast: bool,

    /// Whether any [`Step`] of the [`Scenario`] has failed already.
    failed: bool,
}

#[async_trait(?Send)]
impl<'r, 'l, E: StepExecutor> Visitor for Executing<'r, 'l, E> {
    async fn visit_step(&mut self, step: &Step, done: Done) {
        let started = Instant::now();
        let outcome = if self.failed && self.fail_fast {
            Outcome::new(Status::Skipped)
        } else {
            self.executor.execute(step).await
        };
        let res = outcome.into_result(step, started);

        if res.status().is_failing() {
            self.failed = true;
        }
        self.summary.record_step(res.status());

        self.bus.emit(Event::StepResultProduced(Arc::new(res))).await;
        done.complete();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use futures::FutureExt as _;

    use super::*;
    use crate::event::EventKind;

    const FEATURE: &str = r#"{
        "keyword": "Feature",
        "name": "Runner",
        "location": {"line": 1},
        "path": "runner.feature",
        "scenarios": [
            {
                "keyword": "Scenario",
                "name": "breaks",
                "locations": [{"line": 3}],
                "steps": [
                    {"keyword": "Given ", "name": "ok", "line": 4},
                    {"keyword": "When ", "name": "fail", "line": 5},
                    {"keyword": "Then ", "name": "ok", "line": 6}
                ]
            },
            {
                "keyword": "Scenario",
                "name": "works",
                "locations": [{"line": 8}],
                "steps": [
                    {"keyword": "Given ", "name": "ok", "line": 9},
                    {"keyword": "Then ", "name": "todo", "line": 10}
                ]
            }
        ]
    }"#;

    /// [`StepExecutor`] failing steps named `fail`, leaving `todo` ones
    /// pending and passing the rest.
    #[derive(Default)]
    struct Scripted {
        executed: Vec<usize>,
    }

    #[async_trait(?Send)]
    impl StepExecutor for Scripted {
        async fn execute(&mut self, step: &Step) -> Outcome {
            self.executed.push(step.line());
            match step.name() {
                "fail" => Outcome::failed("boom"),
                "todo" => Outcome::new(Status::Pending),
                _ => Outcome::passed()
                    .with_attachment(Attachment::text(step.name())),
            }
        }
    }

    /// [`Listener`] recording every received [`Event`].
    #[derive(Default)]
    struct Recording {
        events: Rc<RefCell<Vec<Event>>>,
    }

    #[async_trait(?Send)]
    impl Listener for Recording {
        async fn handle_event(&mut self, event: &Event) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    fn statuses(events: &[Event]) -> Vec<(usize, Status)> {
        events
            .iter()
            .filter_map(|ev| match ev {
                Event::StepResultProduced(res) => {
                    Some((res.step().line(), res.status()))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn emits_lifecycle_in_order() {
        let rec = Recording::default();
        let events = Rc::clone(&rec.events);
        let mut runner = Runner::new(Scripted::default()).listener(rec);

        let feature = Feature::from_json(FEATURE).unwrap();
        _ = runner.run([feature]).now_or_never().unwrap().unwrap();

        let kinds = events.borrow().iter().map(Event::kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                EventKind::RunStarted,
                EventKind::FeatureEntered,
                EventKind::ScenarioEntered,
                EventKind::StepResultProduced,
                EventKind::StepResultProduced,
                EventKind::StepResultProduced,
                EventKind::ScenarioFinished,
                EventKind::ScenarioEntered,
                EventKind::StepResultProduced,
                EventKind::StepResultProduced,
                EventKind::ScenarioFinished,
                EventKind::FeatureFinished,
                EventKind::RunFinished,
            ],
        );
    }

    #[test]
    fn skips_after_failure() {
        let rec = Recording::default();
        let events = Rc::clone(&rec.events);
        let mut exec = Scripted::default();

        let summary = Runner::new(&mut exec)
            .listener(rec)
            .run([Feature::from_json(FEATURE).unwrap()])
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(exec.executed, [4, 5, 9, 10]);
        assert_eq!(
            statuses(&events.borrow()),
            [
                (4, Status::Passed),
                (5, Status::Failed),
                (6, Status::Skipped),
                (9, Status::Passed),
                (10, Status::Pending),
            ],
        );
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.scenarios_failed, 1);
        assert_eq!(summary.scenarios_passed, 1);
        assert!(summary.has_failed());
    }

    #[test]
    fn executes_all_without_fail_fast() {
        let mut exec = Scripted::default();

        let summary = Runner::new(&mut exec)
            .fail_fast(false)
            .run([Feature::from_json(FEATURE).unwrap()])
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(exec.executed, [4, 5, 6, 9, 10]);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.passed, 3);
    }

    #[test]
    fn step_results_carry_failure_and_attachments() {
        let rec = Recording::default();
        let events = Rc::clone(&rec.events);
        let mut runner = Runner::new(Scripted::default()).listener(rec);

        _ = runner
            .run([Feature::from_json(FEATURE).unwrap()])
            .now_or_never()
            .unwrap()
            .unwrap();

        let results = events
            .borrow()
            .iter()
            .filter_map(|ev| match ev {
                Event::StepResultProduced(res) => Some(Arc::clone(res)),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(results[0].attachments(), [Attachment::text("ok")]);
        assert_eq!(results[1].failure(), Some(&Failure::new("boom")));
        assert!(!results[2].has_attachments());
    }

    #[test]
    fn empty_run_still_starts_and_finishes() {
        let rec = Recording::default();
        let events = Rc::clone(&rec.events);

        let summary = Runner::new(Scripted::default())
            .listener(rec)
            .run([])
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(summary, Summary::default());
        assert!(!summary.has_failed());
        let kinds = events.borrow().iter().map(Event::kind).collect::<Vec<_>>();
        assert_eq!(kinds, [EventKind::RunStarted, EventKind::RunFinished]);
    }
}
