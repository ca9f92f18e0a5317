// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Core JSON formatter implementation.

use std::io;

use async_trait::async_trait;

use crate::{
    ast,
    event::{Event, EventKind, StepResult},
    listener::{
        formatter::{Formatter, FormatterError},
        json::{
            config::{Config, Style},
            feature::Feature,
            handlers::EventHandler,
        },
        Listener,
    },
};

/// [Cucumber JSON format][1] [`Listener`] outputting JSON to an [`io::Write`]
/// implementor.
///
/// The report is accumulated in memory and written at once on
/// [`Event::RunFinished`], after which the sink is flushed and released.
///
/// [1]: https://github.com/cucumber/cucumber-json-schema
#[derive(Clone, Debug)]
pub struct JsonFormatter<Out: io::Write> {
    /// [`Formatter`] owning the sink to output [JSON][1] into.
    ///
    /// [1]: https://github.com/cucumber/cucumber-json-schema
    formatter: Formatter<Out>,

    /// Accumulated report tree.
    handler: EventHandler,

    config: Config,
}

#[async_trait(?Send)]
impl<Out: io::Write> Listener for JsonFormatter<Out> {
    fn subscriptions(&self) -> &'static [EventKind] {
        &[
            EventKind::FeatureEntered,
            EventKind::ScenarioEntered,
            EventKind::StepResultProduced,
            EventKind::RunFinished,
        ]
    }

    async fn handle_event(&mut self, event: &Event) {
        if self.formatter.is_finished() {
            tracing::warn!(
                kind = %event.kind(),
                "event received after the JSON report was written, ignoring",
            );
            return;
        }

        match event {
            Event::FeatureEntered(f) => self.handle_before_feature_event(f),
            Event::ScenarioEntered(sc) => self.handle_before_scenario_event(sc),
            Event::StepResultProduced(res) => {
                self.handle_step_result_event(res);
            }
            Event::RunFinished => {
                if let Err(e) = self.handle_after_features_event() {
                    tracing::error!("failed to write JSON report: {e}");
                }
            }
            Event::RunStarted
            | Event::ScenarioFinished(_)
            | Event::FeatureFinished(_) => {}
        }
    }
}

impl<Out: io::Write> JsonFormatter<Out> {
    /// Creates a new [`JsonFormatter`] outputting [JSON][1] into the given
    /// `output`.
    ///
    /// [1]: https://github.com/cucumber/cucumber-json-schema
    #[must_use]
    pub fn new(output: Out) -> Self {
        Self {
            formatter: Formatter::new(output),
            handler: EventHandler::new(),
            config: Config::default(),
        }
    }

    /// Replaces the [`Config`] of this [`JsonFormatter`].
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Starts a new [`Feature`] in the report.
    pub fn handle_before_feature_event(&mut self, feature: &ast::Feature) {
        self.handler.before_feature(feature);
    }

    /// Starts a new scenario element inside the current [`Feature`].
    pub fn handle_before_scenario_event(&mut self, scenario: &ast::Scenario) {
        self.handler.before_scenario(scenario);
    }

    /// Appends a step to the current scenario element.
    pub fn handle_step_result_event(&mut self, res: &StepResult) {
        self.handler.step_result(res);
    }

    /// Serializes all the accumulated [`Feature`]s, writes them into the sink
    /// and finishes it.
    ///
    /// The sink is finished even if serializing or writing fails.
    ///
    /// # Errors
    ///
    /// If the report fails to be serialized or written, or was already
    /// written.
    pub fn handle_after_features_event(
        &mut self,
    ) -> Result<(), FormatterError> {
        let features = self.handler.features();
        let logged = match self.config.style {
            Style::Compact => serde_json::to_string(features),
            Style::Pretty => serde_json::to_string_pretty(features),
        }
        .map_err(FormatterError::from)
        .and_then(|json| self.formatter.log(json));

        let finished = self.formatter.finish();
        logged.and(finished)
    }

    /// Returns the [`Feature`]s accumulated so far.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        self.handler.features()
    }

    /// Indicates whether the report was already written.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.formatter.is_finished()
    }

    /// Unwraps this [`JsonFormatter`] into its sink.
    #[must_use]
    pub fn into_inner(self) -> Out {
        self.formatter.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use futures::FutureExt as _;
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        ast::raw::{FeatureData, Location, ScenarioData, StepData, TagData},
        event::Status,
        listener::out::WritableString,
    };

    fn feature() -> ast::Feature {
        ast::Feature::new(FeatureData {
            description: "A Feature Description".into(),
            keyword: "Feature".into(),
            location: Location { line: 2 },
            name: "A Feature Name".into(),
            path: "uri".into(),
            tags: vec![
                TagData { name: "tag 1".into(), line: 1 },
                TagData { name: "tag 2".into(), line: 1 },
            ],
            scenarios: vec![],
        })
        .unwrap()
    }

    fn scenario(description: &str) -> ast::Scenario {
        ast::Scenario::new(ScenarioData {
            description: description.into(),
            keyword: "Scenario".into(),
            locations: vec![Location { line: 4 }],
            name: "A Scenario Name".into(),
            path: Some("uri".into()),
            steps: vec![StepData {
                keyword: "Step".into(),
                name: "A Step Name".into(),
                line: 1,
                arguments: vec![],
                hidden: false,
            }],
            tags: vec![
                TagData { name: "tag 1".into(), line: 3 },
                TagData { name: "tag 2".into(), line: 3 },
            ],
        })
        .unwrap()
    }

    fn output(json: JsonFormatter<WritableString>) -> Value {
        serde_json::from_str(&json.into_inner()).unwrap()
    }

    #[test]
    fn no_features_still_finishes() {
        let mut json = JsonFormatter::new(WritableString::default());

        json.handle_after_features_event().unwrap();

        assert!(json.is_finished());
        assert_eq!(output(json), json!([]));
    }

    #[test]
    fn feature_without_scenarios() {
        let mut json = JsonFormatter::new(WritableString::default());

        json.handle_before_feature_event(&feature());
        json.handle_after_features_event().unwrap();

        assert_eq!(
            output(json),
            json!([{
                "description": "A Feature Description",
                "elements": [],
                "id": "a-feature-name",
                "keyword": "Feature",
                "line": 2,
                "name": "A Feature Name",
                "tags": [
                    {"name": "tag 1", "line": 1},
                    {"name": "tag 2", "line": 1},
                ],
                "uri": "uri",
            }]),
        );
    }

    #[test]
    fn scenario_without_steps() {
        let mut json = JsonFormatter::new(WritableString::default());

        json.handle_before_feature_event(&feature());
        json.handle_before_scenario_event(&scenario("A Scenario Description"));
        json.handle_after_features_event().unwrap();

        assert_eq!(
            output(json)[0]["elements"],
            json!([{
                "description": "A Scenario Description",
                "id": "a-feature-name;a-scenario-name",
                "keyword": "Scenario",
                "line": 4,
                "name": "A Scenario Name",
                "steps": [],
                "tags": [
                    {"name": "tag 1", "line": 3},
                    {"name": "tag 2", "line": 3},
                ],
                "type": "scenario",
            }]),
        );
    }

    #[test]
    fn empty_description_is_omitted() {
        let mut json = JsonFormatter::new(WritableString::default());

        json.handle_before_feature_event(&feature());
        json.handle_before_scenario_event(&scenario(""));
        json.handle_after_features_event().unwrap();

        assert!(output(json)[0]["elements"][0].get("description").is_none());
    }

    #[test]
    fn dispatches_events_through_listener() {
        let mut json = JsonFormatter::new(WritableString::default());
        let sc = Arc::new(scenario(""));
        let res = StepResult::new(sc.steps()[0].clone(), Status::Passed)
            .with_duration(Duration::from_nanos(1));

        for ev in [
            Event::RunStarted,
            Event::FeatureEntered(Arc::new(feature())),
            Event::ScenarioEntered(Arc::clone(&sc)),
            Event::StepResultProduced(Arc::new(res)),
            Event::ScenarioFinished(sc),
            Event::RunFinished,
        ] {
            json.handle_event(&ev).now_or_never().unwrap();
        }

        assert_eq!(
            output(json)[0]["elements"][0]["steps"],
            json!([{
                "arguments": [],
                "line": 1,
                "keyword": "Step",
                "name": "A Step Name",
                "result": {"status": "passed", "duration": 1},
            }]),
        );
    }

    #[test]
    fn ignores_events_after_finish() {
        let mut json = JsonFormatter::new(WritableString::default());
        json.handle_event(&Event::RunFinished).now_or_never().unwrap();

        json.handle_event(&Event::FeatureEntered(Arc::new(feature())))
            .now_or_never()
            .unwrap();
        json.handle_event(&Event::RunFinished).now_or_never().unwrap();

        assert!(json.features().is_empty());
        assert_eq!(json.into_inner().0, "[]");
    }

    #[test]
    fn second_finish_is_error() {
        let mut json = JsonFormatter::new(WritableString::default());
        json.handle_after_features_event().unwrap();

        assert!(matches!(
            json.handle_after_features_event(),
            Err(FormatterError::AlreadyFinished),
        ));
    }

    /// Sink rejecting every write.
    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn finishes_even_if_writing_fails() {
        let mut json = JsonFormatter::new(Broken);
        json.handle_before_feature_event(&feature());

        assert!(matches!(
            json.handle_after_features_event(),
            Err(FormatterError::Io(_)),
        ));
        assert!(json.is_finished());

        json.handle_event(&Event::FeatureEntered(Arc::new(feature())))
            .now_or_never()
            .unwrap();
        assert_eq!(json.features().len(), 1);
    }

    #[test]
    fn pretty_style_is_indented() {
        let mut json = JsonFormatter::new(WritableString::default())
            .with_config(Config { style: Style::Pretty });

        json.handle_before_feature_event(&feature());
        json.handle_after_features_event().unwrap();

        let out = json.into_inner().0;
        assert!(out.contains("\n  {\n"));
        assert_eq!(
            serde_json::from_str::<Value>(&out).unwrap()[0]["id"],
            "a-feature-name",
        );
    }

    #[test]
    fn subscribes_to_fixed_subset() {
        let json = JsonFormatter::new(WritableString::default());

        assert_eq!(json.subscriptions().len(), 4);
        assert!(!json.subscriptions().contains(&EventKind::RunStarted));
    }
}
