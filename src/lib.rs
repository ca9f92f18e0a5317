// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Scenario execution walk and [Cucumber JSON format][1] report builder.
//!
//! - [`ast`]: immutable [`Feature`]s, [`Scenario`]s and [`Step`]s, and the
//!   [`Visitor`] protocol of walking a [`Scenario`].
//! - [`event`]: lifecycle [`Event`]s and [`StepResult`]s.
//! - [`listener`]: consumers of [`Event`]s, including the [`JsonFormatter`].
//! - [`runner`]: sequential [`Runner`] driving the walk.
//!
//! ```rust
//! # use cucumber_report::{
//! #     listener::out::WritableString, runner::Outcome, Feature,
//! #     JsonFormatter, Runner, Step, StepExecutor,
//! # };
//! # use futures::FutureExt as _;
//! #
//! struct AlwaysPass;
//!
//! #[async_trait::async_trait(?Send)]
//! impl StepExecutor for AlwaysPass {
//!     async fn execute(&mut self, _: &Step) -> Outcome {
//!         Outcome::passed()
//!     }
//! }
//!
//! let feature = Feature::from_json(r#"{
//!     "keyword": "Feature",
//!     "name": "Example",
//!     "location": {"line": 1},
//!     "path": "example.feature",
//!     "scenarios": [{
//!         "keyword": "Scenario",
//!         "name": "Passes",
//!         "locations": [{"line": 2}],
//!         "steps": [{"keyword": "Given ", "name": "anything", "line": 3}]
//!     }]
//! }"#).unwrap();
//!
//! let mut json = JsonFormatter::new(WritableString::default());
//! let summary = Runner::new(AlwaysPass)
//!     .listener(&mut json)
//!     .run([feature])
//!     .now_or_never()
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(summary.passed, 1);
//! assert!(json.into_inner().contains(r#""id":"example;passes""#));
//! ```
//!
//! [1]: https://github.com/cucumber/cucumber-json-schema

pub mod ast;
pub mod event;
pub mod listener;
pub mod runner;

#[doc(inline)]
pub use self::{
    ast::{Done, Feature, Scenario, Step, Tag, Visitor},
    event::{Event, EventKind, Status, StepResult},
    listener::{EventBus, Formatter, JsonFormatter, Listener},
    runner::{Runner, StepExecutor, Summary},
};
