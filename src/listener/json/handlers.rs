// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Accumulation of lifecycle events into the report tree.

use crate::{
    ast,
    event::StepResult,
    listener::json::{element::Element, feature::Feature, types::Step},
};

/// Builder of the [`Feature`]s tree out of lifecycle events.
///
/// The last [`Feature`] is the current one, and its last [`Element`] is the
/// current one, as events arrive in a total order.
#[derive(Clone, Debug, Default)]
pub struct EventHandler {
    /// Collection of [`Feature`]s to output [JSON][1] from.
    ///
    /// [1]: https://github.com/cucumber/cucumber-json-schema
    pub features: Vec<Feature>,
}

impl EventHandler {
    /// Creates a new empty [`EventHandler`].
    #[must_use]
    pub const fn new() -> Self {
        Self { features: vec![] }
    }

    /// Appends a new [`Feature`], making it the current one.
    pub fn before_feature(&mut self, feature: &ast::Feature) {
        self.features.push(Feature::new(feature));
    }

    /// Appends a new [`Element`] to the current [`Feature`], making it the
    /// current one.
    ///
    /// Ignored if no [`Feature`] was entered yet.
    pub fn before_scenario(&mut self, scenario: &ast::Scenario) {
        let Some(feature) = self.features.last_mut() else {
            tracing::warn!(
                scenario = %scenario.name(),
                "scenario entered before any feature, ignoring",
            );
            return;
        };
        let el = Element::new(&feature.id, scenario);
        feature.elements.push(el);
    }

    /// Appends a new [`Step`] to the current [`Element`].
    ///
    /// Ignored if no [`Element`] was entered yet.
    pub fn step_result(&mut self, res: &StepResult) {
        let Some(el) = self.current_element_mut() else {
            tracing::warn!(
                step = %res.step().name(),
                "step result produced before any scenario, ignoring",
            );
            return;
        };
        el.steps.push(Step::from(res));
    }

    /// Returns the current [`Element`], if any.
    pub fn current_element_mut(&mut self) -> Option<&mut Element> {
        self.features.last_mut()?.elements.last_mut()
    }

    /// Returns the [`Feature`]s accumulated so far.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}
