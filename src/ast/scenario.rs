// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [Scenario] owning its [`Step`]s and [`Tag`]s.
//!
//! [Scenario]: https://cucumber.io/docs/gherkin/reference#example

use super::{
    raw::ScenarioData,
    visitor::{Abandoned, Done, Visitor},
    BuildError, Step, Tag,
};

/// Immutable [scenario][1] ready to be walked by a [`Visitor`].
///
/// [1]: https://cucumber.io/docs/gherkin/reference#example
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scenario {
    keyword: String,
    name: String,
    description: String,
    uri: String,
    line: usize,
    steps: Vec<Step>,
    tags: Vec<Tag>,
}

impl Scenario {
    /// Creates a new [`Scenario`] out of its raw data.
    ///
    /// Every [`Step`] receives the [`Scenario`] path as its URI and is linked
    /// to the [`Step`] built right before it.
    ///
    /// # Errors
    ///
    /// If `data` has no `locations`.
    pub fn new(data: ScenarioData) -> Result<Self, BuildError> {
        let line = data
            .locations
            .first()
            .ok_or_else(|| BuildError::NoLocations {
                name: data.name.clone(),
            })?
            .line;
        let uri = data.path.unwrap_or_default();

        Ok(Self {
            steps: data
                .steps
                .into_iter()
                .enumerate()
                .map(|(i, st)| Step::new(st, uri.as_str(), i))
                .collect(),
            tags: data.tags.into_iter().map(Tag::new).collect(),
            keyword: data.keyword,
            name: data.name,
            description: data.description,
            uri,
            line,
        })
    }

    /// Parses a [`Scenario`] out of its raw data in JSON.
    ///
    /// # Errors
    ///
    /// If `json` isn't valid [`ScenarioData`], or see [`Scenario::new()`].
    pub fn from_json(json: impl AsRef<str>) -> Result<Self, BuildError> {
        Self::new(serde_json::from_str(json.as_ref())?)
    }

    /// Keyword of this [`Scenario`].
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Name of this [`Scenario`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description of this [`Scenario`], empty if there is none.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Path of the `.feature` file this [`Scenario`] comes from.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Line this [`Scenario`] is declared on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// [`Step`]s of this [`Scenario`], in declaration order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// [`Tag`]s of this [`Scenario`], in declaration order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Resolves the [`Step`] declared right before the given one.
    #[must_use]
    pub fn previous_step(&self, step: &Step) -> Option<&Step> {
        step.previous_step().and_then(|i| self.steps.get(i))
    }

    /// Walks [`Step`]s of this [`Scenario`] with the given [`Visitor`].
    ///
    /// [`Step`]s are visited one by one in declaration order: the next one is
    /// visited only after the [`Done`] token of the previous one has been
    /// completed. Outcomes of [`Step`]s aren't inspected here, so skipping on
    /// failure is up to the [`Visitor`].
    ///
    /// Resolves right away if there are no [`Step`]s.
    ///
    /// # Errors
    ///
    /// If the [`Visitor`] drops a [`Done`] token without completing it.
    pub async fn accept_visitor<V>(&self, visitor: &mut V) -> Result<(), Abandoned>
    where
        V: Visitor + ?Sized,
    {
        let mut index = 0;
        while let Some(step) = self.steps.get(index) {
            tracing::debug!(
                scenario = %self.name,
                step = %step.name(),
                index,
                "visiting step",
            );

            let (done, completed) = Done::new();
            visitor.visit_step(step, done).await;
            completed.await.map_err(|_| Abandoned { index })?;

            index += 1;
        }
        Ok(())
    }
}
