// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [Feature] owning its [`Scenario`]s.
//!
//! [Feature]: https://cucumber.io/docs/gherkin/reference#feature

use super::{raw::FeatureData, BuildError, Scenario, Tag};

/// Immutable [feature][1].
///
/// [1]: https://cucumber.io/docs/gherkin/reference#feature
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feature {
    keyword: String,
    name: String,
    description: String,
    uri: String,
    line: usize,
    tags: Vec<Tag>,
    scenarios: Vec<Scenario>,
}

impl Feature {
    /// Creates a new [`Feature`] out of its raw data.
    ///
    /// [`Scenario`]s without a path inherit the one of this [`Feature`].
    ///
    /// # Errors
    ///
    /// If any of [`Scenario`]s fails to be created.
    pub fn new(data: FeatureData) -> Result<Self, BuildError> {
        let scenarios = data
            .scenarios
            .into_iter()
            .map(|mut sc| {
                if sc.path.is_none() {
                    sc.path = Some(data.path.clone());
                }
                Scenario::new(sc)
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            keyword: data.keyword,
            name: data.name,
            description: data.description,
            uri: data.path,
            line: data.location.line,
            tags: data.tags.into_iter().map(Tag::new).collect(),
            scenarios,
        })
    }

    /// Parses a [`Feature`] out of its raw data in JSON.
    ///
    /// # Errors
    ///
    /// If `json` isn't valid [`FeatureData`], or see [`Feature::new()`].
    pub fn from_json(json: impl AsRef<str>) -> Result<Self, BuildError> {
        Self::new(serde_json::from_str(json.as_ref())?)
    }

    /// Keyword of this [`Feature`].
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Name of this [`Feature`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description of this [`Feature`], empty if there is none.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Path of the `.feature` file.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Line this [`Feature`] is declared on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// [`Tag`]s of this [`Feature`], in declaration order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// [`Scenario`]s of this [`Feature`], in declaration order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEATURE: &str = r#"{
        "keyword": "Feature",
        "name": "Eating",
        "description": "As a hungry user",
        "location": {"line": 2},
        "path": "features/eating.feature",
        "tags": [{"name": "@food", "line": 1}],
        "scenarios": [
            {
                "keyword": "Scenario",
                "name": "inherits path",
                "locations": [{"line": 4}]
            },
            {
                "keyword": "Scenario",
                "name": "keeps own path",
                "locations": [{"line": 8}],
                "path": "elsewhere.feature"
            }
        ]
    }"#;

    #[test]
    fn builds_from_json() {
        let feature = Feature::from_json(FEATURE).unwrap();

        assert_eq!(feature.keyword(), "Feature");
        assert_eq!(feature.name(), "Eating");
        assert_eq!(feature.description(), "As a hungry user");
        assert_eq!(feature.line(), 2);
        assert_eq!(feature.uri(), "features/eating.feature");
        assert_eq!(feature.tags()[0].name(), "@food");
        assert_eq!(feature.scenarios().len(), 2);
    }

    #[test]
    fn scenarios_inherit_missing_path() {
        let feature = Feature::from_json(FEATURE).unwrap();

        assert_eq!(feature.scenarios()[0].uri(), "features/eating.feature");
        assert_eq!(feature.scenarios()[1].uri(), "elsewhere.feature");
    }

    #[test]
    fn invalid_json_is_error() {
        let err = Feature::from_json("{").unwrap_err();

        assert!(matches!(err, BuildError::Json(_)));
    }
}
