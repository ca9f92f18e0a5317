// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversions of [`gherkin`] parser output into [raw data bags](super::raw).

use super::raw::{
    ArgumentData, FeatureData, Location, ScenarioData, StepData, TagData,
};

impl From<&gherkin::Feature> for FeatureData {
    /// Flattens [`gherkin::Rule`] scenarios after top-level ones, and prepends
    /// [`gherkin::Background`] steps to every scenario they apply to.
    ///
    /// As [`gherkin`] omits tag lines, every tag takes the line of its owner.
    /// Step keywords always end with a single space.
    fn from(feature: &gherkin::Feature) -> Self {
        let path = feature
            .path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        let background = feature
            .background
            .as_ref()
            .map(|bg| bg.steps.as_slice())
            .unwrap_or_default();

        let top_level = feature
            .scenarios
            .iter()
            .map(|sc| scenario(sc, background.iter(), &path));
        let ruled = feature.rules.iter().flat_map(|rule| {
            let rule_background = rule
                .background
                .as_ref()
                .map(|bg| bg.steps.as_slice())
                .unwrap_or_default();
            rule.scenarios.iter().map({
                let path = &path;
                move |sc| {
                    let steps = background.iter().chain(rule_background);
                    scenario(sc, steps, path)
                }
            })
        });

        Self {
            description: description(feature.description.as_deref()),
            keyword: feature.keyword.clone(),
            location: Location { line: feature.position.line },
            name: feature.name.clone(),
            tags: tags(&feature.tags, feature.position.line),
            scenarios: top_level.chain(ruled).collect(),
            path,
        }
    }
}

/// Converts a [`gherkin::Scenario`] preceded by the given background steps.
fn scenario<'s>(
    sc: &'s gherkin::Scenario,
    background: impl Iterator<Item = &'s gherkin::Step>,
    path: &str,
) -> ScenarioData {
    ScenarioData {
        description: description(sc.description.as_deref()),
        keyword: sc.keyword.clone(),
        locations: vec![Location { line: sc.position.line }],
        name: sc.name.clone(),
        path: Some(path.to_owned()),
        steps: background.chain(&sc.steps).map(step).collect(),
        tags: tags(&sc.tags, sc.position.line),
    }
}

fn step(st: &gherkin::Step) -> StepData {
    let line = st.position.line;
    let doc_string = st.docstring.as_deref().map(|content| {
        ArgumentData::DocString {
            content: doc_string_content(content).to_owned(),
            line: line + 1,
            content_type: None,
        }
    });
    let table = st
        .table
        .as_ref()
        .map(|t| ArgumentData::DataTable { rows: t.rows.clone() });

    StepData {
        keyword: format!("{} ", st.keyword.trim_end()),
        name: st.value.clone(),
        line,
        arguments: doc_string.into_iter().chain(table).collect(),
        hidden: false,
    }
}

fn description(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_owned()
}

/// Strips the line breaks [`gherkin`] keeps right after the opening delimiter
/// and right before the closing one.
fn doc_string_content(raw: &str) -> &str {
    let content = raw.strip_prefix('\n').unwrap_or(raw);
    content.strip_suffix('\n').unwrap_or(content)
}

fn tags(names: &[String], line: usize) -> Vec<TagData> {
    names
        .iter()
        .map(|name| TagData { name: format!("@{name}"), line })
        .collect()
}

#[cfg(test)]
mod tests {
    use gherkin::GherkinEnv;

    use super::*;
    use crate::ast::{Feature, StepArgument};

    const FEATURE: &str = "\
@smoke
Feature: Parsed feature

  Background:
    Given a background step

  @fast
  Scenario: First
    Eats it all.

    When a doc string is given
      \"\"\"
      hello
      \"\"\"
    Then a table is given
      | a | b |
      | c | d |

  Rule: Some rule

    Scenario: Ruled
      Then it runs
";

    fn parsed() -> FeatureData {
        let f = gherkin::Feature::parse(FEATURE, GherkinEnv::default())
            .expect("valid feature");
        FeatureData::from(&f)
    }

    #[test]
    fn converts_feature() {
        let data = parsed();

        assert_eq!(data.keyword, "Feature");
        assert_eq!(data.name, "Parsed feature");
        assert_eq!(data.location.line, 2);
        assert_eq!(data.tags, [TagData { name: "@smoke".into(), line: 2 }]);
    }

    #[test]
    fn flattens_rules_and_prepends_background() {
        let data = parsed();

        let names = data.scenarios.iter().map(|s| &s.name).collect::<Vec<_>>();
        assert_eq!(names, ["First", "Ruled"]);

        let first = &data.scenarios[0];
        assert_eq!(first.description, "Eats it all.");
        assert_eq!(first.steps.len(), 3);
        assert_eq!(first.steps[0].name, "a background step");
        assert_eq!(first.steps[0].keyword, "Given ");
        assert_eq!(first.tags[0].name, "@fast");

        let ruled = &data.scenarios[1];
        assert_eq!(ruled.steps[0].name, "a background step");
        assert_eq!(ruled.steps[1].name, "it runs");
    }

    #[test]
    fn converts_step_arguments() {
        let feature = Feature::new(parsed()).unwrap();
        let steps = feature.scenarios()[0].steps();

        let StepArgument::DocString(doc) = &steps[1].arguments()[0] else {
            panic!("expected `DocString`");
        };
        assert_eq!(doc.content(), "hello");
        assert_eq!(doc.line(), steps[1].line() + 1);

        let StepArgument::DataTable(table) = &steps[2].arguments()[0] else {
            panic!("expected `DataTable`");
        };
        assert_eq!(table.raw(), [vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn strips_doc_string_delimiter_line_breaks() {
        assert_eq!(doc_string_content("\nhello\n"), "hello");
        assert_eq!(doc_string_content("\n\nkept\n\n"), "\nkept\n");
        assert_eq!(doc_string_content("bare"), "bare");
    }
}
