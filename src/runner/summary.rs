// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Execution statistics of a run.

use derive_more::with_trait::Display;

use crate::event::Status;

/// Execution statistics of a [`Runner::run()`].
///
/// [`Runner::run()`]: super::Runner::run
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
#[display(
    "{features} features, {} scenarios ({scenarios_passed} passed, \
     {scenarios_failed} failed), {} steps",
    self.scenarios(),
    self.steps(),
)]
pub struct Summary {
    /// Number of executed features.
    pub features: usize,

    /// Number of scenarios without failed steps.
    pub scenarios_passed: usize,

    /// Number of scenarios with at least one failed step.
    pub scenarios_failed: usize,

    /// Number of [`Status::Passed`] steps.
    pub passed: usize,

    /// Number of [`Status::Failed`] steps.
    pub failed: usize,

    /// Number of [`Status::Skipped`] steps.
    pub skipped: usize,

    /// Number of [`Status::Pending`] steps.
    pub pending: usize,

    /// Number of [`Status::Undefined`] steps.
    pub undefined: usize,

    /// Number of [`Status::Ambiguous`] steps.
    pub ambiguous: usize,
}

impl Summary {
    /// Total number of executed scenarios.
    #[must_use]
    pub const fn scenarios(&self) -> usize {
        self.scenarios_passed + self.scenarios_failed
    }

    /// Total number of steps, whatever their [`Status`].
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.passed
            + self.failed
            + self.skipped
            + self.pending
            + self.undefined
            + self.ambiguous
    }

    /// Indicates whether any step failed during the run.
    #[must_use]
    pub const fn has_failed(&self) -> bool {
        self.failed > 0 || self.scenarios_failed > 0
    }

    pub(crate) fn record_step(&mut self, status: Status) {
        let counter = match status {
            Status::Passed => &mut self.passed,
            Status::Failed => &mut self.failed,
            Status::Skipped => &mut self.skipped,
            Status::Pending => &mut self.pending,
            Status::Undefined => &mut self.undefined,
            Status::Ambiguous => &mut self.ambiguous,
        };
        *counter += 1;
    }

    pub(crate) fn record_scenario(&mut self, failed: bool) {
        if failed {
            self.scenarios_failed += 1;
        } else {
            self.scenarios_passed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_steps_by_status() {
        let mut summary = Summary::default();

        for st in [
            Status::Passed,
            Status::Passed,
            Status::Failed,
            Status::Skipped,
            Status::Undefined,
            Status::Ambiguous,
            Status::Pending,
        ] {
            summary.record_step(st);
        }

        assert_eq!(summary.passed, 2);
        assert_eq!(summary.steps(), 7);
        assert!(summary.has_failed());
    }

    #[test]
    fn display() {
        let mut summary = Summary { features: 1, ..Summary::default() };
        summary.record_scenario(false);
        summary.record_scenario(true);
        summary.record_step(Status::Passed);

        assert_eq!(
            summary.to_string(),
            "1 features, 2 scenarios (1 passed, 1 failed), 1 steps",
        );
    }
}
