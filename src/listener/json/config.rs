// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options of the [`JsonFormatter`].
//!
//! [`JsonFormatter`]: super::JsonFormatter

use std::str::FromStr;

use smart_default::SmartDefault;

/// CLI options of a [`JsonFormatter`].
///
/// [`JsonFormatter`]: super::JsonFormatter
#[derive(Clone, Copy, Debug, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Config {
    /// Layout of the JSON report.
    #[arg(
        long = "json-style",
        value_name = "compact|pretty",
        default_value = "compact",
        global = true
    )]
    #[default(Style::Compact)]
    pub style: Style,
}

/// Possible layouts of the JSON report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Style {
    /// Single line without any insignificant whitespace.
    Compact,

    /// Indented, one value per line.
    Pretty,
}

impl FromStr for Style {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err("possible options: compact, pretty"),
        }
    }
}
