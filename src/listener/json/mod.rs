// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [Cucumber JSON format][1] [`Listener`] implementation.
//!
//! - [`types`]: step level serializable types
//! - [`element`]: scenario elements
//! - [`feature`]: features
//! - [`id`]: identifiers of features and elements
//! - [`handlers`]: accumulation of events into the report tree
//! - [`writer`]: the [`JsonFormatter`] itself
//!
//! [`Listener`]: super::Listener
//! [1]: https://github.com/cucumber/cucumber-json-schema

pub mod config;
pub mod element;
pub mod feature;
pub mod handlers;
pub mod id;
pub mod types;
pub mod writer;

pub use self::{
    config::{Config, Style},
    element::Element,
    feature::Feature,
    id::slugify,
    types::{Argument, Base64, Embedding, Row, RunResult, Step, Tag},
    writer::JsonFormatter,
};
