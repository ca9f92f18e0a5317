// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Consumers of lifecycle [`Event`]s and their delivery.

pub mod formatter;
pub mod json;
pub mod out;

use std::fmt;

use async_trait::async_trait;

use crate::event::{Event, EventKind};

pub use self::{
    formatter::{Formatter, FormatterError},
    json::JsonFormatter,
};

/// Consumer of lifecycle [`Event`]s.
#[async_trait(?Send)]
pub trait Listener {
    /// [`EventKind`]s this [`Listener`] wants to receive.
    ///
    /// Receives every [`Event`] by default.
    fn subscriptions(&self) -> &'static [EventKind] {
        EventKind::ALL
    }

    /// Handles the given [`Event`].
    ///
    /// No other [`Event`] is delivered until the returned future resolves.
    async fn handle_event(&mut self, event: &Event);
}

#[async_trait(?Send)]
impl<L: Listener + ?Sized> Listener for &mut L {
    fn subscriptions(&self) -> &'static [EventKind] {
        (**self).subscriptions()
    }

    async fn handle_event(&mut self, event: &Event) {
        (**self).handle_event(event).await;
    }
}

#[async_trait(?Send)]
impl<L: Listener + ?Sized> Listener for Box<L> {
    fn subscriptions(&self) -> &'static [EventKind] {
        (**self).subscriptions()
    }

    async fn handle_event(&mut self, event: &Event) {
        (**self).handle_event(event).await;
    }
}

/// Delivery of [`Event`]s to registered [`Listener`]s.
///
/// # Order guarantees
///
/// [`EventBus::emit()`] awaits every subscribed [`Listener`] in registration
/// order before returning, so [`Event`]s are handled one at a time and in the
/// order they are emitted.
#[derive(Default)]
pub struct EventBus<'l> {
    listeners: Vec<Box<dyn Listener + 'l>>,
}

impl<'l> EventBus<'l> {
    /// Creates a new [`EventBus`] without any [`Listener`]s.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the given [`Listener`], delivering [`Event`]s to it after the
    /// already registered ones.
    pub fn register(&mut self, listener: impl Listener + 'l) -> &mut Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Number of registered [`Listener`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Indicates whether no [`Listener`]s are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Delivers the given [`Event`] to every [`Listener`] subscribed to its
    /// [`EventKind`].
    pub async fn emit(&mut self, event: Event) {
        let kind = event.kind();
        tracing::debug!(%kind, "emitting event");

        for listener in &mut self.listeners {
            if listener.subscriptions().contains(&kind) {
                listener.handle_event(&event).await;
            }
        }
    }
}

impl fmt::Debug for EventBus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
