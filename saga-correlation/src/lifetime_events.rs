/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Bus lifetime hooks fired by the hosting runtime during shutdown.
//!
//! Each hook is a zero-argument broadcast. Observers run synchronously on the
//! raising thread, in registration order. A panicking observer unwinds through
//! the raise call and the remaining observers of that broadcast do not run, so
//! observers must not panic.

use crate::observability::events;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

const COMPONENT: &str = "bus_lifetime_events";

type Observer = Arc<dyn Fn() + Send + Sync>;

/// The three shutdown extension points, in the order a host raises them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LifetimeHook {
    /// Shutdown is starting; workers are still running.
    BusDisposing,
    /// All workers have stopped; shutdown is not complete yet.
    WorkersStopped,
    /// Shutdown has completed.
    BusDisposed,
}

impl LifetimeHook {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifetimeHook::BusDisposing => "bus_disposing",
            LifetimeHook::WorkersStopped => "workers_stopped",
            LifetimeHook::BusDisposed => "bus_disposed",
        }
    }
}

impl Display for LifetimeHook {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Default)]
struct ObserverList {
    observers: RwLock<Vec<Observer>>,
}

impl ObserverList {
    fn push(&self, observer: Observer) -> usize {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        observers.push(observer);
        observers.len()
    }

    fn snapshot(&self) -> Vec<Observer> {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn len(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Observer registry for the bus shutdown sequence.
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use saga_correlation::BusLifetimeEvents;
///
/// let lifetime_events = BusLifetimeEvents::new();
/// let stopped = Arc::new(AtomicUsize::new(0));
///
/// let counter = stopped.clone();
/// lifetime_events.on_workers_stopped(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// lifetime_events.raise_bus_disposing();
/// lifetime_events.raise_workers_stopped();
/// lifetime_events.raise_bus_disposed();
///
/// assert_eq!(stopped.load(Ordering::SeqCst), 1);
/// ```
#[derive(Default)]
pub struct BusLifetimeEvents {
    bus_disposing: ObserverList,
    workers_stopped: ObserverList,
    bus_disposed: ObserverList,
}

impl BusLifetimeEvents {
    pub fn new() -> Self {
        Self::default()
    }

    fn observers(&self, hook: LifetimeHook) -> &ObserverList {
        match hook {
            LifetimeHook::BusDisposing => &self.bus_disposing,
            LifetimeHook::WorkersStopped => &self.workers_stopped,
            LifetimeHook::BusDisposed => &self.bus_disposed,
        }
    }

    /// Registers `observer` for `hook`.
    pub fn subscribe<F>(&self, hook: LifetimeHook, observer: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let observer_count = self.observers(hook).push(Arc::new(observer));
        debug!(
            event = events::LIFETIME_OBSERVER_REGISTERED,
            component = COMPONENT,
            lifetime_hook = hook.as_str(),
            observer_count,
            "registered lifetime observer"
        );
    }

    /// Runs before the bus stops its workers.
    pub fn on_bus_disposing<F>(&self, observer: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe(LifetimeHook::BusDisposing, observer);
    }

    /// Runs after the bus has stopped all workers, before disposal completes.
    pub fn on_workers_stopped<F>(&self, observer: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe(LifetimeHook::WorkersStopped, observer);
    }

    /// Runs after the bus has been fully disposed.
    pub fn on_bus_disposed<F>(&self, observer: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe(LifetimeHook::BusDisposed, observer);
    }

    pub fn observer_count(&self, hook: LifetimeHook) -> usize {
        self.observers(hook).len()
    }

    /// Invokes every observer of `hook` in registration order.
    ///
    /// Observers registered while the broadcast runs are not invoked by it.
    pub fn raise(&self, hook: LifetimeHook) {
        let observers = self.observers(hook).snapshot();
        debug!(
            event = events::LIFETIME_BROADCAST_START,
            component = COMPONENT,
            lifetime_hook = hook.as_str(),
            observer_count = observers.len(),
            "raising lifetime event"
        );

        for observer in &observers {
            observer();
        }

        debug!(
            event = events::LIFETIME_BROADCAST_OK,
            component = COMPONENT,
            lifetime_hook = hook.as_str(),
            "lifetime event delivered"
        );
    }

    pub fn raise_bus_disposing(&self) {
        self.raise(LifetimeHook::BusDisposing);
    }

    pub fn raise_workers_stopped(&self) {
        self.raise(LifetimeHook::WorkersStopped);
    }

    pub fn raise_bus_disposed(&self) {
        self.raise(LifetimeHook::BusDisposed);
    }
}
