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

#![allow(dead_code)]

use saga_correlation::{
    CorrelatedMessage, CorrelationProperty, CorrelationRegistry, MessageType,
    SagaDataCorrelationProperties, StaticTypeHierarchy, TypeHierarchy,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

pub(crate) const ORDER_SAGA_CONFIG: &str = "tests/fixtures/order_saga.json5";

static TRACING: Once = Once::new();

pub(crate) fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub(crate) struct OrderPlaced {
    pub(crate) order_id: u64,
}

impl CorrelatedMessage for OrderPlaced {
    fn message_type(&self) -> MessageType {
        MessageType::new("OrderPlaced")
    }
}

pub(crate) struct PriorityOrderPlaced {
    pub(crate) order_id: u64,
    pub(crate) priority: u8,
}

impl CorrelatedMessage for PriorityOrderPlaced {
    fn message_type(&self) -> MessageType {
        MessageType::new("PriorityOrderPlaced")
    }
}

pub(crate) struct Ping;

impl CorrelatedMessage for Ping {
    fn message_type(&self) -> MessageType {
        MessageType::new("Ping")
    }
}

/// Counts hierarchy walks; the resolver asks for supertypes exactly once per walk.
pub(crate) struct CountingHierarchy {
    inner: StaticTypeHierarchy,
    walks: AtomicUsize,
}

impl CountingHierarchy {
    pub(crate) fn new(inner: StaticTypeHierarchy) -> Self {
        Self {
            inner,
            walks: AtomicUsize::new(0),
        }
    }

    pub(crate) fn walks(&self) -> usize {
        self.walks.load(Ordering::SeqCst)
    }
}

impl TypeHierarchy for CountingHierarchy {
    fn supertypes_of(&self, message_type: &MessageType) -> Vec<MessageType> {
        self.walks.fetch_add(1, Ordering::SeqCst);
        self.inner.supertypes_of(message_type)
    }
}

pub(crate) fn order_id() -> CorrelationProperty {
    CorrelationProperty::new("OrderPlaced", "order_id", "order_id")
}

pub(crate) fn order_hierarchy() -> StaticTypeHierarchy {
    StaticTypeHierarchy::new().declare("PriorityOrderPlaced", ["OrderPlaced"])
}

/// Registry `{OrderPlaced: [order_id]}` with `PriorityOrderPlaced: OrderPlaced`.
pub(crate) fn order_saga() -> (Arc<SagaDataCorrelationProperties>, Arc<CountingHierarchy>) {
    init_tracing();

    let registry =
        CorrelationRegistry::from_properties([order_id()], MessageType::new("OrderSagaData"))
            .expect("order saga registry should build");
    let hierarchy = Arc::new(CountingHierarchy::new(order_hierarchy()));
    let correlations = SagaDataCorrelationProperties::new(registry, hierarchy.clone());

    (Arc::new(correlations), hierarchy)
}
