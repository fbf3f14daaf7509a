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

mod support;

use saga_correlation::{CorrelationConfig, CorrelationError, MessageType};
use support::{init_tracing, OrderPlaced, Ping, PriorityOrderPlaced, ORDER_SAGA_CONFIG};

fn property_names(config: &CorrelationConfig, message_type: &str) -> Vec<String> {
    config
        .build()
        .expect("descriptor should build")
        .for_message_type(&MessageType::new(message_type))
        .expect("message type should resolve")
        .iter()
        .map(|property| property.property_name().to_string())
        .collect()
}

#[test]
fn fixture_file_builds_a_working_descriptor() {
    init_tracing();
    let config = CorrelationConfig::from_file(ORDER_SAGA_CONFIG).expect("fixture should load");
    let correlations = config.build().expect("descriptor should build");

    assert_eq!(correlations.saga_data_type().as_str(), "OrderSagaData");
    assert_eq!(correlations.iter().count(), 3);

    let placed = correlations
        .for_message(&OrderPlaced { order_id: 1 })
        .expect("OrderPlaced should resolve");
    let priority = correlations
        .for_message(&PriorityOrderPlaced {
            order_id: 1,
            priority: 2,
        })
        .expect("PriorityOrderPlaced should resolve");

    assert_eq!(placed, priority);
    assert!(matches!(
        correlations.for_message(&Ping),
        Err(CorrelationError::UnresolvedCorrelation { .. })
    ));
}

#[test]
fn inherited_properties_follow_the_walk_order() {
    init_tracing();
    let config = CorrelationConfig::from_file(ORDER_SAGA_CONFIG).expect("fixture should load");

    assert_eq!(
        property_names(&config, "PriorityOrderPlaced"),
        vec!["order_id", "tenant_id"]
    );
    assert_eq!(
        property_names(&config, "OrderShipped"),
        vec!["order_ref", "tenant_id"]
    );
    assert_eq!(property_names(&config, "OrderEvent"), vec!["tenant_id"]);
}

#[test]
fn round_trips_through_serde() {
    let config = CorrelationConfig::from_file(ORDER_SAGA_CONFIG).expect("fixture should load");

    let rendered = json5::to_string(&config).expect("config should serialize");
    let reparsed = CorrelationConfig::from_json5_str(&rendered).expect("config should reparse");

    assert_eq!(reparsed.correlations, config.correlations);
    assert_eq!(reparsed.hierarchy, config.hierarchy);
}
