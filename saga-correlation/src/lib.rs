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

//! # saga-correlation
//!
//! `saga-correlation` resolves, for an incoming message, the correlation properties
//! used to find the saga instance the message belongs to.
//!
//! A saga data type declares correlation properties per message type. Messages are
//! matched across their whole type hierarchy: a property declared for `OrderPlaced`
//! also applies to a `PriorityOrderPlaced` that derives from it. Resolution happens
//! for every inbound message, so the merged result for each concrete message type is
//! computed once and then served from a lock-free cache.
//!
//! ```
//! use std::sync::Arc;
//! use saga_correlation::{
//!     CorrelatedMessage, CorrelationError, CorrelationProperty, CorrelationRegistry,
//!     MessageType, SagaDataCorrelationProperties, StaticTypeHierarchy,
//! };
//!
//! struct OrderPlaced {
//!     order_id: u64,
//! }
//!
//! impl CorrelatedMessage for OrderPlaced {
//!     fn message_type(&self) -> MessageType {
//!         MessageType::new("OrderPlaced")
//!     }
//! }
//!
//! struct Ping;
//!
//! impl CorrelatedMessage for Ping {
//!     fn message_type(&self) -> MessageType {
//!         MessageType::new("Ping")
//!     }
//! }
//!
//! let registry = CorrelationRegistry::from_properties(
//!     [CorrelationProperty::new("OrderPlaced", "order_id", "order_id")],
//!     MessageType::new("OrderSagaData"),
//! )
//! .unwrap();
//! let correlations = Arc::new(SagaDataCorrelationProperties::new(
//!     registry,
//!     Arc::new(StaticTypeHierarchy::new()),
//! ));
//!
//! let resolved = correlations.for_message(&OrderPlaced { order_id: 42 }).unwrap();
//! assert_eq!(resolved.len(), 1);
//! assert_eq!(resolved[0].saga_data_property_name(), "order_id");
//!
//! assert!(matches!(
//!     correlations.for_message(&Ping),
//!     Err(CorrelationError::UnresolvedCorrelation { .. })
//! ));
//! ```
//!
//! ## Internal architecture map
//!
//! - Registry: exact-type correlation declarations, immutable after construction
//! - Type hierarchy: pluggable supertype discovery (`TypeHierarchy`)
//! - Resolution: hierarchy walk plus insert-or-get cache keyed by concrete type
//! - Configuration: json5 documents describing one saga data type
//! - Lifetime events: shutdown hooks raised by the hosting runtime
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events and never initializes a global
//! subscriber. Binaries and tests are responsible for `tracing_subscriber`
//! initialization.

mod config;
pub use config::{CorrelationConfig, CorrelationDeclaration};

mod correlation_property;
pub use correlation_property::CorrelationProperty;

mod error;
pub use error::{CorrelationError, Result};

mod lifetime_events;
pub use lifetime_events::{BusLifetimeEvents, LifetimeHook};

mod message_type;
pub use message_type::{CorrelatedMessage, MessageType};

#[doc(hidden)]
pub mod observability;

mod registry;
pub use registry::CorrelationRegistry;

mod resolution;
pub use resolution::{ResolutionStats, SagaDataCorrelationProperties};

mod type_hierarchy;
pub use type_hierarchy::{NoHierarchy, StaticTypeHierarchy, TypeHierarchy};

#[doc(hidden)]
pub mod benchmark_support;
