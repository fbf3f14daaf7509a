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

//! Exact-type correlation registry owned by one saga data descriptor.

use crate::correlation_property::CorrelationProperty;
use crate::error::{CorrelationError, Result};
use crate::message_type::MessageType;
use crate::observability::{events, fields};
use std::collections::HashMap;
use tracing::{debug, warn};

const COMPONENT: &str = "correlation_registry";

/// Declared correlation properties, keyed by the exact message type they were
/// registered for.
///
/// The registry never walks type hierarchies and is never mutated after
/// [`CorrelationRegistry::new`] returns.
#[derive(Clone, Debug)]
pub struct CorrelationRegistry {
    correlation_properties: HashMap<MessageType, Vec<CorrelationProperty>>,
    saga_data_type: MessageType,
}

fn reject(saga_data_type: &MessageType, reason: &'static str, detail: String) -> CorrelationError {
    warn!(
        event = events::REGISTRY_BUILD_FAILED,
        component = COMPONENT,
        saga_data_type = %saga_data_type,
        reason,
        err = %detail,
        "rejected correlation registry"
    );
    CorrelationError::InvalidConfiguration(detail)
}

impl CorrelationRegistry {
    /// Builds the registry for `saga_data_type`.
    ///
    /// The saga data type is kept only for diagnostics. Fails with
    /// [`CorrelationError::InvalidConfiguration`] when the saga data type is blank,
    /// the mapping is empty, a key maps to no properties, or a property is stored
    /// under a type other than the one it declares.
    pub fn new(
        correlation_properties: HashMap<MessageType, Vec<CorrelationProperty>>,
        saga_data_type: MessageType,
    ) -> Result<Self> {
        if saga_data_type.is_blank() {
            return Err(reject(
                &saga_data_type,
                fields::REASON_BLANK_SAGA_DATA_TYPE,
                "saga data type must be specified".to_string(),
            ));
        }

        if correlation_properties.is_empty() {
            return Err(reject(
                &saga_data_type,
                fields::REASON_EMPTY_MAPPING,
                format!("no correlation properties declared for saga data {saga_data_type}"),
            ));
        }

        for (message_type, properties) in &correlation_properties {
            if properties.is_empty() {
                return Err(reject(
                    &saga_data_type,
                    fields::REASON_EMPTY_PROPERTY_LIST,
                    format!(
                        "message {message_type} has an empty correlation property list for saga data {saga_data_type}"
                    ),
                ));
            }

            if let Some(misplaced) = properties
                .iter()
                .find(|property| property.message_type() != message_type)
            {
                return Err(reject(
                    &saga_data_type,
                    fields::REASON_KEY_MISMATCH,
                    format!(
                        "correlation property {misplaced} is registered under message {message_type}"
                    ),
                ));
            }
        }

        debug!(
            event = events::REGISTRY_BUILD_OK,
            component = COMPONENT,
            saga_data_type = %saga_data_type,
            declared_types = correlation_properties.len(),
            "built correlation registry"
        );

        Ok(Self {
            correlation_properties,
            saga_data_type,
        })
    }

    /// Builds the registry from a flat list, grouping properties by their declared
    /// message type while keeping declaration order within each type.
    pub fn from_properties<I>(properties: I, saga_data_type: MessageType) -> Result<Self>
    where
        I: IntoIterator<Item = CorrelationProperty>,
    {
        let mut grouped: HashMap<MessageType, Vec<CorrelationProperty>> = HashMap::new();
        for property in properties {
            grouped
                .entry(property.message_type().clone())
                .or_default()
                .push(property);
        }
        Self::new(grouped, saga_data_type)
    }

    /// Properties registered for exactly `message_type`, in registration order.
    pub fn lookup_exact(&self, message_type: &MessageType) -> Option<&[CorrelationProperty]> {
        self.correlation_properties
            .get(message_type)
            .map(Vec::as_slice)
    }

    pub fn saga_data_type(&self) -> &MessageType {
        &self.saga_data_type
    }

    /// Message types that carry at least one registration.
    pub fn declared_types(&self) -> impl Iterator<Item = &MessageType> {
        self.correlation_properties.keys()
    }

    /// Every declared correlation property across all message types.
    ///
    /// Order across message types is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &CorrelationProperty> {
        self.correlation_properties.values().flatten()
    }

    /// Number of declared correlation properties.
    pub fn len(&self) -> usize {
        self.correlation_properties.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> IntoIterator for &'a CorrelationRegistry {
    type Item = &'a CorrelationProperty;
    type IntoIter = std::iter::Flatten<
        std::collections::hash_map::Values<'a, MessageType, Vec<CorrelationProperty>>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.correlation_properties.values().flatten()
    }
}
