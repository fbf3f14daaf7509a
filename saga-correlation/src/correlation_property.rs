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

use crate::message_type::MessageType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// One correlation rule: the message property whose value must equal a property
/// on the saga data for the message to be routed to that saga instance.
///
/// # Examples
///
/// ```
/// use saga_correlation::CorrelationProperty;
///
/// let property = CorrelationProperty::new("OrderPlaced", "order_id", "order_id");
///
/// assert_eq!(property.message_type().as_str(), "OrderPlaced");
/// assert_eq!(property.to_string(), "OrderPlaced.order_id -> order_id");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CorrelationProperty {
    message_type: MessageType,
    property_name: Arc<str>,
    saga_data_property_name: Arc<str>,
}

impl CorrelationProperty {
    pub fn new(
        message_type: impl Into<MessageType>,
        property_name: &str,
        saga_data_property_name: &str,
    ) -> Self {
        Self {
            message_type: message_type.into(),
            property_name: Arc::from(property_name),
            saga_data_property_name: Arc::from(saga_data_property_name),
        }
    }

    /// Declared message type this property was registered for.
    pub fn message_type(&self) -> &MessageType {
        &self.message_type
    }

    /// Accessor path on the message that supplies the correlation value.
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Path on the saga data that the correlation value must equal.
    pub fn saga_data_property_name(&self) -> &str {
        &self.saga_data_property_name
    }
}

impl Display for CorrelationProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} -> {}",
            self.message_type, self.property_name, self.saga_data_property_name
        )
    }
}
