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

//! Declarative correlation configuration loaded from json5 documents.
//!
//! ```json5
//! {
//!   saga_data_type: "OrderSagaData",
//!   correlations: [
//!     { message_type: "OrderPlaced", property: "order_id", saga_data_property: "order_id" },
//!   ],
//!   hierarchy: { PriorityOrderPlaced: ["OrderPlaced"] },
//! }
//! ```

use crate::correlation_property::CorrelationProperty;
use crate::error::{CorrelationError, Result};
use crate::message_type::MessageType;
use crate::observability::events;
use crate::registry::CorrelationRegistry;
use crate::resolution::SagaDataCorrelationProperties;
use crate::type_hierarchy::StaticTypeHierarchy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "correlation_config";

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct CorrelationConfig {
    #[serde(default)]
    pub saga_data_type: String,
    #[serde(default)]
    pub correlations: Vec<CorrelationDeclaration>,
    /// Direct supertypes per message type, most significant first.
    #[serde(default)]
    pub hierarchy: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CorrelationDeclaration {
    pub message_type: String,
    pub property: String,
    pub saga_data_property: String,
}

impl From<&CorrelationDeclaration> for CorrelationProperty {
    fn from(declaration: &CorrelationDeclaration) -> Self {
        CorrelationProperty::new(
            declaration.message_type.as_str(),
            &declaration.property,
            &declaration.saga_data_property,
        )
    }
}

impl CorrelationConfig {
    pub fn from_json5_str(contents: &str) -> Result<Self> {
        json5::from_str(contents).map_err(|e| {
            let detail = format!("Unable to parse correlation config: {e}");
            warn!(
                event = events::CONFIG_LOAD_FAILED,
                component = COMPONENT,
                err = %detail,
                "unable to parse correlation config"
            );
            CorrelationError::ConfigLoad(detail)
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            let detail = format!("Unable to read {}: {e}", path.display());
            warn!(
                event = events::CONFIG_LOAD_FAILED,
                component = COMPONENT,
                err = %detail,
                "unable to read correlation config"
            );
            CorrelationError::ConfigLoad(detail)
        })?;

        let config = Self::from_json5_str(&contents)?;
        debug!(
            event = events::CONFIG_LOAD_OK,
            component = COMPONENT,
            path = %path.display(),
            saga_data_type = %config.saga_data_type,
            property_count = config.correlations.len(),
            "loaded correlation config"
        );
        Ok(config)
    }

    pub fn type_hierarchy(&self) -> StaticTypeHierarchy {
        self.hierarchy
            .iter()
            .fold(StaticTypeHierarchy::new(), |hierarchy, (message_type, supertypes)| {
                hierarchy.declare(message_type.as_str(), supertypes.iter().map(String::as_str))
            })
    }

    pub fn registry(&self) -> Result<CorrelationRegistry> {
        CorrelationRegistry::from_properties(
            self.correlations.iter().map(CorrelationProperty::from),
            MessageType::new(&self.saga_data_type),
        )
    }

    /// Builds the descriptor, failing with
    /// [`CorrelationError::InvalidConfiguration`] on a blank saga data type or an
    /// empty correlation list.
    pub fn build(&self) -> Result<SagaDataCorrelationProperties> {
        Ok(SagaDataCorrelationProperties::new(
            self.registry()?,
            Arc::new(self.type_hierarchy()),
        ))
    }
}
