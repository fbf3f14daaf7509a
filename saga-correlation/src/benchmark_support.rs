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

//! Deterministic benchmark fixtures for the Criterion harness.

use crate::{
    CorrelationError, CorrelationProperty, CorrelationRegistry, MessageType,
    SagaDataCorrelationProperties, StaticTypeHierarchy,
};
use std::sync::Arc;

fn level_type(level: usize) -> MessageType {
    MessageType::new(format!("Level{level}"))
}

/// A linear hierarchy `Level{depth} > ... > Level0` where every level declares
/// `properties_per_level` correlation properties.
pub struct ResolutionFixture {
    depth: usize,
    properties_per_level: usize,
}

impl ResolutionFixture {
    pub fn new(depth: usize, properties_per_level: usize) -> Self {
        Self {
            depth,
            properties_per_level,
        }
    }

    pub fn most_derived(&self) -> MessageType {
        level_type(self.depth)
    }

    /// Builds a fresh descriptor with an empty cache.
    pub fn build(&self) -> Result<SagaDataCorrelationProperties, CorrelationError> {
        let properties = (0..=self.depth).flat_map(|level| {
            (0..self.properties_per_level).map(move |index| {
                CorrelationProperty::new(level_type(level), &format!("key_{index}"), "saga_key")
            })
        });
        let registry =
            CorrelationRegistry::from_properties(properties, MessageType::new("BenchSagaData"))?;

        let hierarchy = (1..=self.depth).fold(StaticTypeHierarchy::new(), |hierarchy, level| {
            hierarchy.declare(level_type(level), [level_type(level - 1)])
        });

        Ok(SagaDataCorrelationProperties::new(
            registry,
            Arc::new(hierarchy),
        ))
    }

    /// Resolves the most-derived type once and returns the property count.
    pub fn resolve_count(
        &self,
        correlations: &SagaDataCorrelationProperties,
    ) -> Result<usize, CorrelationError> {
        correlations
            .for_message_type(&self.most_derived())
            .map(|resolved| resolved.len())
    }

    pub fn expected_count(&self) -> usize {
        (self.depth + 1) * self.properties_per_level
    }
}

#[cfg(test)]
mod tests {
    use super::ResolutionFixture;

    #[test]
    fn fixture_resolves_every_level() {
        let fixture = ResolutionFixture::new(4, 2);
        let correlations = fixture.build().expect("fixture should build");

        assert_eq!(
            fixture
                .resolve_count(&correlations)
                .expect("fixture should resolve"),
            fixture.expected_count()
        );
        assert_eq!(fixture.expected_count(), 10);
    }
}
