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

//! Hierarchy-aware correlation resolution.
//!
//! A message's concrete type is resolved once by walking the type and its
//! supertypes through the exact-type registry. The merged result is published
//! into a lock-free cache so that every later message of the same type is a
//! single map lookup.

pub(crate) mod resolution_cache;
mod saga_data_correlation_properties;

pub use saga_data_correlation_properties::{ResolutionStats, SagaDataCorrelationProperties};
