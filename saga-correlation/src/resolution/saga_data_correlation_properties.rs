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

use crate::correlation_property::CorrelationProperty;
use crate::error::{CorrelationError, Result};
use crate::message_type::{CorrelatedMessage, MessageType};
use crate::observability::{events, fields};
use crate::registry::CorrelationRegistry;
use crate::resolution::resolution_cache::{Publication, ResolutionCache, ResolvedProperties};
use crate::type_hierarchy::{NoHierarchy, TypeHierarchy};
use std::iter;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace, warn};

const COMPONENT: &str = "saga_data_correlation_properties";

/// Point-in-time resolution counters for one saga data descriptor.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolutionStats {
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub unresolved: u64,
    pub cached_types: usize,
}

#[derive(Default)]
struct ResolutionCounters {
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    unresolved: AtomicU64,
}

/// Correlation properties relevant for one saga data type.
///
/// Owns the exact-type [`CorrelationRegistry`], the [`TypeHierarchy`] used to
/// discover supertypes, and the resolution cache. Build it once at saga
/// configuration time and share it (e.g. behind an [`Arc`]) with every worker
/// that resolves incoming messages.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use saga_correlation::{
///     CorrelatedMessage, CorrelationError, CorrelationProperty, CorrelationRegistry,
///     MessageType, SagaDataCorrelationProperties, StaticTypeHierarchy,
/// };
///
/// struct OrderPlaced;
/// struct PriorityOrderPlaced;
///
/// impl CorrelatedMessage for OrderPlaced {
///     fn message_type(&self) -> MessageType {
///         MessageType::new("OrderPlaced")
///     }
/// }
///
/// impl CorrelatedMessage for PriorityOrderPlaced {
///     fn message_type(&self) -> MessageType {
///         MessageType::new("PriorityOrderPlaced")
///     }
/// }
///
/// let registry = CorrelationRegistry::from_properties(
///     [CorrelationProperty::new("OrderPlaced", "order_id", "order_id")],
///     MessageType::new("OrderSagaData"),
/// )?;
/// let hierarchy = StaticTypeHierarchy::new().declare("PriorityOrderPlaced", ["OrderPlaced"]);
/// let correlations = SagaDataCorrelationProperties::new(registry, Arc::new(hierarchy));
///
/// let resolved = correlations.for_message(&PriorityOrderPlaced)?;
/// assert_eq!(resolved[0].property_name(), "order_id");
///
/// // Repeat messages of the same concrete type are served from the cache.
/// let again = correlations.for_message(&PriorityOrderPlaced)?;
/// assert!(Arc::ptr_eq(&resolved, &again));
/// # let _ = correlations.for_message(&OrderPlaced)?;
/// # Ok::<(), CorrelationError>(())
/// ```
pub struct SagaDataCorrelationProperties {
    registry: CorrelationRegistry,
    hierarchy: Arc<dyn TypeHierarchy>,
    cache: ResolutionCache,
    counters: ResolutionCounters,
}

impl SagaDataCorrelationProperties {
    pub fn new(registry: CorrelationRegistry, hierarchy: Arc<dyn TypeHierarchy>) -> Self {
        Self {
            registry,
            hierarchy,
            cache: ResolutionCache::new(),
            counters: ResolutionCounters::default(),
        }
    }

    /// Resolves only exact-type registrations; no type has supertypes.
    pub fn with_exact_types(registry: CorrelationRegistry) -> Self {
        Self::new(registry, Arc::new(NoHierarchy))
    }

    /// Looks up the correlation properties relevant for `message`.
    ///
    /// The result contains every property registered for the message's concrete
    /// type followed by those of its supertypes, most-derived first. Duplicates
    /// inherited along several levels are kept.
    pub fn for_message<M>(&self, message: &M) -> Result<Arc<[CorrelationProperty]>>
    where
        M: CorrelatedMessage + ?Sized,
    {
        self.for_message_type(&message.message_type())
    }

    /// Same as [`for_message`](Self::for_message), keyed by an already extracted
    /// concrete message type.
    pub fn for_message_type(&self, message_type: &MessageType) -> Result<Arc<[CorrelationProperty]>> {
        if message_type.is_blank() {
            warn!(
                event = events::RESOLVE_ARGUMENT_MISSING,
                component = COMPONENT,
                saga_data_type = %self.registry.saga_data_type(),
                reason = fields::REASON_BLANK_MESSAGE_TYPE,
                "message carries no type identifier"
            );
            return Err(CorrelationError::ArgumentMissing("message type"));
        }

        if let Some(cached) = self.cache.get(message_type) {
            self.counters.cache_hits.fetch_add(1, Ordering::Relaxed);
            trace!(
                event = events::RESOLVE_CACHE_HIT,
                component = COMPONENT,
                msg_type = %message_type,
                property_count = cached.len(),
                "resolved correlation properties from cache"
            );
            return Ok(cached);
        }

        self.counters.cache_misses.fetch_add(1, Ordering::Relaxed);
        debug!(
            event = events::RESOLVE_CACHE_MISS,
            component = COMPONENT,
            msg_type = %message_type,
            saga_data_type = %self.registry.saga_data_type(),
            "walking type hierarchy for correlation properties"
        );

        let resolved = self.walk(message_type)?;

        Ok(match self.cache.get_or_publish(message_type, resolved) {
            Publication::Published(published) => {
                debug!(
                    event = events::RESOLVE_PUBLISH_OK,
                    component = COMPONENT,
                    msg_type = %message_type,
                    properties = %fields::format_properties(&published),
                    "cached resolved correlation properties"
                );
                published
            }
            lost @ Publication::AlreadyPresent(_) => {
                trace!(
                    event = events::RESOLVE_PUBLISH_RACE_LOST,
                    component = COMPONENT,
                    msg_type = %message_type,
                    "concurrent resolution published first"
                );
                lost.into_value()
            }
        })
    }

    fn walk(&self, message_type: &MessageType) -> Result<ResolvedProperties> {
        let supertypes = self.hierarchy.supertypes_of(message_type);

        let resolved: Vec<CorrelationProperty> = iter::once(message_type)
            .chain(supertypes.iter())
            .filter_map(|candidate| self.registry.lookup_exact(candidate))
            .flatten()
            .cloned()
            .collect();

        if resolved.is_empty() {
            self.counters.unresolved.fetch_add(1, Ordering::Relaxed);
            let mut walk = Vec::with_capacity(supertypes.len() + 1);
            walk.push(message_type.clone());
            walk.extend(supertypes);
            warn!(
                event = events::RESOLVE_UNRESOLVED,
                component = COMPONENT,
                msg_type = %message_type,
                saga_data_type = %self.registry.saga_data_type(),
                walk = %fields::format_walk(&walk),
                "no correlation properties found in message type hierarchy"
            );
            return Err(CorrelationError::UnresolvedCorrelation {
                message_type: message_type.clone(),
                saga_data_type: self.registry.saga_data_type().clone(),
            });
        }

        Ok(Arc::from(resolved))
    }

    pub fn registry(&self) -> &CorrelationRegistry {
        &self.registry
    }

    pub fn saga_data_type(&self) -> &MessageType {
        self.registry.saga_data_type()
    }

    /// Every declared correlation property; see [`CorrelationRegistry::iter`].
    pub fn iter(&self) -> impl Iterator<Item = &CorrelationProperty> {
        self.registry.iter()
    }

    /// Concrete message types resolved so far, sorted by name.
    pub fn cached_types(&self) -> Vec<MessageType> {
        self.cache.cached_types()
    }

    pub fn stats(&self) -> ResolutionStats {
        ResolutionStats {
            cache_hits: self.counters.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.counters.cache_misses.load(Ordering::Relaxed),
            unresolved: self.counters.unresolved.load(Ordering::Relaxed),
            cached_types: self.cache.len(),
        }
    }
}

impl<'a> IntoIterator for &'a SagaDataCorrelationProperties {
    type Item = &'a CorrelationProperty;
    type IntoIter = <&'a CorrelationRegistry as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.registry).into_iter()
    }
}
