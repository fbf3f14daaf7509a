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

//! Insert-or-get cache of resolved correlation properties.

use crate::correlation_property::CorrelationProperty;
use crate::message_type::MessageType;
use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::Arc;

pub(crate) type ResolvedProperties = Arc<[CorrelationProperty]>;

type ResolutionMap = HashMap<MessageType, ResolvedProperties>;

/// Outcome of publishing a freshly walked result.
pub(crate) enum Publication {
    /// This caller stored the value.
    Published(ResolvedProperties),
    /// Another caller stored a value for the same type first; it is returned instead.
    AlreadyPresent(ResolvedProperties),
}

impl Publication {
    pub(crate) fn into_value(self) -> ResolvedProperties {
        match self {
            Publication::Published(value) | Publication::AlreadyPresent(value) => value,
        }
    }
}

/// Monotonically growing map from concrete message type to its merged
/// correlation properties.
///
/// Readers load the current snapshot without locking. Writers publish with a
/// copy-on-write compare-and-swap; an entry, once present, is never replaced or
/// evicted. Two writers racing on the same type may both have walked the
/// hierarchy, which is only sound because the walk is a pure function of
/// immutable registry and hierarchy state: both results are value-equal, so
/// keeping the first one loses nothing.
pub(crate) struct ResolutionCache {
    entries: ArcSwap<ResolutionMap>,
}

impl ResolutionCache {
    pub(crate) fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    pub(crate) fn get(&self, message_type: &MessageType) -> Option<ResolvedProperties> {
        self.entries.load().get(message_type).cloned()
    }

    /// Stores `resolved` under `message_type` unless an entry already exists.
    pub(crate) fn get_or_publish(
        &self,
        message_type: &MessageType,
        resolved: ResolvedProperties,
    ) -> Publication {
        debug_assert!(!resolved.is_empty());

        let previous = self.entries.rcu(|current| {
            if current.contains_key(message_type) {
                return Arc::clone(current);
            }
            let mut next = ResolutionMap::clone(current);
            next.insert(message_type.clone(), Arc::clone(&resolved));
            Arc::new(next)
        });

        match previous.get(message_type) {
            Some(existing) => Publication::AlreadyPresent(Arc::clone(existing)),
            None => Publication::Published(resolved),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.load().len()
    }

    pub(crate) fn cached_types(&self) -> Vec<MessageType> {
        let mut cached: Vec<MessageType> = self.entries.load().keys().cloned().collect();
        cached.sort();
        cached
    }
}

#[cfg(test)]
mod tests {
    use super::{Publication, ResolutionCache, ResolvedProperties};
    use crate::{CorrelationProperty, MessageType};
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn resolved(property: &str) -> ResolvedProperties {
        Arc::from(vec![CorrelationProperty::new(
            "OrderPlaced",
            property,
            property,
        )])
    }

    #[test]
    fn first_publish_wins_and_later_publish_is_a_no_op() {
        let cache = ResolutionCache::new();
        let order_placed = MessageType::new("OrderPlaced");

        let first = cache.get_or_publish(&order_placed, resolved("order_id"));
        assert!(matches!(first, Publication::Published(_)));

        let second = cache.get_or_publish(&order_placed, resolved("customer_id"));
        match second {
            Publication::AlreadyPresent(existing) => {
                assert_eq!(existing[0].property_name(), "order_id");
            }
            Publication::Published(_) => panic!("second publish should not replace the entry"),
        }

        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get(&order_placed).expect("entry should exist")[0].property_name(),
            "order_id"
        );
    }

    #[test]
    fn miss_returns_none() {
        let cache = ResolutionCache::new();

        assert!(cache.get(&MessageType::new("Ping")).is_none());
        assert!(cache.cached_types().is_empty());
    }

    #[test]
    fn racing_publishers_converge_on_one_value() {
        const PUBLISHERS: usize = 8;

        let cache = Arc::new(ResolutionCache::new());
        let barrier = Arc::new(Barrier::new(PUBLISHERS));
        let order_placed = MessageType::new("OrderPlaced");

        let handles: Vec<_> = (0..PUBLISHERS)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                let order_placed = order_placed.clone();
                thread::spawn(move || {
                    barrier.wait();
                    cache
                        .get_or_publish(&order_placed, resolved("order_id"))
                        .into_value()
                })
            })
            .collect();

        let results: Vec<ResolvedProperties> = handles
            .into_iter()
            .map(|handle| handle.join().expect("publisher thread should not panic"))
            .collect();

        let stored = cache.get(&order_placed).expect("entry should exist");
        for result in &results {
            assert!(Arc::ptr_eq(result, &stored));
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_types_accumulate() {
        let cache = ResolutionCache::new();

        cache.get_or_publish(&MessageType::new("B"), resolved("b"));
        cache.get_or_publish(&MessageType::new("A"), resolved("a"));

        assert_eq!(
            cache.cached_types(),
            vec![MessageType::new("A"), MessageType::new("B")]
        );
    }
}
