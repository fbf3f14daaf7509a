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

//! Supertype discovery for message types.
//!
//! The resolver never inspects types itself; it asks a [`TypeHierarchy`] for the
//! ordered proper supertypes of a concrete type and looks each one up in the
//! registry.

use crate::message_type::MessageType;
use std::collections::{HashMap, HashSet};

/// Source of the proper supertypes of a message type.
///
/// Implementations must be deterministic: the same input always yields the same
/// sequence, most-derived first. The concrete type itself is never part of the
/// result.
pub trait TypeHierarchy: Send + Sync {
    fn supertypes_of(&self, message_type: &MessageType) -> Vec<MessageType>;
}

/// Hierarchy in which no type has supertypes, i.e. exact-type matching only.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHierarchy;

impl TypeHierarchy for NoHierarchy {
    fn supertypes_of(&self, _message_type: &MessageType) -> Vec<MessageType> {
        Vec::new()
    }
}

/// Explicit table of `type -> direct supertypes`.
///
/// [`supertypes_of`](TypeHierarchy::supertypes_of) walks the table depth-first in
/// declaration order. A supertype reachable along several paths is reported once,
/// at its first position; cycles in the table are cut where they close.
///
/// ```
/// use saga_correlation::{MessageType, StaticTypeHierarchy, TypeHierarchy};
///
/// let hierarchy = StaticTypeHierarchy::new()
///     .declare("PriorityOrderPlaced", ["OrderPlaced"])
///     .declare("OrderPlaced", ["OrderEvent"]);
///
/// let supertypes = hierarchy.supertypes_of(&MessageType::new("PriorityOrderPlaced"));
/// assert_eq!(
///     supertypes,
///     vec![MessageType::new("OrderPlaced"), MessageType::new("OrderEvent")]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticTypeHierarchy {
    direct_supertypes: HashMap<MessageType, Vec<MessageType>>,
}

impl StaticTypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends direct supertypes for `message_type`, keeping earlier declarations first.
    pub fn declare<T, I, S>(mut self, message_type: T, supertypes: I) -> Self
    where
        T: Into<MessageType>,
        I: IntoIterator<Item = S>,
        S: Into<MessageType>,
    {
        let message_type = message_type.into();
        let declared = self
            .direct_supertypes
            .entry(message_type.clone())
            .or_default();

        for supertype in supertypes {
            let supertype = supertype.into();
            if supertype != message_type && !declared.contains(&supertype) {
                declared.push(supertype);
            }
        }
        self
    }

    pub fn direct_supertypes_of(&self, message_type: &MessageType) -> &[MessageType] {
        self.direct_supertypes
            .get(message_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.direct_supertypes.is_empty()
    }

    fn visit(
        &self,
        message_type: &MessageType,
        visited: &mut HashSet<MessageType>,
        ordered: &mut Vec<MessageType>,
    ) {
        for supertype in self.direct_supertypes_of(message_type) {
            if visited.insert(supertype.clone()) {
                ordered.push(supertype.clone());
                self.visit(supertype, visited, ordered);
            }
        }
    }
}

impl TypeHierarchy for StaticTypeHierarchy {
    fn supertypes_of(&self, message_type: &MessageType) -> Vec<MessageType> {
        let mut visited = HashSet::from([message_type.clone()]);
        let mut ordered = Vec::new();
        self.visit(message_type, &mut visited, &mut ordered);
        ordered
    }
}
