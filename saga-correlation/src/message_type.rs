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

//! Stable message type identifiers used as registry and cache keys.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Stable identifier for a message type (or saga data type).
///
/// Identifiers are plain strings chosen by the application, e.g. `"OrderPlaced"`
/// or `"com.example.orders.OrderPlaced.v1"`. They must stay stable across builds,
/// so `std::any::type_name` is not a suitable source.
///
/// Cloning is cheap; the name is shared behind an [`Arc`].
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MessageType(Arc<str>);

impl MessageType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A type with a blank name carries no identity and never matches a registration.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for MessageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for MessageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "MessageType({})", &self.0)
    }
}

impl Borrow<str> for MessageType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MessageType {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl Serialize for MessageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MessageType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(MessageType::from)
    }
}

/// Capability required of every message value that takes part in saga correlation.
///
/// The returned identifier is the message's concrete runtime type. It keys the
/// resolution cache, so two values of the same concrete type must return equal
/// identifiers.
///
/// ```
/// use saga_correlation::{CorrelatedMessage, MessageType};
///
/// struct OrderPlaced {
///     order_id: u64,
/// }
///
/// impl CorrelatedMessage for OrderPlaced {
///     fn message_type(&self) -> MessageType {
///         MessageType::new("OrderPlaced")
///     }
/// }
///
/// let message = OrderPlaced { order_id: 42 };
/// assert_eq!(message.message_type().as_str(), "OrderPlaced");
/// # let _ = message.order_id;
/// ```
pub trait CorrelatedMessage {
    fn message_type(&self) -> MessageType;
}

impl<M: CorrelatedMessage + ?Sized> CorrelatedMessage for &M {
    fn message_type(&self) -> MessageType {
        (**self).message_type()
    }
}

impl<M: CorrelatedMessage + ?Sized> CorrelatedMessage for Box<M> {
    fn message_type(&self) -> MessageType {
        (**self).message_type()
    }
}

impl<M: CorrelatedMessage + ?Sized> CorrelatedMessage for Arc<M> {
    fn message_type(&self) -> MessageType {
        (**self).message_type()
    }
}
