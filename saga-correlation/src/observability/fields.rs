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

//! Canonical structured field values and value-format helpers.

use crate::correlation_property::CorrelationProperty;
use crate::message_type::MessageType;

pub const NONE: &str = "none";
pub const REASON_BLANK_MESSAGE_TYPE: &str = "blank_message_type";
pub const REASON_BLANK_SAGA_DATA_TYPE: &str = "blank_saga_data_type";
pub const REASON_EMPTY_MAPPING: &str = "empty_mapping";
pub const REASON_EMPTY_PROPERTY_LIST: &str = "empty_property_list";
pub const REASON_KEY_MISMATCH: &str = "key_mismatch";

/// Formats a resolved property list as `[A.x -> y, B.z -> w]`.
pub fn format_properties(properties: &[CorrelationProperty]) -> String {
    if properties.is_empty() {
        return NONE.to_string();
    }

    let rendered: Vec<String> = properties.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

/// Formats a walk order as `A > B > C`.
pub fn format_walk(walk: &[MessageType]) -> String {
    if walk.is_empty() {
        return NONE.to_string();
    }

    walk.iter()
        .map(MessageType::as_str)
        .collect::<Vec<_>>()
        .join(" > ")
}
