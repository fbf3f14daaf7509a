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

//! Correlation failures surfaced to the receive pipeline and to configuration code.

use crate::message_type::MessageType;
use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CorrelationError {
    /// The registry was built from missing or inconsistent inputs. Fatal at startup.
    #[error("Invalid correlation configuration: {0}")]
    InvalidConfiguration(String),

    /// Resolution was invoked without a usable message. Not retryable.
    #[error("Missing argument: {0}")]
    ArgumentMissing(&'static str),

    /// Neither the message type nor any of its supertypes has a registered
    /// correlation property. Indicates a configuration gap, not a transient fault.
    #[error(
        "Could not find any correlation properties for message {message_type} and saga data {saga_data_type}"
    )]
    UnresolvedCorrelation {
        message_type: MessageType,
        saga_data_type: MessageType,
    },

    /// A correlation configuration document could not be read or parsed.
    #[error("Unable to load correlation configuration: {0}")]
    ConfigLoad(String),
}

pub type Result<T> = std::result::Result<T, CorrelationError>;
