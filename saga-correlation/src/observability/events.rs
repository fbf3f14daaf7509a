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

//! Canonical structured event names used across `saga-correlation`.

// Registry construction events.
pub const REGISTRY_BUILD_OK: &str = "registry_build_ok";
pub const REGISTRY_BUILD_FAILED: &str = "registry_build_failed";

// Resolution and cache events.
pub const RESOLVE_CACHE_HIT: &str = "resolve_cache_hit";
pub const RESOLVE_CACHE_MISS: &str = "resolve_cache_miss";
pub const RESOLVE_PUBLISH_OK: &str = "resolve_publish_ok";
pub const RESOLVE_PUBLISH_RACE_LOST: &str = "resolve_publish_race_lost";
pub const RESOLVE_UNRESOLVED: &str = "resolve_unresolved";
pub const RESOLVE_ARGUMENT_MISSING: &str = "resolve_argument_missing";

// Configuration events.
pub const CONFIG_LOAD_OK: &str = "config_load_ok";
pub const CONFIG_LOAD_FAILED: &str = "config_load_failed";

// Bus lifetime events.
pub const LIFETIME_OBSERVER_REGISTERED: &str = "lifetime_observer_registered";
pub const LIFETIME_BROADCAST_START: &str = "lifetime_broadcast_start";
pub const LIFETIME_BROADCAST_OK: &str = "lifetime_broadcast_ok";
