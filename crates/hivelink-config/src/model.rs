// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Hivelink adapters.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Hivelink configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HivelinkConfig {
    /// Adapter identity and logging settings.
    #[serde(default)]
    pub adapter: AdapterConfig,

    /// Honeycomb API settings.
    #[serde(default)]
    pub honeycomb: HoneycombConfig,
}

/// Adapter identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    /// Display name of the adapter instance.
    #[serde(default = "default_adapter_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            name: default_adapter_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_adapter_name() -> String {
    "hivelink".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Honeycomb API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HoneycombConfig {
    /// Honeycomb team API key. The hosting runtime injects this from its
    /// credential store; `None` here defers to the environment.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the Honeycomb REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum poll attempts while waiting for a query result.
    #[serde(default = "default_poll_max_attempts")]
    pub poll_max_attempts: u32,

    /// Sleep between poll attempts, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for HoneycombConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            poll_max_attempts: default_poll_max_attempts(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.honeycomb.io/1".to_string()
}

fn default_poll_max_attempts() -> u32 {
    30
}

fn default_poll_interval_ms() -> u64 {
    1000
}
