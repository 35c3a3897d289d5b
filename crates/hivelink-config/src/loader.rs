// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./hivelink.toml` > `~/.config/hivelink/hivelink.toml`
//! > `/etc/hivelink/hivelink.toml` with environment variable overrides via
//! `HIVELINK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::HivelinkConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/hivelink/hivelink.toml` (system-wide)
/// 3. `~/.config/hivelink/hivelink.toml` (user XDG config)
/// 4. `./hivelink.toml` (local directory)
/// 5. `HIVELINK_*` environment variables
pub fn load_config() -> Result<HivelinkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HivelinkConfig::default()))
        .merge(Toml::file("/etc/hivelink/hivelink.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("hivelink/hivelink.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("hivelink.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<HivelinkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HivelinkConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<HivelinkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HivelinkConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `HIVELINK_HONEYCOMB_API_KEY`
/// must map to `honeycomb.api_key`, not `honeycomb.api.key`.
fn env_provider() -> Env {
    Env::prefixed("HIVELINK_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: HIVELINK_HONEYCOMB_API_KEY -> "honeycomb_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("adapter_", "adapter.", 1)
            .replacen("honeycomb_", "honeycomb.", 1);
        mapped.into()
    })
}
