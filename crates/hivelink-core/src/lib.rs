// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Hivelink integration adapters.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Hivelink workspace. Adapter plugins
//! implement traits defined here; the hosting runtime binds against them.

pub mod error;
pub mod params;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HivelinkError;
pub use params::ParamSet;
pub use types::{HealthStatus, Operation, Resource};

// Re-export adapter traits at crate root.
pub use traits::{IntegrationAdapter, PluginAdapter};
