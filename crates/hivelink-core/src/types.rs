// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and operation dispatch.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// A Honeycomb REST resource addressable through the adapter.
///
/// The string forms match the tokens the host's node UI sends
/// (e.g. `burnAlert`, `markerSetting`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Board,
    BurnAlert,
    Column,
    Dataset,
    Environment,
    Event,
    Marker,
    MarkerSetting,
    Query,
    Slo,
    Trigger,
}

/// An operation the host can request against a [`Resource`].
///
/// Not every resource supports every operation; dispatch rejects unsupported
/// pairs with [`HivelinkError::UnknownOperation`](crate::HivelinkError).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Create,
    Get,
    GetAll,
    Update,
    Delete,
    AddQuery,
    RemoveQuery,
    CreateResult,
    GetResult,
    GetHistory,
    Send,
    SendBatch,
}
