// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration adapter trait for third-party REST platform adapters.

use async_trait::async_trait;

use crate::error::HivelinkError;
use crate::params::ParamSet;
use crate::traits::adapter::PluginAdapter;
use crate::types::{Operation, Resource};

/// Adapter executing host-requested operations against a remote platform.
///
/// The host resolves parameters per input item, then calls [`execute`] once
/// per item. Errors propagate back to the host's per-item error handling,
/// which decides whether to continue with subsequent items or abort.
///
/// [`execute`]: IntegrationAdapter::execute
#[async_trait]
pub trait IntegrationAdapter: PluginAdapter {
    /// Executes one operation against the remote platform.
    async fn execute(
        &self,
        resource: Resource,
        operation: Operation,
        params: &ParamSet,
    ) -> Result<serde_json::Value, HivelinkError>;
}
