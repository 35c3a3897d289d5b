// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-resource operation handlers.
//!
//! Each module routes the operations one Honeycomb resource supports: pick
//! the HTTP verb and path template, forward parameters into a body, return
//! the response. Unsupported operations raise
//! [`HivelinkError::UnknownOperation`].

use serde_json::{Map, Value};

use hivelink_core::{HivelinkError, Operation, ParamSet, Resource};

use crate::client::HoneycombClient;

pub mod board;
pub mod burn_alert;
pub mod column;
pub mod dataset;
pub mod environment;
pub mod event;
pub mod marker;
pub mod marker_setting;
pub mod query;
pub mod slo;
pub mod trigger;

/// The unsupported resource/operation rejection every module shares.
pub(crate) fn unknown(resource: Resource, operation: Operation) -> HivelinkError {
    HivelinkError::UnknownOperation {
        resource: resource.to_string(),
        operation: operation.to_string(),
    }
}

/// The body all delete handlers answer with once the remote accepts.
pub(crate) fn deleted() -> Value {
    serde_json::json!({"success": true})
}

/// Shared getAll handling: fetch every page, then truncate unless the caller
/// asked for everything.
pub(crate) async fn get_all(
    client: &HoneycombClient,
    path: &str,
    params: &ParamSet,
) -> Result<Value, HivelinkError> {
    let mut items = client.request_all_items(path).await?;
    if !params.bool_or("returnAll", false) {
        let limit = params.u64_or("limit", 50) as usize;
        items.truncate(limit);
    }
    Ok(Value::Array(items))
}

/// Merges the host's "additional fields" collection into a request body.
pub(crate) fn with_extra_fields(
    mut body: Map<String, Value>,
    extra: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    if let Some(extra) = extra {
        for (key, value) in extra {
            body.insert(key.clone(), value.clone());
        }
    }
    body
}

/// The host's "update fields" collection as an owned request body.
pub(crate) fn update_fields(params: &ParamSet) -> Map<String, Value> {
    params.opt_object("updateFields").cloned().unwrap_or_default()
}

/// Notification recipients, accepted as a bare array or the host's wrapper
/// object shape.
pub(crate) fn recipients_from(params: &ParamSet) -> Option<Vec<Value>> {
    let items: Vec<Value> = match params.get("recipients") {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::Object(obj)) => obj
            .get("recipientValues")
            .or_else(|| obj.get("recipient"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    };
    (!items.is_empty()).then_some(items)
}

/// A required numeric parameter, rejected with an input error when absent.
pub(crate) fn require_f64(params: &ParamSet, key: &str) -> Result<f64, HivelinkError> {
    params.opt_f64(key).ok_or_else(|| {
        HivelinkError::invalid_input(format!("\"{key}\" is required"), params.item())
    })
}

pub(crate) fn require_u64(params: &ParamSet, key: &str) -> Result<u64, HivelinkError> {
    params.opt_u64(key).ok_or_else(|| {
        HivelinkError::invalid_input(format!("\"{key}\" is required"), params.item())
    })
}
