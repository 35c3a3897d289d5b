// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host-bound parameter access.
//!
//! The host resolves node parameters per input item and hands the adapter a
//! JSON object. [`ParamSet`] wraps that object together with the item index
//! so malformed values surface as input errors naming the offending item.

use serde_json::{Map, Value};

use crate::error::HivelinkError;

/// A resolved parameter map for a single input item.
#[derive(Debug, Clone)]
pub struct ParamSet {
    values: Map<String, Value>,
    item: usize,
}

impl ParamSet {
    /// Wraps an already-validated parameter object.
    pub fn new(values: Map<String, Value>, item: usize) -> Self {
        Self { values, item }
    }

    /// Builds a parameter set from an arbitrary JSON value.
    ///
    /// Anything other than an object is rejected as caller input error.
    pub fn from_value(value: Value, item: usize) -> Result<Self, HivelinkError> {
        match value {
            Value::Object(values) => Ok(Self { values, item }),
            other => Err(HivelinkError::invalid_input(
                format!("parameters must be an object, got {other}"),
                item,
            )),
        }
    }

    /// The input item index this parameter set belongs to.
    pub fn item(&self) -> usize {
        self.item
    }

    /// Raw access to a parameter value. Absent and `null` read the same.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.values.get(key) {
            Some(Value::Null) | None => None,
            Some(v) => Some(v),
        }
    }

    /// A required non-empty string parameter.
    pub fn require_str(&self, key: &str) -> Result<&str, HivelinkError> {
        match self.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
            _ => Err(HivelinkError::invalid_input(
                format!("\"{key}\" is required"),
                self.item,
            )),
        }
    }

    /// An optional string parameter. Empty strings read as absent, matching
    /// how the host leaves untouched text fields as `""`.
    pub fn opt_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// An optional unsigned integer parameter.
    pub fn opt_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    /// An optional float parameter.
    pub fn opt_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// An optional boolean parameter.
    pub fn opt_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// A boolean parameter with a default for when the host omits it.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.opt_bool(key).unwrap_or(default)
    }

    /// An unsigned integer parameter with a default.
    pub fn u64_or(&self, key: &str, default: u64) -> u64 {
        self.opt_u64(key).unwrap_or(default)
    }

    /// An optional object-valued parameter (the host's "additional fields"
    /// collections arrive this way).
    pub fn opt_object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    /// An optional array-valued parameter.
    pub fn opt_array(&self, key: &str) -> Option<&Vec<Value>> {
        self.get(key).and_then(Value::as_array)
    }

    /// Parses a parameter holding free-form JSON text.
    ///
    /// Malformed text is a caller input error naming `label` and the item
    /// index, never a system fault. An absent parameter parses `fallback`.
    pub fn parse_json_str(
        &self,
        key: &str,
        fallback: &str,
        label: &str,
    ) -> Result<Value, HivelinkError> {
        let raw = self.opt_str(key).unwrap_or(fallback);
        serde_json::from_str(raw).map_err(|_| {
            HivelinkError::invalid_input(format!("invalid JSON in {label}"), self.item)
        })
    }
}
