// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query normalization.
//!
//! The host serializes repeatable field groups either as plain arrays or as
//! wrapper objects keyed by the group's singular name, depending on how the
//! UI layer collected them. [`build_query`] accepts both shapes uniformly and
//! produces one canonical [`QuerySpec`] honoring the API's field names and
//! optionality rules: absent or empty inputs are omitted outright, never sent
//! as `null`.

use serde_json::Value;

use hivelink_core::{HivelinkError, ParamSet};

use crate::types::{Calculation, QueryFilter, QueryHaving, QueryOrder, QuerySpec};

/// Builds a canonical query request body from host-bound parameters.
///
/// Recognized parameter keys: `calculations`, `breakdowns`, `filters`,
/// `filterCombination`, `timeRangeType`, `timeRange`, `startTime`, `endTime`,
/// `granularity`, `orders`, `limit`, `havings`.
pub fn build_query(params: &ParamSet) -> Result<QuerySpec, HivelinkError> {
    let item = params.item();
    let mut spec = QuerySpec::default();

    let calculations = repeatable(params.get("calculations"), "calculation")
        .iter()
        .map(|value| calculation_from(value, item))
        .collect::<Result<Vec<_>, _>>()?;
    if !calculations.is_empty() {
        spec.calculations = Some(calculations);
    }

    spec.breakdowns = breakdowns_from(params.get("breakdowns"));

    let filters = repeatable(params.get("filters"), "filter")
        .iter()
        .map(|value| filter_from(value, item))
        .collect::<Result<Vec<_>, _>>()?;
    if !filters.is_empty() {
        spec.filters = Some(filters);
    }

    spec.filter_combination = params.opt_str("filterCombination").map(String::from);

    apply_time_window(&mut spec, params);

    // Granularity 0 means "automatic" and is preserved; only absence omits it.
    spec.granularity = params.opt_u64("granularity");

    let orders: Vec<QueryOrder> = repeatable(params.get("orders"), "order")
        .iter()
        .map(order_from)
        .filter(|order| order.column.is_some() || order.op.is_some() || order.order.is_some())
        .collect();
    if !orders.is_empty() {
        spec.orders = Some(orders);
    }

    spec.limit = params.opt_u64("limit").filter(|&limit| limit != 0);

    let havings = repeatable(params.get("havings"), "having")
        .iter()
        .map(|value| having_from(value, item))
        .collect::<Result<Vec<_>, _>>()?;
    if !havings.is_empty() {
        spec.havings = Some(havings);
    }

    Ok(spec)
}

/// Resolves a repeatable group serialized either as a bare array or as a
/// wrapper object holding the array under its singular key.
fn repeatable<'a>(value: Option<&'a Value>, wrapper: &str) -> &'a [Value] {
    match value {
        Some(Value::Array(items)) => items,
        Some(Value::Object(obj)) => match obj.get(wrapper) {
            Some(Value::Array(items)) => items,
            _ => &[],
        },
        _ => &[],
    }
}

/// A non-empty string field on a repeatable group entry.
fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn calculation_from(value: &Value, item: usize) -> Result<Calculation, HivelinkError> {
    let op = str_field(value, "op").ok_or_else(|| {
        HivelinkError::invalid_input("calculation \"op\" is required", item)
    })?;
    Ok(Calculation {
        op: op.to_string(),
        column: str_field(value, "column").map(String::from),
    })
}

fn filter_from(value: &Value, item: usize) -> Result<QueryFilter, HivelinkError> {
    let column = str_field(value, "column").ok_or_else(|| {
        HivelinkError::invalid_input("filter \"column\" is required", item)
    })?;
    let op = str_field(value, "op").ok_or_else(|| {
        HivelinkError::invalid_input("filter \"op\" is required", item)
    })?;

    let filter_value = match value.get("value") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        // in/not-in take a list; the UI collects it as comma-separated text.
        Some(Value::String(s)) if op == "in" || op == "not-in" => Some(Value::Array(
            s.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| Value::String(part.to_string()))
                .collect(),
        )),
        Some(other) => Some(other.clone()),
    };

    Ok(QueryFilter {
        column: column.to_string(),
        op: op.to_string(),
        value: filter_value,
    })
}

/// Breakdowns arrive either as comma-separated text or already split.
fn breakdowns_from(value: Option<&Value>) -> Option<Vec<String>> {
    let list: Vec<String> = match value {
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        _ => return None,
    };
    (!list.is_empty()).then_some(list)
}

/// Applies the time window, honoring the discriminator when present and
/// inferring from populated fields when not. Relative and absolute forms are
/// mutually exclusive in the output.
fn apply_time_window(spec: &mut QuerySpec, params: &ParamSet) {
    let time_range = params.opt_u64("timeRange").filter(|&v| v != 0);
    let start_time = params.opt_u64("startTime").filter(|&v| v != 0);
    let end_time = params.opt_u64("endTime").filter(|&v| v != 0);

    match params.opt_str("timeRangeType") {
        Some("relative") => spec.time_range = time_range,
        Some("absolute") => {
            spec.start_time = start_time;
            spec.end_time = end_time;
        }
        // Unknown discriminators emit no window at all.
        Some(_) => {}
        None => {
            if time_range.is_some() {
                spec.time_range = time_range;
            } else if start_time.is_some() || end_time.is_some() {
                spec.start_time = start_time;
                spec.end_time = end_time;
            }
        }
    }
}

fn order_from(value: &Value) -> QueryOrder {
    QueryOrder {
        column: str_field(value, "column").map(String::from),
        op: str_field(value, "op").map(String::from),
        order: str_field(value, "order")
            .or_else(|| str_field(value, "direction"))
            .map(String::from),
    }
}

fn having_from(value: &Value, item: usize) -> Result<QueryHaving, HivelinkError> {
    let calculate_op = str_field(value, "calculate_op")
        .or_else(|| str_field(value, "calculateOp"))
        .ok_or_else(|| {
            HivelinkError::invalid_input("having \"calculate_op\" is required", item)
        })?;
    let op = str_field(value, "op").ok_or_else(|| {
        HivelinkError::invalid_input("having \"op\" is required", item)
    })?;

    let having_value = match value.get("value") {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            HivelinkError::invalid_input("having \"value\" is not a number", item)
        })?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            HivelinkError::invalid_input(
                format!("having \"value\" \"{s}\" is not a number"),
                item,
            )
        })?,
        _ => {
            return Err(HivelinkError::invalid_input(
                "having \"value\" is required",
                item,
            ));
        }
    };

    Ok(QueryHaving {
        calculate_op: calculate_op.to_string(),
        column: str_field(value, "column").map(String::from),
        op: op.to_string(),
        value: having_value,
    })
}
