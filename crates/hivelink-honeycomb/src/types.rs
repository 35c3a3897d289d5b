// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Honeycomb REST API wire types.
//!
//! Requests serialize with `skip_serializing_if` throughout so absent fields
//! are omitted from the body rather than sent as `null` -- the Honeycomb API
//! distinguishes "not set" from "set to null" for several of these.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- Query types ---

/// A single aggregation within a query (e.g. `COUNT`, `P99(duration_ms)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Aggregation operator, one of [`CALCULATION_OPS`].
    pub op: String,
    /// Column the operator applies to. `COUNT` takes no column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

/// A row-level filter within a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFilter {
    pub column: String,
    /// Filter operator, one of [`FILTER_OPS`].
    pub op: String,
    /// Comparison value. `exists`/`does-not-exist` take none; `in`/`not-in`
    /// take an array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// An ordering directive for query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
    /// `ascending` or `descending`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

/// A post-aggregation filter within a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryHaving {
    pub calculate_op: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub op: String,
    pub value: f64,
}

/// A normalized Honeycomb query request body.
///
/// Produced by [`build_query`](crate::query::build_query); the time window is
/// either `time_range` (relative seconds) or `start_time`/`end_time`
/// (absolute), never both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculations: Option<Vec<Calculation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdowns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<QueryFilter>>,
    /// `AND` or `OR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_combination: Option<String>,
    /// Relative window in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<u64>,
    /// Absolute window start (unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// Absolute window end (unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Bucket width in seconds; `0` asks the API to choose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<QueryOrder>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub havings: Option<Vec<QueryHaving>>,
}

/// An asynchronous query result, polled until `complete`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResult {
    pub id: String,
    pub complete: bool,
    #[serde(default)]
    pub query_id: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub links: Option<QueryResultLinks>,
}

/// Links attached to a completed query result.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResultLinks {
    #[serde(default)]
    pub query_url: Option<String>,
    #[serde(default)]
    pub graph_image_url: Option<String>,
}

// --- Entity types ---

/// A named collection of event data the platform indexes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_json_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_protected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_written_at: Option<String>,
}

/// A column within a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub key_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `string`, `float`, `integer`, or `boolean`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

/// A query pinned to a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_annotation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_style: Option<String>,
}

/// A saved collection of queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `visual` or `list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<BoardQuery>>,
}

/// A trigger's alerting threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// One of [`THRESHOLD_OPS`].
    pub op: String,
    pub value: f64,
}

/// A notification recipient for triggers and burn alerts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    /// `email`, `slack`, `pagerduty`, `webhook`, `msteams`, or `marker`.
    #[serde(rename = "type")]
    pub recipient_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// A standing alert rule evaluating a query against a threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<QuerySpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Threshold>,
    /// Evaluation interval in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u64>,
    /// `on_change` or `on_true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<Recipient>>,
}

/// The service-level indicator backing an SLO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sli {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// A service-level objective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sli: Option<Sli>,
    /// Success target expressed per million events (99.9% = 999000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_per_million: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period_days: Option<u32>,
}

/// One budget window in an SLO's history.
#[derive(Debug, Clone, Deserialize)]
pub struct SloHistory {
    #[serde(default)]
    pub budget_start_time: Option<String>,
    #[serde(default)]
    pub budget_end_time: Option<String>,
    #[serde(default)]
    pub exhausted_budget_per_million: Option<i64>,
    #[serde(default)]
    pub remaining_budget_per_million: Option<i64>,
}

/// A budget-exhaustion alerting rule attached to an SLO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnAlert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slo_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhaustion_minutes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<Recipient>>,
}

/// A timestamped annotation overlaid on graphs (e.g. a deploy event).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub marker_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
}

/// Per-type display settings for markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub setting_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A Honeycomb environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_protected: Option<bool>,
}

/// A single event submitted to a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samplerate: Option<u64>,
}

/// Per-event status in a batch submission response.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchResponse {
    pub status: u16,
    #[serde(default)]
    pub error: Option<String>,
}

/// A paginated list response carrying a `links.next` cursor.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub links: Option<PageLinks>,
}

/// Link metadata on a paginated response.
#[derive(Debug, Clone, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
}

/// The JSON body Honeycomb delivers to trigger notification webhooks.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub trigger_url: Option<String>,
    /// `triggered` or `resolved`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub result_url: Option<String>,
    #[serde(default)]
    pub result_groups: Option<Vec<Value>>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// --- Operator vocabularies ---

/// Aggregation operators accepted in query calculations.
pub const CALCULATION_OPS: &[&str] = &[
    "COUNT",
    "SUM",
    "AVG",
    "COUNT_DISTINCT",
    "MAX",
    "MIN",
    "P001",
    "P01",
    "P05",
    "P10",
    "P25",
    "P50",
    "P75",
    "P90",
    "P95",
    "P99",
    "P999",
    "RATE_AVG",
    "RATE_SUM",
    "RATE_MAX",
    "HEATMAP",
];

/// Filter operators accepted in query filters.
pub const FILTER_OPS: &[&str] = &[
    "=",
    "!=",
    ">",
    ">=",
    "<",
    "<=",
    "starts-with",
    "does-not-start-with",
    "ends-with",
    "does-not-end-with",
    "contains",
    "does-not-contain",
    "exists",
    "does-not-exist",
    "in",
    "not-in",
];

/// Comparison operators accepted in trigger thresholds.
pub const THRESHOLD_OPS: &[&str] = &[">", "<", ">=", "<=", "==", "!="];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_spec_omits_absent_fields() {
        let spec = QuerySpec {
            calculations: Some(vec![Calculation {
                op: "COUNT".into(),
                column: None,
            }]),
            time_range: Some(7200),
            ..Default::default()
        };

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({"calculations": [{"op": "COUNT"}], "time_range": 7200})
        );
    }

    #[test]
    fn filter_without_value_serializes_without_value_key() {
        let filter = QueryFilter {
            column: "trace.parent_id".into(),
            op: "does-not-exist".into(),
            value: None,
        };
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value, json!({"column": "trace.parent_id", "op": "does-not-exist"}));
    }

    #[test]
    fn paginated_response_parses_cursor() {
        let body = json!({
            "data": [{"id": "1"}, {"id": "2"}],
            "links": {"next": "/datasets?page=2"}
        });
        let page: PaginatedResponse = serde_json::from_value(body).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.links.unwrap().next.as_deref(), Some("/datasets?page=2"));
    }

    #[test]
    fn webhook_payload_tolerates_sparse_bodies() {
        let payload: WebhookPayload = serde_json::from_value(json!({"name": "latency"})).unwrap();
        assert_eq!(payload.name.as_deref(), Some("latency"));
        assert!(payload.status.is_none());
        assert!(payload.result_groups.is_none());
    }

    #[test]
    fn trigger_request_body_shape() {
        let trigger = Trigger {
            id: None,
            name: "error spike".into(),
            description: None,
            disabled: None,
            query: Some(QuerySpec {
                calculations: Some(vec![Calculation {
                    op: "COUNT".into(),
                    column: None,
                }]),
                time_range: Some(300),
                ..Default::default()
            }),
            threshold: Some(Threshold {
                op: ">".into(),
                value: 100.0,
            }),
            frequency: Some(300),
            alert_type: None,
            recipients: Some(vec![Recipient {
                recipient_type: "email".into(),
                target: Some("oncall@example.com".into()),
                id: None,
            }]),
        };

        let value = serde_json::to_value(&trigger).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "error spike",
                "query": {"calculations": [{"op": "COUNT"}], "time_range": 300},
                "threshold": {"op": ">", "value": 100.0},
                "frequency": 300,
                "recipients": [{"type": "email", "target": "oncall@example.com"}]
            })
        );
    }

    #[test]
    fn query_result_parses_completion_payload() {
        let result: QueryResult = serde_json::from_value(json!({
            "id": "r1",
            "complete": true,
            "query_id": "q1",
            "data": {"results": []},
            "links": {"query_url": "https://ui.honeycomb.io/q/1"}
        }))
        .unwrap();
        assert!(result.complete);
        assert_eq!(result.links.unwrap().query_url.as_deref(), Some("https://ui.honeycomb.io/q/1"));
    }

    #[test]
    fn marker_serializes_type_rename() {
        let marker = Marker {
            marker_type: Some("deploy".into()),
            message: Some("v1.2.3".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&marker).unwrap();
        assert_eq!(value, json!({"type": "deploy", "message": "v1.2.3"}));
    }
}
