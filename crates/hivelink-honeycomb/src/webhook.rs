// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trigger notification webhook evaluation.
//!
//! The host owns the HTTP endpoint and delivers the posted JSON body here.
//! Evaluation decides whether the notification passes the caller's filters
//! and should be forwarded into the workflow, or merely acknowledged.
//! Filtered notifications still answer success; dropping them is the one
//! intentionally silent path in the adapter.

use serde::Serialize;
use serde_json::Value;
use strum::{Display, EnumString};
use tracing::debug;

use hivelink_core::HivelinkError;

use crate::types::WebhookPayload;

/// Which trigger notifications the caller wants forwarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TriggerEventFilter {
    /// Forward any Honeycomb webhook event.
    #[default]
    All,
    /// Forward only threshold-breach notifications.
    Triggered,
    /// Forward only back-to-normal notifications.
    Resolved,
}

/// Caller-supplied allow-filters for inbound trigger notifications.
#[derive(Debug, Clone, Default)]
pub struct WebhookFilters {
    pub event: TriggerEventFilter,
    /// Only forward notifications from the trigger with this name.
    pub trigger_name: Option<String>,
    /// Only forward notifications from this trigger ID.
    pub trigger_id: Option<String>,
}

impl WebhookFilters {
    /// Builds filters from the host's node parameters (`event`,
    /// `triggerName`, `triggerId`). An unrecognized event token is a caller
    /// input error.
    pub fn from_params(params: &hivelink_core::ParamSet) -> Result<Self, HivelinkError> {
        let event = match params.opt_str("event") {
            Some(token) => token.parse().map_err(|_| {
                HivelinkError::invalid_input(
                    format!("unknown event filter \"{token}\""),
                    params.item(),
                )
            })?,
            None => TriggerEventFilter::All,
        };

        Ok(Self {
            event,
            trigger_name: params.opt_str("triggerName").map(String::from),
            trigger_id: params.opt_str("triggerId").map(String::from),
        })
    }
}

/// A normalized trigger notification handed to the workflow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEvent {
    pub trigger_name: Option<String>,
    pub trigger_id: Option<String>,
    pub status: Option<String>,
    pub trigger_url: Option<String>,
    pub result_url: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub timestamp: String,
    pub version: Option<String>,
    pub result_groups: Vec<Value>,
}

/// The outcome of evaluating one webhook delivery.
#[derive(Debug)]
pub enum WebhookDecision {
    /// Answer success without forwarding anything into the workflow.
    Acknowledge { reason: &'static str },
    /// Forward the normalized event into the workflow.
    Forward(Box<TriggerEvent>),
}

/// Parses a raw webhook body, converting malformed JSON into a caller input
/// error tied to the item index.
pub fn parse_payload(body: &str, item: usize) -> Result<WebhookPayload, HivelinkError> {
    serde_json::from_str(body).map_err(|_| {
        HivelinkError::invalid_input("invalid JSON in webhook payload", item)
    })
}

/// Evaluates a trigger notification against the caller's filters.
pub fn evaluate(payload: &WebhookPayload, filters: &WebhookFilters) -> WebhookDecision {
    let name = non_empty(&payload.name);
    let id = non_empty(&payload.id);

    // A body carrying neither a trigger name nor an ID is not ours.
    if name.is_none() && id.is_none() {
        return WebhookDecision::Acknowledge {
            reason: "not a Honeycomb webhook",
        };
    }

    let status = non_empty(&payload.status);
    let wanted = match filters.event {
        TriggerEventFilter::All => None,
        TriggerEventFilter::Triggered => Some("triggered"),
        TriggerEventFilter::Resolved => Some("resolved"),
    };
    if let Some(wanted) = wanted
        && status != Some(wanted)
    {
        debug!(?status, wanted, "event type filtered");
        return WebhookDecision::Acknowledge {
            reason: "event type filtered",
        };
    }

    if let Some(ref filter_name) = filters.trigger_name
        && name != Some(filter_name.as_str())
    {
        return WebhookDecision::Acknowledge {
            reason: "trigger name filtered",
        };
    }

    if let Some(ref filter_id) = filters.trigger_id
        && id != Some(filter_id.as_str())
    {
        return WebhookDecision::Acknowledge {
            reason: "trigger ID filtered",
        };
    }

    let timestamp = non_empty(&payload.timestamp)
        .map(String::from)
        .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());

    WebhookDecision::Forward(Box::new(TriggerEvent {
        trigger_name: name.map(String::from),
        trigger_id: id.map(String::from),
        status: status.map(String::from),
        trigger_url: payload.trigger_url.clone(),
        result_url: payload.result_url.clone(),
        summary: payload.summary.clone(),
        description: payload.description.clone(),
        timestamp,
        version: payload.version.clone(),
        result_groups: payload.result_groups.clone().unwrap_or_default(),
    }))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> WebhookPayload {
        serde_json::from_value(value).unwrap()
    }

    fn filters(event: TriggerEventFilter) -> WebhookFilters {
        WebhookFilters {
            event,
            ..Default::default()
        }
    }

    #[test]
    fn resolved_status_under_triggered_filter_is_acknowledged() {
        let p = payload(json!({"name": "high latency", "id": "t1", "status": "resolved"}));
        let decision = evaluate(&p, &filters(TriggerEventFilter::Triggered));
        match decision {
            WebhookDecision::Acknowledge { reason } => {
                assert_eq!(reason, "event type filtered")
            }
            other => panic!("expected Acknowledge, got {other:?}"),
        }
    }

    #[test]
    fn matching_status_forwards_normalized_event() {
        let p = payload(json!({
            "name": "high latency",
            "id": "t1",
            "status": "triggered",
            "trigger_url": "https://ui.honeycomb.io/t/1",
            "summary": "p99 over threshold",
            "version": "v0.1.0",
            "result_groups": [{"group": {"service": "api"}}]
        }));
        let decision = evaluate(&p, &filters(TriggerEventFilter::Triggered));
        match decision {
            WebhookDecision::Forward(event) => {
                assert_eq!(event.trigger_name.as_deref(), Some("high latency"));
                assert_eq!(event.trigger_id.as_deref(), Some("t1"));
                assert_eq!(event.status.as_deref(), Some("triggered"));
                assert_eq!(event.result_groups.len(), 1);
                assert!(!event.timestamp.is_empty());
            }
            other => panic!("expected Forward, got {other:?}"),
        }
    }

    #[test]
    fn all_filter_forwards_any_status() {
        let p = payload(json!({"name": "n", "id": "t1", "status": "resolved"}));
        assert!(matches!(
            evaluate(&p, &filters(TriggerEventFilter::All)),
            WebhookDecision::Forward(_)
        ));
    }

    #[test]
    fn body_without_name_or_id_is_not_ours() {
        let p = payload(json!({"status": "triggered"}));
        match evaluate(&p, &filters(TriggerEventFilter::All)) {
            WebhookDecision::Acknowledge { reason } => {
                assert_eq!(reason, "not a Honeycomb webhook")
            }
            other => panic!("expected Acknowledge, got {other:?}"),
        }
    }

    #[test]
    fn trigger_name_filter_drops_other_triggers() {
        let p = payload(json!({"name": "other", "id": "t1", "status": "triggered"}));
        let f = WebhookFilters {
            event: TriggerEventFilter::All,
            trigger_name: Some("high latency".into()),
            trigger_id: None,
        };
        assert!(matches!(
            evaluate(&p, &f),
            WebhookDecision::Acknowledge { reason: "trigger name filtered" }
        ));
    }

    #[test]
    fn trigger_id_filter_drops_other_ids() {
        let p = payload(json!({"name": "n", "id": "t2", "status": "triggered"}));
        let f = WebhookFilters {
            event: TriggerEventFilter::All,
            trigger_name: None,
            trigger_id: Some("t1".into()),
        };
        assert!(matches!(
            evaluate(&p, &f),
            WebhookDecision::Acknowledge { reason: "trigger ID filtered" }
        ));
    }

    #[test]
    fn payload_timestamp_is_kept_when_present() {
        let p = payload(json!({
            "name": "n", "id": "t1", "status": "triggered",
            "timestamp": "2026-01-02T03:04:05Z"
        }));
        match evaluate(&p, &filters(TriggerEventFilter::All)) {
            WebhookDecision::Forward(event) => {
                assert_eq!(event.timestamp, "2026-01-02T03:04:05Z")
            }
            other => panic!("expected Forward, got {other:?}"),
        }
    }

    #[test]
    fn forwarded_event_serializes_camel_case() {
        let p = payload(json!({"name": "n", "id": "t1", "status": "triggered"}));
        let WebhookDecision::Forward(event) = evaluate(&p, &filters(TriggerEventFilter::All))
        else {
            panic!("expected Forward");
        };
        let value = serde_json::to_value(*event).unwrap();
        assert_eq!(value["triggerName"], "n");
        assert_eq!(value["triggerId"], "t1");
        assert_eq!(value["resultGroups"], json!([]));
    }

    #[test]
    fn malformed_body_is_an_input_error() {
        let err = parse_payload("{not json", 4).unwrap_err();
        match err {
            HivelinkError::InvalidInput { item, .. } => assert_eq!(item, 4),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn event_filter_parses_lowercase_tokens() {
        use std::str::FromStr;
        assert_eq!(
            TriggerEventFilter::from_str("triggered").unwrap(),
            TriggerEventFilter::Triggered
        );
        assert_eq!(
            TriggerEventFilter::from_str("all").unwrap(),
            TriggerEventFilter::All
        );
    }

    #[test]
    fn filters_build_from_host_params() {
        use hivelink_core::ParamSet;

        let params = ParamSet::from_value(
            json!({"event": "resolved", "triggerName": "high latency", "triggerId": ""}),
            0,
        )
        .unwrap();
        let f = WebhookFilters::from_params(&params).unwrap();
        assert_eq!(f.event, TriggerEventFilter::Resolved);
        assert_eq!(f.trigger_name.as_deref(), Some("high latency"));
        assert_eq!(f.trigger_id, None);

        let bad = ParamSet::from_value(json!({"event": "exploded"}), 1).unwrap();
        assert!(matches!(
            WebhookFilters::from_params(&bad),
            Err(HivelinkError::InvalidInput { .. })
        ));
    }
}
