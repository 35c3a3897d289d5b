// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event submission, single and batched.

use reqwest::Method;
use serde_json::{Value, json};

use hivelink_core::{HivelinkError, Operation, ParamSet, Resource};

use crate::client::HoneycombClient;
use crate::resources::unknown;
use crate::types::Event;

pub(crate) async fn execute(
    client: &HoneycombClient,
    operation: Operation,
    params: &ParamSet,
) -> Result<Value, HivelinkError> {
    let dataset = params.require_str("datasetSlug")?;

    match operation {
        Operation::Send => {
            params.require_str("eventData")?;
            let data = params.parse_json_str("eventData", "{}", "Event Data")?;

            let options = params.opt_object("options");
            let event = Event {
                data,
                time: options
                    .and_then(|o| o.get("time"))
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
                samplerate: options
                    .and_then(|o| o.get("samplerate"))
                    .and_then(Value::as_u64)
                    .filter(|&rate| rate != 0),
            };
            let body = serde_json::to_value(&event)
                .map_err(|e| HivelinkError::Internal(format!("event serialization: {e}")))?;

            client
                .request(Method::POST, &format!("/events/{dataset}"), Some(&body))
                .await
        }
        Operation::SendBatch => {
            params.require_str("events")?;
            let events = params.parse_json_str("events", "[]", "Events")?;
            if !events.is_array() {
                return Err(HivelinkError::invalid_input(
                    "Events must be an array",
                    params.item(),
                ));
            }

            let results = client.send_event_batch(dataset, &events).await?;
            Ok(json!({"results": results}))
        }
        _ => Err(unknown(Resource::Event, operation)),
    }
}
