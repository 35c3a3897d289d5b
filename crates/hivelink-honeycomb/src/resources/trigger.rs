// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trigger (standing alert rule) operations, all scoped to a dataset.

use reqwest::Method;
use serde_json::{Map, Value, json};

use hivelink_core::{HivelinkError, Operation, ParamSet, Resource};

use crate::client::HoneycombClient;
use crate::resources::{
    deleted, get_all, recipients_from, require_f64, unknown, update_fields, with_extra_fields,
};

pub(crate) async fn execute(
    client: &HoneycombClient,
    operation: Operation,
    params: &ParamSet,
) -> Result<Value, HivelinkError> {
    let dataset = params.require_str("datasetSlug")?;

    match operation {
        Operation::Create => {
            let name = params.require_str("name")?;
            let threshold_op = params.require_str("thresholdOp")?;
            let threshold_value = require_f64(params, "thresholdValue")?;
            // The query spec arrives as free-form JSON text from the host UI.
            let query = params.parse_json_str("querySpec", "{}", "Query Specification")?;

            let mut body = Map::new();
            body.insert("name".into(), json!(name));
            body.insert("query".into(), query);
            body.insert(
                "threshold".into(),
                json!({"op": threshold_op, "value": threshold_value}),
            );
            let mut body = with_extra_fields(body, params.opt_object("additionalFields"));
            if let Some(recipients) = recipients_from(params) {
                body.insert("recipients".into(), Value::Array(recipients));
            }

            client
                .request(
                    Method::POST,
                    &format!("/triggers/{dataset}"),
                    Some(&Value::Object(body)),
                )
                .await
        }
        Operation::GetAll => get_all(client, &format!("/triggers/{dataset}"), params).await,
        Operation::Get => {
            let trigger_id = params.require_str("triggerId")?;
            client
                .request(
                    Method::GET,
                    &format!("/triggers/{dataset}/{trigger_id}"),
                    None,
                )
                .await
        }
        Operation::Update => {
            let trigger_id = params.require_str("triggerId")?;
            let mut body = update_fields(params);

            // The host exposes the threshold as two flat fields; the API
            // wants a nested object.
            let threshold_op = body.remove("thresholdOp");
            let threshold_value = body.remove("thresholdValue");
            if threshold_op.is_some() || threshold_value.is_some() {
                let mut threshold = Map::new();
                if let Some(op) = threshold_op {
                    threshold.insert("op".into(), op);
                }
                if let Some(value) = threshold_value {
                    threshold.insert("value".into(), value);
                }
                body.insert("threshold".into(), Value::Object(threshold));
            }

            client
                .request(
                    Method::PUT,
                    &format!("/triggers/{dataset}/{trigger_id}"),
                    Some(&Value::Object(body)),
                )
                .await
        }
        Operation::Delete => {
            let trigger_id = params.require_str("triggerId")?;
            client
                .request(
                    Method::DELETE,
                    &format!("/triggers/{dataset}/{trigger_id}"),
                    None,
                )
                .await?;
            Ok(deleted())
        }
        _ => Err(unknown(Resource::Trigger, operation)),
    }
}
