// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Burn alert operations, nested under an SLO.

use reqwest::Method;
use serde_json::{Map, Value, json};

use hivelink_core::{HivelinkError, Operation, ParamSet, Resource};

use crate::client::HoneycombClient;
use crate::resources::{
    deleted, get_all, recipients_from, require_u64, unknown, update_fields,
};

pub(crate) async fn execute(
    client: &HoneycombClient,
    operation: Operation,
    params: &ParamSet,
) -> Result<Value, HivelinkError> {
    let dataset = params.require_str("datasetSlug")?;
    let slo_id = params.require_str("sloId")?;
    let base = format!("/slos/{dataset}/{slo_id}/burn_alerts");

    match operation {
        Operation::Create => {
            let exhaustion_minutes = require_u64(params, "exhaustionMinutes")?;

            let mut body = Map::new();
            body.insert("exhaustion_minutes".into(), json!(exhaustion_minutes));
            if let Some(recipients) = recipients_from(params) {
                body.insert("recipients".into(), Value::Array(recipients));
            }

            client
                .request(Method::POST, &base, Some(&Value::Object(body)))
                .await
        }
        Operation::GetAll => get_all(client, &base, params).await,
        Operation::Get => {
            let alert_id = params.require_str("burnAlertId")?;
            client
                .request(Method::GET, &format!("{base}/{alert_id}"), None)
                .await
        }
        Operation::Update => {
            let alert_id = params.require_str("burnAlertId")?;
            let body = Value::Object(update_fields(params));
            client
                .request(Method::PUT, &format!("{base}/{alert_id}"), Some(&body))
                .await
        }
        Operation::Delete => {
            let alert_id = params.require_str("burnAlertId")?;
            client
                .request(Method::DELETE, &format!("{base}/{alert_id}"), None)
                .await?;
            Ok(deleted())
        }
        _ => Err(unknown(Resource::BurnAlert, operation)),
    }
}
