// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SLO operations, all scoped to a dataset.
//!
//! The API expresses the success target per million events; the host UI
//! collects it as a percentage. 99.9% becomes 999000.

use reqwest::Method;
use serde_json::{Map, Value, json};

use hivelink_core::{HivelinkError, Operation, ParamSet, Resource};

use crate::client::HoneycombClient;
use crate::resources::{
    deleted, get_all, require_f64, require_u64, unknown, update_fields, with_extra_fields,
};

fn target_per_million(percentage: f64) -> u64 {
    (percentage * 10_000.0).round() as u64
}

pub(crate) async fn execute(
    client: &HoneycombClient,
    operation: Operation,
    params: &ParamSet,
) -> Result<Value, HivelinkError> {
    let dataset = params.require_str("datasetSlug")?;

    match operation {
        Operation::Create => {
            let name = params.require_str("name")?;
            let sli_alias = params.require_str("sliAlias")?;
            let target_percentage = require_f64(params, "targetPercentage")?;
            let time_period_days = require_u64(params, "timePeriodDays")?;

            let mut body = Map::new();
            body.insert("name".into(), json!(name));
            body.insert("sli".into(), json!({"alias": sli_alias}));
            body.insert(
                "target_per_million".into(),
                json!(target_per_million(target_percentage)),
            );
            body.insert("time_period_days".into(), json!(time_period_days));
            let body =
                Value::Object(with_extra_fields(body, params.opt_object("additionalFields")));

            client
                .request(Method::POST, &format!("/slos/{dataset}"), Some(&body))
                .await
        }
        Operation::GetAll => get_all(client, &format!("/slos/{dataset}"), params).await,
        Operation::Get => {
            let slo_id = params.require_str("sloId")?;
            client
                .request(Method::GET, &format!("/slos/{dataset}/{slo_id}"), None)
                .await
        }
        Operation::Update => {
            let slo_id = params.require_str("sloId")?;
            let mut body = update_fields(params);

            if let Some(alias) = body.remove("sliAlias") {
                body.insert("sli".into(), json!({"alias": alias}));
            }
            if let Some(percentage) = body.remove("targetPercentage") {
                if let Some(percentage) = percentage.as_f64() {
                    body.insert(
                        "target_per_million".into(),
                        json!(target_per_million(percentage)),
                    );
                }
            }
            if let Some(days) = body.remove("timePeriodDays") {
                body.insert("time_period_days".into(), days);
            }

            client
                .request(
                    Method::PUT,
                    &format!("/slos/{dataset}/{slo_id}"),
                    Some(&Value::Object(body)),
                )
                .await
        }
        Operation::Delete => {
            let slo_id = params.require_str("sloId")?;
            client
                .request(Method::DELETE, &format!("/slos/{dataset}/{slo_id}"), None)
                .await?;
            Ok(deleted())
        }
        Operation::GetHistory => {
            let slo_id = params.require_str("sloId")?;
            client
                .request(
                    Method::GET,
                    &format!("/slos/{dataset}/{slo_id}/history"),
                    None,
                )
                .await
        }
        _ => Err(unknown(Resource::Slo, operation)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params(value: Value) -> ParamSet {
        ParamSet::from_value(value, 0).unwrap()
    }

    #[test]
    fn percentage_converts_to_per_million() {
        assert_eq!(target_per_million(99.9), 999_000);
        assert_eq!(target_per_million(99.95), 999_500);
        assert_eq!(target_per_million(100.0), 1_000_000);
    }

    #[tokio::test]
    async fn create_builds_sli_and_target() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/slos/prod"))
            .and(body_json(json!({
                "name": "checkout availability",
                "sli": {"alias": "sli.checkout_ok"},
                "target_per_million": 999_000,
                "time_period_days": 30
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "s1"})))
            .mount(&server)
            .await;

        let client = HoneycombClient::new("key", server.uri()).unwrap();
        let result = execute(
            &client,
            Operation::Create,
            &params(json!({
                "datasetSlug": "prod",
                "name": "checkout availability",
                "sliAlias": "sli.checkout_ok",
                "targetPercentage": 99.9,
                "timePeriodDays": 30
            })),
        )
        .await
        .unwrap();
        assert_eq!(result["id"], "s1");
    }

    #[tokio::test]
    async fn update_folds_camel_case_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/slos/prod/s1"))
            .and(body_json(json!({
                "sli": {"alias": "sli.v2"},
                "target_per_million": 999_500,
                "time_period_days": 7
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "s1"})))
            .mount(&server)
            .await;

        let client = HoneycombClient::new("key", server.uri()).unwrap();
        execute(
            &client,
            Operation::Update,
            &params(json!({
                "datasetSlug": "prod",
                "sloId": "s1",
                "updateFields": {
                    "sliAlias": "sli.v2",
                    "targetPercentage": 99.95,
                    "timePeriodDays": 7
                }
            })),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn get_history_hits_history_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slos/prod/s1/history"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"budget_start_time": "2026-01-01T00:00:00Z"}
            ])))
            .mount(&server)
            .await;

        let client = HoneycombClient::new("key", server.uri()).unwrap();
        let result = execute(
            &client,
            Operation::GetHistory,
            &params(json!({"datasetSlug": "prod", "sloId": "s1"})),
        )
        .await
        .unwrap();
        assert!(result.is_array());
    }
}
