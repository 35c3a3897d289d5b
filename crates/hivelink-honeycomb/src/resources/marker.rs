// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Marker operations, all scoped to a dataset.
//!
//! Create and update bodies are scrubbed of empty-string and zero values:
//! the host leaves untouched optional fields at `""`/`0`, and sending those
//! would overwrite real marker data remotely.

use reqwest::Method;
use serde_json::{Map, Value, json};

use hivelink_core::{HivelinkError, Operation, ParamSet, Resource};

use crate::client::HoneycombClient;
use crate::resources::{deleted, get_all, unknown, update_fields, with_extra_fields};

/// Drops entries whose value is an empty string or the number zero.
fn scrub_empty(body: &mut Map<String, Value>) {
    body.retain(|_, value| match value {
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    });
}

pub(crate) async fn execute(
    client: &HoneycombClient,
    operation: Operation,
    params: &ParamSet,
) -> Result<Value, HivelinkError> {
    let dataset = params.require_str("datasetSlug")?;

    match operation {
        Operation::Create => {
            let marker_type = params.require_str("type")?;
            let mut body = Map::new();
            body.insert("type".into(), json!(marker_type));
            let mut body =
                with_extra_fields(body, params.opt_object("additionalFields"));
            scrub_empty(&mut body);

            client
                .request(
                    Method::POST,
                    &format!("/markers/{dataset}"),
                    Some(&Value::Object(body)),
                )
                .await
        }
        Operation::GetAll => get_all(client, &format!("/markers/{dataset}"), params).await,
        Operation::Get => {
            let marker_id = params.require_str("markerId")?;
            client
                .request(Method::GET, &format!("/markers/{dataset}/{marker_id}"), None)
                .await
        }
        Operation::Update => {
            let marker_id = params.require_str("markerId")?;
            let mut body = update_fields(params);
            scrub_empty(&mut body);
            client
                .request(
                    Method::PUT,
                    &format!("/markers/{dataset}/{marker_id}"),
                    Some(&Value::Object(body)),
                )
                .await
        }
        Operation::Delete => {
            let marker_id = params.require_str("markerId")?;
            client
                .request(
                    Method::DELETE,
                    &format!("/markers/{dataset}/{marker_id}"),
                    None,
                )
                .await?;
            Ok(deleted())
        }
        _ => Err(unknown(Resource::Marker, operation)),
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

    #[tokio::test]
    async fn create_scrubs_empty_and_zero_values() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/markers/prod"))
            .and(body_json(json!({
                "type": "deploy",
                "message": "v1.2.3",
                "start_time": 1700000000u64
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "m1"})))
            .mount(&server)
            .await;

        let client = HoneycombClient::new("key", server.uri()).unwrap();
        let result = execute(
            &client,
            Operation::Create,
            &params(json!({
                "datasetSlug": "prod",
                "type": "deploy",
                "additionalFields": {
                    "message": "v1.2.3",
                    "url": "",
                    "start_time": 1700000000u64,
                    "end_time": 0
                }
            })),
        )
        .await
        .unwrap();
        assert_eq!(result["id"], "m1");
    }

    #[tokio::test]
    async fn update_scrubs_update_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/markers/prod/m1"))
            .and(body_json(json!({"message": "rolled back"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "m1"})))
            .mount(&server)
            .await;

        let client = HoneycombClient::new("key", server.uri()).unwrap();
        execute(
            &client,
            Operation::Update,
            &params(json!({
                "datasetSlug": "prod",
                "markerId": "m1",
                "updateFields": {"message": "rolled back", "url": "", "end_time": 0}
            })),
        )
        .await
        .unwrap();
    }
}
