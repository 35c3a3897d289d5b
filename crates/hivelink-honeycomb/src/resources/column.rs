// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Column lifecycle operations, all scoped to a dataset.

use reqwest::Method;
use serde_json::{Map, Value, json};

use hivelink_core::{HivelinkError, Operation, ParamSet, Resource};

use crate::client::HoneycombClient;
use crate::resources::{deleted, get_all, unknown, update_fields, with_extra_fields};

pub(crate) async fn execute(
    client: &HoneycombClient,
    operation: Operation,
    params: &ParamSet,
) -> Result<Value, HivelinkError> {
    let dataset = params.require_str("datasetSlug")?;

    match operation {
        Operation::Create => {
            let key_name = params.require_str("keyName")?;
            let mut body = Map::new();
            body.insert("key_name".into(), json!(key_name));
            let body =
                Value::Object(with_extra_fields(body, params.opt_object("additionalFields")));
            client
                .request(Method::POST, &format!("/columns/{dataset}"), Some(&body))
                .await
        }
        Operation::GetAll => get_all(client, &format!("/columns/{dataset}"), params).await,
        Operation::Get => {
            let key_name = params.require_str("keyName")?;
            client
                .request(Method::GET, &format!("/columns/{dataset}/{key_name}"), None)
                .await
        }
        Operation::Update => {
            let key_name = params.require_str("keyName")?;
            let body = Value::Object(update_fields(params));
            client
                .request(
                    Method::PUT,
                    &format!("/columns/{dataset}/{key_name}"),
                    Some(&body),
                )
                .await
        }
        Operation::Delete => {
            let key_name = params.require_str("keyName")?;
            client
                .request(
                    Method::DELETE,
                    &format!("/columns/{dataset}/{key_name}"),
                    None,
                )
                .await?;
            Ok(deleted())
        }
        _ => Err(unknown(Resource::Column, operation)),
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
    async fn create_sends_key_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/columns/prod"))
            .and(body_json(json!({"key_name": "duration_ms", "type": "float"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"id": "c1", "key_name": "duration_ms"})),
            )
            .mount(&server)
            .await;

        let client = HoneycombClient::new("key", server.uri()).unwrap();
        let result = execute(
            &client,
            Operation::Create,
            &params(json!({
                "datasetSlug": "prod",
                "keyName": "duration_ms",
                "additionalFields": {"type": "float"}
            })),
        )
        .await
        .unwrap();
        assert_eq!(result["id"], "c1");
    }

    #[tokio::test]
    async fn missing_dataset_slug_is_an_input_error() {
        let server = MockServer::start().await;
        let client = HoneycombClient::new("key", server.uri()).unwrap();
        let err = execute(&client, Operation::Get, &params(json!({"keyName": "x"})))
            .await
            .unwrap_err();
        assert!(matches!(err, HivelinkError::InvalidInput { .. }));
    }
}
