// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Marker display setting operations, all scoped to a dataset.

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
            let setting_type = params.require_str("type")?;
            let mut body = Map::new();
            body.insert("type".into(), json!(setting_type));
            let body =
                Value::Object(with_extra_fields(body, params.opt_object("additionalFields")));
            client
                .request(
                    Method::POST,
                    &format!("/marker_settings/{dataset}"),
                    Some(&body),
                )
                .await
        }
        Operation::GetAll => {
            get_all(client, &format!("/marker_settings/{dataset}"), params).await
        }
        Operation::Get => {
            let setting_id = params.require_str("markerSettingId")?;
            client
                .request(
                    Method::GET,
                    &format!("/marker_settings/{dataset}/{setting_id}"),
                    None,
                )
                .await
        }
        Operation::Update => {
            let setting_id = params.require_str("markerSettingId")?;
            let body = Value::Object(update_fields(params));
            client
                .request(
                    Method::PUT,
                    &format!("/marker_settings/{dataset}/{setting_id}"),
                    Some(&body),
                )
                .await
        }
        Operation::Delete => {
            let setting_id = params.require_str("markerSettingId")?;
            client
                .request(
                    Method::DELETE,
                    &format!("/marker_settings/{dataset}/{setting_id}"),
                    None,
                )
                .await?;
            Ok(deleted())
        }
        _ => Err(unknown(Resource::MarkerSetting, operation)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_posts_type_and_color() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/marker_settings/prod"))
            .and(body_json(json!({"type": "deploy", "color": "#50ba40"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "ms1"})))
            .mount(&server)
            .await;

        let client = HoneycombClient::new("key", server.uri()).unwrap();
        let params = ParamSet::from_value(
            json!({
                "datasetSlug": "prod",
                "type": "deploy",
                "additionalFields": {"color": "#50ba40"}
            }),
            0,
        )
        .unwrap();
        let result = execute(&client, Operation::Create, &params).await.unwrap();
        assert_eq!(result["id"], "ms1");
    }
}
