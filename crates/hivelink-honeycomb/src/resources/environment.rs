// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment lifecycle operations.

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
    match operation {
        Operation::Create => {
            let name = params.require_str("name")?;
            let mut body = Map::new();
            body.insert("name".into(), json!(name));
            let body =
                Value::Object(with_extra_fields(body, params.opt_object("additionalFields")));
            client
                .request(Method::POST, "/environments", Some(&body))
                .await
        }
        Operation::GetAll => get_all(client, "/environments", params).await,
        Operation::Get => {
            let environment_id = params.require_str("environmentId")?;
            client
                .request(Method::GET, &format!("/environments/{environment_id}"), None)
                .await
        }
        Operation::Update => {
            let environment_id = params.require_str("environmentId")?;
            let body = Value::Object(update_fields(params));
            client
                .request(
                    Method::PUT,
                    &format!("/environments/{environment_id}"),
                    Some(&body),
                )
                .await
        }
        Operation::Delete => {
            let environment_id = params.require_str("environmentId")?;
            client
                .request(
                    Method::DELETE,
                    &format!("/environments/{environment_id}"),
                    None,
                )
                .await?;
            Ok(deleted())
        }
        _ => Err(unknown(Resource::Environment, operation)),
    }
}
