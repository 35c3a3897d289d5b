// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dataset lifecycle operations.

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
            client.request(Method::POST, "/datasets", Some(&body)).await
        }
        Operation::GetAll => get_all(client, "/datasets", params).await,
        Operation::Get => {
            let slug = params.require_str("datasetSlug")?;
            client
                .request(Method::GET, &format!("/datasets/{slug}"), None)
                .await
        }
        Operation::Update => {
            let slug = params.require_str("datasetSlug")?;
            let body = Value::Object(update_fields(params));
            client
                .request(Method::PUT, &format!("/datasets/{slug}"), Some(&body))
                .await
        }
        Operation::Delete => {
            let slug = params.require_str("datasetSlug")?;
            client
                .request(Method::DELETE, &format!("/datasets/{slug}"), None)
                .await?;
            Ok(deleted())
        }
        _ => Err(unknown(Resource::Dataset, operation)),
    }
}
