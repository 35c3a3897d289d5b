// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board operations, including pinning and unpinning queries.
//!
//! `addQuery`/`removeQuery` are read-modify-write: the board's current query
//! list is fetched, edited locally, and written back whole -- the API has no
//! partial-update endpoint for board queries.

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
            client.request(Method::POST, "/boards", Some(&body)).await
        }
        Operation::GetAll => get_all(client, "/boards", params).await,
        Operation::Get => {
            let board_id = params.require_str("boardId")?;
            client
                .request(Method::GET, &format!("/boards/{board_id}"), None)
                .await
        }
        Operation::Update => {
            let board_id = params.require_str("boardId")?;
            let body = Value::Object(update_fields(params));
            client
                .request(Method::PUT, &format!("/boards/{board_id}"), Some(&body))
                .await
        }
        Operation::Delete => {
            let board_id = params.require_str("boardId")?;
            client
                .request(Method::DELETE, &format!("/boards/{board_id}"), None)
                .await?;
            Ok(deleted())
        }
        Operation::AddQuery => add_query(client, params).await,
        Operation::RemoveQuery => remove_query(client, params).await,
        _ => Err(unknown(Resource::Board, operation)),
    }
}

async fn add_query(
    client: &HoneycombClient,
    params: &ParamSet,
) -> Result<Value, HivelinkError> {
    let board_id = params.require_str("boardId")?;
    let query_id = params.require_str("queryId")?;
    let dataset = params.require_str("datasetSlug")?;

    let board = client
        .request(Method::GET, &format!("/boards/{board_id}"), None)
        .await?;

    let mut queries = board
        .get("queries")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut entry = Map::new();
    entry.insert("query_id".into(), json!(query_id));
    entry.insert("dataset".into(), json!(dataset));
    queries.push(Value::Object(with_extra_fields(
        entry,
        params.opt_object("queryOptions"),
    )));

    client
        .request(
            Method::PUT,
            &format!("/boards/{board_id}"),
            Some(&json!({"queries": queries})),
        )
        .await
}

async fn remove_query(
    client: &HoneycombClient,
    params: &ParamSet,
) -> Result<Value, HivelinkError> {
    let board_id = params.require_str("boardId")?;
    let annotation_id = params.require_str("queryAnnotationId")?;

    let board = client
        .request(Method::GET, &format!("/boards/{board_id}"), None)
        .await?;

    let queries: Vec<Value> = board
        .get("queries")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .filter(|q| {
            q.get("query_annotation_id").and_then(Value::as_str) != Some(annotation_id)
        })
        .collect();

    client
        .request(
            Method::PUT,
            &format!("/boards/{board_id}"),
            Some(&json!({"queries": queries})),
        )
        .await
}
