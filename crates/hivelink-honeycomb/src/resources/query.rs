// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query and query-result operations.
//!
//! Queries are created synchronously; query results are asynchronous on the
//! Honeycomb side, so `createResult` optionally polls until the remote
//! reports completion.

use reqwest::Method;
use serde_json::{Map, Value};

use hivelink_core::{HivelinkError, Operation, ParamSet, Resource};

use crate::client::HoneycombClient;
use crate::query::build_query;
use crate::resources::unknown;
use crate::types::QuerySpec;

pub(crate) async fn execute(
    client: &HoneycombClient,
    operation: Operation,
    params: &ParamSet,
) -> Result<Value, HivelinkError> {
    let dataset = params.require_str("datasetSlug")?;

    match operation {
        Operation::Create => {
            let spec = normalized_query(params)?;
            let body = to_body(&spec)?;
            client
                .request(Method::POST, &format!("/queries/{dataset}"), Some(&body))
                .await
        }
        Operation::Get => {
            let query_id = params.require_str("queryId")?;
            client
                .request(Method::GET, &format!("/queries/{dataset}/{query_id}"), None)
                .await
        }
        Operation::CreateResult => create_result(client, dataset, params).await,
        Operation::GetResult => {
            let query_id = params.require_str("queryId")?;
            let result_id = params.require_str("resultId")?;
            client
                .request(
                    Method::GET,
                    &format!("/query_results/{dataset}/{result_id}?query_id={query_id}"),
                    None,
                )
                .await
        }
        _ => Err(unknown(Resource::Query, operation)),
    }
}

async fn create_result(
    client: &HoneycombClient,
    dataset: &str,
    params: &ParamSet,
) -> Result<Value, HivelinkError> {
    let spec = normalized_query(params)?;

    let mut body = Map::new();
    body.insert("query".into(), to_body(&spec)?);
    if additional_option(params, "disableSeries")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        body.insert("disable_series".into(), Value::Bool(true));
    }

    let result = client
        .request(
            Method::POST,
            &format!("/query_results/{dataset}"),
            Some(&Value::Object(body)),
        )
        .await?;

    let wait_for_completion = params.bool_or("waitForCompletion", true);
    if wait_for_completion
        && let Some(result_id) = result.get("id").and_then(Value::as_str)
    {
        let max_attempts = params.opt_u64("maxWaitTime").map(|attempts| attempts as u32);
        return client
            .poll_query_result(dataset, result_id, max_attempts)
            .await;
    }

    Ok(result)
}

/// Normalizes query parameters, folding the host's "additional options"
/// result limit in when no top-level limit was given.
fn normalized_query(params: &ParamSet) -> Result<QuerySpec, HivelinkError> {
    let mut spec = build_query(params)?;
    if spec.limit.is_none() {
        spec.limit = additional_option(params, "limit")
            .and_then(Value::as_u64)
            .filter(|&limit| limit != 0);
    }
    Ok(spec)
}

fn additional_option<'a>(params: &'a ParamSet, key: &str) -> Option<&'a Value> {
    params.opt_object("additionalOptions").and_then(|o| o.get(key))
}

fn to_body(spec: &QuerySpec) -> Result<Value, HivelinkError> {
    serde_json::to_value(spec)
        .map_err(|e| HivelinkError::Internal(format!("query serialization: {e}")))
}
