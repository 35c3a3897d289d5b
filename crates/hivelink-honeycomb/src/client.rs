// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Honeycomb REST API.
//!
//! Provides [`HoneycombClient`] which handles request construction,
//! authentication, cursor-following pagination, and bounded polling of
//! asynchronous query results.

use std::time::Duration;

use hivelink_core::HivelinkError;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Base URL for the Honeycomb REST API (version 1).
pub const API_BASE_URL: &str = "https://api.honeycomb.io/1";

/// Outbound request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body shape the Honeycomb API returns on failures.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// HTTP client for Honeycomb API communication.
///
/// The team API key is installed as a default `X-Honeycomb-Team` header at
/// construction, so every outbound request carries it. One request is in
/// flight at a time per invocation; there is no request-level concurrency.
#[derive(Debug, Clone)]
pub struct HoneycombClient {
    client: reqwest::Client,
    base_url: String,
    poll_max_attempts: u32,
    poll_interval: Duration,
}

impl HoneycombClient {
    /// Creates a new Honeycomb API client.
    ///
    /// # Arguments
    /// * `api_key` - Honeycomb team API key for authentication
    /// * `base_url` - API origin, normally [`API_BASE_URL`]
    pub fn new(api_key: &str, base_url: impl Into<String>) -> Result<Self, HivelinkError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Honeycomb-Team",
            HeaderValue::from_str(api_key).map_err(|e| {
                HivelinkError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HivelinkError::Api {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            poll_max_attempts: 30,
            poll_interval: Duration::from_secs(1),
        })
    }

    /// Overrides the polling budget (attempt count and fixed sleep).
    pub fn with_poll_settings(mut self, max_attempts: u32, interval: Duration) -> Self {
        self.poll_max_attempts = max_attempts;
        self.poll_interval = interval;
        self
    }

    /// Sends a single request and returns the parsed JSON response.
    ///
    /// `path` is appended to the base URL and may carry an inline query
    /// string. Empty response bodies (e.g. from DELETE) parse as `null`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, HivelinkError> {
        let url = format!("{}{}", self.base_url, path);
        self.request_url(method, &url, body).await
    }

    async fn request_url(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, HivelinkError> {
        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| HivelinkError::Api {
            message: format!("{method} request failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(status = %status, %method, url, "response received");

        if status.is_success() {
            let text = response.text().await.map_err(|e| HivelinkError::Api {
                message: format!("failed to read response body: {e}"),
                source: Some(Box::new(e)),
            })?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&text).map_err(|e| HivelinkError::Api {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            });
        }

        let body_text = response.text().await.unwrap_or_default();
        let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(&body_text) {
            format!("Honeycomb API error ({status}): {}", api_err.error)
        } else {
            format!("{method} request returned {status}: {body_text}")
        };
        warn!(status = %status, %method, url, "request failed");
        Err(HivelinkError::Api {
            message,
            source: None,
        })
    }

    /// Repeats a GET, following the response's `links.next` cursor, and
    /// accumulates all pages into one item list.
    ///
    /// A bare-array response is consumed whole. A response that is neither an
    /// array nor a `{data: [...]}` page becomes the entire result as a single
    /// item. No deduplication; pages are appended in fetch order.
    pub async fn request_all_items(&self, path: &str) -> Result<Vec<Value>, HivelinkError> {
        let mut items = Vec::new();
        let mut next_url: Option<String> = None;

        loop {
            let response = match next_url.take() {
                Some(url) => self.request_url(Method::GET, &url, None).await?,
                None => self.request(Method::GET, path, None).await?,
            };

            match response {
                Value::Array(page) => {
                    items.extend(page);
                    break;
                }
                Value::Object(mut obj) => {
                    if !matches!(obj.get("data"), Some(Value::Array(_))) {
                        items.push(Value::Object(obj));
                        break;
                    }
                    if let Some(Value::Array(page)) = obj.remove("data") {
                        items.extend(page);
                    }
                    match obj
                        .get("links")
                        .and_then(|links| links.get("next"))
                        .and_then(Value::as_str)
                    {
                        Some(next) => next_url = Some(format!("{}{}", self.base_url, next)),
                        None => break,
                    }
                }
                other => {
                    items.push(other);
                    break;
                }
            }
        }

        Ok(items)
    }

    /// Polls a query result until its `complete` flag turns true.
    ///
    /// Performs up to `max_attempts` fetches (defaulting to the configured
    /// budget) with a fixed sleep between them; no backoff. Exhausting the
    /// budget raises [`HivelinkError::Timeout`] naming the elapsed wait.
    pub async fn poll_query_result(
        &self,
        dataset: &str,
        result_id: &str,
        max_attempts: Option<u32>,
    ) -> Result<Value, HivelinkError> {
        let max_attempts = max_attempts.unwrap_or(self.poll_max_attempts);
        let path = format!("/query_results/{dataset}/{result_id}");

        for attempt in 0..max_attempts {
            let result = self.request(Method::GET, &path, None).await?;
            if result.get("complete").and_then(Value::as_bool) == Some(true) {
                debug!(attempt, result_id, "query result complete");
                return Ok(result);
            }
            tokio::time::sleep(self.poll_interval).await;
        }

        warn!(result_id, max_attempts, "query result polling exhausted");
        Err(HivelinkError::Timeout {
            waited: self.poll_interval * max_attempts,
        })
    }

    /// Sends a batch of events to `POST /batch/{dataset}`.
    ///
    /// The body is the raw event array; the response carries one status per
    /// event.
    pub async fn send_event_batch(
        &self,
        dataset: &str,
        events: &Value,
    ) -> Result<Value, HivelinkError> {
        self.request(Method::POST, &format!("/batch/{dataset}"), Some(events))
            .await
    }
}
