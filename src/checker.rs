use std::collections::HashMap;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_derive::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::{AppConfig, Encoding, QueryConfig, ServerConfig};
use crate::messages::{CheckResult, MacEntry};
use crate::request;

/// Failure modes of a single check. Each becomes a `RequestError` result;
/// none of them aborts the batch.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("response body is not the expected JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The slice of the list response the checker consumes. Anything else the
/// server sends alongside `items` is ignored.
#[derive(Deserialize, Debug)]
struct ListResponse {
    #[serde(default)]
    items: Vec<Value>,
}

pub struct MacChecker {
    client: reqwest::Client,
    server: ServerConfig,
    query: QueryConfig,
}

impl MacChecker {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(secs) = config.server.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(headers) = &config.server.headers {
            builder = builder.default_headers(static_headers(headers)?);
        }
        Ok(MacChecker {
            client: builder.build()?,
            server: config.server.clone(),
            query: config.query.clone().unwrap_or_default(),
        })
    }

    /// Checks every entry in order, one request at a time; the next request
    /// is not dispatched until the current one has fully completed. Each
    /// result is printed as soon as it is produced, and the returned
    /// sequence matches the input in length and order even when individual
    /// requests fail.
    pub async fn check_all(&self, macs: &[MacEntry]) -> Vec<CheckResult> {
        let mut results = Vec::with_capacity(macs.len());
        for entry in macs {
            let result = match self.check_one(&entry.address).await {
                Ok(result) => result,
                Err(err) => {
                    warn!("Check failed for {}: {err}", entry.address);
                    CheckResult::RequestError(err.to_string())
                }
            };
            report(entry, &result);
            results.push(result);
        }
        results
    }

    async fn check_one(&self, mac: &str) -> Result<CheckResult, CheckError> {
        let mut request = self.client.post(&self.server.url);
        let params = request::url_params(mac, self.server.params.as_ref(), &self.query);
        if !params.is_empty() {
            request = request.query(&params);
        }
        request = match self.server.encoding.unwrap_or_default() {
            Encoding::Form => request.form(&request::form_fields(mac, &self.query)),
            Encoding::Json => request.json(&request::json_body(mac, &self.query)),
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CheckError::Status(status));
        }

        let body = response.text().await?;
        let parsed: ListResponse = serde_json::from_str(&body)?;
        debug!("{mac} matched {} record(s)", parsed.items.len());

        match parsed.items.first() {
            Some(item) => Ok(CheckResult::Found(self.detail_of(item))),
            None => Ok(CheckResult::NotFound),
        }
    }

    /// Display string from the first matching record, when the server
    /// includes one under the configured label.
    fn detail_of(&self, item: &Value) -> Option<String> {
        let label = self
            .query
            .detail_label
            .as_deref()
            .unwrap_or(request::DEFAULT_DETAIL_LABEL);
        item.get("params")
            .and_then(|params| params.get(label))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

fn report(entry: &MacEntry, result: &CheckResult) {
    let who = match &entry.name {
        Some(name) => format!("{} ({name})", entry.address),
        None => entry.address.clone(),
    };
    match result {
        CheckResult::Found(Some(detail)) => println!("{who}: FOUND ({detail})"),
        CheckResult::Found(None) => println!("{who}: FOUND"),
        CheckResult::NotFound => println!("{who}: NOT found"),
        CheckResult::RequestError(reason) => println!("{who}: ERROR ({reason})"),
    }
}

fn static_headers(headers: &HashMap<String, String>) -> anyhow::Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        map.insert(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }
    Ok(map)
}
