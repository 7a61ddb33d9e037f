//! Asset-variant generation via the external worker.
//!
//! The worker receives the onboarding answers ("what do you offer", "who do
//! you help") and returns three complete bento bundles, each filling the
//! eight showcase slots. Its response shape is treated as opaque and
//! forwarded unmodified; unlike the copy-generation flow there is no
//! fallback, so worker failures surface to the caller.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

use crate::config::WorkerConfig;
use crate::errors::{Error, Result};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkerRequest<'a> {
    what_do_you_offer: &'a str,
    who_do_you_help: &'a str,
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WorkerResponse {
    variants: serde_json::Value,
}

pub struct VariantsClient {
    http: reqwest::Client,
    url: String,
    api_token: Option<String>,
}

impl VariantsClient {
    pub fn new(config: &WorkerConfig) -> Self {
        // The worker chains several model calls per request, hence the
        // unusually long timeout (100s by default).
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create variants worker HTTP client");

        Self {
            http,
            url: config.url.to_string(),
            api_token: config.api_token.clone(),
        }
    }

    /// Run one variant generation and return the worker's `variants` value
    /// as-is.
    #[instrument(skip_all, err)]
    pub async fn generate(&self, what_do_you_offer: &str, who_do_you_help: &str) -> Result<serde_json::Value> {
        let body = WorkerRequest {
            what_do_you_offer,
            who_do_you_help,
            keywords: Vec::new(),
        };

        let mut builder = self.http.post(&self.url).json(&body);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| Error::UpstreamFailure {
            operation: "generate asset variants".to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamFailure {
                operation: "generate asset variants".to_string(),
                message: format!("worker returned HTTP {status}"),
            });
        }

        let parsed: WorkerResponse = response.json().await.map_err(|e| Error::UpstreamFailure {
            operation: "generate asset variants".to_string(),
            message: format!("invalid worker response: {e}"),
        })?;

        Ok(parsed.variants)
    }
}
