//! Mailing-list subscription for onboarding completion.
//!
//! When a user finishes onboarding, their address is pushed to the
//! configured mailing-list provider. This is a best-effort side effect: the
//! profile update that triggered it has already succeeded, so failures here
//! are logged and never surfaced.

use serde::Serialize;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::config::MailingConfig;

#[derive(Debug, Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<SubscriberFields<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    groups: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SubscriberFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<&'a str>,
}

#[derive(Clone)]
pub struct MailingListClient {
    http: reqwest::Client,
    enabled: bool,
    api_url: String,
    api_key: Option<String>,
    group_id: Option<String>,
}

impl MailingListClient {
    pub fn new(config: &MailingConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create mailing list HTTP client");

        Self {
            http,
            enabled: config.enabled,
            api_url: config.api_url.to_string(),
            api_key: config.api_key.clone(),
            group_id: config.group_id.clone(),
        }
    }

    /// Subscribe a user. Logs the outcome and swallows every failure.
    #[instrument(skip(self, first_name, last_name), fields(email = %email))]
    pub async fn subscribe(&self, email: &str, first_name: Option<&str>, last_name: Option<&str>) {
        if !self.enabled {
            return;
        }

        let body = SubscribeRequest {
            email,
            fields: Some(SubscriberFields {
                name: first_name,
                last_name,
            }),
            groups: self.group_id.iter().cloned().collect(),
        };

        let mut builder = self.http.post(&self.api_url).json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        match builder.send().await {
            Ok(response) if response.status().is_success() => {
                info!("Subscribed user to mailing list");
            }
            Ok(response) => {
                warn!(status = %response.status(), "Mailing list subscription rejected");
            }
            Err(error) => {
                warn!(%error, "Mailing list subscription failed");
            }
        }
    }
}
