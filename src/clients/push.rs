use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::debug;

use crate::{
    config::Config,
    models::{payload::NotificationPayload, subscription::PushSubscription},
};

/// Delivers payloads to a subscription endpoint. The payload JSON is posted
/// as-is with a TTL header; anything beyond "the endpoint accepted it" is
/// the push service's concern.
#[derive(Clone)]
pub struct PushClient {
    http_client: Client,
    ttl_seconds: u64,
}

impl PushClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: Client::new(),
            ttl_seconds: config.push_ttl_seconds,
        }
    }

    pub async fn deliver(
        &self,
        subscription: &PushSubscription,
        payload: &NotificationPayload,
    ) -> Result<(), Error> {
        debug!(endpoint = %subscription.endpoint, title = %payload.title, "Delivering push notification");

        let response = self
            .http_client
            .post(&subscription.endpoint)
            .header("TTL", self.ttl_seconds)
            .json(payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let error_text = response.text().await?;
            Err(anyhow!("Push endpoint returned {}: {}", status, error_text))
        }
    }
}
