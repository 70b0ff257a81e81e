use anyhow::{Result, anyhow};

use crate::models::subscription::PushSubscription;

pub fn validate_subscription(subscription: &PushSubscription) -> Result<()> {
    let endpoint = subscription.endpoint.trim();

    if endpoint.is_empty() {
        return Err(anyhow!("Subscription endpoint cannot be empty"));
    }

    if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") {
        return Err(anyhow!("Subscription endpoint must be an HTTP(S) URL"));
    }

    if subscription.keys.p256dh.is_empty() || subscription.keys.auth.is_empty() {
        return Err(anyhow!("Subscription keys cannot be empty"));
    }

    Ok(())
}
