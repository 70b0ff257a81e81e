use serde::{Deserialize, Serialize};

/// The browser push subscription JSON, stored verbatim as the single
/// delivery target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSubscription {
    pub endpoint: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<f64>,

    pub keys: SubscriptionKeys,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionKeys {
    pub p256dh: String,
    pub auth: String,
}
