use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::models::subscription::PushSubscription;

/// Single-slot subscription store. Registering a new subscription discards
/// the previous one.
#[derive(Clone, Default)]
pub struct SubscriptionStore {
    slot: Arc<RwLock<Option<PushSubscription>>>,
}

impl SubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `subscription` as the active recipient. Returns whether a
    /// previous subscription was replaced.
    pub async fn replace(&self, subscription: PushSubscription) -> bool {
        let mut slot = self.slot.write().await;
        let replaced = slot.is_some();

        if replaced {
            info!(endpoint = %subscription.endpoint, "Replacing stored push subscription");
        }
        *slot = Some(subscription);

        replaced
    }

    pub async fn current(&self) -> Option<PushSubscription> {
        self.slot.read().await.clone()
    }

    pub async fn is_present(&self) -> bool {
        self.slot.read().await.is_some()
    }
}
