use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub running: bool,
    pub has_subscription: bool,
    pub sent: u64,
    pub total: u64,
    pub timestamp: String,
}
