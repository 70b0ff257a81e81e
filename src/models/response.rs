use serde::Serialize;

use crate::models::run::RunConfig;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,

    #[serde(flatten)]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscribeAck {
    pub replaced: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartAck {
    pub running: bool,

    #[serde(rename = "cfg")]
    pub config: RunConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct StopAck {
    pub running: bool,
}
