use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use chrono::Utc;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::{
    clients::{push::PushClient, store::SubscriptionStore},
    config::Config,
    models::{
        error::StartError,
        health::HealthResponse,
        response::{ApiResponse, StartAck, StopAck, SubscribeAck},
        run::RunConfig,
        subscription::PushSubscription,
        validation::validate_subscription,
    },
    runner::Runner,
};

pub struct AppState {
    store: SubscriptionStore,
    runner: Runner,
    push_client: PushClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: SubscriptionStore::new(),
            runner: Runner::new(),
            push_client: PushClient::new(config),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/subscribe", post(subscribe))
        .route("/api/start", post(start))
        .route("/api/stop", post(stop))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config) -> Result<(), Error> {
    let addr = format!("0.0.0.0:{}", config.server_port);
    let state = Arc::new(AppState::new(&config));
    let app = router(state);

    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Push simulator server started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(subscription): Json<PushSubscription>,
) -> impl IntoResponse {
    if let Err(error) = validate_subscription(&subscription) {
        warn!(error = %error, "Rejected push subscription");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::<SubscribeAck>::error(error.to_string())),
        );
    }

    let endpoint = subscription.endpoint.clone();
    let replaced = state.store.replace(subscription).await;

    info!(endpoint = %endpoint, replaced, "Push subscription registered");

    (
        StatusCode::OK,
        Json(ApiResponse::ok(SubscribeAck { replaced })),
    )
}

async fn start(State(state): State<Arc<AppState>>, Json(raw): Json<Value>) -> impl IntoResponse {
    let config = match RunConfig::normalize(&raw) {
        Ok(config) => config,
        Err(error) => {
            warn!(error = %error, "Rejected start request");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::<StartAck>::error(error.to_string())),
            );
        }
    };

    let Some(subscription) = state.store.current().await else {
        warn!("Start requested without a stored subscription");
        return (
            StatusCode::CONFLICT,
            Json(ApiResponse::<StartAck>::error(
                StartError::MissingSubscription.to_string(),
            )),
        );
    };

    state
        .runner
        .start(config.clone(), subscription, state.push_client.clone());

    (
        StatusCode::OK,
        Json(ApiResponse::ok(StartAck {
            running: true,
            config,
        })),
    )
}

async fn stop(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let was_running = state.runner.stop();

    if !was_running {
        debug!("Stop requested with no active run");
    }

    Json(ApiResponse::ok(StopAck { running: false }))
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let status = state.runner.status();

    Json(HealthResponse {
        ok: true,
        running: status.running,
        has_subscription: state.store.is_present().await,
        sent: status.sent,
        total: status.total,
        timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    })
}
