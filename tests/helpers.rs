use std::sync::Arc;

use push_simulator::{
    api::{self, AppState},
    config::Config,
    models::{
        run::{Language, Mode, PriceSource, RunConfig},
        subscription::{PushSubscription, SubscriptionKeys},
    },
};
use tokio::net::TcpListener;

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        push_ttl_seconds: 60,
    }
}

pub fn subscription_for(endpoint: &str) -> PushSubscription {
    PushSubscription {
        endpoint: endpoint.to_string(),
        expiration_time: None,
        keys: SubscriptionKeys {
            p256dh: "BN4GvZtEZiZuqFxSKVZfSfluS4rZcZkkzLEqvFwGWzv8".to_string(),
            auth: "tBHItJI5svbpez7KI4CCXg".to_string(),
        },
    }
}

/// A steady-mode config with a fixed per-iteration delay, small enough to
/// keep tests fast.
pub fn quick_run_config(count: u64, delay_seconds: f64) -> RunConfig {
    RunConfig {
        shop_name: "Shoox".to_string(),
        count,
        min_delay_seconds: delay_seconds,
        max_delay_seconds: delay_seconds,
        start_order_number: 1000,
        price_min: 20.0,
        price_max: 80.0,
        language: Language::Fr,
        mode: Mode::Steady,
        price_source: PriceSource::Uniform,
        icon_url: None,
    }
}

/// Binds the API on an ephemeral port and serves it in the background.
/// Returns the base URL.
pub async fn spawn_server() -> String {
    let config = test_config();
    let state = Arc::new(AppState::new(&config));
    let app = api::router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    format!("http://{}", addr)
}
