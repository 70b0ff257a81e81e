use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU64, Ordering},
};

use rand::random_range;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, warn};

use crate::{
    clients::push::PushClient,
    models::{
        payload,
        run::{Mode, RunConfig},
        subscription::PushSubscription,
    },
};

/// Drives timed delivery of a run's notifications to the stored
/// subscription.
///
/// At most one run is logically active. Each `start` bumps a generation
/// counter; a loop task that wakes up under a stale generation discards the
/// wake-up without sending, so a superseded or stopped run never interleaves
/// with the current one.
#[derive(Clone, Default)]
pub struct Runner {
    shared: Arc<RunnerShared>,
}

#[derive(Default)]
struct RunnerShared {
    generation: AtomicU64,
    running: AtomicBool,
    sent: AtomicU64,
    total: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub running: bool,
    pub sent: u64,
    pub total: u64,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new run and returns immediately; the emission loop runs as a
    /// spawned task. Any active run is superseded.
    pub fn start(&self, config: RunConfig, subscription: PushSubscription, client: PushClient) {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.shared.sent.store(0, Ordering::SeqCst);
        self.shared.total.store(config.count, Ordering::SeqCst);
        self.shared.running.store(true, Ordering::SeqCst);

        info!(
            generation,
            count = config.count,
            mode = ?config.mode,
            shop_name = %config.shop_name,
            "Run started"
        );

        let shared = Arc::clone(&self.shared);
        tokio::spawn(run_loop(shared, generation, config, subscription, client));
    }

    /// Signals the active run to stop. The loop observes the signal at its
    /// next iteration boundary; an in-flight delay or delivery is never
    /// interrupted. Idempotent when no run is active.
    pub fn stop(&self) -> bool {
        let was_running = self.shared.running.swap(false, Ordering::SeqCst);

        if was_running {
            info!("Stop requested");
        }

        was_running
    }

    pub fn status(&self) -> RunStatus {
        RunStatus {
            running: self.shared.running.load(Ordering::SeqCst),
            sent: self.shared.sent.load(Ordering::SeqCst),
            total: self.shared.total.load(Ordering::SeqCst),
        }
    }
}

async fn run_loop(
    shared: Arc<RunnerShared>,
    generation: u64,
    config: RunConfig,
    subscription: PushSubscription,
    client: PushClient,
) {
    let mut order_number = config.start_order_number;

    while shared.sent.load(Ordering::SeqCst) < config.count {
        let delay = next_delay(&config);
        debug!(delay_ms = delay.as_millis() as u64, "Waiting before next push");
        sleep(delay).await;

        if !is_current(&shared, generation) {
            debug!(generation, "Run superseded or stopped, discarding wake-up");
            return;
        }

        order_number += 1;
        let price = payload::draw_price(&config);
        let notification = payload::build_payload(&config, order_number, price);

        match client.deliver(&subscription, &notification).await {
            Ok(()) => {
                info!(order_number, title = %notification.title, "Push delivered");
            }
            Err(error) => {
                warn!(order_number, error = %error, "Push delivery failed");
            }
        }

        // A start that raced with the delivery above owns the counters now.
        if !is_current(&shared, generation) {
            return;
        }

        let sent = shared.sent.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(sent, total = config.count, "Push attempt recorded");
    }

    if is_current(&shared, generation) {
        shared.running.store(false, Ordering::SeqCst);
        info!(generation, count = config.count, "Run complete");
    }
}

fn is_current(shared: &RunnerShared, generation: u64) -> bool {
    shared.running.load(Ordering::SeqCst) && shared.generation.load(Ordering::SeqCst) == generation
}

/// Delay before the next notification. Steady mode uses the midpoint of the
/// configured bounds; random mode draws uniformly per iteration.
pub fn next_delay(config: &RunConfig) -> Duration {
    let seconds = match config.mode {
        Mode::Steady => (config.min_delay_seconds + config.max_delay_seconds) / 2.0,
        Mode::Random => random_range(config.min_delay_seconds..=config.max_delay_seconds),
    };

    Duration::from_secs_f64(seconds)
}
