use rand::random_range;
use serde::{Deserialize, Serialize};

use crate::models::run::{Language, PriceSource, RunConfig};

pub const ORDER_TAG: &str = "order";
pub const DEFAULT_ICON_URL: &str = "/icon-192.png";
pub const CLICK_URL: &str = "/?from=push";

/// Representative price points used by the weighted price source, with
/// their relative weights.
pub const WEIGHTED_PRICE_POINTS: [(f64, f64); 5] = [
    (9.95, 1.0),
    (19.95, 3.0),
    (39.95, 4.0),
    (59.95, 2.0),
    (89.95, 1.0),
];

/// The synthesized notification content, serialized as-is to the push
/// endpoint. The receiving side collapses notifications sharing `tag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    pub url: String,
    pub tag: String,
    pub icon: String,
    pub badge: String,
}

pub fn draw_price(config: &RunConfig) -> f64 {
    match config.price_source {
        PriceSource::Uniform => random_range(config.price_min..=config.price_max),
        PriceSource::Weighted => weighted_price(),
    }
}

fn weighted_price() -> f64 {
    let total: f64 = WEIGHTED_PRICE_POINTS.iter().map(|(_, weight)| weight).sum();
    let mut roll = random_range(0.0..total);

    for (price, weight) in WEIGHTED_PRICE_POINTS {
        if roll < weight {
            return price;
        }
        roll -= weight;
    }

    WEIGHTED_PRICE_POINTS[WEIGHTED_PRICE_POINTS.len() - 1].0
}

/// Items per order, derived from the drawn price. Thresholds are strict.
pub fn item_count_for_price(price: f64) -> u32 {
    if price > 70.0 {
        3
    } else if price > 35.0 {
        2
    } else {
        1
    }
}

/// Formats an amount for display. Whole amounts drop the decimals:
/// fr "39,95 €" / "40 €", en "£39.95" / "£40".
pub fn format_price(amount: f64, language: Language) -> String {
    let rounded = (amount * 100.0).round() / 100.0;

    let digits = if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.2}", rounded)
    };

    match language {
        Language::Fr => format!("{} €", digits.replace('.', ",")),
        Language::En => format!("£{}", digits),
    }
}

/// Builds the payload for one notification. Pure in its inputs; the price
/// is drawn separately per iteration.
pub fn build_payload(config: &RunConfig, order_number: u64, price: f64) -> NotificationPayload {
    let price_text = format_price(price, config.language);
    let item_count = item_count_for_price(price);

    let title = match config.language {
        Language::Fr => format!("Commande #{}", order_number),
        Language::En => format!("Order #{}", order_number),
    };

    let first_line = match config.language {
        Language::Fr => {
            let noun = if item_count > 1 { "articles" } else { "article" };
            format!(
                "{}, {} {} de Boutique en ligne",
                price_text, item_count, noun
            )
        }
        Language::En => {
            let noun = if item_count > 1 { "items" } else { "item" };
            format!("{}, {} {} from Online Store", price_text, item_count, noun)
        }
    };

    let second_line = format!("\u{2022} {}", config.shop_name);

    let icon = config
        .icon_url
        .clone()
        .unwrap_or_else(|| DEFAULT_ICON_URL.to_string());

    NotificationPayload {
        title,
        body: format!("{}\n{}", first_line, second_line),
        url: CLICK_URL.to_string(),
        tag: ORDER_TAG.to_string(),
        badge: icon.clone(),
        icon,
    }
}
