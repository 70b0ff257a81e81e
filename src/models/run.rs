use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::error::StartError;

pub const DEFAULT_SHOP_NAME: &str = "My Store";

const DEFAULT_COUNT: f64 = 5.0;
const DEFAULT_MIN_DELAY_SECONDS: f64 = 2.0;
const DEFAULT_MAX_DELAY_SECONDS: f64 = 6.0;
const DEFAULT_START_ORDER_NUMBER: f64 = 1000.0;
const DEFAULT_PRICE_MIN: f64 = 20.0;
const DEFAULT_PRICE_MAX: f64 = 80.0;

const MIN_DELAY_FLOOR_SECONDS: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Random,
    Steady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    Uniform,
    Weighted,
}

/// One run's settings, normalized from the raw start-request body.
/// Wire names match the browser UI contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    pub shop_name: String,
    pub count: u64,
    #[serde(rename = "minSec")]
    pub min_delay_seconds: f64,
    #[serde(rename = "maxSec")]
    pub max_delay_seconds: f64,
    #[serde(rename = "orderStart")]
    pub start_order_number: u64,
    pub price_min: f64,
    pub price_max: f64,
    #[serde(rename = "lang")]
    pub language: Language,
    pub mode: Mode,
    pub price_source: PriceSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl RunConfig {
    /// Normalizes an untrusted start-request body into a run configuration.
    ///
    /// Missing or malformed fields fall back to their documented defaults;
    /// inverted ranges are swapped. Only a body that is not a JSON object
    /// (null counts as an empty object) is rejected.
    pub fn normalize(raw: &Value) -> Result<Self, StartError> {
        let empty = Map::new();
        let body = match raw {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => {
                return Err(StartError::Validation(
                    "request body must be a JSON object".to_string(),
                ));
            }
        };

        let count = number_field(body, "count", DEFAULT_COUNT).floor().max(1.0) as u64;

        let mut min_delay_seconds =
            number_field(body, "minSec", DEFAULT_MIN_DELAY_SECONDS).max(MIN_DELAY_FLOOR_SECONDS);
        let mut max_delay_seconds =
            number_field(body, "maxSec", DEFAULT_MAX_DELAY_SECONDS).max(MIN_DELAY_FLOOR_SECONDS);
        if max_delay_seconds < min_delay_seconds {
            std::mem::swap(&mut min_delay_seconds, &mut max_delay_seconds);
        }

        let start_order_number = number_field(body, "orderStart", DEFAULT_START_ORDER_NUMBER)
            .floor()
            .max(1.0) as u64;

        let mut price_min = number_field(body, "priceMin", DEFAULT_PRICE_MIN).max(0.0);
        let mut price_max = number_field(body, "priceMax", DEFAULT_PRICE_MAX).max(0.0);
        if price_max < price_min {
            std::mem::swap(&mut price_min, &mut price_max);
        }

        let mode = match string_field(body, "mode") {
            Some("steady") => Mode::Steady,
            _ => Mode::Random,
        };

        let language = match string_field(body, "lang") {
            Some("en") => Language::En,
            _ => Language::Fr,
        };

        let price_source = match string_field(body, "priceSource") {
            Some("weighted") => PriceSource::Weighted,
            _ => PriceSource::Uniform,
        };

        let shop_name = string_field(body, "shopName")
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_SHOP_NAME)
            .to_string();

        let icon_url = string_field(body, "iconUrl")
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from);

        Ok(Self {
            shop_name,
            count,
            min_delay_seconds,
            max_delay_seconds,
            start_order_number,
            price_min,
            price_max,
            language,
            mode,
            price_source,
            icon_url,
        })
    }
}

fn number_field(body: &Map<String, Value>, key: &str, default: f64) -> f64 {
    let Some(value) = body.get(key) else {
        return default;
    };

    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(number) if number.is_finite() => number,
        _ => default,
    }
}

fn string_field<'a>(body: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}
