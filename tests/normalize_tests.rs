use push_simulator::models::{
    error::StartError,
    run::{DEFAULT_SHOP_NAME, Language, Mode, PriceSource, RunConfig},
};
use serde_json::json;

/// Test: An empty body produces the documented defaults
#[test]
fn test_empty_body_yields_defaults() {
    let config = RunConfig::normalize(&json!({})).expect("defaults");

    assert_eq!(config.shop_name, DEFAULT_SHOP_NAME);
    assert_eq!(config.count, 5);
    assert_eq!(config.min_delay_seconds, 2.0);
    assert_eq!(config.max_delay_seconds, 6.0);
    assert_eq!(config.start_order_number, 1000);
    assert_eq!(config.price_min, 20.0);
    assert_eq!(config.price_max, 80.0);
    assert_eq!(config.mode, Mode::Random);
    assert_eq!(config.language, Language::Fr);
    assert_eq!(config.price_source, PriceSource::Uniform);
    assert_eq!(config.icon_url, None);
}

/// Test: A null body is treated like an empty object
#[test]
fn test_null_body_yields_defaults() {
    let config = RunConfig::normalize(&json!(null)).expect("defaults");

    assert_eq!(config.count, 5);
    assert_eq!(config.shop_name, DEFAULT_SHOP_NAME);
}

/// Test: Non-object bodies are rejected with a validation error
#[test]
fn test_non_object_body_is_rejected() {
    for raw in [json!([1, 2, 3]), json!("steady"), json!(42), json!(true)] {
        let error = RunConfig::normalize(&raw).expect_err("must reject");
        assert!(matches!(error, StartError::Validation(_)), "got: {:?}", error);
    }
}

/// Test: Inverted delay bounds are swapped after clamping
#[test]
fn test_inverted_delay_bounds_are_swapped() {
    let config = RunConfig::normalize(&json!({"minSec": 9.0, "maxSec": 3.0})).expect("config");

    assert_eq!(config.min_delay_seconds, 3.0);
    assert_eq!(config.max_delay_seconds, 9.0);
}

/// Test: Delay bounds are clamped to the 0.1s floor
#[test]
fn test_delay_bounds_clamped_to_floor() {
    let config = RunConfig::normalize(&json!({"minSec": 0.0, "maxSec": 0.01})).expect("config");

    assert_eq!(config.min_delay_seconds, 0.1);
    assert_eq!(config.max_delay_seconds, 0.1);
}

/// Test: Inverted price bounds are swapped and negatives clamp to zero
#[test]
fn test_price_bounds_swapped_and_clamped() {
    let config = RunConfig::normalize(&json!({"priceMin": 50.0, "priceMax": 10.0})).expect("config");
    assert_eq!(config.price_min, 10.0);
    assert_eq!(config.price_max, 50.0);

    let config = RunConfig::normalize(&json!({"priceMin": -5.0, "priceMax": 30.0})).expect("config");
    assert_eq!(config.price_min, 0.0);
    assert_eq!(config.price_max, 30.0);
}

/// Test: Count is floored and clamped to a minimum of 1
#[test]
fn test_count_floored_and_clamped() {
    assert_eq!(RunConfig::normalize(&json!({"count": 3.9})).unwrap().count, 3);
    assert_eq!(RunConfig::normalize(&json!({"count": 0})).unwrap().count, 1);
    assert_eq!(RunConfig::normalize(&json!({"count": -7})).unwrap().count, 1);
}

/// Test: Start order number is floored and clamped to a minimum of 1
#[test]
fn test_start_order_number_floored_and_clamped() {
    let config = RunConfig::normalize(&json!({"orderStart": 24681.7})).expect("config");
    assert_eq!(config.start_order_number, 24681);

    let config = RunConfig::normalize(&json!({"orderStart": 0})).expect("config");
    assert_eq!(config.start_order_number, 1);
}

/// Test: Numeric strings are coerced to numbers
#[test]
fn test_numeric_strings_are_coerced() {
    let config =
        RunConfig::normalize(&json!({"count": "7", "minSec": " 1.5 ", "priceMax": "99.9"}))
            .expect("config");

    assert_eq!(config.count, 7);
    assert_eq!(config.min_delay_seconds, 1.5);
    assert_eq!(config.price_max, 99.9);
}

/// Test: Malformed or non-finite numeric fields fall back to defaults
#[test]
fn test_malformed_numbers_fall_back_to_defaults() {
    let config = RunConfig::normalize(&json!({
        "count": "many",
        "minSec": null,
        "maxSec": "inf",
        "priceMin": [1, 2],
        "orderStart": {"n": 3},
    }))
    .expect("config");

    assert_eq!(config.count, 5);
    assert_eq!(config.min_delay_seconds, 2.0);
    assert_eq!(config.max_delay_seconds, 6.0);
    assert_eq!(config.price_min, 20.0);
    assert_eq!(config.start_order_number, 1000);
}

/// Test: Mode accepts only the exact string "steady"
#[test]
fn test_mode_matches_exact_string_only() {
    assert_eq!(RunConfig::normalize(&json!({"mode": "steady"})).unwrap().mode, Mode::Steady);
    assert_eq!(RunConfig::normalize(&json!({"mode": "Steady"})).unwrap().mode, Mode::Random);
    assert_eq!(RunConfig::normalize(&json!({"mode": "warp"})).unwrap().mode, Mode::Random);
    assert_eq!(RunConfig::normalize(&json!({"mode": 1})).unwrap().mode, Mode::Random);
}

/// Test: Language accepts only the exact string "en"
#[test]
fn test_language_matches_exact_string_only() {
    assert_eq!(RunConfig::normalize(&json!({"lang": "en"})).unwrap().language, Language::En);
    assert_eq!(RunConfig::normalize(&json!({"lang": "EN"})).unwrap().language, Language::Fr);
    assert_eq!(RunConfig::normalize(&json!({"lang": "de"})).unwrap().language, Language::Fr);
    assert_eq!(RunConfig::normalize(&json!({})).unwrap().language, Language::Fr);
}

/// Test: Price source accepts only the exact string "weighted"
#[test]
fn test_price_source_matches_exact_string_only() {
    let config = RunConfig::normalize(&json!({"priceSource": "weighted"})).expect("config");
    assert_eq!(config.price_source, PriceSource::Weighted);

    let config = RunConfig::normalize(&json!({"priceSource": "Weighted"})).expect("config");
    assert_eq!(config.price_source, PriceSource::Uniform);
}

/// Test: Shop name is trimmed; blank or non-string values use the default
#[test]
fn test_shop_name_trimmed_and_defaulted() {
    let config = RunConfig::normalize(&json!({"shopName": "  Shoox  "})).expect("config");
    assert_eq!(config.shop_name, "Shoox");

    let config = RunConfig::normalize(&json!({"shopName": "   "})).expect("config");
    assert_eq!(config.shop_name, DEFAULT_SHOP_NAME);

    let config = RunConfig::normalize(&json!({"shopName": 42})).expect("config");
    assert_eq!(config.shop_name, DEFAULT_SHOP_NAME);
}

/// Test: Icon URL is kept only when non-blank
#[test]
fn test_icon_url_kept_only_when_non_blank() {
    let config =
        RunConfig::normalize(&json!({"iconUrl": "https://cdn.example/logo.png"})).expect("config");
    assert_eq!(config.icon_url.as_deref(), Some("https://cdn.example/logo.png"));

    let config = RunConfig::normalize(&json!({"iconUrl": "  "})).expect("config");
    assert_eq!(config.icon_url, None);
}

/// Test: Normalized bounds are always ordered, whatever the input
#[test]
fn test_normalized_bounds_always_ordered() {
    let inputs = [
        json!({"minSec": 5, "maxSec": 0.05, "priceMin": 90, "priceMax": 10}),
        json!({"minSec": "8", "maxSec": "2", "priceMin": "60", "priceMax": "-1"}),
        json!({}),
    ];

    for raw in inputs {
        let config = RunConfig::normalize(&raw).expect("config");
        assert!(config.min_delay_seconds <= config.max_delay_seconds);
        assert!(config.price_min <= config.price_max);
        assert!(config.min_delay_seconds >= 0.1);
        assert!(config.price_min >= 0.0);
    }
}
