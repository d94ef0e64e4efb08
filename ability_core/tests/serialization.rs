//! Round trips through the persisted form: a single raw integer

mod common;

use ability_core::{AbilityScore, FormatSpec, RenderConfig};
use common::{clone_via_json, clone_via_toml};
use serde::Deserialize;

#[derive(Deserialize)]
struct Row {
    strength: AbilityScore,
}

#[test]
fn test_json_round_trip() {
    let score = AbilityScore::new(13);
    let cloned = clone_via_json(&score);
    assert!(score == cloned);
    assert_eq!(cloned.modifier(), 1);
}

#[test]
fn test_toml_round_trip() {
    for raw in AbilityScore::MIN_VALUE..=AbilityScore::MAX_VALUE {
        let score = AbilityScore::new(raw);
        assert_eq!(clone_via_toml(score), score);
    }
}

#[test]
fn test_persisted_form_is_the_raw_value() {
    assert_eq!(serde_json::to_string(&AbilityScore::new(13)).unwrap(), "13");
    assert_eq!(serde_json::to_string(&AbilityScore::new(0)).unwrap(), "1");
}

#[test]
fn test_corrupted_values_are_clamped_on_load() {
    let high: AbilityScore = serde_json::from_str("42").unwrap();
    assert_eq!(high.value(), 30);
    assert_eq!(high.modifier(), 10);

    let low: AbilityScore = serde_json::from_str("-7").unwrap();
    assert_eq!(low.value(), 1);

    let row: Row = toml::from_str("strength = 0").unwrap();
    assert_eq!(row.strength.value(), 1);
}

#[test]
fn test_non_integer_is_rejected() {
    assert!(serde_json::from_str::<AbilityScore>("\"ten\"").is_err());
    assert!(serde_json::from_str::<AbilityScore>("10.5").is_err());
}

#[test]
fn test_scores_inside_structures() {
    let scores = vec![AbilityScore::new(8), AbilityScore::new(15), AbilityScore::new(30)];
    let json = serde_json::to_string(&scores).unwrap();
    assert_eq!(json, "[8,15,30]");
    let back: Vec<AbilityScore> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scores);
}

#[test]
fn test_render_config_round_trip() {
    let config = RenderConfig {
        default_format: FormatSpec::Center,
        ..RenderConfig::default()
    };
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("default_format = \"C\""));
    assert_eq!(RenderConfig::parse(&text).unwrap(), config);
}
