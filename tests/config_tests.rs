use event_timeline::TimelineEngineConfig;
use event_timeline::api::DEFAULT_STORAGE_KEY;
use event_timeline::core::RangeSelector;
use event_timeline::interaction::{ControlAction, ControlState, ViewMode};

#[test]
fn default_config_is_valid() {
    let config = TimelineEngineConfig::default();
    assert_eq!(config.default_range, RangeSelector::ThreeDays);
    assert_eq!(config.default_view, ViewMode::Timeline);
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    assert!(config.validate().is_ok());
}

#[test]
fn config_json_round_trip_uses_camel_case() {
    let config = TimelineEngineConfig::default()
        .with_default_range(RangeSelector::TwoWeeks)
        .with_default_view(ViewMode::List)
        .with_storage_key("ops-timeline")
        .with_label_cache_capacity(32);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"defaultRange\": \"2weeks\""));
    assert!(json.contains("\"storageKey\": \"ops-timeline\""));
    assert!(json.contains("\"defaultView\": \"list\""));

    let parsed = TimelineEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed = TimelineEngineConfig::from_json_str(r#"{"defaultRange": "1day"}"#).expect("parse");
    assert_eq!(parsed.default_range, RangeSelector::OneDay);
    assert_eq!(parsed.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(parsed.label_cache_capacity, 256);
}

#[test]
fn invalid_configs_are_rejected() {
    for key in ["", "   ", "../escape", "nested/key", ".hidden"] {
        let config = TimelineEngineConfig::default().with_storage_key(key);
        assert!(config.validate().is_err(), "key {key:?} should be rejected");
    }

    assert!(
        TimelineEngineConfig::default()
            .with_label_cache_capacity(0)
            .validate()
            .is_err()
    );
    assert!(TimelineEngineConfig::from_json_str(r#"{"storageKey": ""}"#).is_err());
    assert!(TimelineEngineConfig::from_json_str(r#"{"defaultRange": "6hours"}"#).is_err());
    assert!(TimelineEngineConfig::from_json_str("[]").is_err());
}

#[test]
fn control_actions_deserialize_from_tagged_json() {
    let action: ControlAction =
        serde_json::from_str(r#"{"type": "set_range", "range": "1week"}"#).expect("action");
    assert_eq!(
        action,
        ControlAction::SetRange {
            range: RangeSelector::OneWeek
        }
    );

    let mut state = ControlState::default();
    assert!(state.apply(action));
    assert_eq!(state.range, RangeSelector::OneWeek);
    assert!(!state.apply(action));

    let navigate: ControlAction =
        serde_json::from_str(r#"{"type": "navigate", "direction": "prev"}"#).expect("action");
    assert!(!state.apply(navigate));
}
