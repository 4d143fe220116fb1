use fixtures::fixtures;
use quickcheck_macros::quickcheck;
use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use ua_classifier::{Classifier, ClassifierConfig, UnifiedResult, VersionInfo};

const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1";

fn config() -> ClassifierConfig {
    ClassifierConfig::from_yaml_file(Path::new("tests/data/classifier.yml"))
        .expect("failed to read classifier config")
}

// Global Classifier instance that is initialized once
static CLASSIFIER_INSTANCE: OnceLock<Arc<Classifier>> = OnceLock::new();

fn get_shared_classifier() -> Arc<Classifier> {
    CLASSIFIER_INSTANCE
        .get_or_init(|| {
            let classifier = Classifier::from_config(&config());
            assert!(classifier.has_general_parser());
            assert!(classifier.has_device_parser());
            assert!(classifier.has_mobile_parser());
            Arc::new(classifier)
        })
        .clone()
}

/// Every key in `expected` must be present in `actual` with an equal value;
/// keys missing from `expected` are not checked.
fn assert_subset(expected: &Value, actual: &Value, at: &str, ua: &str) {
    match (expected, actual) {
        (Value::Mapping(exp), Value::Mapping(act)) => {
            for (key, exp_value) in exp {
                let name = key.as_str().unwrap_or("?");
                let act_value = act
                    .get(key)
                    .unwrap_or_else(|| panic!("missing field {}.{} for UA: {:?}", at, name, ua));
                assert_subset(exp_value, act_value, &format!("{}.{}", at, name), ua);
            }
        }
        _ => assert_eq!(expected, actual, "field {} mismatch for UA: {:?}", at, ua),
    }
}

fn assert_no_blank_strings(value: &Value, at: &str, ua: &str) {
    match value {
        Value::String(s) => assert!(!s.is_empty(), "blank string at {} for UA: {:?}", at, ua),
        Value::Mapping(m) => {
            for (key, v) in m {
                let name = key.as_str().unwrap_or("?");
                assert_no_blank_strings(v, &format!("{}.{}", at, name), ua);
            }
        }
        _ => {}
    }
}

fn assert_invariants(result: &UnifiedResult, ua: &str) {
    assert_ne!(result.client.bot(), result.client.user(), "bot/user flags for UA: {:?}", ua);
    assert_eq!(
        result.device.is_desktop(),
        !result.device.is_mobile() && !result.device.is_tablet(),
        "desktop flag for UA: {:?}",
        ua
    );
    if result.client.bot() {
        assert_eq!(result.ua_rendering_engine, None, "bot with engine for UA: {:?}", ua);
        assert_eq!(result.device.brand, None, "bot with brand for UA: {:?}", ua);
    }
    let value = serde_yaml::to_value(result).unwrap();
    assert_no_blank_strings(&value, "result", ua);
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Fixture {
    user_agent: String,
    result: Value,
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_fixtures(path: &std::path::Path) {
    let classifier = get_shared_classifier();
    let content = std::fs::read_to_string(path).unwrap();
    let fixtures: Vec<Fixture> = serde_yaml::from_str(&content).unwrap();
    assert!(!fixtures.is_empty(), "no cases in {:?}", path);

    for f in &fixtures {
        let result = classifier.classify(&f.user_agent);
        let actual = serde_yaml::to_value(&result).unwrap();
        assert_subset(&f.result, &actual, "result", &f.user_agent);
        assert_invariants(&result, &f.user_agent);
    }
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_batch_matches_single(path: &std::path::Path) {
    let classifier = get_shared_classifier();
    let content = std::fs::read_to_string(path).unwrap();
    let fixtures: Vec<Fixture> = serde_yaml::from_str(&content).unwrap();
    let uas: Vec<&str> = fixtures.iter().map(|f| f.user_agent.as_str()).collect();

    let batch = classifier.classify_batch(&uas);
    assert_eq!(batch.len(), uas.len());
    for (ua, result) in uas.iter().zip(&batch) {
        assert_eq!(result, &classifier.classify(ua), "batch result for UA: {:?}", ua);
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn googlebot_is_a_search_bot() {
    let r = get_shared_classifier()
        .classify("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)");
    assert!(r.client.bot());
    assert!(!r.client.user());
    assert_eq!(r.ua_type.as_deref(), Some("Search bot"));
    assert_eq!(r.bot_info.name.as_deref(), Some("Googlebot"));
    assert_eq!(r.bot_info.vendor.name.as_deref(), Some("Google Inc."));
}

#[test]
fn empty_input_is_absent_everywhere() {
    let r = get_shared_classifier().classify("");
    assert_eq!(r, UnifiedResult::default());
    assert!(r.client.user());
    assert!(r.device.is_desktop());
}

#[test]
fn desktop_chrome_engine_version() {
    let r = get_shared_classifier().classify(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    );
    assert_eq!(r.ua_rendering_engine.as_deref(), Some("Blink"));
    assert_eq!(
        r.ua_rendering_engine_version,
        VersionInfo {
            major: Some(120),
            minor: Some(0),
            patch: Some(0),
            summary: Some("Blink 120.0.0.0".into()),
        }
    );
    assert!(r.device.is_desktop());
}

#[test]
fn two_part_engine_version() {
    let v = VersionInfo::parse("14.2", "WebKit 14.2");
    assert_eq!((v.major, v.minor, v.patch), (Some(14), Some(2), None));
    assert_eq!(v.summary.as_deref(), Some("WebKit 14.2"));
}

#[quickcheck]
fn any_input_keeps_the_flag_invariants(ua: String) -> bool {
    let result = get_shared_classifier().classify(&ua);
    assert_invariants(&result, &ua);
    result.client.bot() != result.client.user()
        && result.device.is_desktop() == (!result.device.is_mobile() && !result.device.is_tablet())
}

// ---------------------------------------------------------------------------
// Degraded configurations
// ---------------------------------------------------------------------------

#[test]
fn missing_mobile_rules_only_loses_mobile_flags() {
    let config = ClassifierConfig {
        mobile_rules: Some("tests/data/mobile-detect/no-such-rules.yml".into()),
        ..config()
    };
    let classifier = Classifier::from_config(&config);
    assert!(!classifier.has_mobile_parser());

    let r = classifier.classify(IPHONE);
    assert!(!r.device.is_mobile());
    assert!(r.device.is_desktop());
    assert_eq!(r.ua_family.as_deref(), Some("Mobile Safari"));
    assert_eq!(r.device.brand.as_deref(), Some("Apple"));
    assert_eq!(r.device.model.as_deref(), Some("iPhone"));
}

#[test]
fn broken_device_database_only_loses_its_fields() {
    let config = ClassifierConfig {
        device_detector_dir: Some("tests/data/no-such-device-detector".into()),
        ..config()
    };
    let classifier = Classifier::from_config(&config);
    assert!(!classifier.has_device_parser());

    let r = classifier.classify(IPHONE);
    assert_eq!(r.ua_type, None);
    assert_eq!(r.os_meta.name, None);
    assert_eq!(r.device.brand, None);
    assert!(r.client.user());
    assert_eq!(r.os_family.as_deref(), Some("iOS"));
    assert!(r.device.is_mobile());
}

#[test]
fn no_databases_still_classifies() {
    let classifier = Classifier::from_config(&ClassifierConfig::default());
    let r = classifier.classify(IPHONE);
    assert_eq!(r, UnifiedResult::default());
    assert_invariants(&r, IPHONE);
}

#[test]
fn data_dir_layout_loads() {
    let classifier = Classifier::from_config(&ClassifierConfig::from_data_dir("tests/data"));
    assert!(classifier.has_general_parser());
    assert!(classifier.has_device_parser());
    assert!(classifier.has_mobile_parser());
    assert_eq!(classifier.classify(IPHONE), get_shared_classifier().classify(IPHONE));
}
