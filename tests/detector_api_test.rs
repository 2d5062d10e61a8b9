//! Public API tests for detection and recommendation lookup.

use laggard::{Browser, Detector, LaggardSet, Platform, RecommendationTable, PORTABLE_GROUP};
use serde_json::json;

/// One historical user-agent per built-in laggard.
const SAMPLES: &[(&str, &str)] = &[
    (
        "IE9",
        "Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)",
    ),
    (
        "IE8",
        "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; WOW64; Trident/4.0; SLCC2; .NET CLR 2.0.50727)",
    ),
    (
        "IE7",
        "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 5.1; .NET CLR 1.1.4322)",
    ),
    ("IE6", "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1;)"),
    (
        "FF36",
        "Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10.6;en-US; rv:1.9.2.9) Gecko/20100824 Firefox/3.6.9",
    ),
    (
        "CR18",
        "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/535.19 (KHTML, like Gecko) Chrome/18.0.1025.162 Safari/535.19",
    ),
    (
        "CR17",
        "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/535.11 (KHTML, like Gecko) Chrome/17.0.963.66 Safari/535.11",
    ),
    (
        "FF10",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.6; rv:10.0) Gecko/20100101 Firefox/10.0",
    ),
    (
        "FF11",
        "Mozilla/5.0 (Windows NT 6.1; rv:11.0) Gecko/20100101 Firefox/11.0",
    ),
];

const MODERN: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
];

#[test]
fn every_builtin_laggard_has_a_sample() {
    let detector = Detector::builtin();
    let ids: Vec<&str> = detector.laggard_ids().collect();
    let sampled: Vec<&str> = SAMPLES.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, sampled);
}

#[test]
fn historical_user_agents_are_behind() {
    let detector = Detector::builtin();

    for (id, ua) in SAMPLES {
        assert!(detector.is_behind(ua), "{} sample not detected", id);
        assert_eq!(detector.find_laggard(ua), Some(*id));
    }
}

#[test]
fn modern_user_agents_are_current() {
    let detector = Detector::builtin();

    for ua in MODERN {
        assert!(!detector.is_behind(ua), "{} flagged as behind", ua);
    }
}

#[test]
fn classification_is_idempotent() {
    let detector = Detector::builtin();

    for (_, ua) in SAMPLES {
        let first = detector.classify(ua);
        for _ in 0..3 {
            assert_eq!(detector.classify(ua), first);
        }
    }
}

#[test]
fn non_string_input_is_never_behind() {
    let detector = Detector::builtin();

    for value in [json!(0), json!(-1.25), json!(false), json!(null), json!({}), json!([])] {
        assert!(!detector.is_behind_value(&value), "{} classified as behind", value);
    }
    assert!(!detector.is_behind_opt(None));
}

#[test]
fn every_recommendation_key_has_options_on_some_platform() {
    let detector = Detector::builtin();
    let table = detector.recommendations();

    for id in table.laggard_ids() {
        let platforms = table.platforms(id).unwrap();
        assert!(!platforms.is_empty());
        for platform in platforms.keys() {
            let options = detector.options(id, platform.id()).unwrap();
            assert!(!options.is_empty(), "{} on {} is empty", id, platform);
        }
        assert_eq!(detector.options(id, "beos"), None);
    }
}

#[test]
fn portable_group_is_uniform() {
    let detector = Detector::builtin();

    for os in ["xp", "vista", "win7", "osx"] {
        let expected = detector.options(PORTABLE_GROUP[0], os);
        for id in PORTABLE_GROUP {
            assert_eq!(detector.options(id, os), expected);
        }
    }
}

#[test]
fn ie6_on_xp_scenario() {
    let detector = Detector::builtin();

    assert!(detector.is_behind("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1;)"));
    assert_eq!(
        detector.options("IE6", "xp").map(<[Browser]>::to_vec),
        Some(vec![Browser::Chrome, Browser::Ff, Browser::Gcf, Browser::Opera])
    );
    assert_eq!(detector.options("IE6", "win7"), None);
}

#[test]
fn custom_detector_is_isolated_from_builtins() {
    let laggards = LaggardSet::from_sources(&[("SAFARI5", r"Version/5\.\d+(\.\d+)? Safari/")])
        .unwrap();
    let mut table = RecommendationTable::empty();
    table.insert(
        "SAFARI5",
        Platform::Osx,
        vec![Browser::Safari, Browser::Chrome],
    );

    let detector = Detector::new(laggards, table);
    let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_6_8) AppleWebKit/534.59.10 (KHTML, like Gecko) Version/5.1.9 Safari/534.59.10";

    let verdict = detector.classify(ua);
    assert_eq!(verdict.laggard.as_deref(), Some("SAFARI5"));
    assert_eq!(
        verdict.recommendations,
        Some(vec![Browser::Safari, Browser::Chrome])
    );
    assert!(!detector.is_behind(SAMPLES[0].1));
}

#[test]
fn shared_detector_works_across_threads() {
    let handles: Vec<_> = SAMPLES
        .iter()
        .map(|(_, ua)| std::thread::spawn(move || Detector::builtin().is_behind(ua)))
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
