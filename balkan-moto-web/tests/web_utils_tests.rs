use balkan_moto_web::i18n;
use balkan_moto_web::map::{marker_style, poll_attempts};
use balkan_moto_web::paths::sized_image_url;
use balkan_moto_web::router::Route;
use balkan_moto_core::LocationKind;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

fn leaf_keys(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            // Plural objects count as one key.
            if map.contains_key("other") && map.values().all(Value::is_string) {
                out.insert(prefix.to_string());
                return;
            }
            for (k, v) in map {
                let next = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                leaf_keys(v, &next, out);
            }
        }
        _ => {
            out.insert(prefix.to_string());
        }
    }
}

fn locale_keys(code: &str) -> BTreeSet<String> {
    let path = format!("i18n/{code}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    let json: Value =
        serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"));
    let mut keys = BTreeSet::new();
    leaf_keys(&json, "", &mut keys);
    keys
}

#[test]
fn every_locale_covers_the_english_keys() {
    let english = locale_keys("en");
    for meta in i18n::locales() {
        let keys = locale_keys(meta.code);
        let missing: Vec<_> = english.difference(&keys).collect();
        assert!(missing.is_empty(), "{} is missing {missing:?}", meta.code);
    }
}

#[test]
fn navigation_labels_resolve() {
    i18n::set_lang("en");
    for route in Route::NAV {
        let key = route.label_key();
        assert_ne!(i18n::t(key), key, "untranslated nav key {key}");
    }
}

#[test]
fn language_switch_changes_output() {
    i18n::set_lang("sr");
    assert_eq!(i18n::current_lang(), "sr");
    assert_eq!(i18n::t("nav.shop"), "Prodavnica");
    let mut args = BTreeMap::new();
    args.insert("count", "3");
    assert_eq!(i18n::tr("locations.count", Some(&args)), "3 lokacije");
    i18n::set_lang("en");
    assert_eq!(i18n::t("nav.shop"), "Shop");
}

#[test]
fn image_urls_are_resized_for_thumbnails() {
    let url = "https://images.unsplash.com/photo-1?auto=format&fit=crop&w=800&q=80";
    assert!(sized_image_url(url, 240).ends_with("&w=240"));
    assert!(!sized_image_url(url, 240).contains("w=800"));
}

#[test]
fn marker_styles_and_polling_are_consistent() {
    assert!(marker_style(LocationKind::Shop, true).radius > marker_style(LocationKind::Shop, false).radius);
    assert_eq!(poll_attempts(8000, 100), 80);
}
