use std::hash::Hasher;

use balkan_moto_core::{Catalog, Directory, LocationKind, SiteConfig};
use serde_json::{Map, Value};
use twox_hash::XxHash64;

const CATALOG_SNAPSHOT_HASH: u64 = 0x7e68_25c0_4e51_2cde;

#[test]
fn catalog_snapshot_stable() {
    let catalog = Catalog::load_from_static().unwrap();
    let value = canonicalize_value(serde_json::to_value(&catalog).unwrap());
    let canonical = serde_json::to_string_pretty(&value).unwrap();
    let digest = snapshot_hash(canonical.as_bytes());
    assert_eq!(
        digest, CATALOG_SNAPSHOT_HASH,
        "catalog snapshot changed\n{canonical}"
    );
}

#[test]
fn catalog_serialization_round_trips() {
    let catalog = Catalog::load_from_static().unwrap();
    let saved = serde_json::to_string(&catalog).unwrap();
    let restored = Catalog::from_json(&saved).unwrap();
    assert_eq!(restored, catalog);
}

#[test]
fn every_location_uses_the_canonical_shape() {
    let directory = Directory::load_from_static().unwrap();
    for location in &directory.locations {
        let value = serde_json::to_value(location).unwrap();
        let images = value.get("images").and_then(Value::as_array);
        assert!(
            images.is_some_and(|list| !list.is_empty()),
            "{} should carry an image list",
            location.id
        );
        assert!(value["coordinates"]["lat"].is_f64());
        assert!(matches!(
            location.kind,
            LocationKind::Shop | LocationKind::Service
        ));
    }
}

#[test]
fn site_config_serialization_round_trips() {
    let config = SiteConfig::load_from_static();
    let saved = serde_json::to_string(&config).unwrap();
    assert_eq!(SiteConfig::from_json(&saved).unwrap(), config);
}

fn canonicalize_value(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize_value).collect()),
        Value::Object(map) => {
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut result = Map::with_capacity(entries.len());
            for (key, value) in entries {
                result.insert(key, canonicalize_value(value));
            }
            Value::Object(result)
        }
        other => other,
    }
}

fn snapshot_hash(bytes: &[u8]) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(bytes);
    hasher.finish()
}
