use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

/// CLDR cardinal category for integer counts when `Intl` is unavailable.
fn host_plural_category(lang: &str, count: u64) -> &'static str {
    match lang {
        // Serbian: one / few / other, keyed on the last two digits.
        "sr" => {
            let (units, tens) = (count % 10, count % 100);
            if units == 1 && tens != 11 {
                "one"
            } else if (2..=4).contains(&units) && !(12..=14).contains(&tens) {
                "few"
            } else {
                "other"
            }
        }
        _ => {
            if count == 1 {
                "one"
            } else {
                "other"
            }
        }
    }
}

fn plural_category(lang: &str, count: u64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::new();
        locales.push(&wasm_bindgen::JsValue::from_str(lang));
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        #[allow(clippy::cast_precision_loss)]
        let selected = rules.select(count as f64).as_string();
        selected.unwrap_or_else(|| host_plural_category(lang, count).to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        host_plural_category(lang, count).to_string()
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(forms) => {
            let count = args
                .and_then(|m| m.get("count"))
                .and_then(|c| c.parse::<u64>().ok());
            count
                .and_then(|n| forms.get(&plural_category(lang, n)))
                .or_else(|| forms.get("other"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key)
                    .and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate a key to the current language, falling back to English and then
/// to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key and substitute `{name}` placeholders from `args`.
///
/// A `count` argument selects the plural form when the entry is an object of
/// CLDR categories (`one`, `few`, `other`).
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serbian_plural_categories() {
        assert_eq!(host_plural_category("sr", 1), "one");
        assert_eq!(host_plural_category("sr", 21), "one");
        assert_eq!(host_plural_category("sr", 11), "other");
        assert_eq!(host_plural_category("sr", 3), "few");
        assert_eq!(host_plural_category("sr", 13), "other");
        assert_eq!(host_plural_category("sr", 5), "other");
        assert_eq!(host_plural_category("en", 1), "one");
        assert_eq!(host_plural_category("en", 0), "other");
    }

    #[test]
    fn plural_object_picks_form_by_count() {
        let value = serde_json::json!({"one": "{count} product", "other": "{count} products"});
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "1 product");
        args.insert("count", "4");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "4 products");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        assert_eq!(t("no.such.key"), "no.such.key");
    }
}
