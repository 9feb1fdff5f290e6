use balkan_moto_core::format_eur;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Format a price in euro cents for the active locale.
///
/// Whole-euro prices drop the decimals. Outside the browser the fixed
/// `89€` / `12.50€` form is used.
#[must_use]
pub fn fmt_price(cents: i64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let Ok(whole) = i32::try_from(cents) else {
            return format_eur(cents);
        };
        let amount = f64::from(whole) / 100.0;
        with_bundle(|bundle| {
            let locales = js_sys::Array::new();
            locales.push(&JsValue::from_str(&bundle.lang));
            let opts = Object::new();
            let set = |k: &str, v: JsValue| {
                let _ = Reflect::set(&opts, &JsValue::from_str(k), &v);
            };
            set("style", JsValue::from_str("currency"));
            set("currency", JsValue::from_str("EUR"));
            if cents % 100 == 0 {
                set("minimumFractionDigits", JsValue::from_f64(0.0));
            }
            let nf = Intl::NumberFormat::new(&locales, &opts);
            nf.format()
                .call1(&nf, &JsValue::from_f64(amount))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| format_eur(cents))
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        format_eur(cents)
    }
}

/// Render a pluralised count message such as `shop.count`.
#[must_use]
pub fn fmt_count(key: &str, count: usize) -> String {
    let count = count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    crate::i18n::tr(key, Some(&args))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn price_formatter_uses_host_fallback() {
        assert_eq!(fmt_price(8900), "89€");
        assert_eq!(fmt_price(1250), "12.50€");
    }

    #[test]
    fn count_formatter_pluralises() {
        crate::i18n::set_lang("en");
        assert_eq!(fmt_count("shop.count", 1), "Showing 1 product");
        assert_eq!(fmt_count("shop.count", 21), "Showing 21 products");
    }
}
