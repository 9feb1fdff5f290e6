use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "sr",
        name: "Srpski",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("sr", include_str!("../../i18n/sr.json")),
];

/// Supported locales with their native names, English first.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

/// Parsed translation table for `lang`; unknown codes yield `None`.
pub fn load_translations(lang: &str) -> Option<Value> {
    let data = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;
    match serde_json::from_str(data) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("locale {lang} failed to parse: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_locale_parses() {
        for meta in locales() {
            let value = load_translations(meta.code).expect("locale table parses");
            assert!(value.is_object(), "{} should be an object", meta.code);
        }
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(!is_supported("xx"));
        assert!(load_translations("xx").is_none());
    }
}
