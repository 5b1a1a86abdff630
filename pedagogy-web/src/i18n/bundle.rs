use serde_json::Value;

const EN: &str = include_str!("../../i18n/en.json");

fn english_translations() -> Value {
    serde_json::from_str(EN).unwrap_or_else(|err| {
        log::error!("Bundled en.json is invalid: {err}");
        Value::Object(serde_json::Map::new())
    })
}

thread_local! {
    static TRANSLATIONS: Value = english_translations();
}

pub(super) fn with_translations<R>(f: impl FnOnce(&Value) -> R) -> R {
    TRANSLATIONS.with(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_bundle_parses() {
        let translations = english_translations();
        assert!(translations.get("modal").is_some());
        assert!(translations.get("status").is_some());
    }
}
