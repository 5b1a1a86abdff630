use crate::i18n::bundle::with_translations;
use serde_json::Value;
use std::collections::BTreeMap;

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

fn interpolate(template: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    let Some(args) = args else {
        return template.to_string();
    };
    args.iter().fold(template.to_string(), |text, (k, v)| {
        text.replace(&format!("{{{{{k}}}}}"), v)
            .replace(&format!("{{{k}}}"), v)
    })
}

/// Translate a key to the current language
///
/// Missing keys render as the key itself so gaps are visible in the UI.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    with_translations(|root| {
        lookup(root, key)
            .and_then(Value::as_str)
            .map(|template| interpolate(template, args))
    })
    .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_resolve() {
        assert_eq!(t("card.view"), "View Strategy");
        assert_eq!(t("missing.key"), "missing.key");
        assert_eq!(t("modal"), "modal");
    }

    #[test]
    fn interpolation_handles_braced_forms() {
        let mut args = BTreeMap::new();
        args.insert("name", "Tester");
        assert_eq!(
            interpolate("Hello, {name}! {{name}}!", Some(&args)),
            "Hello, Tester! Tester!"
        );
    }

    #[test]
    fn tr_fills_counts() {
        let mut args = BTreeMap::new();
        args.insert("count", "3");
        assert_eq!(tr("favorites.show", Some(&args)), "Show favorites (3)");
    }
}
