use std::collections::{BTreeMap, BTreeSet};

/// Translation consistency test.
///
/// Every non-fallback locale must define exactly the fallback's keys, once
/// each, and use the same `{ $variable }` placeables per message.
///
/// When adding a locale, register its file in `LOCALES` below.
const EN_US: &str = include_str!("../i18n/en-US/levelscope-ui.ftl");
const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/levelscope-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/levelscope-ui.ftl")),
];

#[test]
fn all_locales_match_fallback_keys() {
    let fallback = messages(EN_US, "en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let local = messages(src, locale);
        let fallback_keys: BTreeSet<_> = fallback.keys().collect();
        let local_keys: BTreeSet<_> = local.keys().collect();

        let missing: Vec<_> = fallback_keys.difference(&local_keys).collect();
        let extra: Vec<_> = local_keys.difference(&fallback_keys).collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {missing:?}"));
        }
        if !extra.is_empty() {
            failures.push(format!("{locale} defines unknown keys: {extra:?}"));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n{}",
        failures.join("\n")
    );
}

#[test]
fn placeables_match_fallback() {
    let fallback = messages(EN_US, "en-US");
    for (locale, src) in LOCALES {
        for (key, value) in messages(src, locale) {
            let Some(expected) = fallback.get(&key) else {
                continue;
            };
            assert_eq!(
                variables(&value),
                variables(expected),
                "{locale}: `{key}` uses different variables than en-US"
            );
        }
    }
}

/// Message key -> single-line value. Panics on duplicate definitions.
fn messages(src: &str, locale: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for line in src.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('.') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) || key.starts_with('-') {
            continue;
        }
        if out.insert(key.to_string(), value.trim().to_string()).is_some() {
            panic!("Duplicate key `{key}` in {locale} (line: \"{line}\")");
        }
    }
    out
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|tail| {
            tail.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect()
        })
        .collect()
}
