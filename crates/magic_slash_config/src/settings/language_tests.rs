//! Tests for language settings

use super::*;
use serde_json::json;

#[test]
fn test_language_codes_round_trip() {
    for language in [Language::En, Language::Fr] {
        assert_eq!(Language::from_code(language.code()), Some(language));
    }
}

#[test]
fn test_default_language_is_english() {
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn test_global_update_ignores_default_null_and_unknown() {
    let mut languages = GlobalLanguages {
        commit: Some(Language::Fr),
        ..GlobalLanguages::default()
    };

    let update: GlobalLanguagesUpdate = serde_json::from_value(json!({
        "commit": "default",
        "pullRequest": null,
        "jiraComment": "de",
        "discussion": "fr",
        "unknownKey": "en"
    }))
    .unwrap();
    update.apply_to(&mut languages);

    assert_eq!(languages.commit, Some(Language::Fr));
    assert_eq!(languages.pull_request, None);
    assert_eq!(languages.jira_comment, None);
    assert_eq!(languages.discussion, Some(Language::Fr));
}

#[test]
fn test_repository_update_sets_and_clears() {
    let mut overrides = LanguageOverrides {
        commit: Setting::Set(Language::Fr),
        ..LanguageOverrides::default()
    };

    let update: LanguageUpdate = serde_json::from_value(json!({
        "commit": null,
        "pullRequest": "fr",
        "jiraComment": "klingon"
    }))
    .unwrap();
    update.apply_to(&mut overrides);

    assert!(overrides.commit.is_inherit());
    assert_eq!(overrides.pull_request, Setting::Set(Language::Fr));
    assert!(overrides.jira_comment.is_inherit());
    assert_eq!(overrides.override_count(), 1);
}

#[test]
fn test_overrides_serialize_without_inherited_keys() {
    let overrides = LanguageOverrides {
        discussion: Setting::Set(Language::Fr),
        ..LanguageOverrides::default()
    };

    let value = serde_json::to_value(&overrides).unwrap();
    assert_eq!(value, json!({ "discussion": "fr" }));
}

#[test]
fn test_resolve_falls_back_to_global_then_english() {
    let global = GlobalLanguages {
        commit: Some(Language::Fr),
        pull_request: Some(Language::Fr),
        ..GlobalLanguages::default()
    };
    let overrides = LanguageOverrides {
        pull_request: Setting::Set(Language::En),
        ..LanguageOverrides::default()
    };

    let resolved = overrides.resolve(&global);

    assert_eq!(resolved.commit, Language::Fr);
    assert_eq!(resolved.pull_request, Language::En);
    assert_eq!(resolved.jira_comment, Language::En);
    assert_eq!(resolved.discussion, Language::En);
}

#[test]
fn test_stored_unknown_codes_and_keys_are_written_back() {
    let raw = json!({ "commit": "fr", "review": "en", "discussion": "de" });

    let languages: GlobalLanguages = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(languages.commit, Some(Language::Fr));
    assert_eq!(languages.discussion, None);
    assert_eq!(serde_json::to_value(&languages).unwrap(), raw);
}

#[test]
fn test_global_update_replaces_unknown_stored_code() {
    let mut languages: GlobalLanguages =
        serde_json::from_value(json!({ "discussion": "de" })).unwrap();

    let update: GlobalLanguagesUpdate =
        serde_json::from_value(json!({ "discussion": "fr" })).unwrap();
    update.apply_to(&mut languages);

    assert_eq!(
        serde_json::to_value(&languages).unwrap(),
        json!({ "discussion": "fr" })
    );
}

#[test]
fn test_stored_override_sentinels_are_written_back() {
    let raw = json!({ "commit": "de", "pullRequest": null, "discussion": "fr" });

    let overrides: LanguageOverrides = serde_json::from_value(raw.clone()).unwrap();
    assert!(overrides.commit.is_inherit());
    assert_eq!(overrides.override_count(), 1);
    assert_eq!(serde_json::to_value(&overrides).unwrap(), raw);
}

#[test]
fn test_override_reset_drops_unknown_stored_code() {
    let mut overrides: LanguageOverrides =
        serde_json::from_value(json!({ "commit": "de" })).unwrap();

    let update: LanguageUpdate = serde_json::from_value(json!({ "commit": "default" })).unwrap();
    update.apply_to(&mut overrides);

    assert!(overrides.is_empty());
}

#[test]
fn test_into_overrides_keeps_only_set_values() {
    let update: LanguageUpdate =
        serde_json::from_value(json!({ "commit": "fr", "discussion": null })).unwrap();

    let overrides = update.into_overrides();

    assert_eq!(overrides.commit, Setting::Set(Language::Fr));
    assert_eq!(overrides.override_count(), 1);
    assert!(overrides.extra.is_empty());
}
