//! Tests for the configuration store

use super::*;
use crate::settings::{CommitFormat, Language, LanguageUpdate};
use crate::Setting;
use serde_json::json;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn store_in(temp_dir: &TempDir) -> ConfigStore {
    ConfigStore::new(temp_dir.path().join("magic-slash").join(CONFIG_FILENAME))
}

fn name(value: &str) -> RepositoryName {
    RepositoryName::try_new(value).expect("test names should be valid")
}

fn store_with_demo(temp_dir: &TempDir) -> ConfigStore {
    let store = store_in(temp_dir);
    store
        .add_repository(&name("demo"), "/code/demo", vec!["demo".to_string()])
        .unwrap();
    store
}

// ================================================================================================
// Reading and writing
// ================================================================================================

fn write_raw(store: &ConfigStore, value: &serde_json::Value) {
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), value.to_string()).unwrap();
}

fn read_raw(store: &ConfigStore) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap()
}

#[test]
fn test_default_config_path_points_into_dot_config() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with(".config/magic-slash/config.json"));
    }
}

#[test]
fn test_read_missing_file_returns_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_in(&temp_dir);

    let config = store.read_config();

    assert_eq!(config, Config::default());
    assert_eq!(config.version, "unknown");
}

#[test]
fn test_read_malformed_file_returns_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(CONFIG_FILENAME);
    fs::write(&path, "{ not json").unwrap();

    let config = ConfigStore::new(&path).read_config();

    assert_eq!(config, Config::default());
}

#[test]
fn test_write_creates_parent_directory_with_pretty_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_in(&temp_dir);

    store.write_config(&Config::default()).unwrap();

    let written = fs::read_to_string(store.path()).unwrap();
    assert!(written.contains("\n  \"version\""));
}

#[test]
fn test_read_write_round_trip_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_in(&temp_dir);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(
        store.path(),
        r#"{
  "version": "1.4.0",
  "repositories": {
    "zeta": { "path": "/code/zeta", "keywords": ["z"], "commit": { "format": "gitmoji" } },
    "alpha": { "path": "/code/alpha", "keywords": ["a"], "color": "blue" }
  },
  "languages": { "commit": "fr" },
  "installedAt": "2024-01-01"
}"#,
    )
    .unwrap();

    let first = store.read_config();
    store.write_config(&first).unwrap();
    let second = store.read_config();

    assert_eq!(first, second);
    let names: Vec<_> = second.repositories.keys().cloned().collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
    assert_eq!(second.extra["installedAt"], "2024-01-01");
    assert_eq!(second.repositories["alpha"].extra["color"], "blue");
}

#[test]
fn test_round_trip_keeps_unrecognized_section_values() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_in(&temp_dir);
    let raw = json!({
        "version": "1.4.0",
        "repositories": {
            "api": {
                "path": "/code/api",
                "keywords": ["api"],
                "commit": { "format": "gitmoji", "emojiSet": "full" },
                "languages": { "commit": "de" }
            }
        },
        "languages": { "commit": "fr", "review": "en" }
    });
    write_raw(&store, &raw);

    store.write_config(&store.read_config()).unwrap();

    assert_eq!(read_raw(&store), raw);
}

#[test]
fn test_mutation_keeps_repository_with_unexpected_field_type() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_in(&temp_dir);
    write_raw(
        &store,
        &json!({ "version": 3, "repositories": { "keep": { "path": "/k", "keywords": "k" } } }),
    );

    store
        .add_repository(&name("new"), "/code/new", Vec::new())
        .unwrap();

    let written = read_raw(&store);
    let names: Vec<_> = written["repositories"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(names, vec!["keep", "new"]);
    assert_eq!(written["repositories"]["keep"]["keywords"], json!("k"));
    assert_eq!(written["version"], json!(3));
}

#[test]
fn test_mutation_refuses_unreadable_repository_table() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_in(&temp_dir);
    let raw = json!({ "repositories": { "keep": "/k" } });
    write_raw(&store, &raw);

    let err = store
        .add_repository(&name("new"), "/code/new", Vec::new())
        .unwrap_err();

    assert!(matches!(err, ConfigError::UnreadableRepositories { .. }));
    assert_eq!(read_raw(&store), raw);
}

#[test]
fn test_empty_sections_are_pruned_by_unrelated_mutation() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_in(&temp_dir);
    write_raw(
        &store,
        &json!({
            "repositories": {
                "api": { "path": "/code/api", "keywords": ["api"], "languages": {}, "commit": {} }
            }
        }),
    );

    store
        .update_languages(&GlobalLanguagesUpdate {
            commit: Some(Language::Fr),
            ..GlobalLanguagesUpdate::default()
        })
        .unwrap();

    assert_eq!(
        read_raw(&store)["repositories"]["api"],
        json!({ "path": "/code/api", "keywords": ["api"] })
    );
}

// ================================================================================================
// Repository mutations
// ================================================================================================

#[test]
fn test_add_repository_persists_and_returns_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_in(&temp_dir);

    let config = store
        .add_repository(&name("api"), "/code/api", Vec::new())
        .unwrap();

    assert_eq!(config.repositories["api"].keywords, vec!["api"]);
    assert_eq!(store.read_config(), config);
}

#[test]
fn test_add_repository_rejects_duplicate_name() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_with_demo(&temp_dir);

    let err = store
        .add_repository(&name("demo"), "/elsewhere", Vec::new())
        .unwrap_err();

    assert!(matches!(err, ConfigError::AlreadyExists { .. }));
    assert_eq!(store.read_config().repositories["demo"].path, "/code/demo");
}

#[test]
fn test_update_repository_changes_only_given_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_with_demo(&temp_dir);

    let config = store
        .update_repository(
            "demo",
            RepositoryUpdate {
                path: Some("/code/moved".to_string()),
                ..RepositoryUpdate::default()
            },
        )
        .unwrap();

    let repository = &config.repositories["demo"];
    assert_eq!(repository.path, "/code/moved");
    assert_eq!(repository.keywords, vec!["demo"]);
}

#[test]
fn test_update_repository_replaces_languages() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_with_demo(&temp_dir);

    let config = store
        .update_repository(
            "demo",
            RepositoryUpdate {
                languages: Some(LanguageUpdate {
                    commit: Some(Setting::Set(Language::Fr)),
                    ..LanguageUpdate::default()
                }),
                ..RepositoryUpdate::default()
            },
        )
        .unwrap();

    let languages = config.repositories["demo"].languages.as_ref().unwrap();
    assert_eq!(languages.commit, Setting::Set(Language::Fr));
}

#[test]
fn test_mutation_of_unknown_repository_does_not_write() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_in(&temp_dir);

    let err = store
        .update_repository("ghost", RepositoryUpdate::default())
        .unwrap_err();

    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert!(!store.path().exists());
}

#[test]
fn test_delete_repository_keeps_remaining_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_in(&temp_dir);
    for repo in ["one", "two", "three"] {
        store
            .add_repository(&name(repo), "/code", Vec::new())
            .unwrap();
    }

    let config = store.delete_repository("two").unwrap();

    let names: Vec<_> = config.repositories.keys().cloned().collect();
    assert_eq!(names, vec!["one", "three"]);
}

#[test]
fn test_delete_unknown_repository_is_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_with_demo(&temp_dir);

    let err = store.delete_repository("ghost").unwrap_err();

    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert!(store.read_config().contains_repository("demo"));
}

// ================================================================================================
// Settings mutations
// ================================================================================================

#[test]
fn test_update_commit_settings_then_reset_prunes_section() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_with_demo(&temp_dir);

    let set = CommitSettingsUpdate {
        format: Some(Setting::Set(CommitFormat::Gitmoji)),
        ..CommitSettingsUpdate::default()
    };
    let config = store.update_repository_commit_settings("demo", &set).unwrap();
    assert_eq!(
        config.repositories["demo"].commit.as_ref().unwrap().format,
        Setting::Set(CommitFormat::Gitmoji)
    );

    let reset = CommitSettingsUpdate {
        format: Some(Setting::Inherit),
        ..CommitSettingsUpdate::default()
    };
    let config = store
        .update_repository_commit_settings("demo", &reset)
        .unwrap();
    assert!(config.repositories["demo"].commit.is_none());

    let written = fs::read_to_string(store.path()).unwrap();
    assert!(!written.contains("\"commit\""));
}

#[test]
fn test_update_repository_languages_is_partial() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_with_demo(&temp_dir);

    store
        .update_repository_languages(
            "demo",
            &LanguageUpdate {
                commit: Some(Setting::Set(Language::Fr)),
                ..LanguageUpdate::default()
            },
        )
        .unwrap();
    let config = store
        .update_repository_languages(
            "demo",
            &LanguageUpdate {
                discussion: Some(Setting::Set(Language::En)),
                ..LanguageUpdate::default()
            },
        )
        .unwrap();

    let languages = config.repositories["demo"].languages.as_ref().unwrap();
    assert_eq!(languages.commit, Setting::Set(Language::Fr));
    assert_eq!(languages.discussion, Setting::Set(Language::En));
}

#[test]
fn test_update_pull_request_and_issues_settings() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_with_demo(&temp_dir);

    store
        .update_repository_pull_request_settings(
            "demo",
            &PullRequestSettingsUpdate {
                auto_link_tickets: Some(Setting::Set(false)),
            },
        )
        .unwrap();
    let config = store
        .update_repository_issues_settings(
            "demo",
            &IssuesSettingsUpdate {
                comment_on_pr: Some(Setting::Set(false)),
            },
        )
        .unwrap();

    let repository = &config.repositories["demo"];
    assert!(!repository.pull_request.as_ref().unwrap().auto_link_tickets());
    assert!(!repository.issues.as_ref().unwrap().comment_on_pr());
    assert_eq!(repository.custom_setting_count(), 2);
}

#[test]
fn test_update_global_languages_is_partial() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = store_in(&temp_dir);

    store
        .update_languages(&GlobalLanguagesUpdate {
            commit: Some(Language::Fr),
            ..GlobalLanguagesUpdate::default()
        })
        .unwrap();
    let config = store
        .update_languages(&GlobalLanguagesUpdate {
            pull_request: Some(Language::En),
            ..GlobalLanguagesUpdate::default()
        })
        .unwrap();

    assert_eq!(config.languages.commit, Some(Language::Fr));
    assert_eq!(config.languages.pull_request, Some(Language::En));
    assert_eq!(config.languages.jira_comment, None);
}

// ================================================================================================
// Concurrency
// ================================================================================================

/// Concurrent adds through one store must not lose each other's writes.
#[test]
fn test_concurrent_adds_are_all_persisted() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = Arc::new(store_in(&temp_dir));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .add_repository(&name(&format!("repo-{i}")), "/code", Vec::new())
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.read_config().repositories.len(), 8);
}
