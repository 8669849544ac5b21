//! Tests for request models

use super::*;
use magic_slash_config::{Language, Setting};

#[test]
fn test_add_repository_request_with_keyword_list() {
    let json = r#"{
        "name": "api",
        "path": "~/code/api",
        "keywords": ["api", "backend"]
    }"#;

    let req: AddRepositoryRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.name.as_deref(), Some("api"));
    assert_eq!(req.path.as_deref(), Some("~/code/api"));
    assert_eq!(
        req.keywords.unwrap().into_keywords(),
        vec!["api".to_string(), "backend".to_string()]
    );
}

#[test]
fn test_add_repository_request_with_keyword_text() {
    let json = r#"{ "name": "api", "path": "/code/api", "keywords": " api, ,backend " }"#;

    let req: AddRepositoryRequest = serde_json::from_str(json).unwrap();
    assert_eq!(
        req.keywords.unwrap().into_keywords(),
        vec!["api".to_string(), "backend".to_string()]
    );
}

#[test]
fn test_add_repository_request_missing_fields_are_none() {
    let req: AddRepositoryRequest = serde_json::from_str("{}").unwrap();
    assert!(req.name.is_none());
    assert!(req.path.is_none());
    assert!(req.keywords.is_none());
}

#[test]
fn test_keyword_list_is_taken_verbatim() {
    let keywords: KeywordsInput = serde_json::from_str(r#"[" spaced "]"#).unwrap();
    assert_eq!(keywords.into_keywords(), vec![" spaced ".to_string()]);
}

#[test]
fn test_update_repository_request_with_languages() {
    let json = r#"{ "keywords": "web", "languages": { "commit": "fr", "discussion": "xx" } }"#;

    let req: UpdateRepositoryRequest = serde_json::from_str(json).unwrap();
    assert!(req.path.is_none());
    let languages = req.languages.unwrap();
    assert_eq!(languages.commit, Some(Setting::Set(Language::Fr)));
    assert_eq!(languages.discussion, None);
}

#[test]
fn test_create_pr_template_request_optional_fields() {
    let req: CreatePrTemplateRequest = serde_json::from_str(r#"{ "language": "fr" }"#).unwrap();
    assert!(req.content.is_none());
    assert_eq!(req.language.as_deref(), Some("fr"));
}
