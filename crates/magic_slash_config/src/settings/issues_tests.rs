//! Tests for IssuesSettings

use super::*;
use serde_json::json;

#[test]
fn test_comment_on_pr_defaults_to_true() {
    assert!(IssuesSettings::default().comment_on_pr());
}

#[test]
fn test_wire_name_is_comment_on_pr_uppercase() {
    let update: IssuesSettingsUpdate =
        serde_json::from_value(json!({ "commentOnPR": false })).unwrap();
    assert_eq!(update.comment_on_pr, Some(Setting::Set(false)));

    let mut settings = IssuesSettings::default();
    update.apply_to(&mut settings);
    assert_eq!(
        serde_json::to_value(&settings).unwrap(),
        json!({ "commentOnPR": false })
    );
}

#[test]
fn test_camel_case_spelling_is_not_recognized() {
    let update: IssuesSettingsUpdate =
        serde_json::from_value(json!({ "commentOnPr": false })).unwrap();
    assert_eq!(update.comment_on_pr, None);
}
