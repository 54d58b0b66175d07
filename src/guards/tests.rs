use super::*;
use crate::dto::CreateCardDto;
use crate::repo;
use crate::repo::tests::setup_test_db;
use serde_json::json;

fn body(value: Value) -> JsonBody {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {}", other),
    }
}

#[test]
fn test_parse_empty_body() {
    assert!(parse_body(b"").unwrap().is_empty());
    assert!(parse_body(b"  \n").unwrap().is_empty());
}

#[test]
fn test_parse_object_body() {
    let parsed = parse_body(br#"{"user_id": "abc", "title": "T"}"#).unwrap();
    assert_eq!(parsed.get("user_id"), Some(&json!("abc")));
    assert_eq!(parsed.len(), 2);
}

#[test]
fn test_parse_rejects_non_object() {
    assert!(matches!(parse_body(b"[1, 2]"), Err(ApiError::InvalidBody(_))));
    assert!(matches!(parse_body(b"\"text\""), Err(ApiError::InvalidBody(_))));
}

#[test]
fn test_parse_rejects_malformed_json() {
    assert!(matches!(parse_body(b"{not json"), Err(ApiError::InvalidBody(_))));
}

#[test]
fn test_required_fields_reports_first_missing() {
    let b = body(json!({"name": "Ada"}));
    match required_fields(&b, &["name", "email", "password"]) {
        Err(ApiError::MissingField(field)) => assert_eq!(field, "email"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_required_fields_treats_null_as_missing() {
    let b = body(json!({"name": null}));
    assert!(matches!(required_fields(&b, &["name"]), Err(ApiError::MissingField(f)) if f == "name"));
}

#[test]
fn test_required_fields_accepts_falsy_values() {
    let b = body(json!({"title": "", "status": 0, "flag": false}));
    assert!(required_fields(&b, &["title", "status", "flag"]).is_ok());
}

#[test]
fn test_token_required_missing_user_id() {
    let pool = setup_test_db();
    let result = token_required(&pool, &body(json!({})));
    assert!(matches!(result, Err(ApiError::MissingField(f)) if f == "user_id"));
}

#[test]
fn test_token_required_unknown_user_id() {
    let pool = setup_test_db();
    let result = token_required(&pool, &body(json!({"user_id": "nobody"})));
    assert!(matches!(result, Err(ApiError::InvalidUserId)));
}

#[test]
fn test_token_required_non_string_user_id() {
    let pool = setup_test_db();
    let result = token_required(&pool, &body(json!({"user_id": 7})));
    assert!(matches!(result, Err(ApiError::InvalidUserId)));
}

#[test]
fn test_token_required_resolves_user() {
    let pool = setup_test_db();
    let user = repo::create_user(&pool, "Ada".to_string(), "h".to_string(), "e".to_string(), String::new()).unwrap();

    let resolved = token_required(&pool, &body(json!({"user_id": user.get_id()}))).unwrap();
    assert_eq!(resolved, user);
}

#[test]
fn test_payload_wrong_type() {
    let b = body(json!({"title": ["x"], "category_id": "c", "status": "s"}));
    assert!(matches!(payload::<CreateCardDto>(b), Err(ApiError::InvalidBody(_))));
}
