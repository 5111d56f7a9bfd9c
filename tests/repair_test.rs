use moodlist::curator::repair::*;

#[test]
fn test_strip_wrapper_removes_fences_and_prose() {
    let text = "Here you go:\n```json\n{\"a\": 1}\n```\nEnjoy!";
    assert_eq!(strip_wrapper(text), Some("{\"a\": 1}"));
}

#[test]
fn test_strip_wrapper_with_only_closing_fence() {
    let text = "{\"a\": [1, 2]}\n```";
    assert_eq!(strip_wrapper(text), Some("{\"a\": [1, 2]}"));
}

#[test]
fn test_strip_wrapper_with_unclosed_opening_fence() {
    let text = "```json\n{\"a\": 1}";
    assert_eq!(strip_wrapper(text), Some("{\"a\": 1}"));
}

#[test]
fn test_strip_wrapper_without_closing_brace_runs_to_end() {
    let text = "{\"tracks\": [{\"track_name\": \"A\"";
    assert_eq!(strip_wrapper(text), Some(text));
}

#[test]
fn test_strip_wrapper_without_object() {
    assert_eq!(strip_wrapper("I'm sorry, I can't help with that."), None);
    assert_eq!(strip_wrapper(""), None);
}

#[test]
fn test_balance_closes_innermost_first() {
    let truncated = r#"{"tracks": [{"track_name": "A"}"#;
    assert_eq!(balance(truncated), r#"{"tracks": [{"track_name": "A"}]}"#);
}

#[test]
fn test_balance_closes_open_string() {
    let truncated = r#"{"tracks": [{"track_name": "Unfinis"#;
    let balanced = balance(truncated);
    assert_eq!(balanced, r#"{"tracks": [{"track_name": "Unfinis"}]}"#);
    assert!(serde_json::from_str::<serde_json::Value>(&balanced).is_ok());
}

#[test]
fn test_balance_ignores_brackets_inside_strings() {
    let json = r#"{"track_name": "Song [Live {2010}]"}"#;
    assert_eq!(balance(json), json);
}

#[test]
fn test_strip_trailing_commas() {
    let json = r#"{"tracks": [{"a": 1,}, {"b": 2} , ], }"#;
    let fixed = strip_trailing_commas(json);
    assert_eq!(fixed, r#"{"tracks": [{"a": 1}, {"b": 2}  ] }"#);
    assert!(serde_json::from_str::<serde_json::Value>(&fixed).is_ok());
}

#[test]
fn test_strip_trailing_commas_keeps_commas_in_strings() {
    let json = r#"{"track_name": "Hello,]"}"#;
    assert_eq!(strip_trailing_commas(json), json);
}

#[test]
fn test_repair_is_noop_on_valid_json() {
    let json = r#"{"playlist_name": "X", "description": "Y", "tracks": []}"#;
    assert_eq!(repair(json), json);
}
