use super::*;

#[test]
fn translations_response_parses_full_body() {
    let body = r#"{"success":true,"language":"kn","translations":{"home":"ಮುಖಪುಟ"}}"#;
    let parsed: TranslationsResponse = serde_json::from_str(body).unwrap();
    assert!(parsed.success);
    assert_eq!(parsed.language.as_deref(), Some("kn"));
    assert_eq!(parsed.translations.get("home").map(String::as_str), Some("ಮುಖಪುಟ"));
}

#[test]
fn translations_response_without_success_is_unsuccessful() {
    let parsed: TranslationsResponse = serde_json::from_str(r#"{"translations":{"a":"b"}}"#).unwrap();
    assert!(!parsed.success);
}

#[test]
fn error_body_parses_as_unsuccessful_response() {
    let parsed: TranslationsResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
    assert!(!parsed.success);
    assert!(parsed.translations.is_empty());
}

#[test]
fn non_string_translation_values_are_rejected() {
    let result = serde_json::from_str::<TranslationsResponse>(r#"{"success":true,"translations":{"a":1}}"#);
    assert!(result.is_err());
}

#[test]
fn set_language_request_serializes_language_field() {
    let body = serde_json::to_value(SetLanguageRequest {
        language: "kn".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "language": "kn" }));
}

#[test]
fn supported_languages_response_parses_list() {
    let body = r#"{"success":true,"languages":[{"code":"en","name":"English"},{"code":"kn","name":"ಕನ್ನಡ"}]}"#;
    let parsed: SupportedLanguagesResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.languages.len(), 2);
    assert_eq!(parsed.languages[1].code, "kn");
}

#[test]
fn translate_response_tolerates_missing_fields() {
    let parsed: TranslateResponse = serde_json::from_str(r#"{"success":true,"translated_text":"ವಯಸ್ಸು"}"#).unwrap();
    assert_eq!(parsed.translated_text.as_deref(), Some("ವಯಸ್ಸು"));
    assert_eq!(parsed.original_text, None);
}
