use glot::api::{HttpTranslator, TranslateBackend, TranslateError, TranslationRequest};
use glot::core::lang::Language;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn request(text: &str, target: Language) -> TranslationRequest {
    TranslationRequest::new(text.to_string(), target)
}

async fn mock_success(server: &MockServer, source_lang: &str, translated: &str, romanized: &str) {
    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "source_lang": source_lang,
            "translated": translated,
            "romanized": romanized,
        })))
        .mount(server)
        .await;
}

// ============================================================================
// HttpTranslator Tests
// ============================================================================

#[tokio::test]
async fn test_successful_translation() {
    let mock_server = MockServer::start().await;
    mock_success(&mock_server, "en", "bonjour", "bonjour").await;

    let translator = HttpTranslator::new(mock_server.uri());
    let result = translator
        .translate(&request("hello", Language::French))
        .await
        .unwrap();

    assert_eq!(result.source_lang, "en");
    assert_eq!(result.translated, "bonjour");
    assert_eq!(result.romanized, "bonjour");
}

#[tokio::test]
async fn test_request_body_matches_wire_contract() {
    let mock_server = MockServer::start().await;

    // The mock only matches the exact documented body shape; a request
    // with extra, missing, or renamed fields returns the mock server's
    // default 404 and the test fails.
    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .and(body_json(serde_json::json!({
            "text": "hello",
            "target": "fr",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "source_lang": "en",
            "translated": "bonjour",
            "romanized": "bonjour",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let translator = HttpTranslator::new(mock_server.uri());
    translator
        .translate(&request("hello", Language::French))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_chinese_target_uses_region_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .and(body_json(serde_json::json!({
            "text": "hello",
            "target": "zh-CN",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "source_lang": "en",
            "translated": "你好",
            "romanized": "ni hao",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let translator = HttpTranslator::new(mock_server.uri());
    let result = translator
        .translate(&request("hello", Language::Chinese))
        .await
        .unwrap();
    assert_eq!(result.romanized, "ni hao");
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let translator = HttpTranslator::new(mock_server.uri());
    let err = translator
        .translate(&request("hello", Language::French))
        .await
        .unwrap_err();

    match err {
        TranslateError::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("internal error"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_is_the_same_failure_path() {
    // No error-body parsing: a 404 with a JSON body is treated exactly
    // like any other non-2xx status.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"error": "unknown endpoint"})),
        )
        .mount(&mock_server)
        .await;

    let translator = HttpTranslator::new(mock_server.uri());
    let err = translator
        .translate(&request("hello", Language::French))
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::Api { status: 404, .. }));
}

#[tokio::test]
async fn test_malformed_success_body_maps_to_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let translator = HttpTranslator::new(mock_server.uri());
    let err = translator
        .translate(&request("hello", Language::French))
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::Parse(_)));
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_network_error() {
    // Nothing is listening here; the port comes from a server we shut down.
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let translator = HttpTranslator::new(uri);
    let err = translator
        .translate(&request("hello", Language::French))
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::Network(_)));
}
