//! 翻译请求端到端测试 (local stand-in for the chat completions API)

use llm_translate::application::translate::translate_selection;
use llm_translate::infrastructure::config::Config;
use llm_translate::state::AppState;
use llm_translate::TranslateError;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct Captured {
    head: String,
    body: Value,
}

/// Serve exactly one HTTP response and hand back the request it answered
async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let (head, req_body) = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending a full request");
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(split) = text.find("\r\n\r\n") {
                let head = text[..split].to_string();
                let length = head
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                let body_start = split + 4;
                if buf.len() >= body_start + length {
                    let req_body = String::from_utf8_lossy(&buf[body_start..body_start + length]).to_string();
                    break (head, req_body);
                }
            }
        };

        let reason = match status {
            200 => "OK",
            401 => "Unauthorized",
            429 => "Too Many Requests",
            _ => "Error",
        };
        let response = format!(
            "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        Captured {
            head,
            body: serde_json::from_str(&req_body).unwrap_or(Value::Null),
        }
    });

    (format!("http://{}/v1", addr), handle)
}

fn state_for(endpoint: &str, dest_lang: &str) -> AppState {
    let config = Config {
        api_key: Some("sk-test".to_string()),
        api_endpoint: endpoint.to_string(),
        api_model: "test-model".to_string(),
        dest_lang: dest_lang.to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    AppState::new(config).unwrap()
}

#[tokio::test]
async fn test_successful_translation() {
    let (endpoint, server) = serve_once(
        200,
        r#"{"id":"chatcmpl-1","choices":[{"index":0,"message":{"role":"assistant","content":"\n Bonjour le monde \n"}}]}"#,
    )
    .await;

    let state = state_for(&endpoint, "fr");
    let result = translate_selection(&state, "Hello world").await.unwrap();
    assert_eq!(result, "Bonjour le monde");

    let captured = server.await.unwrap();
    assert!(captured.head.starts_with("POST /v1/chat/completions HTTP/1.1"));

    let head = captured.head.to_lowercase();
    assert!(head.contains("authorization: bearer sk-test"));
    assert!(head.contains("content-type: application/json"));

    assert_eq!(captured.body["model"], "test-model");
    assert_eq!(captured.body["max_completion_tokens"], 1500);
    assert_eq!(captured.body["messages"][0]["role"], "system");
    assert_eq!(
        captured.body["messages"][1]["content"],
        "Translate the following text to French:\n\n\"Hello world\""
    );
}

#[tokio::test]
async fn test_trailing_slash_endpoint() {
    let (endpoint, server) = serve_once(
        200,
        r#"{"choices":[{"message":{"content":"Hallo"}}]}"#,
    )
    .await;

    let state = state_for(&format!("{}/", endpoint), "de");
    assert_eq!(translate_selection(&state, "Hello").await.unwrap(), "Hallo");

    let captured = server.await.unwrap();
    assert!(captured.head.starts_with("POST /v1/chat/completions "));
}

#[tokio::test]
async fn test_invalid_api_key() {
    let (endpoint, _server) = serve_once(
        401,
        r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#,
    )
    .await;

    let err = translate_selection(&state_for(&endpoint, "en"), "hola")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid API key - check your configuration");
}

#[tokio::test]
async fn test_rate_limited() {
    let (endpoint, _server) = serve_once(429, r#"{"error":{"message":"slow down"}}"#).await;

    let err = translate_selection(&state_for(&endpoint, "en"), "hola")
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::RateLimited));
}

#[tokio::test]
async fn test_api_error_message_surfaced() {
    let (endpoint, _server) = serve_once(
        400,
        r#"{"error":{"message":"Unsupported parameter: 'max_completion_tokens'"}}"#,
    )
    .await;

    let err = translate_selection(&state_for(&endpoint, "en"), "hola")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "API Error: Unsupported parameter: 'max_completion_tokens'"
    );
}

#[tokio::test]
async fn test_status_without_error_body() {
    let (endpoint, _server) = serve_once(500, r#"{"message":"internal"}"#).await;

    let err = translate_selection(&state_for(&endpoint, "en"), "hola")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Translation failed (Status: 500)");
}

#[tokio::test]
async fn test_no_choices() {
    let (endpoint, _server) = serve_once(200, r#"{"choices":[]}"#).await;

    let err = translate_selection(&state_for(&endpoint, "en"), "hola")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Translation failed: No translation received from API"
    );
}

#[tokio::test]
async fn test_null_content_is_a_failure() {
    let (endpoint, _server) = serve_once(
        200,
        r#"{"choices":[{"index":0,"message":{"role":"assistant","content":null}}]}"#,
    )
    .await;

    let err = translate_selection(&state_for(&endpoint, "en"), "hola")
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::EmptyResponse));
    assert_eq!(
        err.to_string(),
        "Translation failed: No translation received from API"
    );
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Grab a free port, then close it so nothing is listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = state_for(&format!("http://{}/v1", addr), "en");
    let err = translate_selection(&state, "hola").await.unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.to_string(), "Network error - check your connection");
}

#[tokio::test]
async fn test_blank_selection_rejected() {
    let state = state_for("http://127.0.0.1:9/v1", "en");
    let err = translate_selection(&state, "   ").await.unwrap_err();
    assert_eq!(err.to_string(), "No text to translate");
}
