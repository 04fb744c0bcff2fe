//! HTTP service client tests
//!
//! Runs `HttpShortenerApi` against a one-shot TCP fixture serving canned
//! HTTP responses: status-code mapping into the error taxonomy, JSON
//! decoding, and path encoding. No real backend involved.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::time::Duration;

use linkdeck::api::{ShortenRequest, ShortenerApi};
use linkdeck::api::HttpShortenerApi;
use linkdeck::errors::ServiceKind;

// =============================================================================
// Canned-response fixture
// =============================================================================

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    )
}

/// Serve exactly one request with a canned response. Returns the base URL
/// and a channel yielding the raw request bytes for assertions.
fn serve_once(response: String) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            stream
                .set_read_timeout(Some(Duration::from_millis(500)))
                .unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                match stream.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request_complete(&request) {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }

            let _ = tx.send(String::from_utf8_lossy(&request).to_string());
            let _ = stream.write_all(response.as_bytes());
        }
    });

    (format!("http://{}/api", addr), rx)
}

/// Headers received and, if a Content-Length is announced, the full body too.
fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };

    let content_length = text
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    request.len() >= header_end + 4 + content_length
}

fn client(base_url: &str) -> HttpShortenerApi {
    HttpShortenerApi::new(base_url, Duration::from_secs(2))
}

// =============================================================================
// Shorten
// =============================================================================

#[tokio::test]
async fn test_shorten_success_parses_result() {
    let body = r#"{
        "original_url": "https://example.com/a/b",
        "short_code": "abc123",
        "short_url": "https://short.ly/abc123",
        "created_at": "2024-01-01T00:00:00Z"
    }"#;
    let (base_url, request_rx) = serve_once(http_response("200 OK", body));

    let api = client(&base_url);
    let result = api
        .shorten(ShortenRequest::new("https://example.com/a/b"))
        .await
        .unwrap();

    assert_eq!(result.short_code, "abc123");
    assert_eq!(result.short_url, "https://short.ly/abc123");

    let request = request_rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert!(request.starts_with("POST /api/shorten HTTP/1.1"), "got: {}", request);
    assert!(
        request.contains(r#""original_url":"https://example.com/a/b""#),
        "got: {}",
        request
    );
}

#[tokio::test]
async fn test_shorten_4xx_maps_to_validation() {
    let (base_url, _rx) = serve_once(http_response("400 Bad Request", r#"{"detail":"bad url"}"#));

    let api = client(&base_url);
    let err = api
        .shorten(ShortenRequest::new("https://example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ServiceKind::Validation);
}

#[tokio::test]
async fn test_shorten_5xx_maps_to_server() {
    let (base_url, _rx) = serve_once(http_response("500 Internal Server Error", "{}"));

    let api = client(&base_url);
    let err = api
        .shorten(ShortenRequest::new("https://example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ServiceKind::Server);
}

#[tokio::test]
async fn test_refused_connection_maps_to_network() {
    // Bind to grab a free port, then drop the listener before the call.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client(&format!("http://{}/api", addr));
    let err = api.list_recent().await.unwrap_err();

    assert_eq!(err.kind(), ServiceKind::Network);
}

// =============================================================================
// Analytics
// =============================================================================

#[tokio::test]
async fn test_get_analytics_success() {
    let body = r#"{
        "short_code": "abc123",
        "original_url": "https://example.com/a/b",
        "total_clicks": 42,
        "created_at": "2024-01-01T00:00:00Z",
        "clicks_by_date": [{"date": "2024-01-01", "count": 42}],
        "clicks_by_browser": [{"browser": "Firefox", "count": 30}, {"browser": "Chrome", "count": 12}],
        "clicks_by_device": [{"device": "Desktop", "count": 42}],
        "clicks_by_country": [{"country": "DE", "count": 42}]
    }"#;
    let (base_url, request_rx) = serve_once(http_response("200 OK", body));

    let api = client(&base_url);
    let aggregate = api.get_analytics("abc123").await.unwrap();

    assert_eq!(aggregate.total_clicks, 42);
    assert_eq!(aggregate.top_browser(), Some("Firefox"));

    let request = request_rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert!(
        request.starts_with("GET /api/analytics/abc123 HTTP/1.1"),
        "got: {}",
        request
    );
}

#[tokio::test]
async fn test_get_analytics_404_maps_to_not_found() {
    let (base_url, _rx) = serve_once(http_response("404 Not Found", r#"{"detail":"unknown"}"#));

    let api = client(&base_url);
    let err = api.get_analytics("zz").await.unwrap_err();

    assert_eq!(err.kind(), ServiceKind::NotFound);
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_analytics_percent_encodes_code() {
    let (base_url, request_rx) = serve_once(http_response("404 Not Found", "{}"));

    let api = client(&base_url);
    let _ = api.get_analytics("a b/c").await;

    let request = request_rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert!(
        request.starts_with("GET /api/analytics/a%20b%2Fc HTTP/1.1"),
        "got: {}",
        request
    );
}

// =============================================================================
// Recent list
// =============================================================================

#[tokio::test]
async fn test_list_recent_empty_array_is_success() {
    let (base_url, request_rx) = serve_once(http_response("200 OK", "[]"));

    let api = client(&base_url);
    let list = api.list_recent().await.unwrap();

    assert!(list.is_empty());
    let request = request_rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert!(request.starts_with("GET /api/recent HTTP/1.1"), "got: {}", request);
}

#[tokio::test]
async fn test_list_recent_parses_links_in_order() {
    let body = r#"[
        {"original_url": "https://example.com/new", "short_code": "new1",
         "short_url": "https://short.ly/new1", "created_at": "2024-01-02T00:00:00Z"},
        {"original_url": "https://example.com/old", "short_code": "old1",
         "short_url": "https://short.ly/old1", "created_at": "2024-01-01T00:00:00Z"}
    ]"#;
    let (base_url, _rx) = serve_once(http_response("200 OK", body));

    let api = client(&base_url);
    let list = api.list_recent().await.unwrap();

    assert_eq!(list.len(), 2);
    // Backend order preserved, newest first.
    assert_eq!(list[0].short_code, "new1");
    assert_eq!(list[1].short_code, "old1");
}

#[tokio::test]
async fn test_list_recent_5xx_maps_to_server() {
    let (base_url, _rx) = serve_once(http_response("503 Service Unavailable", "{}"));

    let api = client(&base_url);
    let err = api.list_recent().await.unwrap_err();

    assert_eq!(err.kind(), ServiceKind::Server);
}

#[tokio::test]
async fn test_invalid_body_on_success_maps_to_server() {
    let (base_url, _rx) = serve_once(http_response("200 OK", "not json"));

    let api = client(&base_url);
    let err = api.list_recent().await.unwrap_err();

    assert_eq!(err.kind(), ServiceKind::Server);
}
