pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, get_service, post},
    Router,
};
use tower_http::services::ServeFile;

use crate::review::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let landing_page = ServeFile::new(&state.config.index_html);
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get_service(landing_page))
        .route("/health", get(health::health_handler))
        .route("/evaluate", post(handlers::handle_evaluate))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::{CompletionProvider, LlmError};
    use crate::review::prompts::REVIEW_SYSTEM;

    const BOUNDARY: &str = "resume-review-boundary";

    /// Returns a canned reply (or error) and records every prompt it receives.
    struct StubProvider {
        reply: Result<String, (u16, String)>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl StubProvider {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            })
        }

        fn failing(status: u16, message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err((status, message.to_string())),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
            assert_eq!(system, REVIEW_SYSTEM);
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.trim().to_string()),
                Err((status, message)) => Err(LlmError::Api {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }

    fn test_config(index_html: &str) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            index_html: index_html.to_string(),
            max_upload_bytes: 1_048_576,
            openai_base_url: "http://127.0.0.1:9".to_string(),
            llm_timeout: None,
        }
    }

    fn make_router(provider: Arc<StubProvider>) -> Router {
        build_router(AppState {
            llm: provider,
            config: test_config("does-not-exist.html"),
        })
    }

    /// One multipart part: (field name, optional filename, content).
    fn multipart_request(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, filename, content) in parts {
            write!(body, "--{BOUNDARY}\r\n").unwrap();
            match filename {
                Some(filename) => write!(
                    body,
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )
                .unwrap(),
                None => write!(
                    body,
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )
                .unwrap(),
            }
            body.extend_from_slice(content.as_bytes());
            body.extend_from_slice(b"\r\n");
        }
        write!(body, "--{BOUNDARY}--\r\n").unwrap();

        Request::builder()
            .method("POST")
            .uri("/evaluate")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = make_router(StubProvider::replying(""));
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "resume-review");
    }

    #[tokio::test]
    async fn evaluate_txt_returns_tagged_feedback() {
        let provider = StubProvider::replying(
            "\n  Section A:\n✅ Good.\nOverall Rating: ❌ Weak Resume\n\n",
        );
        let app = make_router(provider.clone());
        let req = multipart_request(&[(
            "file",
            Some("resume.txt"),
            "Jane Doe\nGPA: 3.9",
        )]);

        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"{"General":"","Section A":"✅ Good.\n","Overall":"Overall Rating: ❌ Weak Resume"}"#
        );
        assert_eq!(provider.calls(), 1);

        let prompt = provider.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.ends_with("\nResume:\nJane Doe\nGPA: 3.9\n\nFeedback:"));
    }

    #[tokio::test]
    async fn evaluate_ignores_other_fields() {
        let provider = StubProvider::replying("✅ Fine.");
        let app = make_router(provider.clone());
        let req = multipart_request(&[
            ("note", None, "hello"),
            ("file", None, "a plain form value, not an upload"),
            ("file", Some("cv.TXT"), "Resume body"),
        ]);

        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, json!({ "General": "✅ Fine.\n" }));
        let prompt = provider.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("\nResume:\nResume body\n"));
    }

    #[tokio::test]
    async fn evaluate_missing_file() {
        let provider = StubProvider::replying("unused");
        let app = make_router(provider.clone());
        let req = multipart_request(&[("resume", Some("resume.txt"), "text")]);

        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"No file provided"}"#);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn evaluate_unsupported_extension_skips_completion() {
        let provider = StubProvider::replying("unused");
        let app = make_router(provider.clone());
        let req = multipart_request(&[("file", Some("photo.jpg"), "JFIF image data")]);

        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Unsupported file type."}"#);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn evaluate_corrupt_document_is_server_error() {
        let provider = StubProvider::replying("unused");
        let app = make_router(provider.clone());
        let req = multipart_request(&[("file", Some("resume.docx"), "not a zip")]);

        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains(".docx"));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn evaluate_completion_failure_is_server_error() {
        let provider = StubProvider::failing(401, "Incorrect API key provided");
        let app = make_router(provider.clone());
        let req = multipart_request(&[("file", Some("resume.txt"), "Jane Doe")]);

        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            json!({ "error": "API error (status 401): Incorrect API key provided" })
        );
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn evaluate_rejects_non_multipart() {
        let app = make_router(StubProvider::replying("unused"));
        let req = Request::builder()
            .method("POST")
            .uri("/evaluate")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn index_serves_landing_page() {
        let mut page = tempfile::NamedTempFile::new().unwrap();
        page.write_all(b"<html><body>Upload your resume</body></html>")
            .unwrap();

        let app = build_router(AppState {
            llm: StubProvider::replying("unused"),
            config: test_config(page.path().to_str().unwrap()),
        });
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();

        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html><body>Upload your resume</body></html>");
    }
}
