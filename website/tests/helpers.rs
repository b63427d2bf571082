//! Test helper utilities for website integration tests

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use shared::SiteLogger;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use website::{BuildMode, SiteConfig, SiteState, SubmissionBackend, WebSite};

/// Response parts worth asserting on
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Config for tests: given mode, short latency, static files from `static_dir`
pub fn create_test_config(mode: BuildMode, static_dir: &Path) -> SiteConfig {
    SiteConfig {
        mode,
        static_dir: static_dir.to_path_buf(),
        submit_latency: Duration::from_millis(1000),
        ..SiteConfig::default()
    }
}

/// Site with the simulated backend and its own logger
pub fn create_test_site(mode: BuildMode) -> (WebSite, SiteLogger) {
    let config = create_test_config(mode, Path::new("./static"));
    let logger = SiteLogger::new(config.logger_config());
    let site = WebSite::new(SiteState::new(config, logger.clone()));
    (site, logger)
}

/// Site with a custom submission backend
pub fn create_test_site_with_backend(mode: BuildMode, backend: Arc<dyn SubmissionBackend>) -> (WebSite, SiteLogger) {
    let config = create_test_config(mode, Path::new("./static"));
    let logger = SiteLogger::new(config.logger_config());
    let site = WebSite::new(SiteState::with_backend(config, logger.clone(), backend));
    (site, logger)
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(router: Router, uri: &str) -> TestResponse {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn request(router: Router, method: Method, uri: &str) -> TestResponse {
    send(router, Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(router: Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> TestResponse {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

/// Log messages in order
pub fn messages(logger: &SiteLogger) -> Vec<String> {
    logger.get_logs().into_iter().map(|entry| entry.message).collect()
}
