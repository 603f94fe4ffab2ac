use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, error, field, info, info_span, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR: &str = "storage/logs";

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Reuses a caller-supplied `x-request-id` when it is a sane header value.
fn request_id(req: &Request) -> String {
    req.headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= 128)
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Wraps each request in a `request` span so everything logged below it
/// (authentication outcome, service spans) carries the request id.
///
/// The span leaves `identity_kind` and `identity_id` empty; the auth
/// middleware fills them in once a token resolves.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = request_id(&req);
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let span = info_span!(
        "request",
        %request_id,
        %method,
        %path,
        identity_kind = field::Empty,
        identity_id = field::Empty,
    );

    let mut response = next.run(req).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis();

    span.in_scope(|| {
        if response.status().is_server_error() {
            error!(status, latency_ms, "Request failed");
        } else if response.status().is_client_error() {
            warn!(status, latency_ms, "Request rejected");
        } else {
            info!(status, latency_ms, "Request completed");
        }
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Installs the global subscriber: a compact console layer filtered by
/// `RUST_LOG` (or `LOG_LEVEL`), plus a daily-rolling JSON file under
/// `storage/logs` when that directory can be created.
pub fn init_tracing() {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},tower_http=warn,hyper=warn,sqlx=warn",
            env!("CARGO_CRATE_NAME"),
            log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let json_layer = match std::fs::create_dir_all(LOG_DIR) {
        Ok(()) => {
            let json_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "ridehail.json");
            Some(
                fmt::layer()
                    .json()
                    .with_writer(json_appender)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(EnvFilter::new("info")),
            )
        }
        Err(e) => {
            eprintln!("Failed to create {}: {}. File logging disabled.", LOG_DIR, e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, middleware, routing::get};
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> fmt::MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    async fn handler() -> &'static str {
        tracing::info!("inside handler");
        "ok"
    }

    fn app() -> Router {
        Router::new()
            .route("/ping", get(handler))
            .layer(middleware::from_fn(logging_middleware))
    }

    #[tokio::test]
    async fn test_handler_logs_carry_request_id() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(captured.clone()),
        );
        let _guard = tracing::subscriber::set_default(subscriber);

        let request = axum::http::Request::builder()
            .uri("/ping")
            .header("x-request-id", "req-42")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers()["x-request-id"], "req-42");

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let handler_line = output
            .lines()
            .find(|line| line.contains("inside handler"))
            .unwrap();
        assert!(handler_line.contains("request_id=req-42"));
        assert!(handler_line.contains("path=/ping"));
        assert!(output.contains("Request completed"));
    }

    #[tokio::test]
    async fn test_request_id_generated_when_absent() {
        let request = axum::http::Request::builder().uri("/ping").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        let id = response.headers()["x-request-id"].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}
