//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use axum::http::header::AUTHORIZATION;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// Span factory used by [`layer`].
pub type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span with method, URI and whether an
/// `authorization` header was sent. The response is logged at `INFO` with its
/// latency in milliseconds. The status is always `200`; the outcome lives in
/// the envelope and is logged by the handlers.
///
/// ```text
/// INFO request{method=DELETE uri=/user/deleteUser/7 authorization=true}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeRequestSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(request_span as MakeRequestSpan)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        authorization = request.headers().contains_key(AUTHORIZATION)
    )
}
