//! Prometheus metrics for blog-service.
//!
//! Collectors live in the default registry, next to the pool gauges registered by
//! `db-pool`, and are rendered by the `/metrics` endpoint.

use actix_web::HttpResponse;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static::lazy_static! {
    /// Error responses by class (bad_request, not_found, conflict, ...)
    static ref ERROR_RESPONSES: IntCounterVec = register_int_counter_vec!(
        "blog_error_responses_total",
        "Error responses returned by blog-service, by error class",
        &["kind"]
    ).expect("Prometheus metrics registration should succeed at startup");
}

pub fn record_error(kind: &str) {
    ERROR_RESPONSES.with_label_values(&[kind]).inc();
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
