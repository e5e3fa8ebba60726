//! Prometheus metrics for social-grid-service.
//!
//! Exposes request collectors and an HTTP handler for the `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// Feed listings served.
    pub static ref FEED_REQUESTS_TOTAL: IntCounter = register_int_counter!(
        "http_feed_requests_total",
        "Total feed listing requests"
    )
    .expect("failed to register http_feed_requests_total");

    /// Post creation attempts by result (created/rejected/failed).
    pub static ref POSTS_CREATED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "posts_created_total",
        "Post creation attempts segmented by result",
        &["result"]
    )
    .expect("failed to register posts_created_total");
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
