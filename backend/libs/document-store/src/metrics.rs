//! Prometheus metrics for document store operations
//!
//! Tracks operation counts by outcome and latency per operation kind

use prometheus::{register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec};
use std::time::Instant;

lazy_static::lazy_static! {
    /// Store operations by operation, collection and result (ok/error)
    static ref STORE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "document_store_operations_total",
        "Document store operations by outcome",
        &["operation", "collection", "result"]
    ).expect("Prometheus metrics registration should succeed at startup");

    /// Round-trip time of store operations
    static ref STORE_OPERATION_DURATION: HistogramVec = register_histogram_vec!(
        "document_store_operation_duration_seconds",
        "Time spent in document store operations",
        &["operation"],
        vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0]
    ).expect("Prometheus metrics registration should succeed at startup");
}

/// Record the outcome and duration of one store operation
pub(crate) fn record_operation(operation: &str, collection: &str, started: Instant, ok: bool) {
    STORE_OPERATION_DURATION
        .with_label_values(&[operation])
        .observe(started.elapsed().as_secs_f64());

    let result = if ok { "ok" } else { "error" };
    STORE_OPERATIONS_TOTAL
        .with_label_values(&[operation, collection, result])
        .inc();
}
