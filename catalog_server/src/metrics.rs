//! Prometheus metrics for catalog observability.

use std::net::SocketAddr;

use metrics::{counter, histogram};

/// Install the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new().with_http_listener(addr);
    if let Err(e) = builder.install() {
        tracing::warn!("Failed to install Prometheus exporter: {}", e);
    }
}

/// Record a committed create/update/delete.
pub fn mutation(entity: &'static str, op: &'static str) {
    counter!("catalog_mutations_total", "entity" => entity, "op" => op).increment(1);
}

/// Record a lookup or write that found no record.
pub fn not_found(entity: &'static str) {
    counter!("catalog_not_found_total", "entity" => entity).increment(1);
}

/// Record a rejected payload or refused write.
pub fn persistence_error(entity: &'static str) {
    counter!("catalog_persistence_errors_total", "entity" => entity).increment(1);
}

/// Record how many movies a listing returned.
pub fn movies_listed(count: usize) {
    histogram!("catalog_movie_listing_size").record(count as f64);
}
