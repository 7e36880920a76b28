//! Metrics setup and update for request handling.

use prometheus::core::{AtomicU64, GenericCounter};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Metrics {
    pub query_total: GenericCounter<AtomicU64>,
    pub mutation_total: GenericCounter<AtomicU64>,
    pub error_total: GenericCounter<AtomicU64>,
}

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("unable to register metrics: {0}")]
    PrometheusError(#[from] prometheus::Error),
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericCounter<AtomicU64>, MetricsError> {
    let int_counter =
        prometheus::IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;

    metrics_registry.register(Box::new(int_counter.clone()))?;

    Ok(int_counter)
}

/// Setup counters used to monitor request handling.
pub fn initialise_metrics(
    metrics_registry: &mut prometheus::Registry,
) -> Result<Metrics, MetricsError> {
    let query_total = add_int_counter_metric(
        metrics_registry,
        "doytoql_query_total",
        "Total successful queries.",
    )?;

    let mutation_total = add_int_counter_metric(
        metrics_registry,
        "doytoql_mutation_total",
        "Total successful inserts, updates and deletes.",
    )?;

    let error_total = add_int_counter_metric(
        metrics_registry,
        "doytoql_error_total",
        "Total requests that failed to compile or execute.",
    )?;

    Ok(Metrics {
        query_total,
        mutation_total,
        error_total,
    })
}
