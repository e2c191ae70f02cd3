use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::registry::OrderObserver;

// ============================================================================
// Metrics Module - Prometheus counters for the order pipeline
// ============================================================================
//
// Tracks:
// - Orders recorded, by pizza label (fed by MetricsObserver)
// - Deliveries, by strategy mode
// - Queued commands processed
//
// There is no scrape endpoint; `render` returns the text exposition.
// ============================================================================

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,

    pub orders_total: IntCounterVec,
    pub deliveries_total: IntCounterVec,
    pub commands_processed: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_total = IntCounterVec::new(
            Opts::new("pizzeria_orders_total", "Total orders recorded in the registry"),
            &["label"],
        )?;
        registry.register(Box::new(orders_total.clone()))?;

        let deliveries_total = IntCounterVec::new(
            Opts::new("pizzeria_deliveries_total", "Total orders handed to a delivery strategy"),
            &["mode"],
        )?;
        registry.register(Box::new(deliveries_total.clone()))?;

        let commands_processed = IntCounter::new(
            "pizzeria_commands_processed_total",
            "Total commands run by the command queue",
        )?;
        registry.register(Box::new(commands_processed.clone()))?;

        Ok(Self {
            registry,
            orders_total,
            deliveries_total,
            commands_processed,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encode every registered metric in the Prometheus text format
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Counts every recorded order by label
pub struct MetricsObserver {
    metrics: Metrics,
}

impl MetricsObserver {
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }
}

impl OrderObserver for MetricsObserver {
    fn on_order_added(&self, label: &str) {
        self.metrics.orders_total.with_label_values(&[label]).inc();
    }
}
