use std::sync::Arc;

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, proto::MetricFamily};

use fleet_core::{LabelOp, LabelPath, MetricsBackend};

/// Metrics (all under the `fleet` namespace):
/// - `fleet_label_ops_total{op, path, outcome}` - Counter
/// - `fleet_zone_selections_total{region}` - Counter
/// - `fleet_zones_discovered{region}` - Histogram of usable zones per lookup
/// - `fleet_zone_errors_total{region, error_kind}` - Counter
///
/// `region` is bounded by the number of cloud regions; the other labels are fixed enums.
#[derive(Clone)]
pub struct PrometheusMetrics {
    label_ops: CounterVec,
    zone_selections: CounterVec,
    zones_discovered: HistogramVec,
    zone_errors: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Register all metrics in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let label_ops = CounterVec::new(
            Opts::new("label_ops_total", "Label operations by backend and outcome")
                .namespace("fleet"),
            &["op", "path", "outcome"],
        )?;
        registry.register(Box::new(label_ops.clone()))?;

        let zone_selections = CounterVec::new(
            Opts::new("zone_selections_total", "Successful zone selections").namespace("fleet"),
            &["region"],
        )?;
        registry.register(Box::new(zone_selections.clone()))?;

        let zones_discovered = HistogramVec::new(
            HistogramOpts::new("zones_discovered", "Usable zones found per selection")
                .namespace("fleet")
                .buckets(vec![1.0, 2.0, 3.0, 4.0, 6.0, 8.0]),
            &["region"],
        )?;
        registry.register(Box::new(zones_discovered.clone()))?;

        let zone_errors = CounterVec::new(
            Opts::new("zone_errors_total", "Failed zone lookups").namespace("fleet"),
            &["region", "error_kind"],
        )?;
        registry.register(Box::new(zone_errors.clone()))?;

        Ok(Self {
            label_ops,
            zone_selections,
            zones_discovered,
            zone_errors,
            registry,
        })
    }

    /// Register all metrics in a fresh registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metric families for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_label_op(&self, op: LabelOp, path: LabelPath, ok: bool) {
        let outcome = if ok { "success" } else { "failure" };
        self.label_ops
            .with_label_values(&[op.as_label(), path.as_label(), outcome])
            .inc();
    }

    fn record_zone_selection(&self, region: &str, discovered: usize, _selected: usize) {
        self.zone_selections.with_label_values(&[region]).inc();
        self.zones_discovered
            .with_label_values(&[region])
            .observe(discovered as f64);
    }

    fn record_zone_error(&self, region: &str, error_kind: &str) {
        self.zone_errors
            .with_label_values(&[region, error_kind])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family<'a>(families: &'a [MetricFamily], name: &str) -> &'a MetricFamily {
        families
            .iter()
            .find(|f| f.name() == name)
            .unwrap_or_else(|| panic!("metric {name} not found"))
    }

    #[test]
    fn label_ops_are_split_by_path_and_outcome() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_label_op(LabelOp::Set, LabelPath::Stack, true);
        metrics.record_label_op(LabelOp::Set, LabelPath::Stack, true);
        metrics.record_label_op(LabelOp::Set, LabelPath::Direct, false);

        let families = metrics.gather();
        let ops = family(&families, "fleet_label_ops_total");
        assert_eq!(ops.get_metric().len(), 2);
    }

    #[test]
    fn zone_selection_updates_counter_and_histogram() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_zone_selection("us-west-2", 4, 3);
        metrics.record_zone_selection("us-east-1", 6, 2);

        let families = metrics.gather();
        assert_eq!(
            family(&families, "fleet_zone_selections_total")
                .get_metric()
                .len(),
            2
        );
        assert_eq!(family(&families, "fleet_zones_discovered").get_metric().len(), 2);
    }

    #[test]
    fn zone_errors_are_counted_per_kind() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_zone_error("us-west-2", "describe");
        metrics.record_zone_error("us-west-2", "insufficient_zones");

        let families = metrics.gather();
        assert_eq!(family(&families, "fleet_zone_errors_total").get_metric().len(), 2);
    }

    #[test]
    fn shared_registry_rejects_double_registration() {
        let registry = Arc::new(Registry::new());
        PrometheusMetrics::new_with_registry(registry.clone()).unwrap();

        assert!(PrometheusMetrics::new_with_registry(registry).is_err());
    }
}
