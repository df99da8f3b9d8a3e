use crate::metrics::backend::{LabelOp, LabelPath, MetricsBackend};

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_label_op(&self, _: LabelOp, _: LabelPath, _: bool) {}

    #[inline(always)]
    fn record_zone_selection(&self, _: &str, _: usize, _: usize) {}

    #[inline(always)]
    fn record_zone_error(&self, _: &str, _: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_metrics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpMetrics>(), 0);
    }

    #[test]
    fn noop_can_be_called_repeatedly() {
        let metrics = NoOpMetrics;
        for _ in 0..1000 {
            metrics.record_label_op(LabelOp::Set, LabelPath::Direct, true);
            metrics.record_zone_selection("us-west-2", 4, 3);
            metrics.record_zone_error("us-west-2", "describe");
        }
    }
}
