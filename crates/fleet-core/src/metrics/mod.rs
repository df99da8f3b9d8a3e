//! Metrics collection abstraction for label and zone operations.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are handed
//! to [`crate::labels::LabelManager`] and [`crate::zones::ZoneSelector`].
mod backend;
pub use backend::{LabelOp, LabelPath, MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
