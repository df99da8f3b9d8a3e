pub mod labels;
pub mod metrics;
pub mod zones;

pub use metrics::{LabelOp, LabelPath, MetricsBackend, MetricsHandle, NoOpMetrics, noop_metrics};

pub mod prelude {
    pub use crate::labels::{LabelError, LabelManager, NodegroupApi, StackError, StackService};
    pub use crate::metrics::{MetricsBackend, MetricsHandle};
    pub use crate::zones::{ZoneError, ZoneSelector, ZoneSource};
}
