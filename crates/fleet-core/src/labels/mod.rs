//! Nodegroup label management over two backends.
//!
//! Nodegroups created declaratively keep their labels in a stack; everything
//! else is labelled directly through the cluster control plane. [`LabelManager`]
//! always asks the stack first and falls back to the control plane only when
//! the stack reports [`StackError::NotGoverned`].
mod api;
pub use api::NodegroupApi;

mod error;
pub use error::LabelError;

mod stack;
pub use stack::{BoxError, StackError, StackService};

use std::sync::Arc;

use fleet_model::{LabelSummary, Labels, LabelsPayload, UpdateNodegroupConfig};
use tracing::{debug, info, instrument};

use crate::metrics::{LabelOp, LabelPath, MetricsHandle, noop_metrics};

/// Get/Set/Unset of nodegroup labels for one cluster.
///
/// Each call mutates at most one backend. A stack failure other than
/// `NotGoverned` is returned without touching the control plane.
pub struct LabelManager {
    cluster: String,
    stack: Arc<dyn StackService>,
    api: Arc<dyn NodegroupApi>,
    metrics: MetricsHandle,
}

impl LabelManager {
    pub fn new(
        cluster: impl Into<String>,
        stack: Arc<dyn StackService>,
        api: Arc<dyn NodegroupApi>,
    ) -> Self {
        Self {
            cluster: cluster.into(),
            stack,
            api,
            metrics: noop_metrics(),
        }
    }

    /// Replace the metrics backend.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    /// Current labels of `nodegroup`, as a one-element summary.
    #[instrument(level = "debug", skip(self), fields(cluster = %self.cluster))]
    pub async fn get(&self, nodegroup: &str) -> Result<Vec<LabelSummary>, LabelError> {
        let (path, res) = match self.stack.get_labels(nodegroup).await {
            Ok(labels) => (LabelPath::Stack, Ok(labels)),
            Err(StackError::NotGoverned(cause)) => {
                self.log_fallback(LabelOp::Get, nodegroup, &cause);
                let res = self
                    .api
                    .describe_nodegroup(&self.cluster, nodegroup)
                    .await
                    .map(|ng| ng.resolved_labels())
                    .map_err(LabelError::from);
                (LabelPath::Direct, res)
            }
            Err(e) => (LabelPath::Stack, Err(e.into())),
        };

        let labels = self.finish(LabelOp::Get, path, res)?;
        Ok(vec![LabelSummary::new(&self.cluster, nodegroup, labels)])
    }

    /// Add or update `labels` on `nodegroup`. Other labels are left alone.
    #[instrument(level = "debug", skip(self, labels), fields(cluster = %self.cluster, count = labels.len()))]
    pub async fn set(&self, nodegroup: &str, labels: &Labels) -> Result<(), LabelError> {
        let (path, res) = match self.stack.update_labels(nodegroup, labels, &[]).await {
            Ok(()) => (LabelPath::Stack, Ok(())),
            Err(StackError::NotGoverned(cause)) => {
                self.log_fallback(LabelOp::Set, nodegroup, &cause);
                let update = self.update(nodegroup, LabelsPayload::add_or_update(labels.clone()));
                let res = self
                    .api
                    .update_nodegroup_config(&update)
                    .await
                    .map_err(LabelError::from);
                (LabelPath::Direct, res)
            }
            Err(e) => (LabelPath::Stack, Err(e.into())),
        };

        self.finish(LabelOp::Set, path, res)
    }

    /// Remove the labels named in `keys` from `nodegroup`. Other labels are left alone.
    #[instrument(level = "debug", skip(self), fields(cluster = %self.cluster))]
    pub async fn unset(&self, nodegroup: &str, keys: &[String]) -> Result<(), LabelError> {
        let (path, res) = match self
            .stack
            .update_labels(nodegroup, &Labels::new(), keys)
            .await
        {
            Ok(()) => (LabelPath::Stack, Ok(())),
            Err(StackError::NotGoverned(cause)) => {
                self.log_fallback(LabelOp::Unset, nodegroup, &cause);
                let update = self.update(nodegroup, LabelsPayload::remove(keys.to_vec()));
                let res = self
                    .api
                    .update_nodegroup_config(&update)
                    .await
                    .map_err(LabelError::from);
                (LabelPath::Direct, res)
            }
            Err(e) => (LabelPath::Stack, Err(e.into())),
        };

        self.finish(LabelOp::Unset, path, res)
    }

    fn update(&self, nodegroup: &str, labels: LabelsPayload) -> UpdateNodegroupConfig {
        UpdateNodegroupConfig {
            cluster_name: self.cluster.clone(),
            nodegroup_name: nodegroup.to_string(),
            labels,
        }
    }

    fn log_fallback(&self, op: LabelOp, nodegroup: &str, cause: &BoxError) {
        info!(
            op = op.as_label(),
            nodegroup,
            reason = %cause,
            "nodegroup has no stack, using the control plane"
        );
    }

    fn finish<T>(
        &self,
        op: LabelOp,
        path: LabelPath,
        res: Result<T, LabelError>,
    ) -> Result<T, LabelError> {
        self.metrics.record_label_op(op, path, res.is_ok());
        match &res {
            Ok(_) => debug!(op = op.as_label(), path = path.as_label(), "label operation done"),
            Err(e) => debug!(
                op = op.as_label(),
                path = path.as_label(),
                error = %e,
                "label operation failed"
            ),
        }
        res
    }
}
