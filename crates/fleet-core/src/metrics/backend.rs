use std::sync::Arc;

/// Label operation, for metrics classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOp {
    Get,
    Set,
    Unset,
}

impl LabelOp {
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            LabelOp::Get => "get",
            LabelOp::Set => "set",
            LabelOp::Unset => "unset",
        }
    }
}

/// Backend that served a label operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPath {
    /// The nodegroup stack.
    Stack,
    /// The cluster control plane, used for nodegroups without a stack.
    Direct,
}

impl LabelPath {
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            LabelPath::Stack => "stack",
            LabelPath::Direct => "direct",
        }
    }
}

/// Backend metrics collection interface.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record a finished label operation.
    ///
    /// # Arguments
    /// - `op`: Operation requested by the caller
    /// - `path`: Backend the operation ended on
    /// - `ok`: Whether the operation succeeded
    fn record_label_op(&self, op: LabelOp, path: LabelPath, ok: bool);

    /// Record a successful zone selection.
    ///
    /// # Arguments
    /// - `region`: Region zones were selected in
    /// - `discovered`: Usable zones after denylist filtering
    /// - `selected`: Zones handed back to the caller
    fn record_zone_selection(&self, region: &str, discovered: usize, selected: usize);

    /// Record a failed zone lookup.
    ///
    /// # Arguments
    /// - `region`: Region of the lookup
    /// - `error_kind`: Error category
    fn record_zone_error(&self, region: &str, error_kind: &str);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
