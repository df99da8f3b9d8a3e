use serde::{Deserialize, Serialize};

use crate::Labels;

/// Labels resolved for a single nodegroup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSummary {
    /// Cluster the nodegroup belongs to.
    pub cluster: String,
    /// Nodegroup the labels were read from.
    pub nodegroup: String,
    /// Full label set of the nodegroup.
    pub labels: Labels,
}

impl LabelSummary {
    pub fn new(cluster: impl Into<String>, nodegroup: impl Into<String>, labels: Labels) -> Self {
        Self {
            cluster: cluster.into(),
            nodegroup: nodegroup.into(),
            labels,
        }
    }
}
