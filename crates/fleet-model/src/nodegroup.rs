use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Labels;

/// Nodegroup as described by the cluster control plane.
///
/// Label values are nullable on the wire.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nodegroup {
    pub cluster_name: String,
    pub nodegroup_name: String,
    #[serde(default)]
    pub labels: BTreeMap<String, Option<String>>,
}

impl Nodegroup {
    /// Labels with null values read as the empty string.
    pub fn resolved_labels(&self) -> Labels {
        self.labels
            .iter()
            .map(|(k, v)| (k.clone(), v.clone().unwrap_or_default()))
            .collect()
    }
}

/// Label changes carried by a nodegroup config update.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelsPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_or_update: Option<Labels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove: Option<Vec<String>>,
}

impl LabelsPayload {
    pub fn add_or_update(labels: Labels) -> Self {
        Self {
            add_or_update: Some(labels),
            remove: None,
        }
    }

    pub fn remove(keys: Vec<String>) -> Self {
        Self {
            add_or_update: None,
            remove: Some(keys),
        }
    }
}

/// Request to update the config of a nodegroup managed by the control plane.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNodegroupConfig {
    pub cluster_name: String,
    pub nodegroup_name: String,
    pub labels: LabelsPayload,
}
