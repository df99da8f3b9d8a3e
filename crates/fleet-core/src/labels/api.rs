use async_trait::async_trait;
use fleet_model::{ControlPlaneError, Nodegroup, UpdateNodegroupConfig};

/// Cluster control-plane calls used for nodegroups that have no stack.
#[async_trait]
pub trait NodegroupApi: Send + Sync + 'static {
    /// Describe a nodegroup, including its labels.
    async fn describe_nodegroup(
        &self,
        cluster: &str,
        nodegroup: &str,
    ) -> Result<Nodegroup, ControlPlaneError>;

    /// Apply a config update to a nodegroup.
    ///
    /// Only the labels named in the payload are touched.
    async fn update_nodegroup_config(
        &self,
        update: &UpdateNodegroupConfig,
    ) -> Result<(), ControlPlaneError>;
}
