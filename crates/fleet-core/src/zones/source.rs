use async_trait::async_trait;
use fleet_model::{AvailabilityZone, ControlPlaneError, DescribeZonesRequest};

/// Compute API call listing the zones of a region.
#[async_trait]
pub trait ZoneSource: Send + Sync + 'static {
    /// Zones matching every filter of `request` (and its zone names, if any).
    async fn describe_availability_zones(
        &self,
        request: &DescribeZonesRequest,
    ) -> Result<Vec<AvailabilityZone>, ControlPlaneError>;
}
