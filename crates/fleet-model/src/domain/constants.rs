//! Well-known values shared by the zone selection and labels code.

/// Fewest availability zones a cluster can be created with.
pub const MIN_REQUIRED_AVAILABILITY_ZONES: usize = 2;

/// Number of availability zones picked when the region offers enough of them.
pub const RECOMMENDED_AVAILABILITY_ZONES: usize = 3;

/// Region with degraded zone capacity; clusters there get only
/// [`MIN_REQUIRED_AVAILABILITY_ZONES`] zones by default.
pub const REGION_US_EAST_1: &str = "us-east-1";

/// Region with a zone that must never be used (`cnn1-az4`).
pub const REGION_CN_NORTH_1: &str = "cn-north-1";

/// Filter key selecting zones by region.
pub const ZONE_FILTER_REGION_NAME: &str = "region-name";

/// Filter key selecting zones by lifecycle state.
pub const ZONE_FILTER_STATE: &str = "state";

/// Filter key selecting zones by type (`availability-zone`, `local-zone`, ...).
pub const ZONE_FILTER_ZONE_TYPE: &str = "zone-type";

/// Lifecycle state of a zone that can be provisioned into.
pub const ZONE_STATE_AVAILABLE: &str = "available";

/// Zone type of a local zone.
pub const LOCAL_ZONE_TYPE: &str = "local-zone";
