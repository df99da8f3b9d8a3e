mod domain;
pub use domain::{
    LOCAL_ZONE_TYPE, LabelSummary, Labels, MIN_REQUIRED_AVAILABILITY_ZONES,
    RECOMMENDED_AVAILABILITY_ZONES, REGION_CN_NORTH_1, REGION_US_EAST_1,
    ZONE_FILTER_REGION_NAME, ZONE_FILTER_STATE, ZONE_FILTER_ZONE_TYPE, ZONE_STATE_AVAILABLE,
};

mod error;
pub use error::{ModelError, ModelResult};

mod remote;
pub use remote::{ControlPlaneError, ErrorKind};

mod cluster;
pub use cluster::{ClusterConfig, ClusterVpc};

mod nodegroup;
pub use nodegroup::{LabelsPayload, Nodegroup, UpdateNodegroupConfig};

mod zone;
pub use zone::{AvailabilityZone, DescribeZonesRequest, ZoneConfig, ZoneDenylist, ZoneFilter};
