mod labels;
pub use labels::Labels;

mod summary;
pub use summary::LabelSummary;

mod constants;
pub use constants::{
    LOCAL_ZONE_TYPE, MIN_REQUIRED_AVAILABILITY_ZONES, RECOMMENDED_AVAILABILITY_ZONES,
    REGION_CN_NORTH_1, REGION_US_EAST_1, ZONE_FILTER_REGION_NAME, ZONE_FILTER_STATE,
    ZONE_FILTER_ZONE_TYPE, ZONE_STATE_AVAILABLE,
};
