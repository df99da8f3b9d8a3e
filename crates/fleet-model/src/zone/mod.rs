mod availability;
pub use availability::{AvailabilityZone, DescribeZonesRequest, ZoneFilter};

mod denylist;
pub use denylist::ZoneDenylist;

mod config;
pub use config::ZoneConfig;
