use serde::{Deserialize, Serialize};

use crate::{
    LOCAL_ZONE_TYPE, ZONE_FILTER_REGION_NAME, ZONE_FILTER_STATE, ZONE_FILTER_ZONE_TYPE,
    ZONE_STATE_AVAILABLE,
};

/// Availability or local zone as reported by the compute API.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityZone {
    /// Human-facing name, e.g. `us-west-2a`. This is what callers get back.
    pub zone_name: String,
    /// Account-independent identifier, e.g. `usw2-az1`. Denylists match on this.
    pub zone_id: String,
    #[serde(default)]
    pub region_name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<String>,
}

impl AvailabilityZone {
    pub fn new(zone_name: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            zone_name: zone_name.into(),
            zone_id: zone_id.into(),
            ..Default::default()
        }
    }

    pub fn in_region(mut self, region: impl Into<String>) -> Self {
        self.region_name = region.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }
}

/// Single `name = any of values` filter of a zone query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneFilter {
    pub name: String,
    pub values: Vec<String>,
}

impl ZoneFilter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }
}

/// Zone query: optional explicit zone names plus filters, all of which must match.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeZonesRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zone_names: Vec<String>,
    #[serde(default)]
    pub filters: Vec<ZoneFilter>,
}

impl DescribeZonesRequest {
    /// All zones of `region` in the `available` state.
    pub fn available_in(region: &str) -> Self {
        Self {
            zone_names: Vec::new(),
            filters: vec![
                ZoneFilter::new(ZONE_FILTER_REGION_NAME, region),
                ZoneFilter::new(ZONE_FILTER_STATE, ZONE_STATE_AVAILABLE),
            ],
        }
    }

    /// The named local zones of `region`, if they exist and are `available`.
    pub fn local_zones_in(region: &str, zone_names: &[String]) -> Self {
        Self {
            zone_names: zone_names.to_vec(),
            filters: vec![
                ZoneFilter::new(ZONE_FILTER_REGION_NAME, region),
                ZoneFilter::new(ZONE_FILTER_ZONE_TYPE, LOCAL_ZONE_TYPE),
                ZoneFilter::new(ZONE_FILTER_STATE, ZONE_STATE_AVAILABLE),
            ],
        }
    }
}
