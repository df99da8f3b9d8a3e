use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{
    MIN_REQUIRED_AVAILABILITY_ZONES, RECOMMENDED_AVAILABILITY_ZONES, REGION_US_EAST_1,
    error::{ModelError, ModelResult},
    zone::ZoneDenylist,
};

/// Zone selection settings.
///
/// Missing fields fall back to the built-in values, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct ZoneConfig {
    /// Zones that are never selected.
    pub denylist: ZoneDenylist,
    /// Regions with degraded zone capacity.
    ///
    /// Selection there stops at the minimum zone count instead of the recommended one.
    pub reduced_capacity_regions: Vec<String>,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            denylist: ZoneDenylist::builtin(),
            reduced_capacity_regions: vec![REGION_US_EAST_1.to_string()],
        }
    }
}

impl ZoneConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(s: &str) -> ModelResult<Self> {
        let cfg: ZoneConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject blank region names and zone ids.
    pub fn validate(&self) -> ModelResult<()> {
        for (region, ids) in self.denylist.entries() {
            if region.trim().is_empty() {
                return Err(ModelError::InvalidZoneConfig(
                    "denylist region must not be empty".into(),
                ));
            }
            if ids.iter().any(|id| id.trim().is_empty()) {
                return Err(ModelError::InvalidZoneConfig(format!(
                    "denylist for region {region} contains an empty zone id"
                )));
            }
        }
        if self
            .reduced_capacity_regions
            .iter()
            .any(|r| r.trim().is_empty())
        {
            return Err(ModelError::InvalidZoneConfig(
                "reduced capacity region must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Number of zones to pick in `region` once more than enough are available.
    pub fn desired_zone_count(&self, region: &str) -> usize {
        if self.reduced_capacity_regions.iter().any(|r| r == region) {
            MIN_REQUIRED_AVAILABILITY_ZONES
        } else {
            RECOMMENDED_AVAILABILITY_ZONES
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_builtin_table() {
        let cfg = ZoneConfig::default();

        assert_eq!(cfg.denylist, ZoneDenylist::builtin());
        assert_eq!(cfg.desired_zone_count("us-east-1"), 2);
        assert_eq!(cfg.desired_zone_count("us-west-2"), 3);
    }

    #[test]
    fn empty_json_uses_defaults() {
        let cfg = ZoneConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ZoneConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let cfg = ZoneConfig::from_json(r#"{"reducedCapacityRegions":["eu-west-3"]}"#).unwrap();

        assert_eq!(cfg.desired_zone_count("eu-west-3"), 2);
        assert_eq!(cfg.desired_zone_count("us-east-1"), 3);
        assert!(cfg.denylist.is_denied("cn-north-1", "cnn1-az4"));
    }

    #[test]
    fn rejects_blank_entries() {
        let err = ZoneConfig::from_json(r#"{"denylist":{"cn-north-1":[" "]}}"#).unwrap_err();
        assert!(matches!(err, ModelError::InvalidZoneConfig(_)));

        let err = ZoneConfig::from_json(r#"{"reducedCapacityRegions":[""]}"#).unwrap_err();
        assert!(matches!(err, ModelError::InvalidZoneConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ZoneConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }
}
