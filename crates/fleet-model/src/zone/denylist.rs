use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::REGION_CN_NORTH_1;

/// Zone ids that must never be selected, per region.
///
/// Built once at startup and handed to the zone selector; never mutated afterwards.
/// The default value is the built-in table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct ZoneDenylist(BTreeMap<String, BTreeSet<String>>);

impl ZoneDenylist {
    /// Denylist with no entries.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// The built-in table.
    ///
    /// `cnn1-az4` in `cn-north-1` lacks capacity for control-plane resources.
    pub fn builtin() -> Self {
        Self::empty().with_zone(REGION_CN_NORTH_1, "cnn1-az4")
    }

    /// Add a zone id to the region's entry. Builder-style, for use at construction time.
    pub fn with_zone(mut self, region: impl Into<String>, zone_id: impl Into<String>) -> Self {
        self.0
            .entry(region.into())
            .or_default()
            .insert(zone_id.into());
        self
    }

    /// Returns `true` if `zone_id` must not be used in `region`.
    pub fn is_denied(&self, region: &str, zone_id: &str) -> bool {
        self.0
            .get(region)
            .is_some_and(|ids| ids.contains(zone_id))
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0.iter().map(|(r, ids)| (r.as_str(), ids))
    }
}

impl Default for ZoneDenylist {
    fn default() -> Self {
        Self::builtin()
    }
}
