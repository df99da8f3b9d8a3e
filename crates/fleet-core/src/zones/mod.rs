//! Availability-zone selection for new clusters.
//!
//! [`ZoneSelector`] lists the available zones of a region, drops the ones on the
//! configured denylist and picks a random subset of the recommended size.
//! It also validates the local zones requested in a [`ClusterConfig`].
mod error;
pub use error::ZoneError;

mod filter;

mod source;
pub use source::ZoneSource;

use std::sync::Arc;

use fleet_model::{
    ClusterConfig, DescribeZonesRequest, MIN_REQUIRED_AVAILABILITY_ZONES,
    RECOMMENDED_AVAILABILITY_ZONES, ZoneConfig,
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, info, instrument, warn};

use crate::metrics::{MetricsHandle, noop_metrics};

use filter::filter_zones;

/// Picks the zones a cluster is spread across.
pub struct ZoneSelector {
    source: Arc<dyn ZoneSource>,
    config: ZoneConfig,
    metrics: MetricsHandle,
}

impl ZoneSelector {
    pub fn new(source: Arc<dyn ZoneSource>, config: ZoneConfig) -> Self {
        Self {
            source,
            config,
            metrics: noop_metrics(),
        }
    }

    /// Replace the metrics backend.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &ZoneConfig {
        &self.config
    }

    /// Zone names to create a cluster in `region` with.
    ///
    /// - fewer than [`MIN_REQUIRED_AVAILABILITY_ZONES`] usable zones is an error;
    /// - fewer than [`RECOMMENDED_AVAILABILITY_ZONES`] returns all of them;
    /// - otherwise a random subset of [`ZoneConfig::desired_zone_count`] distinct zones.
    ///
    /// Every call draws from a freshly seeded generator.
    pub async fn select_zones(&self, region: &str) -> Result<Vec<String>, ZoneError> {
        let mut rng = StdRng::from_entropy();
        self.select_zones_with_rng(region, &mut rng).await
    }

    /// [`ZoneSelector::select_zones`] with a caller-supplied generator.
    #[instrument(level = "debug", skip(self, rng))]
    pub async fn select_zones_with_rng<R>(
        &self,
        region: &str,
        rng: &mut R,
    ) -> Result<Vec<String>, ZoneError>
    where
        R: Rng + Send + ?Sized,
    {
        let zones = self.available_zones(region).await?;

        let discovered = zones.len();
        if discovered < MIN_REQUIRED_AVAILABILITY_ZONES {
            let err = ZoneError::InsufficientZones {
                discovered,
                zones,
                required: MIN_REQUIRED_AVAILABILITY_ZONES,
            };
            self.metrics.record_zone_error(region, err.as_label());
            return Err(err);
        }

        let selected = if discovered < RECOMMENDED_AVAILABILITY_ZONES {
            zones
        } else {
            random_selection(zones, self.config.desired_zone_count(region), rng)
        };

        info!(region, ?selected, discovered, "selected availability zones");
        self.metrics
            .record_zone_selection(region, discovered, selected.len());
        Ok(selected)
    }

    /// Keep only the requested local zones that exist, are available and are not denylisted.
    ///
    /// Rewrites `cluster.local_zones` in place. Zones that are dropped are not an error.
    /// On a failed lookup `cluster` is left untouched.
    #[instrument(level = "debug", skip(self, cluster), fields(requested = ?cluster.local_zones))]
    pub async fn set_local_zones(
        &self,
        cluster: &mut ClusterConfig,
        region: &str,
    ) -> Result<(), ZoneError> {
        if cluster.local_zones.is_empty() {
            return Ok(());
        }

        if cluster.uses_existing_vpc() {
            warn!(
                "ignoring localZones since an existing VPC ID was specified; \
                 local zones are only supported when creating a new VPC"
            );
        }

        let request = DescribeZonesRequest::local_zones_in(region, &cluster.local_zones);
        let zones = match self.source.describe_availability_zones(&request).await {
            Ok(zones) => zones,
            Err(source) => {
                let err = ZoneError::LocalZones {
                    zones: cluster.local_zones.clone(),
                    source,
                };
                self.metrics.record_zone_error(region, err.as_label());
                return Err(err);
            }
        };

        let kept = filter_zones(&self.config.denylist, region, zones);
        if kept.len() < cluster.local_zones.len() {
            warn!(
                region,
                requested = ?cluster.local_zones,
                kept = ?kept,
                "dropping local zones that are unavailable or denylisted"
            );
        }
        cluster.local_zones = kept;
        Ok(())
    }

    async fn available_zones(&self, region: &str) -> Result<Vec<String>, ZoneError> {
        let request = DescribeZonesRequest::available_in(region);
        match self.source.describe_availability_zones(&request).await {
            Ok(zones) => {
                debug!(region, count = zones.len(), "zones reported by source");
                Ok(filter_zones(&self.config.denylist, region, zones))
            }
            Err(source) => {
                let err = ZoneError::Describe {
                    region: region.to_string(),
                    source,
                };
                self.metrics.record_zone_error(region, err.as_label());
                Err(err)
            }
        }
    }
}

/// `desired` distinct zones drawn uniformly from `zones`.
///
/// `zones` is returned as-is when it holds no more than `desired` entries.
fn random_selection<R>(mut zones: Vec<String>, desired: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    if zones.len() <= desired {
        return zones;
    }
    zones.shuffle(rng);
    zones.truncate(desired);
    zones
}
