use fleet_model::{AvailabilityZone, ZoneDenylist};
use tracing::debug;

/// Names of the zones whose id is not denylisted in `region`, in source order.
pub(crate) fn filter_zones(
    denylist: &ZoneDenylist,
    region: &str,
    zones: Vec<AvailabilityZone>,
) -> Vec<String> {
    zones
        .into_iter()
        .filter_map(|z| {
            if denylist.is_denied(region, &z.zone_id) {
                debug!(region, zone = %z.zone_name, zone_id = %z.zone_id, "skipping denylisted zone");
                None
            } else {
                Some(z.zone_name)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_denylisted_ids_and_keeps_order() {
        let zones = vec![
            AvailabilityZone::new("zone3", "id-zone3"),
            AvailabilityZone::new("zone1", "cnn1-az4"),
            AvailabilityZone::new("zone2", "id-zone2"),
        ];

        let names = filter_zones(&ZoneDenylist::builtin(), "cn-north-1", zones);
        assert_eq!(names, vec!["zone3", "zone2"]);
    }

    #[test]
    fn denylist_is_scoped_to_its_region() {
        let zones = vec![AvailabilityZone::new("zone1", "cnn1-az4")];

        let names = filter_zones(&ZoneDenylist::builtin(), "us-west-2", zones);
        assert_eq!(names, vec!["zone1"]);
    }

    #[test]
    fn matches_on_id_not_name() {
        let zones = vec![AvailabilityZone::new("cnn1-az4", "cnn1-az1")];

        let names = filter_zones(&ZoneDenylist::builtin(), "cn-north-1", zones);
        assert_eq!(names, vec!["cnn1-az4"]);
    }
}
