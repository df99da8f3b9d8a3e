use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Caller-owned description of the cluster being provisioned.
///
/// Only the fields the zone code reads or writes are modelled here.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    /// Cluster name.
    #[serde(default)]
    pub name: String,
    /// Local zones requested in addition to the regular availability zones.
    ///
    /// Rewritten in place by zone validation: unknown or denylisted entries are dropped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_zones: Vec<String>,
    /// Network settings.
    #[serde(default)]
    pub vpc: ClusterVpc,
}

/// VPC settings of a cluster.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClusterVpc {
    /// Identifier of an existing VPC to reuse. `None` means a new VPC is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ClusterConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns `true` when the cluster reuses an existing VPC.
    pub fn uses_existing_vpc(&self) -> bool {
        self.vpc.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_vpc_requires_non_empty_id() {
        let mut cfg = ClusterConfig::new("demo");
        assert!(!cfg.uses_existing_vpc());

        cfg.vpc.id = Some(String::new());
        assert!(!cfg.uses_existing_vpc());

        cfg.vpc.id = Some("vpc-123".into());
        assert!(cfg.uses_existing_vpc());
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let json = r#"{"name":"demo","localZones":["us-west-2-lax-1"]}"#;
        let cfg: ClusterConfig = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.name, "demo");
        assert_eq!(cfg.local_zones, vec!["us-west-2-lax-1".to_string()]);
        assert_eq!(cfg.vpc.id, None);
    }
}
