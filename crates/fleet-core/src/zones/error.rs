use fleet_model::ControlPlaneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZoneError {
    #[error(
        "only {discovered} zones discovered [{}], at least {required} are required",
        .zones.join(" ")
    )]
    InsufficientZones {
        discovered: usize,
        zones: Vec<String>,
        required: usize,
    },

    #[error("error getting availability zones for region {region}: {source}")]
    Describe {
        region: String,
        #[source]
        source: ControlPlaneError,
    },

    #[error("error validating local zone(s) [{}]: {source}", .zones.join(" "))]
    LocalZones {
        zones: Vec<String>,
        #[source]
        source: ControlPlaneError,
    },
}

impl ZoneError {
    /// Error category used as a metrics label.
    pub fn as_label(&self) -> &'static str {
        match self {
            ZoneError::InsufficientZones { .. } => "insufficient_zones",
            ZoneError::Describe { .. } => "describe",
            ZoneError::LocalZones { .. } => "local_zones",
        }
    }
}
