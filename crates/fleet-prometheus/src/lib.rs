//! Prometheus backend for [`fleet_core::MetricsBackend`].
//!
//! ```rust
//! use std::sync::Arc;
//! use fleet_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let handle: fleet_core::MetricsHandle = Arc::new(metrics.clone());
//! // LabelManager::new(..).with_metrics(handle.clone());
//! // ZoneSelector::new(..).with_metrics(handle);
//! # let _ = handle;
//! # Ok(())
//! # }
//! ```
//!
//! Serving `/metrics` is left to the embedding application: encode
//! [`PrometheusMetrics::gather`] with a [`TextEncoder`].

mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
