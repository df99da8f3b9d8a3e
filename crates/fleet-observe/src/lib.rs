//! Logging setup for fleet services.
//!
//! Library crates in this workspace only emit `tracing` events; binaries embedding
//! them call [`init_logger`] once at startup to decide where those events go.
mod config;
pub use config::LoggerConfig;

mod error;
pub use error::{LoggerError, LoggerResult};

mod format;
pub use format::LoggerFormat;

mod level;
pub use level::LoggerLevel;

mod timer;
pub use timer::{LoggerTimeZone, Rfc3339Timer};

mod init;

/// Installs the global tracing subscriber described by `cfg`.
///
/// Call once, early in `main()`. A second call returns [`LoggerError::AlreadyInitialized`].
///
/// With [`LoggerTimeZone::Local`] the local offset is read here; on platforms where
/// that is unsound once threads exist the timestamps fall back to UTC, so call this
/// before starting a multi-threaded runtime.
///
/// # Examples
/// ```rust,no_run
/// use fleet_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).expect("logger");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::text(cfg),
        LoggerFormat::Json => init::json(cfg),
        LoggerFormat::Journald => init::journald(cfg),
    }
}
