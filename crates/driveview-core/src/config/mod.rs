//! Client configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file and `DRIVEVIEW__*` environment variables. Each
//! sub-module represents a logical configuration section.

pub mod drive;
pub mod logging;
pub mod upload;

use serde::{Deserialize, Serialize};

pub use self::drive::DriveConfig;
pub use self::logging::LoggingConfig;
pub use self::upload::UploadConfig;

use crate::error::AppError;

/// Root client configuration.
///
/// Every section has defaults, so an empty configuration is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Remote drive settings.
    #[serde(default)]
    pub drive: DriveConfig,
    /// Upload pipeline settings.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration.
    ///
    /// Merges `config/default.toml` (if present), the given file (if any),
    /// and environment variables prefixed with `DRIVEVIEW__`.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("DRIVEVIEW")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
