use std::io;

use thiserror::Error;

/// Library-wide error type for traypack operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The isolated build environment could not be created.
    #[error("Failed to create build environment: {details}")]
    EnvironmentCreateFailed { details: String },

    /// An external tool could not be spawned or exited non-zero.
    #[error("Error running '{command}': {details}")]
    ToolFailed { command: String, details: String },

    /// The packager finished but the expected executable is not on disk.
    #[error("Build failed: expected artifact not found at {path}")]
    ArtifactMissing { path: String },

    /// No install manifest to drive an uninstall.
    #[error("No install manifest found. Run 'traypack build' first.")]
    ManifestMissing,

    /// Desktop entry rendering failed.
    #[error("Failed to render desktop entry: {0}")]
    TemplateRender(#[from] minijinja::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Malformed install manifest.
    #[error("Failed to parse install manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    /// Icon encoding failed.
    #[error("Failed to encode icon: {0}")]
    IconEncode(#[from] png::EncodingError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
