//! Error types for the factory CLI.

use thiserror::Error;

use crate::error::SettingsError;

/// Errors surfaced by the CLI flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// `press` was given text that matches no keyboard button.
    #[error("unknown button label: '{label}'")]
    UnknownButton {
        /// Label that was not recognised.
        label: String,
    },
    /// A record could not be encoded as JSON.
    #[error("failed to encode output as JSON: {message}")]
    Serialization {
        /// Encoder error message.
        message: String,
    },
    /// Settings were missing or invalid.
    #[error("settings error: {source}")]
    Settings {
        /// Underlying settings error.
        #[from]
        #[source]
        source: SettingsError,
    },
}
