//! Error types for the test-data-factory crate.
//!
//! Generation itself cannot fail; these errors cover the edges around it
//! where configuration is read from the environment.

use thiserror::Error;

/// Errors raised while loading layered settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configuration layers could not be merged or parsed.
    #[error("failed to load settings: {message}")]
    Load {
        /// Description of the loader failure.
        message: String,
    },
    /// A preview limit of zero would hide every boundary value.
    #[error("preview limit must be greater than zero")]
    ZeroPreviewLimit,
}
