//! Factory settings loaded via OrthoConfig.
//!
//! Values come from `TEST_DATA_*` environment variables or a configuration
//! file; command-line flags override them in [`crate::factory_cli`].

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::SettingsError;
use crate::locale::Locale;

/// Program name handed to the loader in place of real arguments.
const PROGRAM_NAME: &str = "test-data-factory";

/// Configuration values for the command-line front end.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TEST_DATA")]
pub struct FactorySettings {
    /// Locale tag used when a request names none.
    pub locale: Option<String>,
    /// Characters shown per boundary value before truncation.
    #[ortho_config(default = 100)]
    pub preview_limit: usize,
    /// Fixed RNG seed for reproducible output.
    pub seed: Option<u64>,
}

impl FactorySettings {
    /// Loads settings from the environment and configuration files.
    ///
    /// Command-line arguments are not consulted here; the front end parses
    /// its own flags and layers them on top.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a layer cannot be parsed, and
    /// [`SettingsError::ZeroPreviewLimit`] when the preview limit is zero.
    pub fn from_environment() -> Result<Self, SettingsError> {
        let settings = Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| {
            SettingsError::Load {
                message: err.to_string(),
            }
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects values that cannot be honoured.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroPreviewLimit`] for a zero preview limit.
    pub const fn validate(&self) -> Result<(), SettingsError> {
        if self.preview_limit == 0 {
            Err(SettingsError::ZeroPreviewLimit)
        } else {
            Ok(())
        }
    }

    /// Configured locale, falling back to [`Locale::Ru`].
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::from(self.locale.as_deref())
    }
}
