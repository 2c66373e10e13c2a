//! Style configuration (TOML)
//!
//! ```toml
//! selection_mode = true
//! redraw_after_key = true
//! pick_on_move = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Tunables shared by both interactor styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Initial rubber-band selection mode of an image style
    pub selection_mode: bool,

    /// Request a redraw after the image style handles a key
    pub redraw_after_key: bool,

    /// Pick under the pointer on mouse move (trackball-actor style)
    pub pick_on_move: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            selection_mode: false,
            redraw_after_key: true,
            pick_on_move: true,
        }
    }
}

impl StyleConfig {
    /// Parse a config from TOML text; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded style config from {:?}", path);
        Ok(config)
    }

    pub fn with_selection_mode(mut self, enabled: bool) -> Self {
        self.selection_mode = enabled;
        self
    }

    pub fn with_redraw_after_key(mut self, enabled: bool) -> Self {
        self.redraw_after_key = enabled;
        self
    }

    pub fn with_pick_on_move(mut self, enabled: bool) -> Self {
        self.pick_on_move = enabled;
        self
    }
}
